//! Output records and their line-delimited JSON encoding.

use crate::error::Result;
use crate::key::KeyIdentity;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One line of output.
///
/// Serializes as `{"type":"press","key":"a"}` or `{"type":"exit"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Press { key: String },
    Exit,
}

impl Record {
    pub fn press(key: &KeyIdentity) -> Self {
        Record::Press { key: key.label() }
    }
}

/// Writes `record` as a single JSON line and flushes the writer.
///
/// `serde_json` escapes control characters, so a record never spans lines.
pub fn emit<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
