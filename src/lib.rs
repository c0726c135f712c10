//! # Key Event Reporter
//!
//! Listens for key presses system-wide and writes each one to a stream as
//! a line of JSON, stopping when Escape is pressed.
//!
//! ## Output
//!
//! ```json
//! {"type":"press","key":"a"}
//! {"type":"press","key":"Key.shift"}
//! {"type":"press","key":"Key.esc"}
//! {"type":"exit"}
//! ```
//!
//! Printable keys report their character; other keys report a `Key.<name>`
//! label (see [`KeyName`]). Every line is flushed as soon as it is written.
//!
//! ## Example
//!
//! ```no_run
//! # #[cfg(feature = "rdev")]
//! # async fn demo() -> key_event_reporter::Result<()> {
//! use key_event_reporter::{report, RdevSource};
//!
//! report(RdevSource::new(), std::io::stdout().lock()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hook;
pub mod key;
#[cfg(feature = "rdev")]
pub mod platform;
pub mod record;
pub mod reporter;

pub use error::{ReporterError, Result};
pub use hook::{install, HookHandle, KeySink, KeySource, Signal};
pub use key::{KeyIdentity, KeyName};
#[cfg(feature = "rdev")]
pub use platform::RdevSource;
pub use record::Record;
pub use reporter::{Reporter, ReporterState};

use std::io::Write;

/// Installs `source` and reports every press to `out` until Escape.
///
/// Returns the writer once the hook has stopped.
pub async fn report<S, W>(source: S, out: W) -> Result<W>
where
    S: KeySource,
    W: Write,
{
    let mut hook = install(source)?;
    let mut reporter = Reporter::new(out);
    hook.run(|key| reporter.on_press(key)).await?;
    Ok(reporter.into_inner())
}
