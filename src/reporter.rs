//! Turns resolved key presses into output records.

use crate::error::Result;
use crate::hook::Signal;
use crate::key::KeyIdentity;
use crate::record::{emit, Record};
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterState {
    Listening,
    /// Terminal. Entered when Escape is reported.
    Stopped,
}

/// Writes one press record per key, plus an exit record after Escape.
///
/// # Example
///
/// ```
/// use key_event_reporter::{KeyIdentity, KeyName, Reporter, Signal};
///
/// let mut reporter = Reporter::new(Vec::new());
/// assert_eq!(reporter.on_press(&KeyIdentity::Character('a')).unwrap(), Signal::Continue);
/// assert_eq!(reporter.on_press(&KeyIdentity::Named(KeyName::Esc)).unwrap(), Signal::Stop);
///
/// let out = String::from_utf8(reporter.into_inner()).unwrap();
/// assert_eq!(out.lines().count(), 3);
/// ```
pub struct Reporter<W: Write> {
    out: W,
    state: ReporterState,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            state: ReporterState::Listening,
        }
    }

    pub fn state(&self) -> ReporterState {
        self.state
    }

    /// Reports a single key press. Returns [`Signal::Stop`] once Escape has
    /// been seen; later presses are ignored.
    pub fn on_press(&mut self, key: &KeyIdentity) -> Result<Signal> {
        if self.state == ReporterState::Stopped {
            debug!(%key, "press after stop ignored");
            return Ok(Signal::Stop);
        }

        debug!(%key, "key press");
        emit(&mut self.out, &Record::press(key))?;

        if key.is_escape() {
            emit(&mut self.out, &Record::Exit)?;
            self.state = ReporterState::Stopped;
            info!("escape pressed, stopping");
            return Ok(Signal::Stop);
        }

        Ok(Signal::Continue)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyName;

    fn lines(reporter: Reporter<Vec<u8>>) -> Vec<String> {
        String::from_utf8(reporter.into_inner())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_character_press() {
        let mut reporter = Reporter::new(Vec::new());
        let signal = reporter.on_press(&KeyIdentity::Character('a')).unwrap();

        assert_eq!(signal, Signal::Continue);
        assert_eq!(reporter.state(), ReporterState::Listening);
        assert_eq!(lines(reporter), vec![r#"{"type":"press","key":"a"}"#]);
    }

    #[test]
    fn test_special_key_press() {
        let mut reporter = Reporter::new(Vec::new());
        let signal = reporter
            .on_press(&KeyIdentity::Named(KeyName::F(5)))
            .unwrap();

        assert_eq!(signal, Signal::Continue);
        assert_eq!(lines(reporter), vec![r#"{"type":"press","key":"Key.f5"}"#]);
    }

    #[test]
    fn test_escape_emits_exit_and_stops() {
        let mut reporter = Reporter::new(Vec::new());
        let signal = reporter
            .on_press(&KeyIdentity::Named(KeyName::Esc))
            .unwrap();

        assert_eq!(signal, Signal::Stop);
        assert_eq!(reporter.state(), ReporterState::Stopped);
        assert_eq!(
            lines(reporter),
            vec![
                r#"{"type":"press","key":"Key.esc"}"#,
                r#"{"type":"exit"}"#
            ]
        );
    }

    #[test]
    fn test_stopped_is_terminal() {
        let mut reporter = Reporter::new(Vec::new());
        reporter
            .on_press(&KeyIdentity::Named(KeyName::Esc))
            .unwrap();

        let signal = reporter.on_press(&KeyIdentity::Character('z')).unwrap();
        assert_eq!(signal, Signal::Stop);
        assert_eq!(lines(reporter).len(), 2);
    }

    #[test]
    fn test_write_failure_propagates() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut reporter = Reporter::new(Closed);
        assert!(reporter.on_press(&KeyIdentity::Character('a')).is_err());
    }
}
