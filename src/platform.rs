//! Global keyboard hook backed by `rdev`.
//!
//! Uses Quartz event taps on macOS, a low-level keyboard hook on Windows and
//! the X11 record extension on Linux. macOS needs the Input Monitoring
//! permission; Linux needs an X11 session.

use crate::error::{ReporterError, Result};
use crate::hook::{KeySink, KeySource};
use crate::key::{printable_char, KeyIdentity, KeyName};
use rdev::{Event, EventType, Key};
use tracing::{debug, error};

/// [`KeySource`] listening through `rdev::listen`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RdevSource;

impl RdevSource {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for RdevSource {
    fn listen(self, sink: KeySink) -> Result<()> {
        rdev::listen(move |event: Event| {
            let EventType::KeyPress(key) = event.event_type else {
                return;
            };
            if !sink.is_listening() {
                return;
            }

            let identity = resolve(key, event.name.as_deref());
            if !sink.deliver(identity) {
                debug!(?key, "hook stopped, press dropped");
            }
        })
        .map_err(|e| {
            error!(?e, "global keyboard hook failed");
            ReporterError::hook(format!("{:?}", e))
        })
    }
}

/// Maps an rdev key plus the text the platform produced for it to a
/// [`KeyIdentity`].
///
/// Special keys are always named, even when the platform reports control
/// text for them (X11 reports `"\u{1b}"` for Escape). Character keys use the
/// reported text so layout and Shift are honoured, falling back to the
/// unshifted US glyph when the text is missing or a control code.
///
/// Keypad digits and the keypad decimal follow NumLock: they report the
/// text they typed, and their navigation name when they typed nothing.
pub fn resolve(key: Key, text: Option<&str>) -> KeyIdentity {
    if let Some(name) = special_name(key) {
        return KeyIdentity::Named(name);
    }
    if let Some(c) = printable_char(text) {
        return KeyIdentity::Character(c);
    }
    if let Some(name) = keypad_navigation_name(key) {
        return KeyIdentity::Named(name);
    }
    match (base_char(key), key) {
        (Some(c), _) => KeyIdentity::Character(c),
        (None, Key::Unknown(code)) => KeyIdentity::Named(KeyName::Unknown(code)),
        (None, _) => KeyIdentity::Named(KeyName::Unidentified),
    }
}

fn special_name(key: Key) -> Option<KeyName> {
    let name = match key {
        Key::Alt => KeyName::Alt,
        Key::AltGr => KeyName::AltGr,
        Key::Backspace => KeyName::Backspace,
        Key::CapsLock => KeyName::CapsLock,
        Key::ControlLeft => KeyName::CtrlLeft,
        Key::ControlRight => KeyName::CtrlRight,
        Key::Delete => KeyName::Delete,
        Key::DownArrow => KeyName::Down,
        Key::End => KeyName::End,
        Key::Escape => KeyName::Esc,
        Key::Home => KeyName::Home,
        Key::Insert => KeyName::Insert,
        Key::LeftArrow => KeyName::Left,
        Key::MetaLeft => KeyName::Cmd,
        Key::MetaRight => KeyName::CmdRight,
        Key::NumLock => KeyName::NumLock,
        Key::PageDown => KeyName::PageDown,
        Key::PageUp => KeyName::PageUp,
        Key::Pause => KeyName::Pause,
        Key::PrintScreen => KeyName::PrintScreen,
        Key::Return | Key::KpReturn => KeyName::Enter,
        Key::RightArrow => KeyName::Right,
        Key::ScrollLock => KeyName::ScrollLock,
        Key::ShiftLeft => KeyName::Shift,
        Key::ShiftRight => KeyName::ShiftRight,
        Key::Space => KeyName::Space,
        Key::Tab => KeyName::Tab,
        Key::UpArrow => KeyName::Up,
        Key::Function => KeyName::Fn,

        // Function keys
        Key::F1 => KeyName::F(1),
        Key::F2 => KeyName::F(2),
        Key::F3 => KeyName::F(3),
        Key::F4 => KeyName::F(4),
        Key::F5 => KeyName::F(5),
        Key::F6 => KeyName::F(6),
        Key::F7 => KeyName::F(7),
        Key::F8 => KeyName::F(8),
        Key::F9 => KeyName::F(9),
        Key::F10 => KeyName::F(10),
        Key::F11 => KeyName::F(11),
        Key::F12 => KeyName::F(12),

        _ => return None,
    };
    Some(name)
}

/// What a keypad key does with NumLock off.
fn keypad_navigation_name(key: Key) -> Option<KeyName> {
    let name = match key {
        Key::Kp0 => KeyName::Insert,
        Key::Kp1 => KeyName::End,
        Key::Kp2 => KeyName::Down,
        Key::Kp3 => KeyName::PageDown,
        Key::Kp4 => KeyName::Left,
        Key::Kp5 => KeyName::Begin,
        Key::Kp6 => KeyName::Right,
        Key::Kp7 => KeyName::Home,
        Key::Kp8 => KeyName::Up,
        Key::Kp9 => KeyName::PageUp,
        Key::KpDelete => KeyName::Delete,
        _ => return None,
    };
    Some(name)
}

/// Unshifted US-layout glyph of a character key.
fn base_char(key: Key) -> Option<char> {
    let c = match key {
        // Letters
        Key::KeyA => 'a',
        Key::KeyB => 'b',
        Key::KeyC => 'c',
        Key::KeyD => 'd',
        Key::KeyE => 'e',
        Key::KeyF => 'f',
        Key::KeyG => 'g',
        Key::KeyH => 'h',
        Key::KeyI => 'i',
        Key::KeyJ => 'j',
        Key::KeyK => 'k',
        Key::KeyL => 'l',
        Key::KeyM => 'm',
        Key::KeyN => 'n',
        Key::KeyO => 'o',
        Key::KeyP => 'p',
        Key::KeyQ => 'q',
        Key::KeyR => 'r',
        Key::KeyS => 's',
        Key::KeyT => 't',
        Key::KeyU => 'u',
        Key::KeyV => 'v',
        Key::KeyW => 'w',
        Key::KeyX => 'x',
        Key::KeyY => 'y',
        Key::KeyZ => 'z',

        // Numbers
        Key::Num0 => '0',
        Key::Num1 => '1',
        Key::Num2 => '2',
        Key::Num3 => '3',
        Key::Num4 => '4',
        Key::Num5 => '5',
        Key::Num6 => '6',
        Key::Num7 => '7',
        Key::Num8 => '8',
        Key::Num9 => '9',

        // Punctuation
        Key::BackQuote => '`',
        Key::Minus | Key::KpMinus => '-',
        Key::Equal => '=',
        Key::KpPlus => '+',
        Key::KpMultiply => '*',
        Key::LeftBracket => '[',
        Key::RightBracket => ']',
        Key::SemiColon => ';',
        Key::Quote => '\'',
        Key::BackSlash | Key::IntlBackslash => '\\',
        Key::Comma => ',',
        Key::Dot => '.',
        Key::Slash | Key::KpDivide => '/',

        _ => return None,
    };
    Some(c)
}
