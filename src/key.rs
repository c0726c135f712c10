//! Platform-neutral key identities.
//!
//! Every key press is either a printable character or a named special key.
//! Named keys render as `Key.<name>` (for example `Key.esc`, `Key.shift`),
//! and raw codes the platform could not classify render as `<code>`.

use std::fmt;

/// What a single key press resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIdentity {
    /// The key produced this printable character.
    Character(char),
    /// The key has no printable form.
    Named(KeyName),
}

impl KeyIdentity {
    pub fn is_escape(&self) -> bool {
        matches!(self, KeyIdentity::Named(KeyName::Esc))
    }

    /// The string reported in the `key` field of a press record.
    pub fn label(&self) -> String {
        match self {
            KeyIdentity::Character(c) => c.to_string(),
            KeyIdentity::Named(name) => name.to_string(),
        }
    }
}

impl fmt::Display for KeyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyIdentity::Character(c) => write!(f, "{}", c),
            KeyIdentity::Named(name) => fmt::Display::fmt(name, f),
        }
    }
}

/// Keys without a printable character.
///
/// Names follow pynput's `Key` attribute names, which is what consumers of
/// this stream already match on. That convention is irregular: left Shift
/// and left Cmd are the bare `shift` and `cmd` while the right ones carry
/// `_r`, Ctrl always carries a side (`ctrl_l`, `ctrl_r`), and Alt has only
/// `alt` and `alt_gr`. Keep new names consistent with pynput rather than
/// with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyName {
    Alt,
    AltGr,
    Backspace,
    /// Keypad 5 with NumLock off.
    Begin,
    CapsLock,
    Cmd,
    CmdRight,
    CtrlLeft,
    CtrlRight,
    Delete,
    Down,
    End,
    Enter,
    Esc,
    /// Function keys `F1` through `F12`.
    F(u8),
    Fn,
    Home,
    Insert,
    Left,
    NumLock,
    PageDown,
    PageUp,
    Pause,
    PrintScreen,
    Right,
    ScrollLock,
    Shift,
    ShiftRight,
    Space,
    Tab,
    Up,
    /// A raw platform code with no known meaning.
    Unknown(u32),
    /// A platform key this crate has no mapping for.
    Unidentified,
}

impl KeyName {
    /// Snake-case name without the `Key.` prefix. `None` for function and
    /// unknown keys, whose names carry a number.
    fn fixed_name(&self) -> Option<&'static str> {
        let name = match self {
            KeyName::Alt => "alt",
            KeyName::AltGr => "alt_gr",
            KeyName::Backspace => "backspace",
            KeyName::Begin => "begin",
            KeyName::CapsLock => "caps_lock",
            KeyName::Cmd => "cmd",
            KeyName::CmdRight => "cmd_r",
            KeyName::CtrlLeft => "ctrl_l",
            KeyName::CtrlRight => "ctrl_r",
            KeyName::Delete => "delete",
            KeyName::Down => "down",
            KeyName::End => "end",
            KeyName::Enter => "enter",
            KeyName::Esc => "esc",
            KeyName::Fn => "fn",
            KeyName::Home => "home",
            KeyName::Insert => "insert",
            KeyName::Left => "left",
            KeyName::NumLock => "num_lock",
            KeyName::PageDown => "page_down",
            KeyName::PageUp => "page_up",
            KeyName::Pause => "pause",
            KeyName::PrintScreen => "print_screen",
            KeyName::Right => "right",
            KeyName::ScrollLock => "scroll_lock",
            KeyName::Shift => "shift",
            KeyName::ShiftRight => "shift_r",
            KeyName::Space => "space",
            KeyName::Tab => "tab",
            KeyName::Up => "up",
            KeyName::Unidentified => "unknown",
            KeyName::F(_) | KeyName::Unknown(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyName::F(n) => write!(f, "Key.f{}", n),
            KeyName::Unknown(code) => write!(f, "<{}>", code),
            _ => write!(f, "Key.{}", self.fixed_name().unwrap_or("unknown")),
        }
    }
}

/// Picks the printable character out of the text a platform reported for a
/// press. Only a single non-control character counts; dead keys, IME
/// sequences and control codes such as `"\u{1b}"` yield `None`.
pub fn printable_char(text: Option<&str>) -> Option<char> {
    let mut chars = text?.chars();
    let c = chars.next()?;
    if chars.next().is_some() || c.is_control() {
        return None;
    }
    Some(c)
}
