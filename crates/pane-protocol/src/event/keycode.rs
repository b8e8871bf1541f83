//! Semantic key identifiers.

use serde::{Deserialize, Serialize};

/// Identifies the semantic meaning of a key, independent of layout.
///
/// Serialized with the variant name as-is (`"Key1"`, `"NumpadEnter"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VirtualKeyCode {
    /// Digit row, above the letters.
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    Key0,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Escape,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    /// Print Screen / SysRq.
    Snapshot,
    /// Scroll Lock.
    Scroll,
    Pause,
    Insert,
    Home,
    Delete,
    End,
    PageDown,
    PageUp,
    Left,
    Up,
    Right,
    Down,
    /// Backspace.
    Back,
    /// Enter.
    Return,
    Space,
    /// Compose key (Linux).
    Compose,
    Caret,
    Numlock,
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadDivide,
    NumpadDecimal,
    NumpadComma,
    NumpadEnter,
    NumpadEquals,
    NumpadMultiply,
    NumpadSubtract,
    AbntC1,
    AbntC2,
    Apostrophe,
    Apps,
    Asterisk,
    At,
    Ax,
    Backslash,
    Calculator,
    Capital,
    Colon,
    Comma,
    Convert,
    Equals,
    Grave,
    Kana,
    Kanji,
    LAlt,
    LBracket,
    LControl,
    LShift,
    LWin,
    Mail,
    MediaSelect,
    MediaStop,
    Minus,
    Mute,
    MyComputer,
    NavigateForward,
    NavigateBackward,
    NextTrack,
    NoConvert,
    /// The extra key left of Z on ISO keyboards.
    OEM102,
    Period,
    PlayPause,
    Plus,
    Power,
    PrevTrack,
    RAlt,
    RBracket,
    RControl,
    RShift,
    RWin,
    Semicolon,
    Slash,
    Sleep,
    Stop,
    Sysrq,
    Tab,
    Underline,
    Unlabeled,
    VolumeDown,
    VolumeUp,
    Wake,
    WebBack,
    WebFavorites,
    WebForward,
    WebHome,
    WebRefresh,
    WebSearch,
    WebStop,
    Yen,
    Copy,
    Paste,
    Cut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_are_wire_names() {
        assert_eq!(serde_json::to_string(&VirtualKeyCode::NumpadEnter).unwrap(), r#""NumpadEnter""#);
        assert_eq!(serde_json::to_string(&VirtualKeyCode::Key0).unwrap(), r#""Key0""#);
        let key: VirtualKeyCode = serde_json::from_str(r#""OEM102""#).unwrap();
        assert_eq!(key, VirtualKeyCode::OEM102);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(serde_json::from_str::<VirtualKeyCode>(r#""Hyper""#).is_err());
        assert!(serde_json::from_str::<VirtualKeyCode>(r#""key1""#).is_err());
    }
}
