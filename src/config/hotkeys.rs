//! Hotkey configuration management.
//!
//! This module defines the form-level actions that can be rebound from the
//! configuration file. Keys inside widgets (arrows, Home/End, Enter, Space and
//! Esc on the dropdown or the radio group, typing in text fields) follow the
//! accessibility contract and are not configurable.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    NextField,
    PrevField,
    Submit,
    ToggleLog,
    Quit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Hotkey { code, modifiers }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let code = KeyCodeSerde::try_from(self.code).map_err(serde::ser::Error::custom)?;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &code)?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = helper
            .code
            .to_key_code(helper.char)
            .map_err(serde::de::Error::custom)?;
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Key codes that may be bound in the configuration file. A `Char` code
/// carries its character in the sibling `char` field.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Tab,
    BackTab,
    Esc,
    Enter,
    Backspace,
    Delete,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    F1,
    F2,
    F5,
}

impl KeyCodeSerde {
    fn to_key_code(self, c: Option<char>) -> Result<KeyCode, &'static str> {
        Ok(match self {
            KeyCodeSerde::Char => KeyCode::Char(c.ok_or("Char key code requires 'char' field")?),
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Delete => KeyCode::Delete,
            KeyCodeSerde::Home => KeyCode::Home,
            KeyCodeSerde::End => KeyCode::End,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
            KeyCodeSerde::F1 => KeyCode::F(1),
            KeyCodeSerde::F2 => KeyCode::F(2),
            KeyCodeSerde::F5 => KeyCode::F(5),
        })
    }
}

impl TryFrom<KeyCode> for KeyCodeSerde {
    type Error = String;

    fn try_from(code: KeyCode) -> Result<Self, Self::Error> {
        Ok(match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Delete => KeyCodeSerde::Delete,
            KeyCode::Home => KeyCodeSerde::Home,
            KeyCode::End => KeyCodeSerde::End,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            KeyCode::F(1) => KeyCodeSerde::F1,
            KeyCode::F(2) => KeyCodeSerde::F2,
            KeyCode::F(5) => KeyCodeSerde::F5,
            other => return Err(format!("Unsupported hotkey code: {:?}", other)),
        })
    }
}

/// Modifier flags as written in the configuration file; omitted flags are off.
///
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
struct KeyModifiersSerde {
    control: bool,
    shift: bool,
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(flags: KeyModifiersSerde) -> Self {
        [
            (flags.control, KeyModifiers::CONTROL),
            (flags.shift, KeyModifiers::SHIFT),
            (flags.alt, KeyModifiers::ALT),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(KeyModifiers::empty(), |acc, (_, modifier)| acc | modifier)
    }
}

/// Maps hotkey actions to their key bindings.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hotkeys {
    bindings: HashMap<HotkeyAction, Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl Hotkeys {
    pub fn get(&self, action: HotkeyAction) -> Option<&Hotkey> {
        self.bindings.get(&action)
    }

    /// Fill in defaults for any action missing from a loaded file.
    ///
    pub fn with_defaults(mut self) -> Self {
        for (action, hotkey) in default_hotkeys().bindings {
            self.bindings.entry(action).or_insert(hotkey);
        }
        self
    }

    /// Gets the action bound to a key event.
    ///
    pub fn action_for(&self, event: &KeyEvent) -> Option<HotkeyAction> {
        self.bindings
            .iter()
            .find(|(_, hotkey)| matches_hotkey(event, hotkey))
            .map(|(action, _)| *action)
    }
}

/// Returns the default hotkey mappings.
///
pub fn default_hotkeys() -> Hotkeys {
    let mut bindings = HashMap::new();
    bindings.insert(
        HotkeyAction::NextField,
        Hotkey::new(KeyCode::Tab, KeyModifiers::empty()),
    );
    // Terminals report Shift+Tab as BackTab with the shift modifier set.
    bindings.insert(
        HotkeyAction::PrevField,
        Hotkey::new(KeyCode::BackTab, KeyModifiers::SHIFT),
    );
    bindings.insert(
        HotkeyAction::Submit,
        Hotkey::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
    );
    bindings.insert(
        HotkeyAction::ToggleLog,
        Hotkey::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
    );
    bindings.insert(
        HotkeyAction::Quit,
        Hotkey::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    Hotkeys { bindings }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Builds a footer text string from hotkey configurations.
///
pub fn build_footer_text(hotkeys: &Hotkeys, actions: &[(HotkeyAction, &str)]) -> String {
    actions
        .iter()
        .filter_map(|(action, description)| {
            hotkeys
                .get(*action)
                .map(|hotkey| format!(" {}: {}", format_hotkey_display(hotkey), description))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) && hotkey.code != KeyCode::BackTab {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
