//! Keybinding configuration
//!
//! Key sequences are written as strings in the config file (`"<q>"`,
//! `"<ctrl-c>"`, `"<g><g>"`) and parsed into `Vec<KeyEvent>` sequences
//! mapped to actions.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};

use crate::action::Action;

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                let seq = parse_key_sequence(&key_str).map_err(serde::de::Error::custom)?;
                Ok((seq, action))
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;
        Ok(Self(keybindings))
    }
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.to_lowercase().starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.to_lowercase().starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.to_lowercase().starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.len() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| "empty key".to_string())?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        let raw = raw.strip_suffix('>').unwrap_or(raw);
        raw
    } else {
        raw
    };
    let sequences = raw
        .split("><")
        .map(|seq| {
            if let Some(s) = seq.strip_prefix('<') {
                s
            } else if let Some(s) = seq.strip_suffix('>') {
                s
            } else {
                seq
            }
        })
        .collect::<Vec<_>>();

    sequences.into_iter().map(parse_key_event).collect()
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let char;
    let key_code = match key_event.code {
        KeyCode::Backspace => "backspace",
        KeyCode::Enter => "enter",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "backtab",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::F(c) => {
            char = format!("f({c})");
            &char
        }
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => {
            char = c.to_string();
            &char
        }
        KeyCode::Esc => "esc",
        KeyCode::Null => "",
        KeyCode::CapsLock => "",
        KeyCode::Menu => "",
        KeyCode::ScrollLock => "",
        KeyCode::Media(_) => "",
        KeyCode::NumLock => "",
        KeyCode::PrintScreen => "",
        KeyCode::Pause => "",
        KeyCode::KeypadBegin => "",
        KeyCode::Modifier(_) => "",
    };

    let mut modifiers = Vec::with_capacity(3);

    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }

    if key_event.modifiers.intersects(KeyModifiers::SHIFT) {
        modifiers.push("shift");
    }

    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");

    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(key_code);

    key
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_simple_key() {
        assert_eq!(
            parse_key_event("a").expect("valid key"),
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("enter").expect("valid key"),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("esc").expect("valid key"),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())
        );
    }

    #[rstest]
    #[case("ctrl-a", KeyCode::Char('a'), KeyModifiers::CONTROL)]
    #[case("alt-enter", KeyCode::Enter, KeyModifiers::ALT)]
    #[case("shift-esc", KeyCode::Esc, KeyModifiers::SHIFT)]
    #[case("ctrl-alt-a", KeyCode::Char('a'), KeyModifiers::CONTROL | KeyModifiers::ALT)]
    fn test_parse_with_modifiers(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(
            parse_key_event(raw).expect("valid key"),
            KeyEvent::new(code, modifiers)
        );
    }

    #[test]
    fn test_parse_invalid_keys() {
        assert!(parse_key_event("invalid-key").is_err());
        assert!(parse_key_event("ctrl-invalid-key").is_err());
    }

    #[test]
    fn test_case_insensitivity() {
        assert_eq!(
            parse_key_event("CTRL-a").expect("valid key"),
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_key_event("AlT-eNtEr").expect("valid key"),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)
        );
    }

    #[test]
    fn test_parse_key_sequence_single() {
        assert_eq!(
            parse_key_sequence("<q>").expect("valid sequence"),
            vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())]
        );
    }

    #[test]
    fn test_parse_key_sequence_multi() {
        assert_eq!(
            parse_key_sequence("<g><g>").expect("valid sequence"),
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
            ]
        );
    }

    #[test]
    fn test_parse_key_sequence_unbalanced() {
        assert!(parse_key_sequence("<q").is_err());
    }

    #[test]
    fn test_key_event_to_string_round_trip() {
        for raw in ["a", "enter", "ctrl-c", "shift-tab", "alt-x", "space"] {
            let event = parse_key_event(raw).expect("valid key");
            let round_tripped = parse_key_event(&key_event_to_string(&event)).expect("valid key");
            assert_eq!(event, round_tripped, "round trip failed for {raw}");
        }
    }

    #[test]
    fn test_deserialize_keybindings_from_json() {
        let bindings: KeyBindings =
            serde_json::from_str(r#"{"<q>": "Quit", "<ctrl-c>": "Quit", "<tab>": "FocusNext"}"#)
                .expect("valid keybindings");
        assert_eq!(bindings.len(), 3);
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())]),
            Some(&Action::Quit)
        );
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Tab, KeyModifiers::empty())]),
            Some(&Action::FocusNext)
        );
    }
}
