use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Context-free classification of a key press. The runtime gives the
/// ambiguous ones (navigation, plain characters) their meaning based on
/// which pane has focus.
#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Quit,
    Submit,
    Refresh,
    SwitchPane,
    DeleteEntry,
    Next,
    Prev,
    Cancel,
    Accept,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Refresh,
            KeyCode::Char('l') | KeyCode::Char('L') => KeyCommand::SwitchPane,
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::DeleteEntry,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => KeyCommand::Next,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::Prev,
        KeyCode::Esc => KeyCommand::Cancel,
        KeyCode::Enter => KeyCommand::Accept,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_keys_map_to_app_commands() {
        let ctrl = |ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
        assert!(matches!(classify(&ctrl('s')), KeyCommand::Submit));
        assert!(matches!(classify(&ctrl('q')), KeyCommand::Quit));
        assert!(matches!(classify(&ctrl('r')), KeyCommand::Refresh));
        assert!(matches!(classify(&ctrl('d')), KeyCommand::DeleteEntry));
    }

    #[test]
    fn plain_characters_fall_through_to_editing() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(classify(&key), KeyCommand::Edit(_)));
    }
}
