use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    OpenShell,
    CloseShell,
    Submit,
    HistoryUp,
    HistoryDown,
    InsertChar(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions. Key bindings depend on whether the
/// shell overlay is open.
pub fn poll_event(timeout: Duration, shell_open: bool) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key, shell_open));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent, shell_open: bool) -> Action {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return Action::Quit;
    }

    if !shell_open {
        return match key.code {
            KeyCode::Char('`') | KeyCode::Char('t') | KeyCode::Enter => Action::OpenShell,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::CloseShell,
        (KeyCode::Char('`'), KeyModifiers::NONE) => Action::CloseShell,

        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Up, _) => Action::HistoryUp,
        (KeyCode::Down, _) => Action::HistoryDown,
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::HistoryUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::HistoryDown,

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
