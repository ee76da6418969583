use keyword_core::{AppViewModel, Msg};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SwitchFocus,
    Send(Msg),
}

/// Maps one key press to what the app should do. Search and subscribe are
/// ignored while a request is outstanding, the same way the buttons are
/// disabled on screen.
pub fn map_key(key: KeyEvent, focus: Focus, view: &AppViewModel) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            Some(Action::SwitchFocus)
        }
        KeyCode::Enter => view.actions_enabled.then_some(Action::Send(Msg::SearchClicked)),
        KeyCode::Char('s') if ctrl => {
            view.actions_enabled.then_some(Action::Send(Msg::SubscribeClicked))
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut text = field_text(focus, view).to_owned();
            text.push(ch);
            Some(Action::Send(edit_msg(focus, text)))
        }
        KeyCode::Backspace => {
            let mut text = field_text(focus, view).to_owned();
            text.pop()?;
            Some(Action::Send(edit_msg(focus, text)))
        }
        _ => None,
    }
}

fn field_text(focus: Focus, view: &AppViewModel) -> &str {
    match focus {
        Focus::Email => &view.email,
        Focus::Topic => &view.topic,
    }
}

fn edit_msg(focus: Focus, text: String) -> Msg {
    match focus {
        Focus::Email => Msg::EmailChanged(text),
        Focus::Topic => Msg::TopicChanged(text),
    }
}
