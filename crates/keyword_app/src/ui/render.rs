use keyword_core::AppViewModel;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};
use ratatui::Frame;

use super::Focus;

pub const TITLE: &str = "Get Immediate Updates With Things You Follow";
pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
pub const TOPIC_PLACEHOLDER: &str = "What topics do you care about most?";
pub const KEYWORDS_HEADING: &str = "Keywords from your search:";

pub fn draw(frame: &mut Frame, view: &AppViewModel, focus: Focus) {
    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .split(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(TITLE).style(Style::new().add_modifier(Modifier::BOLD))),
        rows[0],
    );

    draw_field(
        frame,
        rows[1],
        "Email",
        &view.email,
        EMAIL_PLACEHOLDER,
        focus == Focus::Email,
    );
    draw_field(
        frame,
        rows[2],
        "Topic",
        &view.topic,
        TOPIC_PLACEHOLDER,
        focus == Focus::Topic,
    );

    frame.render_widget(Paragraph::new(actions_line(view)), rows[3]);

    if let Some(line) = notice_line(view) {
        frame.render_widget(Paragraph::new(line), rows[4]);
    }

    if view.show_keywords {
        let items: Vec<ListItem> = view
            .keywords
            .iter()
            .map(|keyword| ListItem::new(format!("• {keyword}")))
            .collect();
        frame.render_widget(
            List::new(items).block(Block::bordered().title(KEYWORDS_HEADING)),
            rows[5],
        );
    }
}

fn draw_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border_style = if focused {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new()
    };
    let text = if value.is_empty() {
        Line::from(Span::styled(
            placeholder,
            Style::new().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(value)
    };
    frame.render_widget(
        Paragraph::new(text).block(Block::bordered().title(title).border_style(border_style)),
        area,
    );

    if focused {
        let width = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn actions_line(view: &AppViewModel) -> Line<'static> {
    let action_style = if view.actions_enabled {
        Style::new().add_modifier(Modifier::BOLD)
    } else {
        Style::new().add_modifier(Modifier::DIM)
    };
    let hint_style = Style::new().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled("[Enter] ", hint_style),
        Span::styled(view.search_label, action_style),
        Span::raw("   "),
        Span::styled("[Ctrl+S] ", hint_style),
        Span::styled(view.subscribe_label, action_style),
        Span::styled("   [Tab] switch field   [Esc] quit", hint_style),
    ])
}

fn notice_line(view: &AppViewModel) -> Option<Line<'static>> {
    if let Some(error) = &view.error {
        return Some(Line::from(Span::styled(
            error.clone(),
            Style::new().fg(Color::Red),
        )));
    }
    view.status
        .as_ref()
        .map(|status| Line::from(Span::styled(status.clone(), Style::new().fg(Color::Green))))
}
