//! Help overlay and warning modal

use crate::app::App;
use crate::config::Action;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::colors;

/// Keys handled directly by the search input
const EDITING_KEYS: &[(&str, &str)] = &[
    ("Enter", "Submit search"),
    ("Ctrl+t", "Toggle users/repos search"),
    ("Ctrl+w", "Delete word"),
    ("Esc/Tab", "Browse results"),
];

/// Create a centered rect with percentage width and absolute height
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn key_line(keys: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<10} "), Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            description.to_string(),
            Style::default().fg(colors::TEXT_PRIMARY),
        ),
    ])
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let mut help_text = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Search input",
            Style::default().fg(colors::TEXT_DIM),
        )),
    ];
    help_text.extend(
        EDITING_KEYS
            .iter()
            .map(|(keys, description)| key_line(keys, description)),
    );

    let mut current_group = None;
    for &action in Action::ALL_FOR_HELP {
        let group = action.group();
        if current_group != Some(group) {
            help_text.push(Line::from(""));
            help_text.push(Line::from(Span::styled(
                group.title(),
                Style::default().fg(colors::TEXT_DIM),
            )));
            current_group = Some(group);
        }
        help_text.push(key_line(
            &app.config.keys.format_keys(action),
            action.description(),
        ));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Any key closes",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let max_height = frame.area().height.saturating_sub(2);
    let height = u16::try_from(help_text.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(max_height);
    let area = centered_rect_absolute(60, height, frame.area());

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render a warning modal with a word-wrapped message
pub fn render_warning_modal(frame: &mut Frame<'_>, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "⚠ Warning",
            Style::default()
                .fg(colors::MODAL_BORDER_WARNING)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors::TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX).max(7);
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Warning ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER_WARNING)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
