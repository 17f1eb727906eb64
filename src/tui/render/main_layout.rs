//! Main layout: search input, result lists and status bar

use crate::app::{App, Mode, Pane};
use crate::search::{Entry, EntryList, LinkTarget, UserEntry};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::colors;

/// Render the search input box, titled with the current submit label
///
/// Text wider than the box scrolls horizontally so the cursor stays visible.
pub fn render_search_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let editing = app.mode == Mode::Editing;
    let border_color = if editing {
        colors::SELECTED
    } else {
        colors::BORDER
    };

    let (cursor_col, scroll) = input_scroll(app, area.width.saturating_sub(2));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        app.input.buffer.as_str(),
        Style::default().fg(colors::TEXT_PRIMARY),
    )))
    .scroll((0, scroll))
    .block(
        Block::default()
            .title(format!(" {} ", app.search.submit_label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    )
    .style(Style::default().bg(colors::INPUT_BG));

    frame.render_widget(paragraph, area);

    if editing && area.width > 2 && area.height > 2 {
        frame.set_cursor_position((area.x + 1 + cursor_col - scroll, area.y + 1));
    }
}

/// Display column of the cursor and the horizontal scroll that keeps it
/// inside `inner_width` columns.
fn input_scroll(app: &App, inner_width: u16) -> (u16, u16) {
    let before_cursor = app.input.buffer.get(..app.input.cursor).unwrap_or_default();
    let cursor_col = u16::try_from(Line::raw(before_cursor).width()).unwrap_or(u16::MAX);
    // The cursor occupies the cell after the text, so keep one column free
    let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));
    (cursor_col, scroll)
}

/// Render the users and repositories lists side by side
pub fn render_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let browsing = app.mode == Mode::Browsing;
    render_entry_list(
        frame,
        app.search.primary(),
        "Users",
        browsing && app.focus == Pane::Users,
        chunks[0],
    );
    render_entry_list(
        frame,
        app.search.secondary(),
        "Repositories",
        browsing && app.focus == Pane::Repos,
        chunks[1],
    );
}

fn render_entry_list(
    frame: &mut Frame<'_>,
    list: &EntryList,
    title: &str,
    focused: bool,
    area: Rect,
) {
    let border_color = if focused {
        colors::SELECTED
    } else {
        colors::BORDER
    };
    let block = Block::default()
        .title(format!(" {title} ({}) ", list.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors::SURFACE));

    if list.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No results",
            Style::default().fg(colors::TEXT_MUTED),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem<'_>> = list.entries().iter().map(entry_item).collect();
    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().bg(colors::SURFACE_HIGHLIGHT)
    };

    let widget = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(list.selected()));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn entry_item(entry: &Entry) -> ListItem<'_> {
    match entry {
        Entry::User(user) => user_item(user),
        Entry::Repo(repo) => ListItem::new(Line::from(Span::styled(
            repo.text.as_str(),
            Style::default().fg(colors::TEXT_PRIMARY),
        ))),
    }
}

fn user_item(user: &UserEntry) -> ListItem<'_> {
    let arrow = match user.profile.target {
        LinkTarget::External => " ↗",
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled("◉ ", Style::default().fg(colors::TEXT_DIM)),
            Span::styled(
                user.username.as_str(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{}{arrow} ", user.profile.text),
                Style::default()
                    .fg(colors::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                user.profile.href.as_str(),
                Style::default().fg(colors::TEXT_MUTED),
            ),
        ]),
    ])
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let loading = app.loading_message();
    let left_content = match (&app.last_error, &loading, &app.status_message) {
        (Some(error), _, _) => Span::styled(
            format!(" Error: {error} "),
            Style::default()
                .fg(colors::STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        (None, Some(loading), _) => Span::styled(
            format!(" {loading} "),
            Style::default().fg(colors::STATUS_LOADING),
        ),
        (None, None, Some(status)) => {
            Span::styled(format!(" {status} "), Style::default().fg(colors::STATUS_OK))
        }
        (None, None, None) => Span::styled(
            format!(" {} ", app.config.keys.status_hints()),
            Style::default().fg(colors::TEXT_DIM),
        ),
    };

    let mode_label = app.search.submit_label();
    let mode_span = Span::styled(
        format!(" {mode_label} "),
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    );
    let mode_width = u16::try_from(mode_label.chars().count().saturating_add(2))
        .unwrap_or(0)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(mode_width)])
        .split(area);

    let left = Paragraph::new(Line::from(left_content)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(mode_span))
        .style(Style::default().bg(colors::SURFACE))
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}
