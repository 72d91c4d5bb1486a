//! `/post/{id}` route rendering.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::detail::state::DetailState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const NO_COMMENTS: &str = "No comments available for this post.";

pub fn render_detail(frame: &mut Frame, area: Rect, state: &DetailState) {
    if matches!(state, DetailState::Idle | DetailState::Loading { .. }) {
        let loading = Paragraph::new(vec![Line::from(""), Line::from("Loading post details...")])
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT));
        frame.render_widget(loading, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    // LoadedEmpty renders the same frame with nothing in it.
    let (title, body) = state
        .post()
        .map(|post| (post.title.clone(), post.body.clone()))
        .unwrap_or_default();

    let content = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(body),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(content, chunks[0]);

    frame.render_widget(comments_widget(state), chunks[1]);
}

fn comments_widget(state: &DetailState) -> Paragraph<'static> {
    let comments = state.comments();
    let mut lines = Vec::new();
    if comments.is_empty() {
        lines.push(Line::from(NO_COMMENTS));
    }
    for comment in comments {
        lines.push(Line::from(Span::styled(
            comment.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(comment.body.replace('\n', " ")));
        lines.push(Line::from(Span::styled(
            format!("By: {}", comment.email),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Comments ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
