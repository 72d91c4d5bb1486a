//! `/` route: post list plus the create form.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::form::{EditDialogState, FormField, PostFormState};
use crate::ui::layout::{centered_rect, list_columns};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK,
};

pub fn render_list_route(frame: &mut Frame, area: Rect, app: &App) {
    if app.posts().loading {
        let loading = Paragraph::new(vec![Line::from(""), Line::from("Loading Posts...")])
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));
        frame.render_widget(loading, area);
        return;
    }

    let (list_area, form_area) = list_columns(area);
    render_posts(frame, list_area, app);
    render_form(
        frame,
        form_area,
        " Add Post ",
        app.create_form(),
        app.focus() == Focus::Form,
    );
    render_create_button(frame, form_area, app.is_create_disabled());

    if let EditDialogState::Visible { post_id, form } = app.edit_dialog() {
        render_edit_dialog(frame, area, *post_id, form);
    }
}

fn render_posts(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Posts && !app.edit_dialog().is_visible();
    let block = Block::default()
        .title(" Posts ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    if let Some(error) = &app.posts().error {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Could not load posts",
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("  {}", error)),
            Line::from(""),
            Line::from(Span::styled(
                "  Press R to retry",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .posts()
        .posts
        .iter()
        .map(|post| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{} - {}", post.id, post.title),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate(&post.body.replace('\n', " "), width),
                    Style::default().fg(MUTED_TEXT),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.posts().is_empty() {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Title and body inputs with their inline validation messages.
fn render_form(frame: &mut Frame, area: Rect, title: &str, form: &PostFormState, focused: bool) {
    let field_style = |field: FormField| {
        if focused && form.focused == field {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        }
    };
    let cursor = |field: FormField| if focused && form.focused == field { "▏" } else { "" };

    let mut lines = vec![
        Line::from(Span::styled("Title", field_style(FormField::Title))),
        Line::from(format!("{}{}", form.title, cursor(FormField::Title))),
    ];
    if let Some(message) = form.errors.title {
        lines.push(Line::from(Span::styled(message, Style::default().fg(STATUS_ERROR))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Body", field_style(FormField::Body))));
    lines.push(Line::from(format!("{}{}", form.body, cursor(FormField::Body))));
    if let Some(message) = form.errors.body {
        lines.push(Line::from(Span::styled(message, Style::default().fg(STATUS_ERROR))));
    }

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}

fn render_create_button(frame: &mut Frame, form_area: Rect, disabled: bool) {
    if form_area.height < 4 {
        return;
    }
    let area = Rect {
        x: form_area.x + 2,
        y: form_area.y + form_area.height - 2,
        width: form_area.width.saturating_sub(4),
        height: 1,
    };
    let style = if disabled {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(STATUS_OK)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(Span::styled(" + Add Post ", style)), area);
}

fn render_edit_dialog(frame: &mut Frame, body: Rect, post_id: u64, form: &PostFormState) {
    let area = centered_rect(60, 60, body);
    frame.render_widget(Clear, area);
    let title = format!(" Update Post {} ", post_id);
    render_form(frame, area, &title, form, true);

    if area.height >= 3 {
        let hint_area = Rect {
            x: area.x + 2,
            y: area.y + area.height - 2,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        let hint = Paragraph::new(Span::styled(
            "Ctrl+S: Save  Esc: Cancel",
            Style::default().fg(POPUP_BORDER).add_modifier(Modifier::DIM),
        ));
        frame.render_widget(hint, hint_area);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}

/// Cut to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
