use crate::ui::app::App;
use crate::ui::route::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let posts = app.posts();
        let (status, status_color) = if posts.loading {
            ("Loading".to_string(), HEADER_TEXT)
        } else if posts.has_error() {
            ("Offline".to_string(), STATUS_ERROR)
        } else {
            (format!("{} posts", posts.posts.len()), STATUS_OK)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Postboard",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(route_label(app.route()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn route_label(route: Route) -> String {
    match route {
        Route::List => "Posts  /".to_string(),
        Route::Detail(id) => format!("Post details  {}", Route::Detail(id)),
    }
}
