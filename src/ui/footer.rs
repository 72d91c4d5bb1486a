use crate::ui::app::App;
use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::toast::ToastKind;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        // A visible toast takes over the hint line.
        let (left, left_style) = match (app.toast().message(), app.toast().kind()) {
            (Some(message), Some(kind)) => {
                let color = match kind {
                    ToastKind::Success => STATUS_OK,
                    ToastKind::Error => STATUS_ERROR,
                };
                (format!(" {}", message), Style::default().fg(color))
            }
            _ => (hints(app).to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints(app: &App) -> &'static str {
    match app.route() {
        Route::Detail(_) => " Esc: Back │ Ctrl+Q: Quit",
        Route::List if app.edit_dialog().is_visible() => {
            " Tab: Field │ Ctrl+S: Save │ Esc: Cancel"
        }
        Route::List if app.posts().has_error() => {
            " R: Retry │ Tab: Form │ Ctrl+Q: Quit"
        }
        Route::List => " ↑/↓: Select │ Enter: View │ E: Update │ D: Delete │ Tab: Form │ Ctrl+Q: Quit",
    }
}
