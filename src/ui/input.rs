use crate::ui::app::{App, Focus};
use crate::ui::form::{FormField, FormIntent};
use crate::ui::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Detail(_) => handle_detail_key(app, key),
        Route::List if app.edit_dialog().is_visible() => handle_edit_key(app, key),
        Route::List => match app.focus() {
            Focus::Posts => handle_posts_key(app, key),
            Focus::Form => handle_form_key(app, key),
        },
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) {
        app.navigate(Route::List);
    }
}

fn handle_posts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Tab => app.focus_next(),
        KeyCode::Enter | KeyCode::Char('v') => app.open_selected(),
        KeyCode::Char('e' | 'E') => app.open_edit(),
        KeyCode::Char('d' | 'D') => {
            app.delete_selected();
        }
        KeyCode::Char('r' | 'R') if app.posts().has_error() => app.reload(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::Esc => {
            while app.focus() == Focus::Form {
                app.focus_next();
            }
        }
        KeyCode::Enter if app.create_form().focused == FormField::Title => app.focus_next(),
        KeyCode::Enter => {
            // Validates first, so a disabled draft only shows its messages.
            app.submit_create();
        }
        KeyCode::Backspace => app.edit_create_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !has_ctrl(key) => app.edit_create_form(FormIntent::Insert(ch)),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_update();
        return;
    }
    let focused = app.edit_dialog().form().map(|form| form.focused);
    match key.code {
        KeyCode::Esc => app.close_edit(),
        KeyCode::Tab => app.edit_update_form(FormIntent::FocusNext),
        KeyCode::Enter if focused == Some(FormField::Title) => {
            app.edit_update_form(FormIntent::FocusNext)
        }
        KeyCode::Enter => {
            app.submit_update();
        }
        KeyCode::Backspace => app.edit_update_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !has_ctrl(key) => app.edit_update_form(FormIntent::Insert(ch)),
        _ => {}
    }
}

fn has_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
