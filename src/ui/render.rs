use crate::ui::app::App;
use crate::ui::detail::render_detail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list_view::render_list_route;
use crate::ui::route::Route;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::List => render_list_route(frame, body, app),
        Route::Detail(_) => render_detail(frame, body, app.detail()),
    }
    frame.render_widget(Footer::new().widget(app, footer), footer);
}
