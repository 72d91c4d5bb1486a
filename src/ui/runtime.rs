use crate::api::PostsGateway;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Capacity of the UI → worker command queue.
const COMMAND_QUEUE: usize = 64;

pub struct RunOptions {
    pub tick_rate: Duration,
    pub notification_ticks: u32,
    pub initial_route: Route,
}

/// Drive the UI on the current thread; gateway calls run on `runtime`.
pub fn run(runtime: &Handle, gateway: Arc<dyn PostsGateway>, options: RunOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = options.tick_rate;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(worker::run(gateway, command_rx, events.sender()));

    let mut app = App::new(options.notification_ticks);
    app.set_command_sender(command_tx);
    app.navigate(options.initial_route);

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    tracing::info!("UI loop finished");
    drop(guard);
    Ok(())
}
