//! Terminal front end: routes, views and the state behind them.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod list_view;
pub mod mvi;
pub mod posts;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
pub mod worker;
