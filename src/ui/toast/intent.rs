use crate::ui::mvi::Intent;
use crate::ui::toast::state::ToastKind;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Replace whatever is showing.
    Show {
        message: String,
        kind: ToastKind,
        ticks: u32,
    },
    Tick,
}

impl Intent for ToastIntent {}
