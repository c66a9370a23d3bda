use crate::domain::game::GameSession;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub session: RwSignal<Option<GameSession>>,
    pub status: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        session: create_rw_signal(None),
        status: create_rw_signal(String::new()),
    })
}

crate::global_signals! {
    pub session_signal => session: Option<GameSession>,
    pub status_signal => status: String,
}
