use std::sync::Mutex;

use crate::disclaimer;

pub struct DesktopState {
    /// Loaded once at startup; only ever flips false → true.
    pub disclaimer_accepted: Mutex<bool>,
}

impl DesktopState {
    pub fn load() -> Self {
        Self {
            disclaimer_accepted: Mutex::new(disclaimer::load_accepted()),
        }
    }
}
