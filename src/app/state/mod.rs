mod constants;
mod modal;
mod nav;
mod ui;

use super::update::{Chain, TimerTask};
use crate::config::PageConfig;
use crate::scheduler::Scheduler;
use crate::throttle::Throttle;
use std::collections::HashSet;

pub(crate) use constants::*;
pub use modal::ModalState;
pub use nav::{NavEntry, Section, current_section};
pub(in crate::app) use nav::NavState;
pub use ui::NavbarStyle;
pub(in crate::app) use ui::{FormState, MenuState, RevealState, TypewriterState};

/// Interaction state of the page, composed of sub-models.
pub struct App {
    pub(super) config: PageConfig,
    pub(super) nav: NavState,
    pub(super) scroll_throttle: Throttle,
    pub(super) navbar: NavbarStyle,
    pub(super) modal: ModalState,
    pub(super) menu: MenuState,
    pub(super) body_scroll_locked: bool,
    pub(super) keyboard_mode: bool,
    pub(super) form: FormState,
    pub(super) typewriter: TypewriterState,
    pub(super) reveal: RevealState,
    pub(super) injected_styles: HashSet<&'static str>,
    pub(super) next_toast: u64,
    pub(super) next_ripple: u64,
    pub(super) timers: Scheduler<Chain, TimerTask>,
}

impl App {
    pub fn new(config: PageConfig) -> Self {
        let scroll_throttle = Throttle::new(config.throttle_window());
        Self {
            config,
            nav: NavState::default(),
            scroll_throttle,
            navbar: NavbarStyle::default(),
            modal: ModalState::Hidden,
            menu: MenuState { open: false },
            body_scroll_locked: false,
            keyboard_mode: false,
            form: FormState {
                pending_label: None,
            },
            typewriter: TypewriterState::new(),
            reveal: RevealState {
                revealed: Vec::new(),
            },
            injected_styles: HashSet::new(),
            next_toast: 0,
            next_ripple: 0,
            timers: Scheduler::new(),
        }
    }

    pub fn nav_entries(&self) -> &[NavEntry] {
        &self.nav.entries
    }

    /// Section id of the highlighted navigation entry.
    pub fn active_nav(&self) -> Option<&str> {
        self.nav.active()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn menu_open(&self) -> bool {
        self.menu.open
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.body_scroll_locked
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
