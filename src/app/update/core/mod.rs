mod lifecycle;
mod reducer;
mod shortcuts;
mod timers;

use super::super::messages::Message;
use super::super::state::App;
use super::{Chain, Effect, TimerTask};
use std::time::Duration;
use tracing::trace;

impl App {
    /// Apply one input event and return the DOM work it requires.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let effects = self.reduce(message);
        if !effects.is_empty() {
            trace!(count = effects.len(), "Reducer produced effects");
        }
        effects
    }

    pub(in crate::app) fn schedule(
        &mut self,
        chain: Chain,
        delay: Duration,
        task: TimerTask,
        effects: &mut Vec<Effect>,
    ) {
        let scheduled = self.timers.schedule(chain, delay, task);
        effects.push(Effect::StartTimer {
            id: scheduled.id,
            delay: scheduled.delay,
        });
    }

    pub(in crate::app) fn cancel_chain(&mut self, chain: Chain, effects: &mut Vec<Effect>) {
        effects.extend(
            self.timers
                .cancel_chain(chain)
                .into_iter()
                .map(|id| Effect::ClearTimer { id }),
        );
    }

    pub(in crate::app) fn inject_style(
        &mut self,
        (id, css): (&'static str, &'static str),
        effects: &mut Vec<Effect>,
    ) {
        if self.injected_styles.insert(id) {
            effects.push(Effect::InjectStyle { id, css });
        }
    }

    /// Background scroll is held by the open menu or the shown modal.
    pub(in crate::app) fn sync_scroll_lock(&mut self, effects: &mut Vec<Effect>) {
        let locked = self.menu.open || self.modal.is_shown();
        if locked != self.body_scroll_locked {
            self.body_scroll_locked = locked;
            effects.push(Effect::LockBodyScroll(locked));
        }
    }
}
