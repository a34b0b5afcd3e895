use super::super::super::state::{App, STYLE_BLINK};
use super::super::{Chain, Effect, RevealTarget, TimerTask};
use crate::scheduler::TaskId;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_timer_fired(&mut self, id: TaskId, effects: &mut Vec<Effect>) {
        let Some((_, task)) = self.timers.fire(id) else {
            trace!(%id, "Ignoring expiry of a cancelled timer");
            return;
        };

        match task {
            TimerTask::TypeNextChar => self.type_next_char(effects),
            TimerTask::HeroFadeIn => effects.push(Effect::HeroIntro { visible: true }),
            TimerTask::AcknowledgeContact => self.acknowledge_contact(effects),
            TimerTask::ToastSlideIn(toast) => effects.push(Effect::SlideToast {
                toast,
                visible: true,
            }),
            TimerTask::ToastSlideOut(toast) => {
                effects.push(Effect::SlideToast {
                    toast,
                    visible: false,
                });
                let delay = self.config.toast_slide_out();
                self.schedule(
                    Chain::Toast(toast),
                    delay,
                    TimerTask::ToastRemove(toast),
                    effects,
                );
            }
            TimerTask::ToastRemove(toast) => effects.push(Effect::RemoveToast { toast }),
            TimerTask::RemoveRipple(ripple) => effects.push(Effect::RemoveRipple { ripple }),
            TimerTask::RevealChild { parent, index } => {
                effects.push(Effect::Reveal(RevealTarget::Child { parent, index }))
            }
        }
    }

    fn type_next_char(&mut self, effects: &mut Vec<Effect>) {
        match self.typewriter.advance() {
            Some(visible) => {
                effects.push(Effect::SetSubtitleText(visible));
                let delay = self.config.typewriter_char_interval();
                self.schedule(Chain::Typewriter, delay, TimerTask::TypeNextChar, effects);
            }
            None if !self.typewriter.finished => {
                self.typewriter.finished = true;
                debug!(chars = self.typewriter.text.len(), "Typewriter finished");
                effects.push(Effect::ShowTypewriterCursor);
                self.inject_style(STYLE_BLINK, effects);
            }
            None => {}
        }
    }
}
