use super::super::state::App;
use super::{Chain, Effect, TimerTask, ToastKind};
use crate::validation::{FieldSnapshot, validate_field};
use tracing::{debug, info};

impl App {
    /// The contact form never leaves the page: submission is acknowledged
    /// after a fixed delay.
    pub(super) fn handle_form_submitted(&mut self, submit_label: String, effects: &mut Vec<Effect>) {
        if self.form.pending_label.is_some() {
            debug!("Contact form already sending; ignoring resubmit");
            return;
        }
        info!("Contact form submitted");
        self.form.pending_label = Some(submit_label);
        effects.push(Effect::SetSubmitButton {
            label: self.config.sending_label.clone(),
            disabled: true,
        });
        let delay = self.config.contact_send_delay();
        self.schedule(
            Chain::ContactForm,
            delay,
            TimerTask::AcknowledgeContact,
            effects,
        );
    }

    pub(in crate::app) fn acknowledge_contact(&mut self, effects: &mut Vec<Effect>) {
        let Some(label) = self.form.pending_label.take() else {
            return;
        };
        let message = self.config.success_message.clone();
        self.show_toast(message, ToastKind::Success, effects);
        effects.push(Effect::ResetForm);
        effects.push(Effect::SetSubmitButton {
            label,
            disabled: false,
        });
    }

    pub(super) fn handle_field_blurred(&mut self, snapshot: &FieldSnapshot, effects: &mut Vec<Effect>) {
        let valid = validate_field(snapshot);
        if !valid {
            debug!(field = snapshot.field, "Form field failed validation");
        }
        effects.push(Effect::SetFieldError {
            field: snapshot.field,
            error: !valid,
        });
    }

    pub(super) fn handle_field_focused(&mut self, field: usize, effects: &mut Vec<Effect>) {
        effects.push(Effect::SetFieldError {
            field,
            error: false,
        });
    }

    /// Append a toast off-screen, slide it in, and retire it after its
    /// visible period.
    pub(in crate::app) fn show_toast(
        &mut self,
        message: String,
        kind: ToastKind,
        effects: &mut Vec<Effect>,
    ) {
        self.next_toast += 1;
        let toast = self.next_toast;
        effects.push(Effect::ShowToast {
            toast,
            message,
            kind,
        });
        let slide_in = self.config.toast_slide_in_delay();
        let visible = self.config.toast_visible();
        self.schedule(
            Chain::Toast(toast),
            slide_in,
            TimerTask::ToastSlideIn(toast),
            effects,
        );
        self.schedule(
            Chain::Toast(toast),
            visible,
            TimerTask::ToastSlideOut(toast),
            effects,
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Effect, Message, ToastKind};
    use crate::config::PageConfig;
    use crate::scheduler::TaskId;
    use crate::validation::{FieldKind, FieldSnapshot};
    use std::time::Duration;

    fn timers(effects: &[Effect]) -> Vec<(TaskId, Duration)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::StartTimer { id, delay } => Some((*id, *delay)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn submit_shows_pending_then_acknowledges() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::FormSubmitted {
            submit_label: "Send Message".to_string(),
        });
        assert_eq!(
            effects[0],
            Effect::SetSubmitButton {
                label: "Sending...".to_string(),
                disabled: true,
            }
        );
        let &[(ack, delay)] = timers(&effects).as_slice() else {
            panic!("expected exactly one timer");
        };
        assert_eq!(delay, Duration::from_millis(2000));

        let done = app.update(Message::TimerFired(ack));
        assert!(done.iter().any(|effect| matches!(
            effect,
            Effect::ShowToast { kind: ToastKind::Success, message, .. }
                if message == "Message sent successfully! I'll get back to you soon."
        )));
        assert!(done.contains(&Effect::ResetForm));
        assert!(done.contains(&Effect::SetSubmitButton {
            label: "Send Message".to_string(),
            disabled: false,
        }));
    }

    #[test]
    fn resubmitting_while_pending_is_ignored() {
        let mut app = App::new(PageConfig::default());
        app.update(Message::FormSubmitted {
            submit_label: "Send".to_string(),
        });
        assert!(
            app.update(Message::FormSubmitted {
                submit_label: "Sending...".to_string(),
            })
            .is_empty()
        );
    }

    #[test]
    fn toast_slides_in_out_and_is_removed() {
        let mut app = App::new(PageConfig::default());
        let mut effects = Vec::new();
        app.show_toast("hello".to_string(), ToastKind::Info, &mut effects);
        assert!(matches!(effects[0], Effect::ShowToast { toast: 1, .. }));

        let scheduled = timers(&effects);
        assert_eq!(
            scheduled.iter().map(|(_, d)| d.as_millis()).collect::<Vec<_>>(),
            vec![100, 4000]
        );

        let slide_in = app.update(Message::TimerFired(scheduled[0].0));
        assert_eq!(
            slide_in,
            vec![Effect::SlideToast {
                toast: 1,
                visible: true
            }]
        );

        let slide_out = app.update(Message::TimerFired(scheduled[1].0));
        assert_eq!(
            slide_out[0],
            Effect::SlideToast {
                toast: 1,
                visible: false
            }
        );
        let &[(remove, delay)] = timers(&slide_out).as_slice() else {
            panic!("expected removal timer");
        };
        assert_eq!(delay, Duration::from_millis(300));
        assert_eq!(
            app.update(Message::TimerFired(remove)),
            vec![Effect::RemoveToast { toast: 1 }]
        );
        assert_eq!(app.pending_timers(), 0);
    }

    #[test]
    fn blur_flags_invalid_email_and_focus_clears_it() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::FieldBlurred(FieldSnapshot {
            field: 1,
            kind: FieldKind::Email,
            required: true,
            value: "not-an-email".to_string(),
        }));
        assert_eq!(effects, vec![Effect::SetFieldError { field: 1, error: true }]);
        assert_eq!(
            app.update(Message::FieldFocused { field: 1 }),
            vec![Effect::SetFieldError {
                field: 1,
                error: false
            }]
        );
    }
}
