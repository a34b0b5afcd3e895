use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::{error, info};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Ready(outline) => self.handle_ready(outline, &mut effects),
            Message::WindowLoaded => self.handle_window_loaded(&mut effects),
            Message::Scrolled { offset, at } => self.handle_scrolled(offset, at, &mut effects),
            Message::SectionsMeasured { offset, sections } => {
                self.handle_sections_measured(offset, &sections, &mut effects)
            }
            Message::HamburgerClicked => self.handle_hamburger_clicked(&mut effects),
            Message::NavLinkClicked { href } => self.handle_nav_link_clicked(&href, &mut effects),
            Message::CardClicked { content_id } => {
                self.handle_open_content(&content_id, &mut effects)
            }
            Message::DocumentClicked(target) => self.handle_document_clicked(target, &mut effects),
            Message::KeyPressed(key) => self.handle_key_pressed(key, &mut effects),
            Message::MouseDown => self.handle_mouse_down(&mut effects),
            Message::Pointer { target, phase } => {
                self.handle_pointer(target, phase, &mut effects)
            }
            Message::SocialPulseEnded { link } => {
                self.handle_social_pulse_ended(link, &mut effects)
            }
            Message::SkillTagClicked { tag, size } => {
                self.handle_skill_tag_clicked(tag, size, &mut effects)
            }
            Message::Intersected { element, children } => {
                self.handle_intersected(element, children, &mut effects)
            }
            Message::FormSubmitted { submit_label } => {
                self.handle_form_submitted(submit_label, &mut effects)
            }
            Message::FieldBlurred(snapshot) => self.handle_field_blurred(&snapshot, &mut effects),
            Message::FieldFocused { field } => self.handle_field_focused(field, &mut effects),
            Message::TimerFired(id) => self.handle_timer_fired(id, &mut effects),
            Message::ScriptError { message } => {
                error!(%message, "Uncaught script error");
            }
            Message::Teardown => {
                let cleared = self.timers.cancel_all();
                info!(pending = cleared.len(), "Page teardown; dropping timers");
                effects.extend(cleared.into_iter().map(|id| Effect::ClearTimer { id }));
            }
        }

        effects
    }
}
