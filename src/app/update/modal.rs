use super::super::messages::ClickTarget;
use super::super::state::{App, ModalState};
use super::Effect;
use crate::content::{lookup, render_modal_body};
use tracing::{debug, info};

impl App {
    /// Show the blog entry `id` in the overlay. Unknown ids are ignored.
    pub fn open_content(&mut self, id: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.handle_open_content(id, &mut effects);
        effects
    }

    /// Hide the overlay if it is shown.
    pub fn close_content(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.handle_close_content(&mut effects);
        effects
    }

    pub(super) fn handle_open_content(&mut self, id: &str, effects: &mut Vec<Effect>) {
        let Some(entry) = lookup(id) else {
            debug!(id, "No blog entry for content id");
            return;
        };

        info!(id, title = %entry.title, "Opening content modal");
        effects.push(Effect::ShowModal {
            body_html: render_modal_body(entry),
        });
        self.modal = ModalState::Shown { id: id.to_string() };
        self.sync_scroll_lock(effects);
    }

    pub(super) fn handle_close_content(&mut self, effects: &mut Vec<Effect>) {
        if !self.modal.is_shown() {
            return;
        }
        debug!(id = ?self.modal.content_id(), "Closing content modal");
        self.modal = ModalState::Hidden;
        effects.push(Effect::HideModal);
        self.sync_scroll_lock(effects);
    }

    pub(super) fn handle_document_clicked(&mut self, target: ClickTarget, effects: &mut Vec<Effect>) {
        match target {
            ClickTarget::CloseControl | ClickTarget::OverlayBackground => {
                self.handle_close_content(effects)
            }
            ClickTarget::Elsewhere => {}
        }
    }
}
