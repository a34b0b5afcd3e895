use super::super::super::messages::Key;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub(super) fn handle_key_pressed(&mut self, key: Key, effects: &mut Vec<Effect>) {
        match key {
            Key::Escape => {
                if self.menu.open {
                    debug!("Escape closes mobile menu");
                    self.close_menu(effects);
                }
                if self.modal.is_shown() {
                    debug!("Escape closes content modal");
                    self.handle_close_content(effects);
                }
            }
            Key::Tab => {
                if !self.keyboard_mode {
                    self.keyboard_mode = true;
                    effects.push(Effect::SetKeyboardMode(true));
                }
            }
            Key::Other(_) => {}
        }
    }

    pub(super) fn handle_mouse_down(&mut self, effects: &mut Vec<Effect>) {
        if self.keyboard_mode {
            self.keyboard_mode = false;
            effects.push(Effect::SetKeyboardMode(false));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Effect, Key, Message};
    use crate::config::PageConfig;

    #[test]
    fn tab_enables_keyboard_mode_once() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::KeyPressed(Key::Tab));
        assert_eq!(effects, vec![Effect::SetKeyboardMode(true)]);
        assert!(app.update(Message::KeyPressed(Key::Tab)).is_empty());
    }

    #[test]
    fn mouse_down_leaves_keyboard_mode() {
        let mut app = App::new(PageConfig::default());
        assert!(app.update(Message::MouseDown).is_empty());
        app.update(Message::KeyPressed(Key::Tab));
        assert_eq!(
            app.update(Message::MouseDown),
            vec![Effect::SetKeyboardMode(false)]
        );
    }

    #[test]
    fn escape_closes_menu_and_modal_together() {
        let mut app = App::new(PageConfig::default());
        app.update(Message::HamburgerClicked);
        app.update(Message::CardClicked {
            content_id: "crispr".to_string(),
        });
        assert!(app.body_scroll_locked());

        let effects = app.update(Message::KeyPressed(Key::Escape));
        assert!(!app.menu_open());
        assert!(!app.modal().is_shown());
        assert!(!app.body_scroll_locked());
        assert!(effects.contains(&Effect::SetMenuOpen(false)));
        assert!(effects.contains(&Effect::HideModal));
        assert!(effects.contains(&Effect::LockBodyScroll(false)));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = App::new(PageConfig::default());
        assert!(
            app.update(Message::KeyPressed(Key::from_dom("Enter")))
                .is_empty()
        );
    }
}
