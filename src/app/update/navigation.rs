use super::super::state::App;
use super::Effect;
use tracing::debug;

impl App {
    pub(super) fn handle_hamburger_clicked(&mut self, effects: &mut Vec<Effect>) {
        self.menu.open = !self.menu.open;
        debug!(open = self.menu.open, "Toggled mobile menu");
        effects.push(Effect::SetMenuOpen(self.menu.open));
        self.sync_scroll_lock(effects);
    }

    pub(in crate::app) fn close_menu(&mut self, effects: &mut Vec<Effect>) {
        if !self.menu.open {
            return;
        }
        self.menu.open = false;
        effects.push(Effect::SetMenuOpen(false));
        self.sync_scroll_lock(effects);
    }

    /// Nav links close the mobile menu and smooth-scroll to their anchor.
    pub(super) fn handle_nav_link_clicked(&mut self, href: &str, effects: &mut Vec<Effect>) {
        self.close_menu(effects);

        let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            debug!(href, "Nav link does not point at an in-page section");
            return;
        };
        effects.push(Effect::ScrollToSection {
            id: id.to_string(),
            margin: self.config.nav_scroll_margin_px,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Effect, Message};
    use crate::config::PageConfig;

    #[test]
    fn hamburger_toggles_menu_and_scroll_lock() {
        let mut app = App::new(PageConfig::default());
        assert_eq!(
            app.update(Message::HamburgerClicked),
            vec![Effect::SetMenuOpen(true), Effect::LockBodyScroll(true)]
        );
        assert_eq!(
            app.update(Message::HamburgerClicked),
            vec![Effect::SetMenuOpen(false), Effect::LockBodyScroll(false)]
        );
    }

    #[test]
    fn nav_click_closes_menu_and_scrolls_with_margin() {
        let mut app = App::new(PageConfig::default());
        app.update(Message::HamburgerClicked);
        let effects = app.update(Message::NavLinkClicked {
            href: "#portfolio".to_string(),
        });
        assert_eq!(
            effects,
            vec![
                Effect::SetMenuOpen(false),
                Effect::LockBodyScroll(false),
                Effect::ScrollToSection {
                    id: "portfolio".to_string(),
                    margin: 70.0,
                },
            ]
        );
    }

    #[test]
    fn external_links_do_not_scroll() {
        let mut app = App::new(PageConfig::default());
        assert!(
            app.update(Message::NavLinkClicked {
                href: "https://example.org".to_string(),
            })
            .is_empty()
        );
        assert!(
            app.update(Message::NavLinkClicked {
                href: "#".to_string(),
            })
            .is_empty()
        );
    }
}
