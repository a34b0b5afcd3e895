use super::super::state::{App, NavbarStyle, Section, current_section};
use super::Effect;
use std::time::Duration;
use tracing::debug;

impl App {
    /// Every scroll restyles the navbar and moves the parallax layers; the
    /// section highlight is recomputed at most once per throttle window.
    pub(super) fn handle_scrolled(&mut self, offset: f64, at: Duration, effects: &mut Vec<Effect>) {
        let offset = Self::sanitize_offset(offset);

        let navbar = if offset > self.config.navbar_solid_after_px {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Translucent
        };
        if navbar != self.navbar {
            self.navbar = navbar;
            effects.push(Effect::StyleNavbar(navbar));
        }

        if self.config.parallax_enabled {
            effects.push(Effect::Parallax {
                photo_offset: -(offset * self.config.parallax_photo_speed),
                hero_offset: offset * self.config.parallax_hero_speed,
            });
        }

        if self.scroll_throttle.try_acquire(at) {
            effects.push(Effect::MeasureSections { offset });
        }
    }

    pub(super) fn handle_sections_measured(
        &mut self,
        offset: f64,
        sections: &[Section],
        effects: &mut Vec<Effect>,
    ) {
        let offset = Self::sanitize_offset(offset);
        let current = current_section(sections, offset, self.config.section_lookahead_px);
        if self.nav.apply(current) {
            debug!(offset, section = ?current, "Active section changed");
            effects.push(Effect::HighlightNav {
                active: self.nav.active().map(str::to_string),
            });
        }
    }

    fn sanitize_offset(offset: f64) -> f64 {
        if offset.is_finite() { offset } else { 0.0 }
    }
}
