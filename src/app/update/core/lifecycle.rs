use super::super::super::messages::PageOutline;
use super::super::super::state::{
    App, NavState, STYLE_FOCUS, STYLE_SCROLL_ANIMATIONS, STYLE_SOCIAL_PULSE,
};
use super::super::{Chain, Effect, TimerTask};
use tracing::info;

impl App {
    pub(super) fn handle_ready(&mut self, outline: PageOutline, effects: &mut Vec<Effect>) {
        info!(
            nav_links = outline.nav_links.len(),
            animated = outline.animated_elements,
            subtitle = outline.subtitle.is_some(),
            "Page ready; wiring interactions"
        );

        self.nav = NavState::from_links(&outline.nav_links);
        self.reveal.revealed = vec![false; outline.animated_elements];

        self.inject_style(STYLE_SCROLL_ANIMATIONS, effects);
        self.inject_style(STYLE_SOCIAL_PULSE, effects);
        self.inject_style(STYLE_FOCUS, effects);
        effects.push(Effect::PrepareReveal);

        if let Some(subtitle) = outline.subtitle {
            if self.config.typewriter_enabled {
                self.start_typewriter(&subtitle, effects);
            }
        }

        if outline.loaded {
            self.handle_window_loaded(effects);
        }
    }

    pub(super) fn handle_window_loaded(&mut self, effects: &mut Vec<Effect>) {
        self.cancel_chain(Chain::HeroIntro, effects);
        effects.push(Effect::HeroIntro { visible: false });
        let delay = self.config.hero_fade_delay();
        self.schedule(Chain::HeroIntro, delay, TimerTask::HeroFadeIn, effects);
    }

    /// Clear the subtitle and begin revealing `text` after the start delay.
    /// A previous run still in flight is cancelled first.
    pub(in crate::app) fn start_typewriter(&mut self, text: &str, effects: &mut Vec<Effect>) {
        self.cancel_chain(Chain::Typewriter, effects);
        self.typewriter.restart(text);
        effects.push(Effect::SetSubtitleText(String::new()));
        let delay = self.config.typewriter_start_delay();
        self.schedule(Chain::Typewriter, delay, TimerTask::TypeNextChar, effects);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Effect, Message, PageOutline};
    use crate::config::PageConfig;
    use std::time::Duration;

    fn outline() -> PageOutline {
        PageOutline {
            nav_links: vec!["#home".into(), "#about".into(), "#blog".into()],
            subtitle: Some("Biotech".into()),
            animated_elements: 4,
            loaded: false,
        }
    }

    #[test]
    fn ready_injects_styles_once_and_starts_typewriter() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::Ready(outline()));

        let styles = effects
            .iter()
            .filter(|effect| matches!(effect, Effect::InjectStyle { .. }))
            .count();
        assert_eq!(styles, 3);
        assert!(effects.contains(&Effect::PrepareReveal));
        assert!(effects.contains(&Effect::SetSubtitleText(String::new())));
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::StartTimer { delay, .. } if *delay == Duration::from_millis(1000)
        )));
        assert_eq!(app.nav_entries().len(), 3);

        let again = app.update(Message::Ready(outline()));
        assert!(
            !again
                .iter()
                .any(|effect| matches!(effect, Effect::InjectStyle { .. }))
        );
        assert!(
            again
                .iter()
                .any(|effect| matches!(effect, Effect::ClearTimer { .. })),
            "restarting the typewriter cancels the previous chain"
        );
    }

    #[test]
    fn disabled_typewriter_leaves_subtitle_alone() {
        let mut config = PageConfig::default();
        config.typewriter_enabled = false;
        let mut app = App::new(config);
        let effects = app.update(Message::Ready(outline()));
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::SetSubtitleText(_)))
        );
        assert_eq!(app.pending_timers(), 0);
    }

    #[test]
    fn ready_after_window_load_still_runs_hero_intro() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::Ready(PageOutline {
            loaded: true,
            ..outline()
        }));
        assert!(effects.contains(&Effect::HeroIntro { visible: false }));
        let hero_timer = effects.iter().find_map(|effect| match effect {
            Effect::StartTimer { id, delay } if *delay == Duration::from_millis(500) => Some(*id),
            _ => None,
        });
        let id = hero_timer.expect("hero fade timer");
        assert_eq!(
            app.update(Message::TimerFired(id)),
            vec![Effect::HeroIntro { visible: true }]
        );
    }

    #[test]
    fn ready_before_window_load_waits_for_it() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::Ready(outline()));
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::HeroIntro { .. }))
        );
    }

    #[test]
    fn window_load_hides_hero_then_schedules_fade() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::WindowLoaded);
        assert_eq!(effects[0], Effect::HeroIntro { visible: false });
        let Effect::StartTimer { id, delay } = effects[1] else {
            panic!("expected hero timer, got {:?}", effects[1]);
        };
        assert_eq!(delay, Duration::from_millis(500));

        let fired = app.update(Message::TimerFired(id));
        assert_eq!(fired, vec![Effect::HeroIntro { visible: true }]);
    }
}
