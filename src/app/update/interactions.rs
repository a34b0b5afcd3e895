use super::super::messages::{HoverTarget, PointerPhase};
use super::super::state::{
    App, BUTTON_HOVER_TRANSFORM, BUTTON_PRESS_TRANSFORM, BUTTON_REST_TRANSFORM,
    CARD_ICON_HOVER_TRANSFORM, CARD_ICON_REST_TRANSFORM, CARD_ICON_TRANSITION,
    SOCIAL_PULSE_ANIMATION, STYLE_RIPPLE,
};
use super::{Chain, Effect, RevealTarget, TimerTask, TransformTarget};
use tracing::trace;

impl App {
    pub(super) fn handle_pointer(
        &mut self,
        target: HoverTarget,
        phase: PointerPhase,
        effects: &mut Vec<Effect>,
    ) {
        match (target, phase) {
            (HoverTarget::Button(idx), phase) => {
                let transform = match phase {
                    PointerPhase::Enter | PointerPhase::Up => BUTTON_HOVER_TRANSFORM,
                    PointerPhase::Leave => BUTTON_REST_TRANSFORM,
                    PointerPhase::Down => BUTTON_PRESS_TRANSFORM,
                };
                effects.push(Effect::SetTransform {
                    target: TransformTarget::Button(idx),
                    transform,
                    transition: None,
                });
            }
            (HoverTarget::PortfolioCard(idx), PointerPhase::Enter) => {
                effects.push(Effect::SetTransform {
                    target: TransformTarget::CardIcon(idx),
                    transform: CARD_ICON_HOVER_TRANSFORM,
                    transition: Some(CARD_ICON_TRANSITION),
                });
            }
            (HoverTarget::PortfolioCard(idx), PointerPhase::Leave) => {
                effects.push(Effect::SetTransform {
                    target: TransformTarget::CardIcon(idx),
                    transform: CARD_ICON_REST_TRANSFORM,
                    transition: None,
                });
            }
            (HoverTarget::SocialLink(link), PointerPhase::Enter) => {
                effects.push(Effect::SetSocialAnimation {
                    link,
                    animation: Some(SOCIAL_PULSE_ANIMATION),
                });
            }
            (target, phase) => trace!(?target, ?phase, "No interaction bound"),
        }
    }

    pub(super) fn handle_social_pulse_ended(&mut self, link: usize, effects: &mut Vec<Effect>) {
        effects.push(Effect::SetSocialAnimation {
            link,
            animation: None,
        });
    }

    pub(super) fn handle_skill_tag_clicked(&mut self, tag: usize, size: f64, effects: &mut Vec<Effect>) {
        self.next_ripple += 1;
        let ripple = self.next_ripple;
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        effects.push(Effect::SpawnRipple { tag, ripple, size });
        let lifetime = self.config.ripple_lifetime();
        self.schedule(
            Chain::Ripple(ripple),
            lifetime,
            TimerTask::RemoveRipple(ripple),
            effects,
        );
        self.inject_style(STYLE_RIPPLE, effects);
    }

    /// First entry into the viewport reveals the element and staggers its
    /// animated children; later intersections are ignored.
    pub(super) fn handle_intersected(
        &mut self,
        element: usize,
        children: usize,
        effects: &mut Vec<Effect>,
    ) {
        if !self.reveal.mark(element) {
            return;
        }
        effects.push(Effect::Reveal(RevealTarget::Element(element)));
        for index in 0..children {
            let delay = self.config.reveal_child_delay(index);
            self.schedule(
                Chain::Reveal(element),
                delay,
                TimerTask::RevealChild {
                    parent: element,
                    index,
                },
                effects,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{
        App, Effect, HoverTarget, Message, PointerPhase, RevealTarget, TransformTarget,
    };
    use crate::config::PageConfig;
    use std::time::Duration;

    fn pointer(app: &mut App, target: HoverTarget, phase: PointerPhase) -> Vec<Effect> {
        app.update(Message::Pointer { target, phase })
    }

    #[test]
    fn button_press_cycle_matches_hover_states() {
        let mut app = App::new(PageConfig::default());
        let transforms: Vec<&str> = [
            PointerPhase::Enter,
            PointerPhase::Down,
            PointerPhase::Up,
            PointerPhase::Leave,
        ]
        .into_iter()
        .map(|phase| match pointer(&mut app, HoverTarget::Button(2), phase)[..] {
            [Effect::SetTransform {
                target: TransformTarget::Button(2),
                transform,
                ..
            }] => transform,
            ref other => panic!("unexpected effects {other:?}"),
        })
        .collect();
        assert_eq!(
            transforms,
            vec![
                "translateY(-2px) scale(1.02)",
                "translateY(0) scale(0.98)",
                "translateY(-2px) scale(1.02)",
                "translateY(0) scale(1)",
            ]
        );
    }

    #[test]
    fn card_hover_moves_icon_and_ignores_presses() {
        let mut app = App::new(PageConfig::default());
        let enter = pointer(&mut app, HoverTarget::PortfolioCard(0), PointerPhase::Enter);
        assert_eq!(
            enter,
            vec![Effect::SetTransform {
                target: TransformTarget::CardIcon(0),
                transform: "scale(1.2) rotateY(15deg)",
                transition: Some("transform 0.3s ease"),
            }]
        );
        assert!(pointer(&mut app, HoverTarget::PortfolioCard(0), PointerPhase::Down).is_empty());
    }

    #[test]
    fn social_pulse_is_set_then_cleared() {
        let mut app = App::new(PageConfig::default());
        let enter = pointer(&mut app, HoverTarget::SocialLink(1), PointerPhase::Enter);
        assert!(matches!(
            enter[..],
            [Effect::SetSocialAnimation {
                link: 1,
                animation: Some(_)
            }]
        ));
        assert_eq!(
            app.update(Message::SocialPulseEnded { link: 1 }),
            vec![Effect::SetSocialAnimation {
                link: 1,
                animation: None
            }]
        );
    }

    #[test]
    fn ripple_is_removed_after_its_lifetime_and_style_lands_once() {
        let mut app = App::new(PageConfig::default());
        let first = app.update(Message::SkillTagClicked { tag: 3, size: 42.0 });
        assert_eq!(
            first[0],
            Effect::SpawnRipple {
                tag: 3,
                ripple: 1,
                size: 42.0
            }
        );
        let Effect::StartTimer { id, delay } = first[1] else {
            panic!("expected ripple timer");
        };
        assert_eq!(delay, Duration::from_millis(600));
        assert!(first.iter().any(|effect| matches!(
            effect,
            Effect::InjectStyle {
                id: "ripple-style",
                ..
            }
        )));

        let second = app.update(Message::SkillTagClicked { tag: 3, size: 42.0 });
        assert!(
            !second
                .iter()
                .any(|effect| matches!(effect, Effect::InjectStyle { .. }))
        );

        assert_eq!(
            app.update(Message::TimerFired(id)),
            vec![Effect::RemoveRipple { ripple: 1 }]
        );
    }

    #[test]
    fn reveal_is_one_shot_with_staggered_children() {
        let mut app = App::new(PageConfig::default());
        let effects = app.update(Message::Intersected {
            element: 5,
            children: 3,
        });
        assert_eq!(effects[0], Effect::Reveal(RevealTarget::Element(5)));
        let delays: Vec<u128> = effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::StartTimer { delay, .. } => Some(delay.as_millis()),
                _ => None,
            })
            .collect();
        assert_eq!(delays, vec![0, 100, 200]);

        let Effect::StartTimer { id, .. } = effects[2] else {
            panic!("expected child timer");
        };
        assert_eq!(
            app.update(Message::TimerFired(id)),
            vec![Effect::Reveal(RevealTarget::Child {
                parent: 5,
                index: 1
            })]
        );

        assert!(
            app.update(Message::Intersected {
                element: 5,
                children: 3,
            })
            .is_empty()
        );
    }
}
