/// Inline-style values for hover/press interactions.
pub(crate) const BUTTON_HOVER_TRANSFORM: &str = "translateY(-2px) scale(1.02)";
pub(crate) const BUTTON_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub(crate) const BUTTON_PRESS_TRANSFORM: &str = "translateY(0) scale(0.98)";
pub(crate) const CARD_ICON_HOVER_TRANSFORM: &str = "scale(1.2) rotateY(15deg)";
pub(crate) const CARD_ICON_REST_TRANSFORM: &str = "scale(1) rotateY(0deg)";
pub(crate) const CARD_ICON_TRANSITION: &str = "transform 0.3s ease";
pub(crate) const SOCIAL_PULSE_ANIMATION: &str = "socialPulse 0.6s ease-in-out";

pub(crate) const NOTIFICATION_SUCCESS_COLOR: &str = "#4CAF50";
pub(crate) const NOTIFICATION_ERROR_COLOR: &str = "#f44336";
pub(crate) const NOTIFICATION_INFO_COLOR: &str = "#2196F3";

/// Injected `<style>` blocks, keyed by element id so each lands once.
pub(crate) const STYLE_SCROLL_ANIMATIONS: (&str, &str) = (
    "folio-scroll-animations",
    r#"
.animate-element {
    opacity: 0;
    transform: translateY(30px);
    transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1);
}
.animate-element.animate-in {
    opacity: 1;
    transform: translateY(0);
}
.animate-child {
    opacity: 0;
    transform: translateY(20px);
    transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
}
.animate-child.animate-in {
    opacity: 1;
    transform: translateY(0);
}
.nav-link.active {
    color: var(--subtle-gold);
}
.nav-link.active::after {
    width: 100%;
}
"#,
);

pub(crate) const STYLE_SOCIAL_PULSE: (&str, &str) = (
    "folio-social-pulse",
    r#"
@keyframes socialPulse {
    0% { transform: scale(1) translateY(0); }
    50% { transform: scale(1.1) translateY(-3px); }
    100% { transform: scale(1) translateY(-3px); }
}
"#,
);

pub(crate) const STYLE_FOCUS: (&str, &str) = (
    "folio-focus",
    r#"
.using-keyboard .btn:focus,
.using-keyboard .nav-link:focus,
.using-keyboard .social-link:focus {
    outline: 2px solid var(--subtle-gold);
    outline-offset: 3px;
}
.form-group.error input,
.form-group.error textarea {
    border-color: #ff4444;
    box-shadow: 0 0 0 3px rgba(255, 68, 68, 0.1);
}
"#,
);

pub(crate) const STYLE_RIPPLE: (&str, &str) = (
    "ripple-style",
    r#"
@keyframes ripple {
    to {
        transform: translate(-50%, -50%) scale(2);
        opacity: 0;
    }
}
"#,
);

pub(crate) const STYLE_BLINK: (&str, &str) = (
    "blink-style",
    r#"
@keyframes blink {
    0%, 50% { opacity: 1; }
    51%, 100% { opacity: 0; }
}
"#,
);
