pub(crate) fn default_throttle_ms() -> u64 {
    100
}

pub(crate) fn default_section_lookahead_px() -> f64 {
    100.0
}

pub(crate) fn default_navbar_solid_after_px() -> f64 {
    100.0
}

pub(crate) fn default_nav_scroll_margin_px() -> f64 {
    70.0
}

pub(crate) fn default_parallax_enabled() -> bool {
    true
}

pub(crate) fn default_parallax_photo_speed() -> f64 {
    0.5
}

pub(crate) fn default_parallax_hero_speed() -> f64 {
    0.3
}

pub(crate) fn default_typewriter_enabled() -> bool {
    true
}

pub(crate) fn default_typewriter_start_delay_ms() -> u64 {
    1000
}

pub(crate) fn default_typewriter_char_interval_ms() -> u64 {
    50
}

pub(crate) fn default_reveal_child_stagger_ms() -> u64 {
    100
}

pub(crate) fn default_hero_fade_delay_ms() -> u64 {
    500
}

pub(crate) fn default_contact_send_ms() -> u64 {
    2000
}

pub(crate) fn default_sending_label() -> String {
    "Sending...".to_string()
}

pub(crate) fn default_success_message() -> String {
    "Message sent successfully! I'll get back to you soon.".to_string()
}

pub(crate) fn default_toast_slide_in_delay_ms() -> u64 {
    100
}

pub(crate) fn default_toast_visible_ms() -> u64 {
    4000
}

pub(crate) fn default_toast_slide_out_ms() -> u64 {
    300
}

pub(crate) fn default_ripple_ms() -> u64 {
    600
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
