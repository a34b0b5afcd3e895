use super::defaults;
use super::models::{LogLevel, PageConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    scroll: ScrollConfig,
    #[serde(default)]
    parallax: ParallaxConfig,
    #[serde(default)]
    typewriter: TypewriterConfig,
    #[serde(default)]
    reveal: RevealConfig,
    #[serde(default)]
    contact: ContactConfig,
    #[serde(default)]
    toast: ToastConfig,
    #[serde(default)]
    effects: EffectsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for PageConfig {
    fn from(tables: ConfigTables) -> Self {
        PageConfig {
            throttle_ms: tables.scroll.throttle_ms,
            section_lookahead_px: tables.scroll.section_lookahead_px,
            navbar_solid_after_px: tables.scroll.navbar_solid_after_px,
            nav_scroll_margin_px: tables.scroll.nav_scroll_margin_px,
            parallax_enabled: tables.parallax.enabled,
            parallax_photo_speed: tables.parallax.photo_speed,
            parallax_hero_speed: tables.parallax.hero_speed,
            typewriter_enabled: tables.typewriter.enabled,
            typewriter_start_delay_ms: tables.typewriter.start_delay_ms,
            typewriter_char_interval_ms: tables.typewriter.char_interval_ms,
            reveal_child_stagger_ms: tables.reveal.child_stagger_ms,
            hero_fade_delay_ms: tables.reveal.hero_fade_delay_ms,
            contact_send_ms: tables.contact.simulated_send_ms,
            sending_label: tables.contact.sending_label,
            success_message: tables.contact.success_message,
            toast_slide_in_delay_ms: tables.toast.slide_in_delay_ms,
            toast_visible_ms: tables.toast.visible_ms,
            toast_slide_out_ms: tables.toast.slide_out_ms,
            ripple_ms: tables.effects.ripple_ms,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&PageConfig> for ConfigTables {
    fn from(config: &PageConfig) -> Self {
        ConfigTables {
            scroll: ScrollConfig {
                throttle_ms: config.throttle_ms,
                section_lookahead_px: config.section_lookahead_px,
                navbar_solid_after_px: config.navbar_solid_after_px,
                nav_scroll_margin_px: config.nav_scroll_margin_px,
            },
            parallax: ParallaxConfig {
                enabled: config.parallax_enabled,
                photo_speed: config.parallax_photo_speed,
                hero_speed: config.parallax_hero_speed,
            },
            typewriter: TypewriterConfig {
                enabled: config.typewriter_enabled,
                start_delay_ms: config.typewriter_start_delay_ms,
                char_interval_ms: config.typewriter_char_interval_ms,
            },
            reveal: RevealConfig {
                child_stagger_ms: config.reveal_child_stagger_ms,
                hero_fade_delay_ms: config.hero_fade_delay_ms,
            },
            contact: ContactConfig {
                simulated_send_ms: config.contact_send_ms,
                sending_label: config.sending_label.clone(),
                success_message: config.success_message.clone(),
            },
            toast: ToastConfig {
                slide_in_delay_ms: config.toast_slide_in_delay_ms,
                visible_ms: config.toast_visible_ms,
                slide_out_ms: config.toast_slide_out_ms,
            },
            effects: EffectsConfig {
                ripple_ms: config.ripple_ms,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrollConfig {
    #[serde(default = "defaults::default_throttle_ms")]
    throttle_ms: u64,
    #[serde(default = "defaults::default_section_lookahead_px")]
    section_lookahead_px: f64,
    #[serde(default = "defaults::default_navbar_solid_after_px")]
    navbar_solid_after_px: f64,
    #[serde(default = "defaults::default_nav_scroll_margin_px")]
    nav_scroll_margin_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            throttle_ms: defaults::default_throttle_ms(),
            section_lookahead_px: defaults::default_section_lookahead_px(),
            navbar_solid_after_px: defaults::default_navbar_solid_after_px(),
            nav_scroll_margin_px: defaults::default_nav_scroll_margin_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ParallaxConfig {
    #[serde(default = "defaults::default_parallax_enabled")]
    enabled: bool,
    #[serde(default = "defaults::default_parallax_photo_speed")]
    photo_speed: f64,
    #[serde(default = "defaults::default_parallax_hero_speed")]
    hero_speed: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        ParallaxConfig {
            enabled: defaults::default_parallax_enabled(),
            photo_speed: defaults::default_parallax_photo_speed(),
            hero_speed: defaults::default_parallax_hero_speed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct TypewriterConfig {
    #[serde(default = "defaults::default_typewriter_enabled")]
    enabled: bool,
    #[serde(default = "defaults::default_typewriter_start_delay_ms")]
    start_delay_ms: u64,
    #[serde(default = "defaults::default_typewriter_char_interval_ms")]
    char_interval_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        TypewriterConfig {
            enabled: defaults::default_typewriter_enabled(),
            start_delay_ms: defaults::default_typewriter_start_delay_ms(),
            char_interval_ms: defaults::default_typewriter_char_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct RevealConfig {
    #[serde(default = "defaults::default_reveal_child_stagger_ms")]
    child_stagger_ms: u64,
    #[serde(default = "defaults::default_hero_fade_delay_ms")]
    hero_fade_delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            child_stagger_ms: defaults::default_reveal_child_stagger_ms(),
            hero_fade_delay_ms: defaults::default_hero_fade_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ContactConfig {
    #[serde(default = "defaults::default_contact_send_ms")]
    simulated_send_ms: u64,
    #[serde(default = "defaults::default_sending_label")]
    sending_label: String,
    #[serde(default = "defaults::default_success_message")]
    success_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            simulated_send_ms: defaults::default_contact_send_ms(),
            sending_label: defaults::default_sending_label(),
            success_message: defaults::default_success_message(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ToastConfig {
    #[serde(default = "defaults::default_toast_slide_in_delay_ms")]
    slide_in_delay_ms: u64,
    #[serde(default = "defaults::default_toast_visible_ms")]
    visible_ms: u64,
    #[serde(default = "defaults::default_toast_slide_out_ms")]
    slide_out_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            slide_in_delay_ms: defaults::default_toast_slide_in_delay_ms(),
            visible_ms: defaults::default_toast_visible_ms(),
            slide_out_ms: defaults::default_toast_slide_out_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct EffectsConfig {
    #[serde(default = "defaults::default_ripple_ms")]
    ripple_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            ripple_ms: defaults::default_ripple_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
