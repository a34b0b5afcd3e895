use serde::Deserialize;
use std::time::Duration;

/// Page interaction settings; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct PageConfig {
    #[serde(default = "crate::config::defaults::default_throttle_ms")]
    pub throttle_ms: u64,
    #[serde(default = "crate::config::defaults::default_section_lookahead_px")]
    pub section_lookahead_px: f64,
    #[serde(default = "crate::config::defaults::default_navbar_solid_after_px")]
    pub navbar_solid_after_px: f64,
    #[serde(default = "crate::config::defaults::default_nav_scroll_margin_px")]
    pub nav_scroll_margin_px: f64,
    #[serde(default = "crate::config::defaults::default_parallax_enabled")]
    pub parallax_enabled: bool,
    #[serde(default = "crate::config::defaults::default_parallax_photo_speed")]
    pub parallax_photo_speed: f64,
    #[serde(default = "crate::config::defaults::default_parallax_hero_speed")]
    pub parallax_hero_speed: f64,
    #[serde(default = "crate::config::defaults::default_typewriter_enabled")]
    pub typewriter_enabled: bool,
    #[serde(default = "crate::config::defaults::default_typewriter_start_delay_ms")]
    pub typewriter_start_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_typewriter_char_interval_ms")]
    pub typewriter_char_interval_ms: u64,
    #[serde(default = "crate::config::defaults::default_reveal_child_stagger_ms")]
    pub reveal_child_stagger_ms: u64,
    #[serde(default = "crate::config::defaults::default_hero_fade_delay_ms")]
    pub hero_fade_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_contact_send_ms")]
    pub contact_send_ms: u64,
    #[serde(default = "crate::config::defaults::default_sending_label")]
    pub sending_label: String,
    #[serde(default = "crate::config::defaults::default_success_message")]
    pub success_message: String,
    #[serde(default = "crate::config::defaults::default_toast_slide_in_delay_ms")]
    pub toast_slide_in_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_toast_visible_ms")]
    pub toast_visible_ms: u64,
    #[serde(default = "crate::config::defaults::default_toast_slide_out_ms")]
    pub toast_slide_out_ms: u64,
    #[serde(default = "crate::config::defaults::default_ripple_ms")]
    pub ripple_ms: u64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            throttle_ms: crate::config::defaults::default_throttle_ms(),
            section_lookahead_px: crate::config::defaults::default_section_lookahead_px(),
            navbar_solid_after_px: crate::config::defaults::default_navbar_solid_after_px(),
            nav_scroll_margin_px: crate::config::defaults::default_nav_scroll_margin_px(),
            parallax_enabled: crate::config::defaults::default_parallax_enabled(),
            parallax_photo_speed: crate::config::defaults::default_parallax_photo_speed(),
            parallax_hero_speed: crate::config::defaults::default_parallax_hero_speed(),
            typewriter_enabled: crate::config::defaults::default_typewriter_enabled(),
            typewriter_start_delay_ms: crate::config::defaults::default_typewriter_start_delay_ms(
            ),
            typewriter_char_interval_ms:
                crate::config::defaults::default_typewriter_char_interval_ms(),
            reveal_child_stagger_ms: crate::config::defaults::default_reveal_child_stagger_ms(),
            hero_fade_delay_ms: crate::config::defaults::default_hero_fade_delay_ms(),
            contact_send_ms: crate::config::defaults::default_contact_send_ms(),
            sending_label: crate::config::defaults::default_sending_label(),
            success_message: crate::config::defaults::default_success_message(),
            toast_slide_in_delay_ms: crate::config::defaults::default_toast_slide_in_delay_ms(),
            toast_visible_ms: crate::config::defaults::default_toast_visible_ms(),
            toast_slide_out_ms: crate::config::defaults::default_toast_slide_out_ms(),
            ripple_ms: crate::config::defaults::default_ripple_ms(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl PageConfig {
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn typewriter_start_delay(&self) -> Duration {
        Duration::from_millis(self.typewriter_start_delay_ms)
    }

    pub fn typewriter_char_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_char_interval_ms)
    }

    pub fn reveal_child_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.reveal_child_stagger_ms.saturating_mul(index as u64))
    }

    pub fn hero_fade_delay(&self) -> Duration {
        Duration::from_millis(self.hero_fade_delay_ms)
    }

    pub fn contact_send_delay(&self) -> Duration {
        Duration::from_millis(self.contact_send_ms)
    }

    pub fn toast_slide_in_delay(&self) -> Duration {
        Duration::from_millis(self.toast_slide_in_delay_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_slide_out(&self) -> Duration {
        Duration::from_millis(self.toast_slide_out_ms)
    }

    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
