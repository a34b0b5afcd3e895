use super::models::PageConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Parse a TOML document into a [`PageConfig`].
///
/// Missing tables and keys take their defaults; malformed values are errors.
pub fn parse_config(contents: &str) -> Result<PageConfig> {
    let tables: ConfigTables =
        toml::from_str(contents).context("Failed to parse page configuration TOML")?;
    Ok(tables.into())
}

/// Render a [`PageConfig`] back into its table layout.
pub fn serialize_config(config: &PageConfig) -> Result<String> {
    toml::to_string(&ConfigTables::from(config)).context("Failed to serialize page configuration")
}

/// Resolve configuration from an optional inline source, falling back to
/// defaults when it is absent or invalid.
pub fn load_config(source: Option<&str>) -> PageConfig {
    let Some(contents) = source else {
        debug!("No inline page configuration; using defaults");
        return PageConfig::default();
    };

    match parse_config(contents) {
        Ok(cfg) => {
            info!(level = %cfg.log_level, "Loaded inline page configuration");
            cfg
        }
        Err(err) => {
            warn!("Falling back to default page configuration: {err:#}");
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse_config("").expect("empty config parses");
        assert_eq!(cfg, PageConfig::default());
        assert_eq!(cfg.throttle_ms, 100);
        assert_eq!(cfg.section_lookahead_px, 100.0);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = parse_config(
            r#"
            [scroll]
            throttle_ms = 250

            [logging]
            log_level = "debug"
            "#,
        )
        .expect("partial config parses");
        assert_eq!(cfg.throttle_ms, 250);
        assert_eq!(cfg.nav_scroll_margin_px, 70.0);
        assert_eq!(cfg.typewriter_char_interval_ms, 50);
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_document_falls_back_to_defaults() {
        assert!(parse_config("[scroll]\nthrottle_ms = \"fast\"").is_err());
        let cfg = load_config(Some("[scroll]\nthrottle_ms = \"fast\""));
        assert_eq!(cfg, PageConfig::default());
    }

    #[test]
    fn serialized_tables_parse_back() {
        let mut cfg = PageConfig::default();
        cfg.parallax_enabled = false;
        cfg.sending_label = "Posting...".to_string();
        let rendered = serialize_config(&cfg).expect("serialize config");
        assert!(rendered.contains("[parallax]"));
        assert_eq!(parse_config(&rendered).expect("reparse"), cfg);
    }
}
