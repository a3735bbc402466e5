use state::ChurchOpsConfig;
use tracing_subscriber::filter::LevelFilter;

/// Parse the page's embedded `churchops.toml`, falling back to defaults.
///
/// `None` (no config element) is the normal case and is silent; a config that fails
/// to parse is reported once the logger is up.
pub fn parse_config(embedded: Option<&str>) -> (ChurchOpsConfig, Option<String>) {
    let Some(text) = embedded.map(str::trim).filter(|t| !t.is_empty()) else {
        return (ChurchOpsConfig::default(), None);
    };
    match ChurchOpsConfig::from_toml(text) {
        Ok(config) => (config, None),
        Err(e) => (ChurchOpsConfig::default(), Some(e.to_string())),
    }
}

/// Console log level; unknown names mean `info`.
pub fn level_filter(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let (config, problem) = parse_config(None);
        assert_eq!(config, ChurchOpsConfig::default());
        assert!(problem.is_none());

        let (config, problem) = parse_config(Some("  \n "));
        assert_eq!(config, ChurchOpsConfig::default());
        assert!(problem.is_none());
    }

    #[test]
    fn test_embedded_overrides() {
        let (config, problem) = parse_config(Some(
            r#"
            [search]
            endpoint = "/people/lookup"

            [logging]
            level = "debug"
            "#,
        ));
        assert!(problem.is_none());
        assert_eq!(config.search.endpoint, "/people/lookup");
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_broken_config_falls_back() {
        let (config, problem) = parse_config(Some("[sidebar\nbreakpoint_px = "));
        assert_eq!(config, ChurchOpsConfig::default());
        assert!(problem.is_some());
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug"), LevelFilter::DEBUG);
        assert_eq!(level_filter("WARN"), LevelFilter::WARN);
        assert_eq!(level_filter("loud"), LevelFilter::INFO);
    }
}
