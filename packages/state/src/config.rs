//! # Page configuration — `churchops.toml`
//!
//! Every tunable the page glue uses: breakpoints, debounce windows, endpoint paths,
//! the charting library pin. All sections default to production values, so an empty
//! document (or no document at all) is the normal configuration.
//!
//! A page can override any subset by embedding TOML in
//! `<script type="application/toml" id="churchops-config">`.
//!
//! ```toml
//! [sidebar]
//! breakpoint_px = 992
//! storage_key = "sidebar-state"
//!
//! [search]
//! endpoint = "/api/people/search"
//! debounce_ms = 300
//!
//! [filter]
//! select_debounce_ms = 300
//! name_debounce_ms = 500
//! ```
//!
//! | Struct | Section |
//! |--------|---------|
//! | [`SidebarConfig`] | viewport breakpoint, localStorage key, resize debounce |
//! | [`SearchConfig`] | endpoint, minimum query length, debounce |
//! | [`FilterConfig`] | watched field ids, name field id, debounce windows |
//! | [`AttendanceConfig`] | alert auto-dismiss and fade-out timings |
//! | [`SliderConfig`] | snap breakpoint, drag threshold, resize debounce |
//! | [`ChartsConfig`] | CDN script pin and default chart type |
//! | [`LoggingConfig`] | console log level |

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChurchOpsConfig {
    #[serde(default)]
    pub sidebar: SidebarConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub attendance: AttendanceConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Viewports narrower than this use the off-canvas (open/closed) sidebar.
    pub breakpoint_px: f64,
    pub storage_key: String,
    pub resize_debounce_ms: u64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 992.0,
            storage_key: "sidebar-state".to_string(),
            resize_debounce_ms: 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Shorter (trimmed) queries clear the results instead of searching.
    pub min_query_chars: usize,
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/people/search".to_string(),
            min_query_chars: 2,
            debounce_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Field ids whose `change` event refreshes the table.
    pub watched_fields: Vec<String>,
    /// Field id whose `input` event refreshes the table.
    pub name_field: String,
    pub select_debounce_ms: u64,
    pub name_debounce_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            watched_fields: [
                "region_id",
                "direction_id",
                "department_id",
                "team_id",
                "cell_id",
                "is_active",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            name_field: "name_search".to_string(),
            select_debounce_ms: 300,
            name_debounce_ms: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    pub auto_dismiss_ms: u64,
    /// Time between adding `fade-out` and removing the alert node.
    pub fade_out_ms: u64,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            fade_out_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Viewports narrower than this get scroll-snap on slider children.
    pub breakpoint_px: f64,
    /// Horizontal travel after which a touch drag stops the page from scrolling.
    pub drag_threshold_px: f64,
    pub resize_debounce_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            drag_threshold_px: 5.0,
            resize_debounce_ms: 200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub script_url: String,
    /// Subresource-integrity hash for `script_url`.
    pub integrity: String,
    pub default_type: String,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            script_url: "https://cdn.jsdelivr.net/npm/chart.js@3.7.1/dist/chart.min.js"
                .to_string(),
            integrity: "sha384-+jVt2eFCLJz+XTET+TzbRlJtUF7jgW0s0ll1Wo9xWl8xD7B5JZ+XrtJ4xF6RlTuA"
                .to_string(),
            default_type: "line".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ChurchOpsConfig {
    /// Builder method to point the people search somewhere else.
    pub fn with_search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search.endpoint = endpoint.into();
        self
    }

    /// Builder method to move the sidebar breakpoint.
    pub fn with_sidebar_breakpoint(mut self, px: f64) -> Self {
        self.sidebar.breakpoint_px = px;
        self
    }

    /// The element id a page uses to embed overrides.
    pub fn element_id() -> &'static str {
        "churchops-config"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

pub(crate) fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
