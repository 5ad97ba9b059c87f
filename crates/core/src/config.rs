use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scroll::SectionRule;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thresholds for the navbar and section tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Viewports at or below this width only show the nav at the top.
    pub breakpoint_px: f64,
    /// Scrolling down past this offset hides the nav.
    pub hide_threshold_px: f64,
    /// Offsets below this always show the nav.
    pub show_threshold_px: f64,
    /// Pointer distance from the viewport top that reveals the nav.
    pub hover_zone_px: f64,
    /// Fixed-header compensation subtracted from section tops.
    pub section_offset_px: f64,
    pub debounce_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            hide_threshold_px: 100.0,
            show_threshold_px: 50.0,
            hover_zone_px: 20.0,
            section_offset_px: 100.0,
            debounce_ms: 50,
        }
    }
}

/// Page-wide settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub section_rule: SectionRule,
    /// Auto-advance period for indexed carousels. Fixed once started.
    pub carousel_interval_ms: u32,
    /// Below this width content renders in its stacked mobile layout.
    pub mobile_breakpoint_px: f64,
    /// Below this width the poster strip has no "View All" mode.
    pub view_all_min_width_px: f64,
    pub poster_step_px: f64,
    pub interface_step_px: f64,
    /// Prefix for JSON resource URLs.
    pub data_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            section_rule: SectionRule::FurthestReached,
            carousel_interval_ms: 5000,
            mobile_breakpoint_px: 1420.0,
            view_all_min_width_px: 640.0,
            poster_step_px: 260.0,
            interface_step_px: 560.0,
            data_base: "datas/".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve a resource file name against `data_base`.
    pub fn data_url(&self, file: &str) -> String {
        if self.data_base.is_empty() || self.data_base.ends_with('/') {
            format!("{}{file}", self.data_base)
        } else {
            format!("{}/{file}", self.data_base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{"nav":{"breakpoint_px":1024},"carousel_interval_ms":8000}"#)
                .unwrap();
        assert_eq!(config.nav.breakpoint_px, 1024.0);
        assert_eq!(config.nav.hide_threshold_px, 100.0);
        assert_eq!(config.carousel_interval_ms, 8000);
        assert_eq!(config.section_rule, SectionRule::FurthestReached);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(SiteConfig::from_json("{nav:").is_err());
    }

    #[test]
    fn data_url_joins_with_single_slash() {
        let mut config = SiteConfig::default();
        assert_eq!(config.data_url("resume.json"), "datas/resume.json");
        config.data_base = "/static/data".into();
        assert_eq!(config.data_url("skills.json"), "/static/data/skills.json");
    }
}
