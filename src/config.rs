//! Per-page tuning knobs, read from an optional inline JSON island.
//!
//! Pages may ship `<script id="gallery-config" type="application/json">`
//! with any subset of the fields below; everything else keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::Document;

pub const CONFIG_ISLAND_ID: &str = "gallery-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed page config: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Hero carousel auto-advance interval.
    pub hero_interval_ms: u32,
    /// Category carousel auto-advance interval.
    pub category_interval_ms: u32,
    /// Vertical offset past which the navbar gains its shadow.
    pub navbar_shadow_threshold_px: f64,
    /// How long a toast stays visible before auto-hiding.
    pub toast_autohide_ms: u32,
    /// Forced-visibility deadline for lazily revealed images.
    pub lazy_fallback_ms: i32,
    /// Lifetime of the transient screen-reader announcement element.
    pub announcement_ttl_ms: i32,
    /// localStorage key holding the wishlist id array.
    pub wishlist_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: 5000,
            category_interval_ms: 4000,
            navbar_shadow_threshold_px: 10.0,
            toast_autohide_ms: 3000,
            lazy_fallback_ms: 3000,
            announcement_ttl_ms: 1000,
            wishlist_key: "wishlist".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config from the page's data island; defaults when the island is
    /// absent, defaults with a warning when it is present but malformed.
    pub fn from_document(doc: &Document) -> Self {
        let Some(island) = doc.get_element_by_id(CONFIG_ISLAND_ID) else {
            return Self::default();
        };
        let raw = island.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Ignoring page config: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behavior() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.hero_interval_ms, 5000);
        assert_eq!(cfg.category_interval_ms, 4000);
        assert_eq!(cfg.navbar_shadow_threshold_px, 10.0);
        assert_eq!(cfg.toast_autohide_ms, 3000);
        assert_eq!(cfg.lazy_fallback_ms, 3000);
        assert_eq!(cfg.announcement_ttl_ms, 1000);
        assert_eq!(cfg.wishlist_key, "wishlist");
    }

    #[test]
    fn partial_island_keeps_remaining_defaults() {
        let cfg = PageConfig::from_json(r#"{"hero_interval_ms": 8000}"#).unwrap();
        assert_eq!(cfg.hero_interval_ms, 8000);
        assert_eq!(cfg.category_interval_ms, 4000);
        assert_eq!(cfg.wishlist_key, "wishlist");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let cfg = PageConfig::from_json(r#"{"theme": "dark", "toast_autohide_ms": 1500}"#).unwrap();
        assert_eq!(cfg.toast_autohide_ms, 1500);
    }

    #[test]
    fn malformed_island_is_an_error() {
        assert!(PageConfig::from_json("{not json").is_err());
    }
}
