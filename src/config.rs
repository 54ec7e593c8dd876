//! # Segmenter Configuration
//!
//! Every heuristic threshold the segmenter uses lives here as a named,
//! documented field. The defaults are tuned against songbooks of mostly
//! two-page songs; a different corpus tunes these values, not the algorithm.

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Tunable thresholds for song boundary detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Vertical tolerance when grouping fragments into lines.
    pub y_tolerance: f32,

    /// How far below the top of a page a token can sit and still earn
    /// position score as a title candidate.
    pub title_search_depth: f32,

    /// Vertical whitespace between consecutive lines that opens a mid-page
    /// title candidate (the page-break signal handles page starts).
    pub min_title_gap: f32,

    /// Composite score a candidate must reach to become a boundary.
    pub title_score_threshold: f32,

    /// Weight of proximity-to-page-top in the composite score.
    pub weight_position: f32,

    /// Weight of bold/large-font typography in the composite score.
    pub weight_typography: f32,

    /// Weight of title-shaped text (title case or allow-list match).
    pub weight_title_shape: f32,

    /// A title candidate's font size must be at least this multiple of the
    /// document's median font size to count as "large".
    pub title_font_ratio: f32,

    /// Minimum tokens per song; shorter slices merge into a neighbor and a
    /// boundary this close to the previous one is not accepted.
    pub min_song_tokens: usize,

    /// When typography finds fewer boundaries than the page count divided
    /// by `max_pages_per_song` (rounded up), fall back to one boundary
    /// every `fallback_page_interval` pages.
    pub fallback_page_interval: u32,

    /// Longest plausible song, in pages, for the fallback trigger.
    pub max_pages_per_song: u32,

    /// Known song titles matched case-insensitively as a reliability aid for
    /// fixtures and tuning. Empty by default; the shipped heuristic must not
    /// depend on it.
    pub known_titles: Vec<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 2.0,
            title_search_depth: 150.0,
            min_title_gap: 30.0,
            title_score_threshold: 0.5,
            weight_position: 0.35,
            weight_typography: 0.35,
            weight_title_shape: 0.30,
            title_font_ratio: 1.15,
            min_song_tokens: 8,
            fallback_page_interval: 2,
            max_pages_per_song: 3,
            known_titles: Vec::new(),
        }
    }
}

impl SegmenterConfig {
    /// Load a config from YAML. Missing fields keep their defaults.
    ///
    /// # Example
    /// ```
    /// use chordsheet::SegmenterConfig;
    ///
    /// let config = SegmenterConfig::from_yaml("min_song_tokens: 20\n").unwrap();
    /// assert_eq!(config.min_song_tokens, 20);
    /// assert_eq!(config.fallback_page_interval, 2);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, SheetError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| SheetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the segmenter cannot run with.
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.min_song_tokens == 0 {
            return Err(SheetError::Config(
                "min_song_tokens must be at least 1".to_string(),
            ));
        }
        if self.fallback_page_interval == 0 || self.max_pages_per_song == 0 {
            return Err(SheetError::Config(
                "page intervals must be at least 1".to_string(),
            ));
        }
        if self.title_font_ratio <= 0.0 {
            return Err(SheetError::Config(
                "title_font_ratio must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
