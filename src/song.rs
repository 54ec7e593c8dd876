//! # Song Records and Segmentation Warnings
//!
//! Value types produced by the segmenter. A `Song` is created once from a
//! contiguous token slice; only `transposition` changes afterward (via
//! [`crate::transpose_song`], which returns a new value; nothing here is
//! mutated in place). The current key is always derived from `original_key`
//! plus `transposition`, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chord::Chord;
use crate::fragment::TextFragment;
use crate::key::KeyCandidate;
use crate::transpose::transpose_pitch_class;

/// One segmented song: a contiguous slice of the document's token stream
/// with its extracted chords and detected key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// 0-based ordinal within the document. Deterministic across runs.
    pub id: u32,
    pub title: String,
    pub original_key: KeyCandidate,
    /// Confidence of the key detection, [0, 1].
    pub key_confidence: f32,
    /// Semitone delta applied on top of `original_key`. May be negative.
    pub transposition: i32,
    /// The song's token subsequence. Slices across all songs of a document
    /// partition the input stream: no overlap, no gaps.
    pub tokens: Vec<TextFragment>,
    pub chords: Vec<Chord>,
    pub page_start: u32,
    pub page_end: u32,
}

impl Song {
    /// The key the song currently displays in: `original_key` shifted by
    /// `transposition`.
    pub fn current_key(&self) -> KeyCandidate {
        KeyCandidate {
            tonic: transpose_pitch_class(self.original_key.tonic, self.transposition),
            is_minor: self.original_key.is_minor,
        }
    }
}

/// Non-fatal observations surfaced alongside segmentation results.
///
/// The engine never logs these through ambient state; they are values the
/// caller decides how to present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentWarning {
    /// A song was kept despite containing no recognizable chords.
    NoChords { song_id: u32, title: String },
    /// Typography found too few boundaries for the page count, so
    /// page-interval boundaries were inserted.
    FallbackBoundaries { detected: usize, expected_min: usize },
    /// Key detection succeeded but with weak evidence.
    LowKeyConfidence {
        song_id: u32,
        title: String,
        confidence: f32,
    },
    /// A span shorter than the minimum song length was merged into its
    /// neighbor instead of becoming its own song.
    ShortSpanMerged { tokens: usize, page: u32 },
}

impl fmt::Display for SegmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChords { song_id, title } => {
                write!(f, "song {song_id} ({title:?}) contains no recognizable chords")
            }
            Self::FallbackBoundaries {
                detected,
                expected_min,
            } => write!(
                f,
                "only {detected} boundaries detected where at least {expected_min} were expected; page-interval fallback applied"
            ),
            Self::LowKeyConfidence {
                song_id,
                title,
                confidence,
            } => write!(
                f,
                "song {song_id} ({title:?}) key detected with low confidence {confidence:.2}"
            ),
            Self::ShortSpanMerged { tokens, page } => {
                write!(f, "{tokens}-token span on page {page} merged into neighboring song")
            }
        }
    }
}

/// Everything `separate_songs` produces: the songs plus the warnings
/// accumulated while producing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segmentation {
    pub songs: Vec<Song>,
    pub warnings: Vec<SegmentWarning>,
}
