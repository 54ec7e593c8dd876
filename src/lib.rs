//! Chord-aware text segmentation and transposition engine.
//!
//! Takes the positioned text fragments a PDF-extraction collaborator pulls
//! out of a multi-song chord chart, partitions them into individual songs
//! with detected keys, and transposes chord symbols on demand with a fixed
//! sharp-preferred spelling policy.
//!
//! Pipeline: [`separate_songs`] (or [`segment_document`] with defaults)
//! produces [`Song`] records; [`transpose_song`] updates a song's semitone
//! delta; [`rendered_chord_line`] emits the transposed chart text for export.

pub mod chord;
pub mod config;
pub mod error;
pub mod fragment;
pub mod key;
pub mod render;
pub mod segment;
pub mod song;
pub mod transpose;

pub use chord::{extract_chords, extract_chords_at, Accidental, Chord, PitchClass};
pub use config::SegmenterConfig;
pub use error::SheetError;
pub use fragment::{assemble_lines, Line, LineSpan, TextFragment};
pub use key::{
    default_key_candidates, detect_key, detect_key_from_symbols, detect_key_in, KeyCandidate,
    KeyDetection,
};
pub use render::{rendered_chord_line, rendered_chord_line_with, rendered_lines};
pub use segment::separate_songs;
pub use song::{Segmentation, SegmentWarning, Song};
pub use transpose::{transpose_chord, transpose_pitch_class, transpose_song, transpose_symbol};

/// Segment a document's token stream with the default configuration.
/// This is the main entry point for the library.
pub fn segment_document(tokens: &[TextFragment]) -> Result<Segmentation, SheetError> {
    separate_songs(tokens, &SegmenterConfig::default())
}
