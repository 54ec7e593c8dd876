//! # Chord Line Rendering
//!
//! Produces the chord-annotated line text the export collaborator writes
//! back onto the page: each chord span in the original line is replaced with
//! its transposed symbol at the song's current transposition.
//!
//! Substitution runs right to left so earlier spans keep their recorded
//! offsets even when a symbol changes width (`Bb` → `B`, `G` → `G#`).

use crate::chord::Chord;
use crate::config::SegmenterConfig;
use crate::fragment::assemble_lines;
use crate::song::Song;
use crate::transpose::transpose_chord;

/// Render one of a song's assembled lines with its chords transposed by the
/// song's current `transposition`. Returns `None` when `line_index` is out
/// of range.
///
/// At transposition 0 the original line text comes back verbatim.
pub fn rendered_chord_line(song: &Song, line_index: usize) -> Option<String> {
    rendered_chord_line_with(song, line_index, SegmenterConfig::default().y_tolerance)
}

/// [`rendered_chord_line`] with an explicit line-grouping tolerance, for
/// hosts that segmented with a non-default [`SegmenterConfig`].
pub fn rendered_chord_line_with(
    song: &Song,
    line_index: usize,
    y_tolerance: f32,
) -> Option<String> {
    let lines = assemble_lines(&song.tokens, y_tolerance);
    let line = lines.get(line_index)?;

    let mut line_chords: Vec<&Chord> = song
        .chords
        .iter()
        .filter(|c| c.source_line == line_index)
        .collect();
    line_chords.sort_by_key(|c| c.source_position);

    let mut chars: Vec<char> = line.text.chars().collect();
    for chord in line_chords.iter().rev() {
        let transposed = transpose_chord(chord, song.transposition);
        let start = chord.source_position;
        let end = start + chord.source_text.chars().count();
        if end > chars.len() {
            continue;
        }
        chars.splice(start..end, transposed.source_text.chars());
    }
    Some(chars.into_iter().collect())
}

/// Render every line of the song, in order.
pub fn rendered_lines(song: &Song) -> Vec<String> {
    let count = assemble_lines(&song.tokens, SegmenterConfig::default().y_tolerance).len();
    (0..count)
        .filter_map(|i| rendered_chord_line(song, i))
        .collect()
}
