//! # Song Segmentation
//!
//! Partitions the ordered token stream of a multi-song document into
//! individual [`Song`] records.
//!
//! The segmenter keeps a growing list of boundary indices into the token
//! sequence, always starting at 0. Page transitions and large vertical gaps
//! open title candidates; each candidate is scored on a weighted composite of
//! page-top proximity, bold/large typography, and title-shaped text, and a
//! candidate clearing the acceptance threshold becomes a boundary. Section
//! headers (`VERSE 1`, `CHORUS`, ...) are structural markers inside a song
//! and are never boundaries or titles, no matter how they are set. Copyright
//! lines, license codes, page numbers, URLs, and key/tempo annotations are
//! excluded from title consideration but stay inside the song's token slice.
//!
//! Every threshold lives in [`SegmenterConfig`]; the algorithm reads them,
//! never embeds them.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::chord::{extract_chords, extract_chords_at, Chord};
use crate::config::SegmenterConfig;
use crate::error::SheetError;
use crate::fragment::{assemble_lines, Line, TextFragment};
use crate::key::detect_key;
use crate::song::{Segmentation, SegmentWarning, Song};

/// Structural markers within a song. Never boundaries, never titles.
static SECTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(verse\s*\d*|chorus\s*\d*|pre[\s-]?chorus\s*\d*|bridge\s*\d*|intro|outro|tag|refrain|ending|interlude|turnaround|instrumental)\s*:?\s*$",
    )
    .expect("section header pattern compiles")
});

/// Lines excluded from title consideration but kept in the token slice:
/// copyright and license boilerplate, page numbers, URLs, key/tempo/time
/// annotations, author credits.
static IGNORE_RES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)copyright|\(c\)|©|all rights reserved",
        r"(?i)\bccli\b",
        r"(?i)^\s*(page\s*)?\d+\s*$",
        r"(?i)https?://|www\.",
        r"(?i)^\s*key\s*(:|of\b)",
        r"(?i)^\s*(tempo|bpm)\b",
        r"(?i)^\s*time\s*:",
        r"(?i)^\s*\d+\s*/\s*\d+\s*$",
        r"(?i)^\s*(words|music|lyrics)\s+(and\s+\w+\s+)?by\b",
        r"(?i)^\s*(by|arr\.?|arranged by|written by)\s+\S",
        r"(?i)used by permission",
    ])
    .expect("ignore patterns compile")
});

/// A title-case word sequence: capitalized words, with short connectives
/// ("of", "the", "my") allowed in lowercase.
static TITLE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z'’,!]*(\s+([a-z]{1,3}|[A-Z][A-Za-z'’,!]*))*$")
        .expect("title shape pattern compiles")
});

/// Separate a document's token stream into songs.
///
/// Fails only when the input has nothing to segment. Re-running on the same
/// input always yields identical boundaries: no state survives between calls.
pub fn separate_songs(
    tokens: &[TextFragment],
    config: &SegmenterConfig,
) -> Result<Segmentation, SheetError> {
    config.validate()?;
    if tokens.is_empty() {
        return Err(SheetError::NoExtractableContent);
    }

    let mut warnings = Vec::new();
    let lines = assemble_lines(tokens, config.y_tolerance);
    let body_font = median_font_size(tokens);

    // Boundary index list over the token stream, always anchored at 0.
    let mut boundaries: Vec<usize> = vec![0];
    for candidate in title_candidates(&lines, config) {
        let line = &lines[candidate];
        let score = score_title_candidate(&lines, candidate, body_font, config);
        let token_index = line.spans[0].token_index;
        debug!(
            "title candidate {:?} on page {} scored {:.2}",
            line.text, line.page, score
        );
        if score < config.title_score_threshold {
            continue;
        }
        let last = *boundaries.last().unwrap();
        if token_index > last && token_index - last >= config.min_song_tokens {
            boundaries.push(token_index);
        }
    }

    apply_page_fallback(tokens, &mut boundaries, config, &mut warnings);

    boundaries.sort_unstable();
    boundaries.dedup();
    boundaries.push(tokens.len());

    let spans = merge_short_spans(tokens, &boundaries, config, &mut warnings);

    let mut songs = Vec::new();
    for (start, end) in spans {
        let slice = &tokens[start..end];
        let id = songs.len() as u32;
        match build_song(id, slice, config, &mut warnings) {
            Some(song) => songs.push(song),
            None => warn!("dropped degenerate span at tokens {start}..{end}"),
        }
    }

    if songs.is_empty() {
        return Err(SheetError::NoExtractableContent);
    }
    Ok(Segmentation { songs, warnings })
}

/// Median font size across the document: the body-text baseline that title
/// typography is judged against.
fn median_font_size(tokens: &[TextFragment]) -> f32 {
    let mut sizes: Vec<f32> = tokens.iter().map(|t| t.font_size).collect();
    sizes.sort_by(|a, b| a.total_cmp(b));
    sizes[sizes.len() / 2]
}

/// Excluded from title consideration entirely.
fn is_ignorable(text: &str) -> bool {
    IGNORE_RES.is_match(text)
}

fn is_section_header(text: &str) -> bool {
    SECTION_HEADER_RE.is_match(text)
}

/// A line whose words are mostly chord symbols is chart content, not a
/// title. The recognizer doubles as a segmentation signal here.
fn is_chord_line(text: &str) -> bool {
    let words = text.split_whitespace().count();
    if words == 0 {
        return false;
    }
    let chords = extract_chords(text).len();
    chords * 2 >= words
}

fn is_title_excluded(text: &str) -> bool {
    is_ignorable(text) || is_section_header(text) || is_chord_line(text)
}

/// Collect candidate line indices: the first non-excluded line of each page,
/// plus any non-excluded line sitting below a large vertical gap.
fn title_candidates(lines: &[Line], config: &SegmenterConfig) -> Vec<usize> {
    let mut candidates = Vec::new();
    for i in 0..lines.len() {
        let page_start = i == 0 || lines[i].page != lines[i - 1].page;
        if page_start {
            // First non-ignorable, non-section-header line on the new page.
            let mut j = i;
            while j < lines.len() && lines[j].page == lines[i].page {
                if !is_title_excluded(&lines[j].text) {
                    candidates.push(j);
                    break;
                }
                j += 1;
            }
        } else if lines[i].y - lines[i - 1].y > config.min_title_gap
            && !is_title_excluded(&lines[i].text)
        {
            candidates.push(i);
        }
    }
    // The page-start scan can land on the same line a gap later nominates;
    // keep the list in stream order with no duplicates.
    candidates.sort_unstable();
    candidates.dedup();
    candidates
}

/// Composite boundary score: position + typography + title shape, each
/// weighted per config.
fn score_title_candidate(
    lines: &[Line],
    index: usize,
    body_font: f32,
    config: &SegmenterConfig,
) -> f32 {
    let line = &lines[index];
    let page_top_y = lines
        .iter()
        .filter(|l| l.page == line.page)
        .map(|l| l.y)
        .fold(f32::INFINITY, f32::min);

    config.weight_position * score_position(line.y, page_top_y, config)
        + config.weight_typography * score_typography(line, body_font, config)
        + config.weight_title_shape * score_title_shape(&line.text, config)
}

/// 1.0 at the top of the page, decaying linearly to 0 over the search depth.
fn score_position(y: f32, page_top_y: f32, config: &SegmenterConfig) -> f32 {
    (1.0 - (y - page_top_y) / config.title_search_depth).clamp(0.0, 1.0)
}

/// Bold weighs more than size alone; both together saturate the signal.
fn score_typography(line: &Line, body_font: f32, config: &SegmenterConfig) -> f32 {
    let mut score = 0.0;
    if line.bold {
        score += 0.6;
    }
    if line.max_font_size >= body_font * config.title_font_ratio {
        score += 0.4;
    }
    score
}

/// 1.0 for an allow-list match, 0.7 for a title-case word sequence.
fn score_title_shape(text: &str, config: &SegmenterConfig) -> f32 {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    if config
        .known_titles
        .iter()
        .any(|t| lower == t.to_lowercase() || lower.contains(&t.to_lowercase()))
    {
        return 1.0;
    }
    let word_count = trimmed.split_whitespace().count();
    if word_count > 0 && word_count <= 8 && TITLE_SHAPE_RE.is_match(trimmed) {
        return 0.7;
    }
    0.0
}

/// When typography found implausibly few boundaries for the page count,
/// insert one boundary every `fallback_page_interval` pages so no song
/// silently spans the whole document.
fn apply_page_fallback(
    tokens: &[TextFragment],
    boundaries: &mut Vec<usize>,
    config: &SegmenterConfig,
    warnings: &mut Vec<SegmentWarning>,
) {
    let mut pages: Vec<u32> = tokens.iter().map(|t| t.page).collect();
    pages.sort_unstable();
    pages.dedup();

    let expected_min = pages.len().div_ceil(config.max_pages_per_song as usize);
    if boundaries.len() >= expected_min || expected_min < 2 {
        return;
    }

    warn!(
        "typography produced {} boundaries over {} pages; applying page-interval fallback",
        boundaries.len(),
        pages.len()
    );
    warnings.push(SegmentWarning::FallbackBoundaries {
        detected: boundaries.len(),
        expected_min,
    });

    let interval = config.fallback_page_interval as usize;
    for page in pages.iter().skip(interval).step_by(interval) {
        if let Some(index) = tokens.iter().position(|t| t.page == *page) {
            boundaries.push(index);
        }
    }
}

/// Slice the stream at the boundary indices, merging any span shorter than
/// the minimum song length into its neighbor so the slices still partition
/// the input.
fn merge_short_spans(
    tokens: &[TextFragment],
    boundaries: &[usize],
    config: &SegmenterConfig,
    warnings: &mut Vec<SegmentWarning>,
) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for window in boundaries.windows(2) {
        let (start, end) = (window[0], window[1]);
        if end <= start {
            continue;
        }
        if let Some(prev) = spans.last_mut() {
            let prev_len = prev.1 - prev.0;
            let len = end - start;
            if prev_len < config.min_song_tokens || len < config.min_song_tokens {
                let (short_len, short_start) = if len < prev_len {
                    (len, start)
                } else {
                    (prev_len, prev.0)
                };
                warnings.push(SegmentWarning::ShortSpanMerged {
                    tokens: short_len,
                    page: tokens[short_start].page,
                });
                prev.1 = end;
                continue;
            }
        }
        spans.push((start, end));
    }
    spans
}

/// Build one song from a contiguous token slice: extract a title, run the
/// recognizer over the assembled lines, detect the key.
fn build_song(
    id: u32,
    slice: &[TextFragment],
    config: &SegmenterConfig,
    warnings: &mut Vec<SegmentWarning>,
) -> Option<Song> {
    let lines = assemble_lines(slice, config.y_tolerance);
    let title = extract_title(&lines, id, config);
    // Final validation: a song whose title is empty or carries no word
    // characters is degenerate.
    if !title.chars().any(|c| c.is_alphanumeric()) {
        return None;
    }

    let mut chords: Vec<Chord> = Vec::new();
    for (line_index, line) in lines.iter().enumerate() {
        chords.extend(extract_chords_at(&line.text, line_index));
    }

    let detection = detect_key(&chords);
    if chords.is_empty() {
        warnings.push(SegmentWarning::NoChords {
            song_id: id,
            title: title.clone(),
        });
    } else if detection.confidence < 0.3 {
        warnings.push(SegmentWarning::LowKeyConfidence {
            song_id: id,
            title: title.clone(),
            confidence: detection.confidence,
        });
    }

    let page_start = slice.iter().map(|t| t.page).min().unwrap_or(0);
    let page_end = slice.iter().map(|t| t.page).max().unwrap_or(page_start);

    Some(Song {
        id,
        title,
        original_key: detection.key,
        key_confidence: detection.confidence,
        transposition: 0,
        tokens: slice.to_vec(),
        chords,
        page_start,
        page_end,
    })
}

/// First title-shaped non-excluded line; else the first non-excluded line;
/// else a generated placeholder.
fn extract_title(lines: &[Line], id: u32, config: &SegmenterConfig) -> String {
    for line in lines {
        if !is_title_excluded(&line.text) && score_title_shape(&line.text, config) > 0.0 {
            return line.text.trim().to_string();
        }
    }
    for line in lines {
        if !is_title_excluded(&line.text) {
            return line.text.trim().to_string();
        }
    }
    format!("Song {}", id + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One worship-song page: heading, section markers, chord lines over
    /// lyrics, license footer. Nine tokens.
    fn push_song_page(
        tokens: &mut Vec<TextFragment>,
        page: u32,
        title: &str,
        chord_lines: [&str; 2],
        lyric_lines: [&str; 3],
    ) {
        let base = tokens.len() as u32;
        tokens.push(TextFragment::new(base, page, title, 180.0, 40.0).bold().sized(18.0));
        tokens.push(TextFragment::new(base + 1, page, "VERSE 1", 50.0, 86.0).bold().sized(14.0));
        tokens.push(TextFragment::new(base + 2, page, chord_lines[0], 50.0, 116.0));
        tokens.push(TextFragment::new(base + 3, page, lyric_lines[0], 50.0, 130.0));
        tokens.push(TextFragment::new(base + 4, page, chord_lines[1], 50.0, 160.0));
        tokens.push(TextFragment::new(base + 5, page, lyric_lines[1], 50.0, 174.0));
        tokens.push(TextFragment::new(base + 6, page, "CHORUS", 50.0, 210.0).bold().sized(14.0));
        tokens.push(TextFragment::new(base + 7, page, lyric_lines[2], 50.0, 240.0));
        tokens.push(TextFragment::new(
            base + 8,
            page,
            "CCLI License #1234567",
            50.0,
            700.0,
        ));
    }

    fn four_song_stream() -> Vec<TextFragment> {
        let mut tokens = Vec::new();
        push_song_page(
            &mut tokens,
            1,
            "Amazing Grace",
            ["G C G D", "G Em D G"],
            [
                "amazing grace how sweet the sound",
                "that saved and set me free",
                "was blind but now can see",
            ],
        );
        push_song_page(
            &mut tokens,
            2,
            "How Great Thou Art",
            ["C F C G", "C Am G C"],
            [
                "oh lord my god when in awesome wonder",
                "consider all the worlds thy hands have made",
                "then sings my soul my savior god to thee",
            ],
        );
        push_song_page(
            &mut tokens,
            3,
            "It Is Well",
            ["D G D A", "D Bm A D"],
            [
                "when peace like river attendeth my way",
                "when sorrows like sea billows roll",
                "it is well with my soul",
            ],
        );
        push_song_page(
            &mut tokens,
            4,
            "Blessed Assurance",
            ["E A E B", "E C#m B E"],
            [
                "blessed assurance jesus is mine",
                "oh what foretaste of glory divine",
                "this is my story this is my song",
            ],
        );
        tokens
    }

    #[test]
    fn test_four_pages_yield_four_songs() {
        let tokens = four_song_stream();
        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        assert_eq!(result.songs.len(), 4);
        let titles: Vec<&str> = result.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Amazing Grace",
                "How Great Thou Art",
                "It Is Well",
                "Blessed Assurance"
            ]
        );
    }

    #[test]
    fn test_song_slices_partition_the_input() {
        let tokens = four_song_stream();
        let config = SegmenterConfig::default();
        let result = separate_songs(&tokens, &config).unwrap();

        let mut covered: Vec<u32> = Vec::new();
        for song in &result.songs {
            assert!(
                song.tokens.len() >= config.min_song_tokens,
                "song {:?} has only {} tokens",
                song.title,
                song.tokens.len()
            );
            covered.extend(song.tokens.iter().map(|t| t.id));
        }
        let input_ids: Vec<u32> = tokens.iter().map(|t| t.id).collect();
        // disjoint, contiguous, and full coverage in order
        assert_eq!(covered, input_ids);
    }

    #[test]
    fn test_section_headers_never_become_boundaries() {
        let tokens = four_song_stream();
        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        for song in &result.songs {
            let first = &song.tokens[0];
            assert!(
                !is_section_header(&first.text),
                "song starts at section header {:?}",
                first.text
            );
            assert!(!is_section_header(&song.title));
        }
    }

    #[test]
    fn test_detected_keys_per_song() {
        let tokens = four_song_stream();
        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        let keys: Vec<String> = result
            .songs
            .iter()
            .map(|s| s.original_key.name())
            .collect();
        assert_eq!(keys, vec!["G", "C", "D", "E"]);
        for song in &result.songs {
            assert!(song.key_confidence > 0.5);
            assert_eq!(song.transposition, 0);
        }
    }

    #[test]
    fn test_page_ranges() {
        let tokens = four_song_stream();
        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        let pages: Vec<(u32, u32)> = result
            .songs
            .iter()
            .map(|s| (s.page_start, s.page_end))
            .collect();
        assert_eq!(pages, vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_idempotent_across_runs() {
        let tokens = four_song_stream();
        let config = SegmenterConfig::default();
        let first = separate_songs(&tokens, &config).unwrap();
        let second = separate_songs(&tokens, &config).unwrap();
        assert_eq!(first.songs, second.songs);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = separate_songs(&[], &SegmenterConfig::default()).unwrap_err();
        assert!(matches!(err, SheetError::NoExtractableContent));
    }

    #[test]
    fn test_continuation_page_does_not_split() {
        // Page 2 opens with a bold CHORUS marker; the song must keep
        // spanning both pages.
        let mut tokens = Vec::new();
        push_song_page(
            &mut tokens,
            1,
            "Amazing Grace",
            ["G C G D", "G Em D G"],
            [
                "amazing grace how sweet the sound",
                "that saved and set me free",
                "was blind but now can see",
            ],
        );
        let base = tokens.len() as u32;
        tokens.push(TextFragment::new(base, 2, "CHORUS", 50.0, 40.0).bold().sized(16.0));
        tokens.push(TextFragment::new(base + 1, 2, "G C G D", 50.0, 80.0));
        tokens.push(TextFragment::new(
            base + 2,
            2,
            "my chains are gone",
            50.0,
            94.0,
        ));
        tokens.push(TextFragment::new(
            base + 3,
            2,
            "unending love amazing grace",
            50.0,
            108.0,
        ));

        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        assert_eq!(result.songs.len(), 1);
        assert_eq!(result.songs[0].page_start, 1);
        assert_eq!(result.songs[0].page_end, 2);
    }

    #[test]
    fn test_fallback_page_interval_boundaries() {
        // Six pages of plain, unstyled text: typography finds nothing, so
        // the fallback must still split the document.
        let mut tokens = Vec::new();
        let mut id = 0;
        for page in 1..=6 {
            for row in 0..5 {
                tokens.push(TextFragment::new(
                    id,
                    page,
                    format!("quiet verse words row {row}"),
                    50.0,
                    100.0 + row as f32 * 14.0,
                ));
                id += 1;
            }
        }
        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        assert_eq!(result.songs.len(), 3);
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, SegmentWarning::FallbackBoundaries { .. })));
        // chordless songs are kept but flagged
        let no_chord_flags = result
            .warnings
            .iter()
            .filter(|w| matches!(w, SegmentWarning::NoChords { .. }))
            .count();
        assert_eq!(no_chord_flags, 3);
        for song in &result.songs {
            assert!(song.chords.is_empty());
            assert_eq!(song.key_confidence, 0.0);
        }
    }

    #[test]
    fn test_fallback_fires_on_four_unstyled_pages() {
        // Four pages of plain text expect at least two songs; one boundary
        // is not enough, so the fallback must kick in.
        let mut tokens = Vec::new();
        let mut id = 0;
        for page in 1..=4 {
            for row in 0..5 {
                tokens.push(TextFragment::new(
                    id,
                    page,
                    format!("quiet verse words row {row}"),
                    50.0,
                    100.0 + row as f32 * 14.0,
                ));
                id += 1;
            }
        }
        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        assert_eq!(result.songs.len(), 2);
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, SegmentWarning::FallbackBoundaries { .. })));
        let pages: Vec<(u32, u32)> = result
            .songs
            .iter()
            .map(|s| (s.page_start, s.page_end))
            .collect();
        assert_eq!(pages, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_page_opening_with_boilerplate_still_splits_at_title() {
        // Page 2 opens with a bare page number; the page-start scan must
        // skip it and the boundary must land on the real title line.
        let mut tokens = Vec::new();
        push_song_page(
            &mut tokens,
            1,
            "Amazing Grace",
            ["G C G D", "G Em D G"],
            [
                "amazing grace how sweet the sound",
                "that saved and set me free",
                "was blind but now can see",
            ],
        );
        let base = tokens.len() as u32;
        tokens.push(TextFragment::new(base, 2, "2", 280.0, 20.0).sized(10.0));
        push_song_page(
            &mut tokens,
            2,
            "How Great Thou Art",
            ["C F C G", "C Am G C"],
            [
                "oh lord my god when in awesome wonder",
                "consider all the worlds thy hands have made",
                "then sings my soul my savior god to thee",
            ],
        );

        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        assert_eq!(result.songs.len(), 2);
        assert_eq!(result.songs[1].title, "How Great Thou Art");
        assert_eq!(result.songs[1].tokens[0].text, "How Great Thou Art");
    }

    #[test]
    fn test_short_trailing_span_merges_into_previous_song() {
        let mut tokens = Vec::new();
        push_song_page(
            &mut tokens,
            1,
            "Amazing Grace",
            ["G C G D", "G Em D G"],
            [
                "amazing grace how sweet the sound",
                "that saved and set me free",
                "was blind but now can see",
            ],
        );
        let base = tokens.len() as u32;
        tokens.push(TextFragment::new(base, 2, "Short Song", 180.0, 40.0).bold().sized(18.0));
        tokens.push(TextFragment::new(base + 1, 2, "G C", 50.0, 86.0));
        tokens.push(TextFragment::new(base + 2, 2, "too short to keep", 50.0, 100.0));

        let result = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        assert_eq!(result.songs.len(), 1);
        assert_eq!(result.songs[0].tokens.len(), tokens.len());
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, SegmentWarning::ShortSpanMerged { .. })));
    }

    #[test]
    fn test_known_title_allow_list_boosts_candidates() {
        // A plain-typography title normally scores below threshold; the
        // allow-list pushes it over.
        let mut tokens = Vec::new();
        push_song_page(
            &mut tokens,
            1,
            "Amazing Grace",
            ["G C G D", "G Em D G"],
            [
                "amazing grace how sweet the sound",
                "that saved and set me free",
                "was blind but now can see",
            ],
        );
        let base = tokens.len() as u32;
        // second song's heading is unstyled lowercase text
        tokens.push(TextFragment::new(base, 2, "it is well", 180.0, 40.0));
        tokens.push(TextFragment::new(base + 1, 2, "D G D A", 50.0, 86.0));
        for row in 0..7 {
            tokens.push(TextFragment::new(
                base + 2 + row,
                2,
                format!("when peace like river row {row}"),
                50.0,
                100.0 + row as f32 * 14.0,
            ));
        }

        let plain = separate_songs(&tokens, &SegmenterConfig::default()).unwrap();
        assert_eq!(plain.songs.len(), 1);

        let config = SegmenterConfig {
            known_titles: vec!["It Is Well".to_string()],
            ..SegmenterConfig::default()
        };
        let with_list = separate_songs(&tokens, &config).unwrap();
        assert_eq!(with_list.songs.len(), 2);
        assert_eq!(with_list.songs[1].title, "it is well");
    }

    #[test]
    fn test_pattern_sets() {
        assert!(is_section_header("VERSE 1"));
        assert!(is_section_header("Chorus"));
        assert!(is_section_header("Pre-Chorus 2"));
        assert!(is_section_header("BRIDGE:"));
        assert!(!is_section_header("Amazing Grace"));

        assert!(is_ignorable("© 2001 Worship Together Music"));
        assert!(is_ignorable("CCLI License #1234567"));
        assert!(is_ignorable("42"));
        assert!(is_ignorable("www.worshiptogether.com"));
        assert!(is_ignorable("Key: G"));
        assert!(is_ignorable("Tempo 72"));
        assert!(is_ignorable("3/4"));
        assert!(is_ignorable("Words and Music by John Newton"));
        assert!(!is_ignorable("Amazing Grace"));

        assert!(is_chord_line("G C G D"));
        assert!(is_chord_line("D/F#  Em7  Csus4"));
        assert!(!is_chord_line("amazing grace how sweet the sound"));
    }
}
