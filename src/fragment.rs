//! # Positioned Text Fragments
//!
//! Input records handed over by the PDF-extraction collaborator, plus the
//! line assembly shared by the segmenter and the renderer.
//!
//! Fragments arrive pre-sorted by (page, y within tolerance, x). This module
//! never re-sorts; it only groups consecutive fragments whose baselines fall
//! within a vertical tolerance into [`Line`]s and records each fragment's
//! character offset inside the assembled line text.

use serde::{Deserialize, Serialize};

/// A positioned run of text extracted from a PDF page.
///
/// Immutable input; the engine never mutates fragments, it only slices the
/// stream into per-song subsequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub id: u32,
    pub page: u32,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl TextFragment {
    /// Convenience constructor with body-text defaults (12pt, regular).
    pub fn new(id: u32, page: u32, text: impl Into<String>, x: f32, y: f32) -> Self {
        let text = text.into();
        let width = text.chars().count() as f32 * 6.0;
        Self {
            id,
            page,
            text,
            x,
            y,
            width,
            height: 12.0,
            font_size: 12.0,
            bold: false,
            italic: false,
        }
    }

    /// Mark the fragment bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Override the font size.
    pub fn sized(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

/// A visual line assembled from consecutive fragments on the same baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub page: u32,
    /// Baseline of the first fragment on the line.
    pub y: f32,
    /// Fragment texts joined with single spaces.
    pub text: String,
    /// True when any fragment on the line is bold.
    pub bold: bool,
    /// Largest font size among the line's fragments.
    pub max_font_size: f32,
    /// Index into the token slice and character offset of each fragment
    /// within `text`, in order.
    pub spans: Vec<LineSpan>,
}

/// Where one fragment landed inside its assembled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Index of the fragment within the token slice the line was built from.
    pub token_index: usize,
    /// Character offset of the fragment's text within `Line::text`.
    pub offset: usize,
}

/// Group consecutive fragments into lines by (page, y within `y_tolerance`).
///
/// Fragment texts on one line are joined with single spaces; each fragment's
/// starting character offset is recorded so chord positions found in the line
/// text can be mapped back to fragments.
pub fn assemble_lines(tokens: &[TextFragment], y_tolerance: f32) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for (i, frag) in tokens.iter().enumerate() {
        let same_line = lines
            .last()
            .map(|line| line.page == frag.page && (frag.y - line.y).abs() <= y_tolerance)
            .unwrap_or(false);

        if same_line {
            let line = lines.last_mut().unwrap();
            if !line.text.is_empty() {
                line.text.push(' ');
            }
            let offset = line.text.chars().count();
            line.text.push_str(&frag.text);
            line.bold |= frag.bold;
            line.max_font_size = line.max_font_size.max(frag.font_size);
            line.spans.push(LineSpan {
                token_index: i,
                offset,
            });
        } else {
            lines.push(Line {
                page: frag.page,
                y: frag.y,
                text: frag.text.clone(),
                bold: frag.bold,
                max_font_size: frag.font_size,
                spans: vec![LineSpan {
                    token_index: i,
                    offset: 0,
                }],
            });
        }
    }

    lines
}
