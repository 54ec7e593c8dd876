//! # Error Types
//!
//! This module defines all error types for the chordsheet engine.
//!
//! Almost nothing in this crate errors: malformed chords are silently
//! filtered by the recognizer, unresolvable roots pass through transposition
//! unchanged, and an empty chord list yields a default key. The one condition
//! serious enough to abort is a document with nothing to segment.
//!
//! ## Usage
//! ```rust
//! use chordsheet::{segment_document, SheetError};
//!
//! match segment_document(&[]) {
//!     Ok(result) => println!("{} songs", result.songs.len()),
//!     Err(SheetError::NoExtractableContent) => {
//!         eprintln!("Document contains no text to segment");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    /// The document yielded no text fragments, or segmentation produced no
    /// valid song.
    ///
    /// This is the only condition that aborts an operation; everything else
    /// degrades to defaults or warnings.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::NoExtractableContent;
    /// assert_eq!(err.to_string(), "No extractable content: document contains no segmentable text");
    /// ```
    #[error("No extractable content: document contains no segmentable text")]
    NoExtractableContent,

    /// Invalid segmenter configuration.
    ///
    /// Occurs when a YAML config fails to parse or a threshold field is out
    /// of range (e.g., a zero minimum song length).
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::Config("min_song_tokens must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: min_song_tokens must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),
}
