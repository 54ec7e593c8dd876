//! # Semitone Transposition
//!
//! Pure functions mapping chords and pitch classes across semitone deltas.
//!
//! Spelling policy is fixed and sharp-preferred: the five black-key positions
//! always render with `#` in transposed output, never `b`, regardless of how
//! the input was spelled. Flat spellings in the input resolve through the
//! enharmonic table in [`PitchClass::from_spelling`] before any arithmetic,
//! so every valid root lands on a chromatic index.
//!
//! Transposition is best-effort by design: a symbol that cannot be resolved
//! to a pitch class passes through unchanged rather than erroring, so a batch
//! operation over a whole song never halts on one malformed token.

use crate::chord::{Accidental, Chord, PitchClass};
use crate::song::Song;

/// Shift a pitch class by any number of semitones, wrapping into 0..=11.
pub fn transpose_pitch_class(pc: PitchClass, semitones: i32) -> PitchClass {
    PitchClass::new(pc.index() as i32 + semitones)
}

/// Transpose a chord, returning a new chord with the extension preserved
/// verbatim and the bass (for slash chords) shifted independently.
///
/// A whole-octave delta (`n ≡ 0 mod 12`) returns the chord unchanged,
/// original spelling included, so a chart at transposition 0 renders
/// exactly as extracted.
///
/// # Example
/// ```
/// use chordsheet::{transpose_chord, Chord};
///
/// let chord = Chord::parse("Gsus4").unwrap();
/// assert_eq!(transpose_chord(&chord, 5).symbol(), "Csus4");
///
/// let slash = Chord::parse("D/F#").unwrap();
/// assert_eq!(transpose_chord(&slash, -1).symbol(), "C#/F");
/// ```
pub fn transpose_chord(chord: &Chord, semitones: i32) -> Chord {
    if semitones.rem_euclid(12) == 0 {
        return chord.clone();
    }

    let root = transpose_pitch_class(chord.root, semitones);
    let accidental = if root.is_black_key() {
        Accidental::Sharp
    } else {
        Accidental::Natural
    };
    let bass = chord
        .bass
        .as_ref()
        .map(|b| Box::new(transpose_chord(b, semitones)));

    let mut out = Chord {
        source_text: String::new(),
        root,
        accidental,
        extension: chord.extension.clone(),
        bass,
        source_position: chord.source_position,
        source_line: chord.source_line,
    };
    out.source_text = out.symbol();
    out
}

/// Transpose a chord symbol given as text.
///
/// Falls back to returning the input unchanged when the symbol does not
/// parse; the recognizer normally filters such strings out before they get
/// here, but a caller feeding raw text must never see a panic or an error.
///
/// # Example
/// ```
/// use chordsheet::transpose_symbol;
///
/// assert_eq!(transpose_symbol("Bb", 1), "B");
/// assert_eq!(transpose_symbol("not-a-chord", 3), "not-a-chord");
/// ```
pub fn transpose_symbol(symbol: &str, semitones: i32) -> String {
    match Chord::parse(symbol) {
        Some(chord) => transpose_chord(&chord, semitones).symbol(),
        None => symbol.to_string(),
    }
}

/// Produce a new [`Song`] with its transposition delta replaced.
///
/// The UI calls this repeatedly as the user steps the key up and down;
/// tokens, chords, and the detected original key are shared unchanged, and
/// the current key is always derivable from `original_key` + `transposition`
/// rather than stored.
pub fn transpose_song(song: &Song, semitones: i32) -> Song {
    let mut out = song.clone();
    out.transposition = semitones;
    out
}
