//! # Chord Symbols and the Chord Recognizer
//!
//! This module defines the chord value types and the scanner that extracts
//! validated chord symbols from a line of chart text.
//!
//! ## Grammar
//! ```text
//! chord     := root extension? ("/" bass)?
//! root      := [A-G] accidental?
//! accidental:= "#" | "##" | "b" | "bb"
//! extension := run of known quality atoms (maj, min, m, sus, add, dim, aug,
//!              no, digits, #, b, +, -, parens)
//! bass      := root            (never itself a slash chord)
//! ```
//! A chord span must be a whole word: delimited by whitespace, line start or
//! end, or punctuation on both sides. Candidates that fail validation are
//! silently omitted; running text is full of incidental capital letters
//! ("A", "Go") that must not all become chords.
//!
//! ## Equality
//! Two chords are equal when they denote the same music: same root pitch
//! class (enharmonically), same extension, same bass. Source text, spelling
//! and positions do not participate, so `A#` == `Bb` and transposition
//! round-trips compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sharp-form display names, indexed by chromatic position (0 = C).
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-form display names for the five black-key positions; naturals keep
/// their sharp-form name.
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// One of the 12 chromatic tone positions, independent of octave.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wrap any semitone count into 0..=11. Always non-negative.
    pub fn new(index: i32) -> Self {
        Self(index.rem_euclid(12) as u8)
    }

    /// Chromatic index, 0 (C) through 11 (B).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Resolve a spelled root (`"C"`, `"F#"`, `"Bb"`, ...) to its pitch
    /// class. The five flat spellings of the enharmonic table normalize to
    /// the same index as their sharp twins. Unknown spellings (`"E#"`,
    /// `"Cbb"`, `"H"`) return `None`.
    pub fn from_spelling(s: &str) -> Option<Self> {
        let index = match s {
            "C" => 0,
            "C#" => 1,
            "Db" => 1,
            "D" => 2,
            "D#" => 3,
            "Eb" => 3,
            "E" => 4,
            "F" => 5,
            "F#" => 6,
            "Gb" => 6,
            "G" => 7,
            "G#" => 8,
            "Ab" => 8,
            "A" => 9,
            "A#" => 10,
            "Bb" => 10,
            "B" => 11,
            _ => return None,
        };
        Some(Self(index))
    }

    /// Sharp-preferred display name (`"A#"`, never `"Bb"`).
    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    /// Flat-form display name where one exists (`"Bb"`); naturals unchanged.
    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.0 as usize]
    }

    /// True for the five positions with no natural-letter name.
    pub fn is_black_key(self) -> bool {
        matches!(self.0, 1 | 3 | 6 | 8 | 10)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sharp_name())
    }
}

/// Accidental marker recorded from the source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

/// A validated chord symbol with its position in the source line.
///
/// Immutable once produced: transposition builds a new `Chord` rather than
/// mutating this one. `bass` is never itself a slash chord.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chord {
    /// The exact matched substring, pre-transposition.
    pub source_text: String,
    /// Chromatic pitch class of the root, accidental already applied.
    pub root: PitchClass,
    /// How the root was spelled in the source (display preference only).
    pub accidental: Accidental,
    /// Quality/extension substring, preserved verbatim through transposition.
    pub extension: String,
    /// Bass note of a slash chord.
    pub bass: Option<Box<Chord>>,
    /// Character offset of the span within the original line.
    pub source_position: usize,
    /// Index of the owning line within the song's assembled lines.
    pub source_line: usize,
}

impl Chord {
    /// Parse a standalone symbol (`"Gsus4"`, `"D/F#"`). Returns `None` for
    /// anything the chord grammar does not fully account for.
    ///
    /// # Example
    /// ```
    /// use chordsheet::Chord;
    ///
    /// assert!(Chord::parse("F#m7").is_some());
    /// assert!(Chord::parse("Amen").is_none());
    /// ```
    pub fn parse(symbol: &str) -> Option<Self> {
        parse_symbol(symbol.trim(), 0, 0)
    }

    /// Canonical display symbol: root spelling + extension, `/bass` appended
    /// for slash chords. Flat-spelled inputs keep their flat name here;
    /// transposition output is always sharp-preferred.
    pub fn symbol(&self) -> String {
        let root = match self.accidental {
            Accidental::Flat => self.root.flat_name(),
            _ => self.root.sharp_name(),
        };
        let mut s = format!("{}{}", root, self.extension);
        if let Some(bass) = &self.bass {
            s.push('/');
            s.push_str(&bass.symbol());
        }
        s
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.extension == other.extension && self.bass == other.bass
    }
}

impl Eq for Chord {}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Multi-character quality atoms, tried before single characters.
const EXTENSION_ATOMS: [&str; 7] = ["maj", "min", "sus", "add", "dim", "aug", "no"];

/// Validate an extension substring against the known quality grammar.
///
/// The run is consumed greedily: multi-character atoms first, then the
/// single-character set (m, M, digits, alterations, parens). Anything left
/// over makes the whole candidate invalid, so "Amen" (A + "men") or "Go"
/// (G + "o") never pass as chords.
fn is_valid_extension(ext: &str) -> bool {
    let mut rest = ext;
    'outer: while !rest.is_empty() {
        for atom in EXTENSION_ATOMS {
            if let Some(stripped) = rest.strip_prefix(atom) {
                rest = stripped;
                continue 'outer;
            }
        }
        let c = rest.chars().next().unwrap();
        match c {
            'm' | 'M' | '+' | '-' | '#' | 'b' | '(' | ')' | '0'..='9' => {
                rest = &rest[c.len_utf8()..];
            }
            _ => return false,
        }
    }
    true
}

/// Scanner over one candidate word, in the style of a hand-written lexer.
struct SymbolScanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> SymbolScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Consume `root accidental?` and resolve it to a known spelling.
    ///
    /// The grammar admits `##` and `bb` markers, but double accidentals are
    /// not in the known-spelling set, so they parse and then fail the
    /// validity check, which is the silent-filter behavior the recognizer
    /// wants for incidental text.
    fn scan_root(&mut self) -> Option<(PitchClass, Accidental)> {
        let letter = match self.peek() {
            Some(&c @ 'A'..='G') => {
                self.advance();
                c
            }
            _ => return None,
        };
        let mut spelling = String::from(letter);
        let mut accidental = Accidental::Natural;
        if let Some(&marker @ ('#' | 'b')) = self.peek() {
            self.advance();
            spelling.push(marker);
            accidental = if marker == '#' {
                Accidental::Sharp
            } else {
                Accidental::Flat
            };
            // A doubled marker stays in the candidate spelling; C## / Abb
            // are rejected by the spelling table below.
            if self.peek() == Some(&marker) {
                self.advance();
                spelling.push(marker);
            }
        }
        let pc = PitchClass::from_spelling(&spelling)?;
        Some((pc, accidental))
    }

    /// Consume the extension run: everything up to `/` or end of word.
    fn scan_extension(&mut self) -> String {
        let mut ext = String::new();
        while let Some(&c) = self.peek() {
            if c == '/' {
                break;
            }
            self.advance();
            ext.push(c);
        }
        ext
    }
}

/// Parse a whole word as a chord symbol. Returns `None` unless every
/// character is accounted for by the grammar and both roots (and the
/// extension) validate.
fn parse_symbol(word: &str, position: usize, line_index: usize) -> Option<Chord> {
    let mut scanner = SymbolScanner::new(word);
    let (root, accidental) = scanner.scan_root()?;
    let extension = scanner.scan_extension();
    if !is_valid_extension(&extension) {
        return None;
    }

    let bass = if scanner.peek() == Some(&'/') {
        scanner.advance();
        let bass_text: String = scanner.chars.clone().collect();
        let bass_len = bass_text.chars().count();
        let (bass_root, bass_accidental) = scanner.scan_root()?;
        // The bass note is root + accidental only; trailing characters mean
        // this is not a slash chord at all.
        if scanner.peek().is_some() {
            return None;
        }
        Some(Box::new(Chord {
            source_text: bass_text,
            root: bass_root,
            accidental: bass_accidental,
            extension: String::new(),
            bass: None,
            source_position: position + word.chars().count() - bass_len,
            source_line: line_index,
        }))
    } else {
        None
    };

    Some(Chord {
        source_text: word.to_string(),
        root,
        accidental,
        extension,
        bass,
        source_position: position,
        source_line: line_index,
    })
}

/// Punctuation that delimits a chord span on either side.
fn is_delimiter_punct(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '[' | ']' | '{' | '}' | '.' | ',' | ';' | ':' | '!' | '?' | '"' | '|'
    )
}

/// Extract every validated chord symbol from one line of text.
///
/// Deterministic and side-effect free. Each chord records the character
/// offset of its span in the original line so the export collaborator can
/// substitute transposed symbols in place.
///
/// # Example
/// ```
/// use chordsheet::extract_chords;
///
/// let chords = extract_chords("G          C         G");
/// let symbols: Vec<String> = chords.iter().map(|c| c.symbol()).collect();
/// assert_eq!(symbols, vec!["G", "C", "G"]);
/// assert_eq!(chords[0].source_position, 0);
/// assert_eq!(chords[1].source_position, 11);
/// assert_eq!(chords[2].source_position, 21);
/// ```
pub fn extract_chords(line: &str) -> Vec<Chord> {
    extract_chords_at(line, 0)
}

/// Like [`extract_chords`], tagging each chord with the owning line index.
pub fn extract_chords_at(line: &str, line_index: usize) -> Vec<Chord> {
    let mut chords = Vec::new();

    // Walk whitespace-delimited words, tracking character offsets in the
    // original line. Greedy longest match: the whole word is tried first,
    // then the word with delimiter punctuation stripped from both ends.
    let mut word = String::new();
    let mut word_start = 0usize;
    let chars: Vec<char> = line.chars().collect();
    for i in 0..=chars.len() {
        match chars.get(i) {
            Some(&ch) if !ch.is_whitespace() => {
                if word.is_empty() {
                    word_start = i;
                }
                word.push(ch);
            }
            _ => {
                if !word.is_empty() {
                    if let Some(chord) = match_word(&word, word_start, line_index) {
                        chords.push(chord);
                    }
                    word.clear();
                }
            }
        }
    }

    chords
}

/// Try a word as-is, then with delimiter punctuation trimmed off both ends.
fn match_word(word: &str, position: usize, line_index: usize) -> Option<Chord> {
    if let Some(chord) = parse_symbol(word, position, line_index) {
        return Some(chord);
    }

    let leading = word.chars().take_while(|&c| is_delimiter_punct(c)).count();
    let trailing = word
        .chars()
        .rev()
        .take_while(|&c| is_delimiter_punct(c))
        .count();
    let total = word.chars().count();
    if leading + trailing == 0 || leading + trailing >= total {
        return None;
    }
    let core: String = word.chars().skip(leading).take(total - leading - trailing).collect();
    parse_symbol(&core, position + leading, line_index)
}
