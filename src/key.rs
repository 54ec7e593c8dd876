//! # Key Detection
//!
//! Scores candidate keys by weighted scale-degree membership of the observed
//! chord roots and returns the best match with a confidence value.
//!
//! Only each chord's primary root participates; bass notes of slash chords
//! carry no vote. The candidate set is an allow-list of keys idiomatic to the
//! worship repertoire (12 majors would all be theoretically possible, but
//! charts in this corpus live in a narrower set), and callers can substitute
//! their own list via [`detect_key_in`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chord::{Chord, PitchClass};

/// Semitone intervals of the major scale degrees from the tonic.
const MAJOR_DEGREES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone intervals of the natural-minor scale degrees from the tonic.
const MINOR_DEGREES: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Per-degree weights, aligned with the interval arrays above.
///
/// Graded by functional strength: tonic, then dominant and subdominant, then
/// the weaker degrees. A chord root on the tonic is the strongest single
/// piece of evidence for a key; a root on the leading tone barely counts.
const DEGREE_WEIGHTS: [f32; 7] = [1.0, 0.5, 0.5, 0.7, 0.8, 0.6, 0.4];

/// A candidate key: a tonic pitch class plus major/minor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCandidate {
    pub tonic: PitchClass,
    pub is_minor: bool,
}

impl KeyCandidate {
    pub fn major(tonic: PitchClass) -> Self {
        Self {
            tonic,
            is_minor: false,
        }
    }

    pub fn minor(tonic: PitchClass) -> Self {
        Self {
            tonic,
            is_minor: true,
        }
    }

    /// The relative natural minor (major keys) or relative major (minor
    /// keys) sharing this key's pitch-class set.
    pub fn relative(self) -> Self {
        if self.is_minor {
            Self::major(PitchClass::new(self.tonic.index() as i32 + 3))
        } else {
            Self::minor(PitchClass::new(self.tonic.index() as i32 - 3))
        }
    }

    /// The seven scale-degree pitch classes of this key, tonic first.
    pub fn scale_degrees(self) -> [PitchClass; 7] {
        let intervals = if self.is_minor {
            MINOR_DEGREES
        } else {
            MAJOR_DEGREES
        };
        let mut degrees = [PitchClass::default(); 7];
        for (slot, interval) in degrees.iter_mut().zip(intervals) {
            *slot = PitchClass::new(self.tonic.index() as i32 + interval as i32);
        }
        degrees
    }

    /// Display name: `"C"`, `"F#m"`, `"Bbm"`.
    pub fn name(self) -> String {
        if self.is_minor {
            format!("{}m", self.tonic.sharp_name())
        } else {
            self.tonic.sharp_name().to_string()
        }
    }
}

impl fmt::Display for KeyCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of key detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyDetection {
    pub key: KeyCandidate,
    /// Winning score divided by the number of chord roots, clamped to [0,1].
    pub confidence: f32,
    /// Every candidate's accumulated score, in candidate order.
    pub per_key_scores: Vec<(KeyCandidate, f32)>,
}

impl KeyDetection {
    /// C major at zero confidence: the answer for a chart with no chords.
    fn default_key() -> Self {
        Self {
            key: KeyCandidate::major(PitchClass::new(0)),
            confidence: 0.0,
            per_key_scores: Vec::new(),
        }
    }
}

/// Build the default candidate allow-list: the majors common in the target
/// repertoire, in fixed preference order, each paired with its relative
/// natural minor.
pub fn default_key_candidates() -> Vec<KeyCandidate> {
    let majors = ["C", "G", "D", "A", "E", "F", "Bb", "Eb", "Ab", "B"];
    let tonics: Vec<PitchClass> = majors
        .iter()
        .filter_map(|name| PitchClass::from_spelling(name))
        .collect();
    let mut candidates = Vec::with_capacity(tonics.len() * 2);
    candidates.extend(tonics.iter().map(|&t| KeyCandidate::major(t)));
    candidates.extend(tonics.iter().map(|&t| KeyCandidate::major(t).relative()));
    candidates
}

/// Detect the key of a chord sequence using the default candidate list.
///
/// # Example
/// ```
/// use chordsheet::detect_key_from_symbols;
///
/// let detection = detect_key_from_symbols(&["C", "G", "Am", "F"]);
/// assert_eq!(detection.key.name(), "C");
/// assert!(detection.confidence >= 0.7);
/// ```
pub fn detect_key(chords: &[Chord]) -> KeyDetection {
    detect_key_in(chords, &default_key_candidates())
}

/// Detect the key against an explicit candidate allow-list.
///
/// Each observed chord root that lands on one of a candidate's seven scale
/// degrees adds that degree's weight to the candidate's score. Ties prefer
/// major over relative minor, then the earlier candidate. Empty input (or an
/// empty candidate list) yields C major at confidence 0 rather than failing.
pub fn detect_key_in(chords: &[Chord], candidates: &[KeyCandidate]) -> KeyDetection {
    if chords.is_empty() || candidates.is_empty() {
        return KeyDetection::default_key();
    }

    // Bass notes of slash chords are ignored: only primary roots vote.
    let roots: Vec<PitchClass> = chords.iter().map(|c| c.root).collect();

    let per_key_scores: Vec<(KeyCandidate, f32)> = candidates
        .iter()
        .map(|&candidate| {
            let degrees = candidate.scale_degrees();
            let score = roots
                .iter()
                .map(|root| {
                    degrees
                        .iter()
                        .position(|d| d == root)
                        .map(|i| DEGREE_WEIGHTS[i])
                        .unwrap_or(0.0)
                })
                .sum();
            (candidate, score)
        })
        .collect();

    let mut best = per_key_scores[0];
    for &(candidate, score) in &per_key_scores[1..] {
        let tied = (score - best.1).abs() <= f32::EPSILON * 8.0;
        if score > best.1 && !tied {
            best = (candidate, score);
        } else if tied && best.0.is_minor && !candidate.is_minor {
            best = (candidate, score);
        }
    }

    let confidence = (best.1 / roots.len() as f32).clamp(0.0, 1.0);
    KeyDetection {
        key: best.0,
        confidence,
        per_key_scores,
    }
}

/// Convenience over raw symbol text: symbols that fail the chord grammar are
/// skipped, mirroring the recognizer's silent filtering.
pub fn detect_key_from_symbols<S: AsRef<str>>(symbols: &[S]) -> KeyDetection {
    let chords: Vec<Chord> = symbols
        .iter()
        .filter_map(|s| Chord::parse(s.as_ref()))
        .collect();
    detect_key(&chords)
}
