//! Randomized English/German practice sentences from parsed vocabulary.
//!
//! Three frames are supported (see [`SentenceKind`]):
//!
//! - intransitive: `subject verb` (`Sie ist hungrig.`)
//! - accusative: `subject verb article object` (`Er sieht den Angriff.`)
//! - subordinate: `subject verb, dass subject article object verb`, with the
//!   German finite verb moved to the end of the clause.
//!
//! Each call draws a verb and an object that satisfy the verb's constraints
//! (subject class, required object quality, abstract/concrete), conjugates
//! both languages and picks articles by determiner, case and gender. Empty
//! candidate pools fall back to fixed default words, so generation always
//! succeeds, even for an empty vocabulary.
//!
//! All randomness goes through a [`RandomSource`]; pass [`Scripted`] to pin
//! every draw in tests or [`RngSource::seeded`] for reproducible output.
//!
//! # Example
//! ```rust
//! use satzbau_synth::{RngSource, SentenceKind, generate_many};
//!
//! let entries = satzbau_vocab::parse("attack,der Angriff\ntopic,das Thema\n");
//! let mut rng = RngSource::seeded(42);
//! let sentences = generate_many(SentenceKind::Accusative, &entries, 3, &mut rng);
//! assert_eq!(sentences.len(), 3);
//! assert!(sentences.iter().all(|s| s.target.ends_with('.')));
//! ```

pub mod frames;
pub mod lexicon;
pub mod random;
pub mod render;

use std::fmt;
use std::str::FromStr;

use satzbau_types::{GeneratedSentence, VocabularyEntry};
use thiserror::Error;

pub use lexicon::{DEFAULT_INTRANSITIVE, DEFAULT_NOUN, DEFAULT_SUBORDINATE, DEFAULT_TRANSITIVE, Lexicon};
pub use random::{RandomSource, RngSource, Scripted};

/// Sentences produced per request when no usable count is given.
pub const DEFAULT_BATCH: usize = 5;

/// Sentence frame selector.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SentenceKind {
    Intransitive,
    Accusative,
    Subordinate,
}

impl SentenceKind {
    pub const ALL: [SentenceKind; 3] = [
        SentenceKind::Intransitive,
        SentenceKind::Accusative,
        SentenceKind::Subordinate,
    ];
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("unknown sentence kind {0:?} (expected intrans, acc or sub)")]
pub struct UnknownKind(pub String);

impl FromStr for SentenceKind {
    type Err = UnknownKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "intrans" | "intransitive" => Ok(SentenceKind::Intransitive),
            "acc" | "accusative" => Ok(SentenceKind::Accusative),
            "sub" | "subordinate" => Ok(SentenceKind::Subordinate),
            _ => Err(UnknownKind(raw.to_string())),
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SentenceKind::Intransitive => "intransitive",
            SentenceKind::Accusative => "accusative",
            SentenceKind::Subordinate => "subordinate",
        })
    }
}

/// Requested batch size, or [`DEFAULT_BATCH`] when missing or not positive.
pub fn batch_size(requested: Option<i64>) -> usize {
    match requested {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_BATCH),
        _ => DEFAULT_BATCH,
    }
}

impl Lexicon<'_> {
    pub fn generate<R: RandomSource + ?Sized>(&self, kind: SentenceKind, rng: &mut R) -> GeneratedSentence {
        match kind {
            SentenceKind::Intransitive => frames::intransitive(self, rng),
            SentenceKind::Accusative => frames::accusative(self, rng),
            SentenceKind::Subordinate => frames::subordinate(self, rng),
        }
    }
}

pub fn generate<R: RandomSource + ?Sized>(
    kind: SentenceKind,
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> GeneratedSentence {
    Lexicon::new(entries).generate(kind, rng)
}

/// `count` independent draws; repeats are allowed.
pub fn generate_many<R: RandomSource + ?Sized>(
    kind: SentenceKind,
    entries: &[VocabularyEntry],
    count: usize,
    rng: &mut R,
) -> Vec<GeneratedSentence> {
    let lexicon = Lexicon::new(entries);
    (0..count).map(|_| lexicon.generate(kind, rng)).collect()
}

pub fn generate_intransitive<R: RandomSource + ?Sized>(
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> GeneratedSentence {
    generate(SentenceKind::Intransitive, entries, rng)
}

pub fn generate_accusative<R: RandomSource + ?Sized>(
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> GeneratedSentence {
    generate(SentenceKind::Accusative, entries, rng)
}

pub fn generate_subordinate<R: RandomSource + ?Sized>(
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> GeneratedSentence {
    generate(SentenceKind::Subordinate, entries, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_aliases() {
        assert_eq!("acc".parse(), Ok(SentenceKind::Accusative));
        assert_eq!(" Subordinate ".parse(), Ok(SentenceKind::Subordinate));
        assert_eq!("intrans".parse(), Ok(SentenceKind::Intransitive));
        assert_eq!(
            "dative".parse::<SentenceKind>(),
            Err(UnknownKind("dative".into()))
        );
        for kind in SentenceKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn batch_size_defaults() {
        assert_eq!(batch_size(None), DEFAULT_BATCH);
        assert_eq!(batch_size(Some(0)), DEFAULT_BATCH);
        assert_eq!(batch_size(Some(-3)), DEFAULT_BATCH);
        assert_eq!(batch_size(Some(12)), 12);
    }

    #[test]
    fn many_draws_are_independent() {
        let entries = vec![
            VocabularyEntry::new("to sleep", "schlafen"),
            VocabularyEntry::new("to see", "sehen"),
        ];
        let mut rng = Scripted::new(vec![0, 0, 1, 2]);
        let sentences = generate_many(SentenceKind::Intransitive, &entries, 2, &mut rng);
        // neither entry is flagged intransitive, so the default verb is used
        assert_eq!(sentences[0].source, "I laugh.");
        assert_eq!(sentences[1].source, "I laugh.");
        assert_eq!(rng.consumed(), 2);
    }
}
