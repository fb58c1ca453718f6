//! Candidate pools per sentence role, with fixed fallbacks.

use satzbau_types::{Determiner, Gender, Subject, SubjectClass, Transitivity, VocabularyEntry};
use tracing::debug;

use crate::random::{RandomSource, choose};

/// A verb as the generator sees it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Verb<'a> {
    /// English phrase without `to`.
    pub english: &'a str,
    /// German phrase ending in the infinitive.
    pub german: &'a str,
    pub subject_class: Option<SubjectClass>,
    pub object_quality: Option<&'a str>,
    pub abstract_: bool,
    pub concrete: bool,
}

impl<'a> Verb<'a> {
    const fn fixed(english: &'a str, german: &'a str) -> Self {
        Self {
            english,
            german,
            subject_class: None,
            object_quality: None,
            abstract_: false,
            concrete: false,
        }
    }

    fn from_entry(entry: &'a VocabularyEntry) -> Self {
        let attrs = &entry.attributes;
        Self {
            english: entry.english_verb(),
            german: &entry.target,
            subject_class: attrs.subject_class,
            object_quality: attrs.object_quality.as_deref(),
            abstract_: attrs.abstract_,
            concrete: attrs.concrete,
        }
    }
}

/// A noun usable as an object.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Noun<'a> {
    pub english: &'a str,
    pub german: &'a str,
    pub gender: Gender,
    pub no_article: bool,
    pub abstract_: bool,
    pub concrete: bool,
    pub qualities: &'a [String],
}

impl<'a> Noun<'a> {
    fn from_entry(entry: &'a VocabularyEntry) -> Option<Self> {
        let attrs = &entry.attributes;
        Some(Self {
            english: &entry.source,
            german: &entry.target,
            gender: entry.gender?,
            no_article: attrs.no_article,
            abstract_: attrs.abstract_,
            concrete: attrs.concrete,
            qualities: &attrs.qualities,
        })
    }

    fn has_quality(&self, tag: &str) -> bool {
        self.qualities.iter().any(|q| q.eq_ignore_ascii_case(tag))
    }
}

pub const DEFAULT_INTRANSITIVE: Verb<'static> = Verb::fixed("laugh", "lachen");
pub const DEFAULT_TRANSITIVE: Verb<'static> = Verb::fixed("see", "sehen");
pub const DEFAULT_SUBORDINATE: Verb<'static> = Verb::fixed("think", "denken");
pub const DEFAULT_NOUN: Noun<'static> = Noun {
    english: "dog",
    german: "Hund",
    gender: Gender::Masculine,
    no_article: false,
    abstract_: false,
    concrete: true,
    qualities: &[],
};

/// Vocabulary split into the pools each frame draws from.
#[derive(Clone, Debug, Default)]
pub struct Lexicon<'a> {
    nouns: Vec<Noun<'a>>,
    intransitive: Vec<Verb<'a>>,
    transitive: Vec<Verb<'a>>,
    subordinate: Vec<Verb<'a>>,
}

impl<'a> Lexicon<'a> {
    pub fn new(entries: &'a [VocabularyEntry]) -> Self {
        let mut lexicon = Self::default();
        for entry in entries {
            if entry.is_noun() {
                lexicon.nouns.extend(Noun::from_entry(entry));
                continue;
            }
            let Some(transitivity) = entry.transitivity() else {
                continue;
            };
            let verb = Verb::from_entry(entry);
            if entry.attributes.subordinate {
                lexicon.subordinate.push(verb);
            } else if transitivity == Transitivity::Intransitive {
                lexicon.intransitive.push(verb);
            } else {
                lexicon.transitive.push(verb);
            }
        }
        debug!(
            nouns = lexicon.nouns.len(),
            intransitive = lexicon.intransitive.len(),
            transitive = lexicon.transitive.len(),
            subordinate = lexicon.subordinate.len(),
            "lexicon built"
        );
        lexicon
    }

    pub fn nouns(&self) -> &[Noun<'a>] {
        &self.nouns
    }

    pub fn intransitive_verb<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Verb<'a> {
        choose(rng, &self.intransitive)
            .copied()
            .unwrap_or(DEFAULT_INTRANSITIVE)
    }

    pub fn transitive_verb<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Verb<'a> {
        choose(rng, &self.transitive)
            .copied()
            .unwrap_or(DEFAULT_TRANSITIVE)
    }

    pub fn subordinate_verb<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Verb<'a> {
        choose(rng, &self.subordinate)
            .copied()
            .unwrap_or(DEFAULT_SUBORDINATE)
    }

    /// Object for `verb`: nouns carrying its required quality tag if it names
    /// one, otherwise nouns on the same side of the abstract/concrete split.
    pub fn object_for<R: RandomSource + ?Sized>(&self, verb: &Verb<'_>, rng: &mut R) -> Noun<'a> {
        let candidates: Vec<Noun<'a>> = match (verb.object_quality, verb.abstract_, verb.concrete) {
            (Some(tag), _, _) => self.filter_nouns(|n| n.has_quality(tag)),
            (None, true, false) => self.filter_nouns(|n| n.abstract_),
            (None, false, true) => self.filter_nouns(|n| n.concrete),
            _ => self.nouns.clone(),
        };
        choose(rng, &candidates).copied().unwrap_or(DEFAULT_NOUN)
    }

    fn filter_nouns(&self, keep: impl Fn(&Noun<'a>) -> bool) -> Vec<Noun<'a>> {
        self.nouns.iter().filter(|n| keep(n)).copied().collect()
    }
}

/// Subject compatible with a verb's subject class. The independent subject of
/// a subordinate sentence passes `exclude_it`.
pub fn pick_subject<R: RandomSource + ?Sized>(
    class: Option<SubjectClass>,
    exclude_it: bool,
    rng: &mut R,
) -> Subject {
    let candidates: Vec<Subject> = Subject::ALL
        .into_iter()
        .filter(|s| class.is_none_or(|c| c.admits(*s)))
        .filter(|s| !(exclude_it && *s == Subject::It))
        .collect();
    choose(rng, &candidates).copied().unwrap_or(Subject::I)
}

pub fn pick_determiner<R: RandomSource + ?Sized>(rng: &mut R) -> Determiner {
    choose(rng, &Determiner::ALL)
        .copied()
        .unwrap_or(Determiner::Definite)
}
