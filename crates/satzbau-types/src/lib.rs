//! Shared types for bilingual (English → German) vocabulary drills.
//!
//! A [`VocabularyEntry`] is what the parser produces from one synonym
//! combination of a vocabulary row: the English term, the German term with its
//! article stripped, an optional plural/alternate form, the [`Gender`] read off
//! the article, and a sparse set of typed [`Attributes`].
//!
//! The grammatical vocabulary used by the generator lives here as well:
//! [`Subject`] pronouns with their [`Agreement`] class, [`Case`] and
//! [`Determiner`] for article lookup, and the output pair
//! [`GeneratedSentence`].
//!
//! ```rust
//! use satzbau_types::{Gender, Subject, Agreement};
//!
//! assert_eq!(Gender::from_article("Der"), Some(Gender::Masculine));
//! assert_eq!(Gender::from_article("Hund"), None);
//! assert_eq!(Subject::She.agreement(), Agreement::ThirdSingular);
//! ```

use std::fmt;

/// English infinitive marker that identifies a verb entry (`to see`).
pub const INFINITIVE_MARKER: &str = "to ";

/// German grammatical gender, derived from the definite article.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    /// Map a definite article token (`der`, `die`, `das`, any case) to its gender.
    pub fn from_article(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "der" => Some(Gender::Masculine),
            "die" => Some(Gender::Feminine),
            "das" => Some(Gender::Neuter),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        })
    }
}

/// Restriction a verb places on the pronoun that may act as its subject.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SubjectClass {
    /// People only: every pronoun except "it".
    Humanoid,
    /// Things only: "it" and "they".
    Inanimate,
}

impl SubjectClass {
    /// Parse the label used in the `subject` column.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "humanoid" | "human" | "person" | "people" => Some(SubjectClass::Humanoid),
            "inanimate" | "thing" | "object" => Some(SubjectClass::Inanimate),
            _ => None,
        }
    }

    pub fn admits(self, subject: Subject) -> bool {
        match self {
            SubjectClass::Humanoid => subject != Subject::It,
            SubjectClass::Inanimate => matches!(subject, Subject::It | Subject::They),
        }
    }
}

impl fmt::Display for SubjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SubjectClass::Humanoid => "humanoid",
            SubjectClass::Inanimate => "inanimate",
        })
    }
}

/// Typed attribute set attached to an entry.
///
/// Flags default to false/absent; the parser only sets what a row's flag
/// columns actually carry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attributes {
    /// Noun names an abstract concept; verb takes abstract objects.
    pub abstract_: bool,
    /// Noun names a concrete thing; verb takes concrete objects.
    pub concrete: bool,
    pub intransitive: bool,
    /// Verb introduces a "that"/"dass" clause.
    pub subordinate: bool,
    pub subject_class: Option<SubjectClass>,
    /// Quality tag a verb requires of its object (`liquid`).
    pub object_quality: Option<String>,
    /// Quality tags describing a noun, lower-cased.
    pub qualities: Vec<String>,
    /// Noun is used without an article (mass nouns, names).
    pub no_article: bool,
    /// Entry is rare; the parser drops it.
    pub uncommon: bool,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        *self == Attributes::default()
    }

    /// True when any flag is set that only makes sense on a verb.
    pub fn has_verb_marker(&self) -> bool {
        self.intransitive
            || self.subordinate
            || self.subject_class.is_some()
            || self.object_quality.is_some()
    }

    pub fn has_quality(&self, tag: &str) -> bool {
        self.qualities.iter().any(|q| q.eq_ignore_ascii_case(tag))
    }

    /// Compact `name` / `name=value` labels for the flags that are set.
    pub fn labels(&self) -> Vec<String> {
        let mut out = Vec::new();
        let flags = [
            (self.abstract_, "abstract"),
            (self.concrete, "concrete"),
            (self.intransitive, "intransitive"),
            (self.subordinate, "subordinate"),
            (self.no_article, "no article"),
            (self.uncommon, "uncommon"),
        ];
        for (set, name) in flags {
            if set {
                out.push(name.to_string());
            }
        }
        if let Some(class) = self.subject_class {
            out.push(format!("subject={class}"));
        }
        if let Some(quality) = &self.object_quality {
            out.push(format!("object={quality}"));
        }
        if !self.qualities.is_empty() {
            out.push(format!("qualities={}", self.qualities.join(";")));
        }
        out
    }
}

/// Coarse word class inferred from an entry's shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Other,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Transitivity {
    Transitive,
    Intransitive,
}

/// One parsed vocabulary item.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VocabularyEntry {
    /// English term.
    pub source: String,
    /// German term without its leading article.
    pub target: String,
    /// Plural or alternate German form without its leading article.
    pub target_plural: Option<String>,
    pub gender: Option<Gender>,
    pub attributes: Attributes,
}

impl VocabularyEntry {
    /// Entry with just the two terms and no grammatical information.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            target_plural: None,
            gender: None,
            attributes: Attributes::default(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn word_class(&self) -> WordClass {
        if self.gender.is_some() {
            WordClass::Noun
        } else if self.english_infinitive().is_some() || self.attributes.has_verb_marker() {
            WordClass::Verb
        } else {
            WordClass::Other
        }
    }

    pub fn is_noun(&self) -> bool {
        self.word_class() == WordClass::Noun
    }

    pub fn is_verb(&self) -> bool {
        self.word_class() == WordClass::Verb
    }

    /// `None` for anything that is not a verb.
    pub fn transitivity(&self) -> Option<Transitivity> {
        if !self.is_verb() {
            return None;
        }
        Some(if self.attributes.intransitive {
            Transitivity::Intransitive
        } else {
            Transitivity::Transitive
        })
    }

    /// The English verb phrase without the `to ` marker, if the source has one.
    pub fn english_infinitive(&self) -> Option<&str> {
        let source = self.source.trim_start();
        let head = source.get(..INFINITIVE_MARKER.len())?;
        if head.eq_ignore_ascii_case(INFINITIVE_MARKER) {
            Some(source[INFINITIVE_MARKER.len()..].trim())
        } else {
            None
        }
    }

    /// English verb phrase: the infinitive if marked, otherwise the whole source.
    pub fn english_verb(&self) -> &str {
        self.english_infinitive().unwrap_or(self.source.trim())
    }
}

/// Personal pronoun acting as a sentence subject.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Subject {
    I,
    You,
    He,
    She,
    It,
    We,
    They,
}

impl Subject {
    pub const ALL: [Subject; 7] = [
        Subject::I,
        Subject::You,
        Subject::He,
        Subject::She,
        Subject::It,
        Subject::We,
        Subject::They,
    ];

    pub fn english(self) -> &'static str {
        match self {
            Subject::I => "I",
            Subject::You => "you",
            Subject::He => "he",
            Subject::She => "she",
            Subject::It => "it",
            Subject::We => "we",
            Subject::They => "they",
        }
    }

    pub fn german(self) -> &'static str {
        match self {
            Subject::I => "ich",
            Subject::You => "du",
            Subject::He => "er",
            Subject::She => "sie",
            Subject::It => "es",
            Subject::We => "wir",
            Subject::They => "sie",
        }
    }

    pub fn agreement(self) -> Agreement {
        match self {
            Subject::I => Agreement::FirstSingular,
            Subject::You => Agreement::SecondSingular,
            Subject::He | Subject::She | Subject::It => Agreement::ThirdSingular,
            Subject::We | Subject::They => Agreement::Plural,
        }
    }
}

/// Person/number class that selects a verb ending.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Agreement {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    Plural,
}

impl Agreement {
    /// Column in the four-slot irregular tables.
    pub fn slot(self) -> usize {
        match self {
            Agreement::FirstSingular => 0,
            Agreement::SecondSingular => 1,
            Agreement::ThirdSingular => 2,
            Agreement::Plural => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Case {
    Nominative,
    Accusative,
}

/// Determiner class sampled for a noun phrase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Determiner {
    /// the / der
    Definite,
    /// a / ein
    Indefinite,
    /// no / kein
    Negative,
}

impl Determiner {
    pub const ALL: [Determiner; 3] = [
        Determiner::Definite,
        Determiner::Indefinite,
        Determiner::Negative,
    ];
}

/// Aligned English/German practice sentence.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GeneratedSentence {
    pub source: String,
    pub target: String,
}
