//! The three sentence frames and their word order in each language.
//!
//! Draw order per frame (each draw skipped when its pool is empty):
//!
//! | Frame | Draws |
//! |---|---|
//! | intransitive | verb, subject |
//! | accusative | verb, subject, determiner, object |
//! | subordinate | introducing verb, independent subject, verb, subject, determiner, object |

use satzbau_grammar::{articles, english, german};
use satzbau_types::{Case, Determiner, GeneratedSentence, Subject};

use crate::lexicon::{Lexicon, Noun, Verb, pick_determiner, pick_subject};
use crate::random::RandomSource;
use crate::render::render;

/// Clause-boundary token for the German side; attaches to the preceding word.
const DASS: &str = ", dass";
const THAT: &str = "that";

pub fn intransitive<R: RandomSource + ?Sized>(lexicon: &Lexicon<'_>, rng: &mut R) -> GeneratedSentence {
    let verb = lexicon.intransitive_verb(rng);
    let subject = pick_subject(verb.subject_class, false, rng);
    let agreement = subject.agreement();

    let source = render(&[subject.english(), &english::conjugate(verb.english, agreement)]);
    let target = render(&[
        subject.german(),
        &german::conjugate(verb.german, agreement).main_clause(),
    ]);
    GeneratedSentence { source, target }
}

pub fn accusative<R: RandomSource + ?Sized>(lexicon: &Lexicon<'_>, rng: &mut R) -> GeneratedSentence {
    let clause = Clause::draw(lexicon, rng);
    let agreement = clause.subject.agreement();
    let object = clause.object;

    // "no" is recast as "do not ... a/an ..." on the English side.
    let source = if clause.determiner == Some(Determiner::Negative) {
        render(&[
            clause.subject.english(),
            &english::negate(clause.verb.english, agreement),
            articles::indefinite_english(object.english),
            object.english,
        ])
    } else {
        render(&[
            clause.subject.english(),
            &english::conjugate(clause.verb.english, agreement),
            clause.english_article(),
            object.english,
        ])
    };

    let verb = german::conjugate(clause.verb.german, agreement);
    let target = render(&[
        clause.subject.german(),
        &verb.finite,
        clause.german_article(),
        object.german,
        &verb.complement,
    ]);
    GeneratedSentence { source, target }
}

pub fn subordinate<R: RandomSource + ?Sized>(lexicon: &Lexicon<'_>, rng: &mut R) -> GeneratedSentence {
    let intro = lexicon.subordinate_verb(rng);
    let independent = pick_subject(intro.subject_class, true, rng);
    let clause = Clause::draw(lexicon, rng);
    let agreement = clause.subject.agreement();

    let source = render(&[
        independent.english(),
        &english::conjugate(intro.english, independent.agreement()),
        THAT,
        clause.subject.english(),
        &english::conjugate(clause.verb.english, agreement),
        clause.english_article(),
        clause.object.english,
    ]);
    let target = render(&[
        independent.german(),
        &german::conjugate(intro.german, independent.agreement()).main_clause(),
        DASS,
        clause.subject.german(),
        clause.german_article(),
        clause.object.german,
        &german::conjugate(clause.verb.german, agreement).verb_final(),
    ]);
    GeneratedSentence { source, target }
}

/// Subject, accusative verb and object shared by two frames.
struct Clause<'a> {
    verb: Verb<'a>,
    subject: Subject,
    /// `None` when the object takes no article.
    determiner: Option<Determiner>,
    object: Noun<'a>,
}

impl<'a> Clause<'a> {
    fn draw<R: RandomSource + ?Sized>(lexicon: &Lexicon<'a>, rng: &mut R) -> Self {
        let verb = lexicon.transitive_verb(rng);
        let subject = pick_subject(verb.subject_class, false, rng);
        let determiner = pick_determiner(rng);
        let object = lexicon.object_for(&verb, rng);
        Self {
            verb,
            subject,
            determiner: (!object.no_article).then_some(determiner),
            object,
        }
    }

    fn english_article(&self) -> &'static str {
        self.determiner.map_or("", |d| {
            articles::english(d, Case::Accusative, self.object.gender, self.object.english)
        })
    }

    fn german_article(&self) -> &'static str {
        self.determiner
            .map_or("", |d| articles::german(d, Case::Accusative, self.object.gender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;
    use satzbau_types::{Attributes, Gender, SubjectClass, VocabularyEntry};

    fn vocabulary() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new("attack", "Angriff").with_gender(Gender::Masculine),
            VocabularyEntry::new("capability", "Fähigkeit").with_gender(Gender::Feminine),
            VocabularyEntry::new("water", "Wasser")
                .with_gender(Gender::Neuter)
                .with_attributes(Attributes {
                    no_article: true,
                    qualities: vec!["liquid".into()],
                    ..Attributes::default()
                }),
            VocabularyEntry::new("to see", "sehen"),
            VocabularyEntry::new("to drink", "trinken").with_attributes(Attributes {
                object_quality: Some("liquid".into()),
                ..Attributes::default()
            }),
            VocabularyEntry::new("to be hungry", "hungrig sein").with_attributes(Attributes {
                intransitive: true,
                subject_class: Some(SubjectClass::Humanoid),
                ..Attributes::default()
            }),
            VocabularyEntry::new("to hope", "hoffen").with_attributes(Attributes {
                subordinate: true,
                ..Attributes::default()
            }),
        ]
    }

    fn sentence(source: &str, target: &str) -> GeneratedSentence {
        GeneratedSentence {
            source: source.into(),
            target: target.into(),
        }
    }

    #[test]
    fn intransitive_phrasal_copula() {
        let entries = vocabulary();
        let lexicon = Lexicon::new(&entries);
        // verb 0, subject index 3 of the humanoid set (I, you, he, she, we, they)
        let mut rng = Scripted::new(vec![0, 3]);
        assert_eq!(intransitive(&lexicon, &mut rng), sentence("She is hungry.", "Sie ist hungrig."));
        let mut rng = Scripted::new(vec![0, 4]);
        assert_eq!(intransitive(&lexicon, &mut rng), sentence("We are hungry.", "Wir sind hungrig."));
    }

    #[test]
    fn accusative_definite_and_indefinite() {
        let entries = vocabulary();
        let lexicon = Lexicon::new(&entries);
        // see, he, definite, attack
        let mut rng = Scripted::new(vec![0, 2, 0, 0]);
        assert_eq!(
            accusative(&lexicon, &mut rng),
            sentence("He sees the attack.", "Er sieht den Angriff.")
        );
        // see, you, indefinite, attack
        let mut rng = Scripted::new(vec![0, 1, 1, 0]);
        assert_eq!(
            accusative(&lexicon, &mut rng),
            sentence("You see an attack.", "Du siehst einen Angriff.")
        );
        // see, I, indefinite, capability
        let mut rng = Scripted::new(vec![0, 0, 1, 1]);
        assert_eq!(
            accusative(&lexicon, &mut rng),
            sentence("I see a capability.", "Ich sehe eine Fähigkeit.")
        );
    }

    #[test]
    fn accusative_negation_is_recast_in_english() {
        let entries = vocabulary();
        let lexicon = Lexicon::new(&entries);
        // see, it, negative, attack
        let mut rng = Scripted::new(vec![0, 4, 2, 0]);
        assert_eq!(
            accusative(&lexicon, &mut rng),
            sentence("It does not see an attack.", "Es sieht keinen Angriff.")
        );
        // see, they, negative, capability
        let mut rng = Scripted::new(vec![0, 6, 2, 1]);
        assert_eq!(
            accusative(&lexicon, &mut rng),
            sentence("They do not see a capability.", "Sie sehen keine Fähigkeit.")
        );
    }

    #[test]
    fn no_article_nouns_drop_the_determiner() {
        let entries = vocabulary();
        let lexicon = Lexicon::new(&entries);
        // drink, we, negative (suppressed), water
        let mut rng = Scripted::new(vec![1, 5, 2, 0]);
        assert_eq!(
            accusative(&lexicon, &mut rng),
            sentence("We drink water.", "Wir trinken Wasser.")
        );
    }

    #[test]
    fn subordinate_moves_german_verb_last() {
        let entries = vocabulary();
        let lexicon = Lexicon::new(&entries);
        // hope, I | see, she, definite, capability
        let mut rng = Scripted::new(vec![0, 0, 0, 3, 0, 1]);
        assert_eq!(
            subordinate(&lexicon, &mut rng),
            sentence(
                "I hope that she sees the capability.",
                "Ich hoffe, dass sie die Fähigkeit sieht."
            )
        );
        // hope, they (index 5 once "it" is gone) | see, you, negative, attack
        let mut rng = Scripted::new(vec![0, 5, 0, 1, 2, 0]);
        assert_eq!(
            subordinate(&lexicon, &mut rng),
            sentence(
                "They hope that you see no attack.",
                "Sie hoffen, dass du keinen Angriff siehst."
            )
        );
    }

    #[test]
    fn empty_vocabulary_uses_defaults() {
        let lexicon = Lexicon::new(&[]);
        // intransitive: subject only
        let mut rng = Scripted::new(vec![2]);
        assert_eq!(intransitive(&lexicon, &mut rng), sentence("He laughs.", "Er lacht."));
        // accusative: subject, determiner
        let mut rng = Scripted::new(vec![0, 1]);
        assert_eq!(
            accusative(&lexicon, &mut rng),
            sentence("I see a dog.", "Ich sehe einen Hund.")
        );
        // subordinate: independent subject, subject, determiner
        let mut rng = Scripted::new(vec![1, 2, 0]);
        assert_eq!(
            subordinate(&lexicon, &mut rng),
            sentence(
                "You think that he sees the dog.",
                "Du denkst, dass er den Hund sieht."
            )
        );
    }
}
