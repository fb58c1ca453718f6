//! English present-tense agreement.
//!
//! Only the head word of a verb phrase changes: `be hungry` → `is hungry`,
//! `look after` → `looks after`. The irregular table is consulted before the
//! spelling rules, which makes the copula and `be ___` phrases fall out of the
//! same path.

use satzbau_types::Agreement;

use crate::{join_words, split_head};

/// Base form → forms for `[I, you, he/she/it, we/they]`.
const IRREGULAR: &[(&str, [&str; 4])] = &[
    ("be", ["am", "are", "is", "are"]),
    ("have", ["have", "have", "has", "have"]),
    ("do", ["do", "do", "does", "do"]),
    ("go", ["go", "go", "goes", "go"]),
];

/// Endings that take `-es` in the third person singular.
const SIBILANT_ENDINGS: &[&str] = &["ch", "sh", "ss", "x", "zz"];

fn irregular(base: &str) -> Option<&'static [&'static str; 4]> {
    let lower = base.to_lowercase();
    IRREGULAR
        .iter()
        .find(|(verb, _)| *verb == lower)
        .map(|(_, forms)| forms)
}

fn strip_marker(phrase: &str) -> &str {
    let phrase = phrase.trim();
    match phrase.get(..3) {
        Some(head) if head.eq_ignore_ascii_case("to ") => phrase[3..].trim_start(),
        _ => phrase,
    }
}

/// Conjugate an infinitive phrase (with or without `to`) for a subject.
pub fn conjugate(phrase: &str, agreement: Agreement) -> String {
    let (head, rest) = split_head(strip_marker(phrase));
    join_words(&conjugate_word(head, agreement), rest)
}

fn conjugate_word(verb: &str, agreement: Agreement) -> String {
    if let Some(forms) = irregular(verb) {
        return forms[agreement.slot()].to_string();
    }
    match agreement {
        Agreement::ThirdSingular => third_singular(verb),
        _ => verb.to_string(),
    }
}

/// Regular third-person-singular spelling.
pub fn third_singular(verb: &str) -> String {
    let lower = verb.to_lowercase();
    if SIBILANT_ENDINGS.iter().any(|end| lower.ends_with(end)) {
        return format!("{verb}es");
    }
    let mut chars = lower.chars().rev();
    if let (Some('y'), Some(prev)) = (chars.next(), chars.next())
        && !is_vowel(prev)
    {
        return format!("{}ies", &verb[..verb.len() - 1]);
    }
    format!("{verb}s")
}

/// Negated form: `do not see`, `does not see`, `am not hungry`.
pub fn negate(phrase: &str, agreement: Agreement) -> String {
    let phrase = strip_marker(phrase);
    let (head, rest) = split_head(phrase);
    if is_copula(head) {
        let be = conjugate_word(head, agreement);
        return join_words(&format!("{be} not"), rest);
    }
    let auxiliary = match agreement {
        Agreement::ThirdSingular => "does",
        _ => "do",
    };
    format!("{auxiliary} not {}", phrase.split_whitespace().collect::<Vec<_>>().join(" "))
}

pub fn is_copula(verb: &str) -> bool {
    verb.eq_ignore_ascii_case("be")
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;
    use satzbau_types::Agreement::*;

    #[test]
    fn regular_spelling() {
        let cases = [
            ("see", "sees"),
            ("watch", "watches"),
            ("wash", "washes"),
            ("kiss", "kisses"),
            ("fix", "fixes"),
            ("buzz", "buzzes"),
            ("carry", "carries"),
            ("play", "plays"),
            ("buy", "buys"),
            ("laugh", "laughs"),
        ];
        for (base, expected) in cases {
            assert_eq!(third_singular(base), expected);
        }
    }

    #[test]
    fn only_third_singular_changes() {
        for agreement in [FirstSingular, SecondSingular, Plural] {
            assert_eq!(conjugate("to see", agreement), "see");
        }
        assert_eq!(conjugate("to see", ThirdSingular), "sees");
        assert_eq!(conjugate("look after", ThirdSingular), "looks after");
    }

    #[test]
    fn copula_phrases() {
        assert_eq!(conjugate("to be hungry", FirstSingular), "am hungry");
        assert_eq!(conjugate("be hungry", SecondSingular), "are hungry");
        assert_eq!(conjugate("be afraid of", ThirdSingular), "is afraid of");
        assert_eq!(conjugate("be", Plural), "are");
        assert_eq!(conjugate("have", ThirdSingular), "has");
        assert_eq!(conjugate("go", ThirdSingular), "goes");
    }

    #[test]
    fn negation() {
        assert_eq!(negate("see", FirstSingular), "do not see");
        assert_eq!(negate("to see", ThirdSingular), "does not see");
        assert_eq!(negate("look after", Plural), "do not look after");
        assert_eq!(negate("be fond of", ThirdSingular), "is not fond of");
        assert_eq!(negate("be", FirstSingular), "am not");
    }
}
