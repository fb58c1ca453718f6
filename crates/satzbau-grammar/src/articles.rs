//! Article lookup by determiner class, case and gender.

use satzbau_types::{Case, Determiner, Gender};

type Grid = [[[&'static str; 3]; 2]; 3];

/// Indexed `[determiner][case][gender]`.
const GERMAN: Grid = [
    [["der", "die", "das"], ["den", "die", "das"]],
    [["ein", "eine", "ein"], ["einen", "eine", "ein"]],
    [["kein", "keine", "kein"], ["keinen", "keine", "kein"]],
];

/// English articles do not inflect; `a` becomes `an` at render time.
const ENGLISH: Grid = [
    [["the"; 3]; 2],
    [["a"; 3]; 2],
    [["no"; 3]; 2],
];

fn lookup(grid: &Grid, determiner: Determiner, case: Case, gender: Gender) -> &'static str {
    let d = match determiner {
        Determiner::Definite => 0,
        Determiner::Indefinite => 1,
        Determiner::Negative => 2,
    };
    let c = match case {
        Case::Nominative => 0,
        Case::Accusative => 1,
    };
    let g = match gender {
        Gender::Masculine => 0,
        Gender::Feminine => 1,
        Gender::Neuter => 2,
    };
    grid[d][c][g]
}

pub fn german(determiner: Determiner, case: Case, gender: Gender) -> &'static str {
    lookup(&GERMAN, determiner, case, gender)
}

/// English article for `determiner` in front of `next_word`.
pub fn english(determiner: Determiner, case: Case, gender: Gender, next_word: &str) -> &'static str {
    let article = lookup(&ENGLISH, determiner, case, gender);
    if determiner == Determiner::Indefinite && starts_with_vowel(next_word) {
        "an"
    } else {
        article
    }
}

/// `a` or `an` for the word that follows.
pub fn indefinite_english(next_word: &str) -> &'static str {
    if starts_with_vowel(next_word) { "an" } else { "a" }
}

pub fn starts_with_vowel(word: &str) -> bool {
    word.trim_start()
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_grid_matches_declension() {
        use satzbau_types::Case::*;
        use satzbau_types::Determiner::*;
        use satzbau_types::Gender::*;

        let cases = [
            (Definite, Nominative, Masculine, "der"),
            (Definite, Accusative, Masculine, "den"),
            (Definite, Accusative, Feminine, "die"),
            (Definite, Accusative, Neuter, "das"),
            (Indefinite, Nominative, Masculine, "ein"),
            (Indefinite, Accusative, Masculine, "einen"),
            (Indefinite, Accusative, Feminine, "eine"),
            (Indefinite, Accusative, Neuter, "ein"),
            (Negative, Nominative, Feminine, "keine"),
            (Negative, Accusative, Masculine, "keinen"),
            (Negative, Accusative, Neuter, "kein"),
        ];
        for (det, case, gender, expected) in cases {
            assert_eq!(german(det, case, gender), expected, "{det:?} {case:?} {gender:?}");
        }
    }

    #[test]
    fn english_indefinite_alternates() {
        let acc = Case::Accusative;
        assert_eq!(english(Determiner::Indefinite, acc, Gender::Masculine, "attack"), "an");
        assert_eq!(english(Determiner::Indefinite, acc, Gender::Masculine, "Idea"), "an");
        assert_eq!(english(Determiner::Indefinite, acc, Gender::Neuter, "topic"), "a");
        assert_eq!(english(Determiner::Definite, acc, Gender::Neuter, "attack"), "the");
        assert_eq!(english(Determiner::Negative, acc, Gender::Feminine, "idea"), "no");
        assert_eq!(indefinite_english("umbrella"), "an");
        assert_eq!(indefinite_english(""), "a");
    }
}
