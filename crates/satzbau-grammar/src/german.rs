//! German present-tense conjugation.
//!
//! A German verb phrase ends in its infinitive; anything before it
//! (`hungrig sein`, `gern haben`) is a complement that stays put while the
//! finite verb moves. [`Conjugated`] keeps the two apart so callers can render
//! main-clause order (`bin hungrig`) or verb-final order (`hungrig bin`).

use satzbau_types::Agreement;

use crate::join_words;

/// Infinitive → forms for `[ich, du, er/sie/es, wir/sie]`.
const IRREGULAR: &[(&str, [&str; 4])] = &[
    ("sein", ["bin", "bist", "ist", "sind"]),
    ("haben", ["habe", "hast", "hat", "haben"]),
    ("werden", ["werde", "wirst", "wird", "werden"]),
    ("wissen", ["weiß", "weißt", "weiß", "wissen"]),
    ("mögen", ["mag", "magst", "mag", "mögen"]),
    ("tun", ["tue", "tust", "tut", "tun"]),
    ("sehen", ["sehe", "siehst", "sieht", "sehen"]),
    ("lesen", ["lese", "liest", "liest", "lesen"]),
    ("essen", ["esse", "isst", "isst", "essen"]),
    ("vergessen", ["vergesse", "vergisst", "vergisst", "vergessen"]),
    ("geben", ["gebe", "gibst", "gibt", "geben"]),
    ("nehmen", ["nehme", "nimmst", "nimmt", "nehmen"]),
    ("sprechen", ["spreche", "sprichst", "spricht", "sprechen"]),
    ("treffen", ["treffe", "triffst", "trifft", "treffen"]),
    ("helfen", ["helfe", "hilfst", "hilft", "helfen"]),
    ("schlafen", ["schlafe", "schläfst", "schläft", "schlafen"]),
    ("fahren", ["fahre", "fährst", "fährt", "fahren"]),
    ("tragen", ["trage", "trägst", "trägt", "tragen"]),
    ("laufen", ["laufe", "läufst", "läuft", "laufen"]),
    ("halten", ["halte", "hältst", "hält", "halten"]),
];

/// A conjugated verb phrase: finite verb plus any complement words.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conjugated {
    pub finite: String,
    pub complement: String,
}

impl Conjugated {
    /// Verb-second order: `bin hungrig`.
    pub fn main_clause(&self) -> String {
        join_words(&self.finite, &self.complement)
    }

    /// Verb-final order: `hungrig bin`.
    pub fn verb_final(&self) -> String {
        join_words(&self.complement, &self.finite).trim().to_string()
    }
}

/// Conjugate a German verb phrase whose last word is the infinitive.
pub fn conjugate(phrase: &str, agreement: Agreement) -> Conjugated {
    let phrase = phrase.split_whitespace().collect::<Vec<_>>();
    let Some((infinitive, complement)) = phrase.split_last() else {
        return Conjugated {
            finite: String::new(),
            complement: String::new(),
        };
    };
    Conjugated {
        finite: finite_form(infinitive, agreement),
        complement: complement.join(" "),
    }
}

/// Finite present-tense form of a single infinitive.
pub fn finite_form(infinitive: &str, agreement: Agreement) -> String {
    let lower = infinitive.to_lowercase();
    if let Some((_, forms)) = IRREGULAR.iter().find(|(verb, _)| *verb == lower) {
        return forms[agreement.slot()].to_string();
    }

    let stem = stem(infinitive);
    match agreement {
        Agreement::Plural => infinitive.to_string(),
        Agreement::FirstSingular => match infinitive.strip_suffix("eln") {
            // sammeln → ich sammle
            Some(base) => format!("{base}le"),
            None => format!("{stem}e"),
        },
        Agreement::SecondSingular if needs_linking_e(stem) => format!("{stem}est"),
        Agreement::SecondSingular if ends_in_sibilant(stem) => format!("{stem}t"),
        Agreement::SecondSingular => format!("{stem}st"),
        Agreement::ThirdSingular if needs_linking_e(stem) => format!("{stem}et"),
        Agreement::ThirdSingular => format!("{stem}t"),
    }
}

/// Infinitive minus `-en`, or minus `-n` for `-eln`/`-ern` verbs.
pub fn stem(infinitive: &str) -> &str {
    infinitive
        .strip_suffix("en")
        .or_else(|| infinitive.strip_suffix('n'))
        .unwrap_or(infinitive)
}

/// Stems in `d`/`t`, or in `m`/`n` after a consonant (`atm`, `öffn`,
/// `rechn`), keep an `e` before `-st` and `-t`.
fn needs_linking_e(stem: &str) -> bool {
    let mut rev = stem.chars().rev();
    let (Some(last), Some(prev)) = (rev.next(), rev.next()) else {
        return false;
    };
    match last {
        'd' | 't' => true,
        'm' | 'n' => match prev {
            'l' | 'r' | 'm' | 'n' => false,
            'h' => rev.next() == Some('c'),
            c => !is_vowel(c),
        },
        _ => false,
    }
}

fn ends_in_sibilant(stem: &str) -> bool {
    stem.ends_with(['s', 'ß', 'x', 'z'])
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ä' | 'ö' | 'ü' | 'y')
}
