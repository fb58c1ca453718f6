//! Fixed grammar tables for English → German sentence drills.
//!
//! Everything here is immutable data plus pure functions over it:
//!
//! - [`articles`]: the determiner × case × gender article grid for both
//!   languages, including English `a`/`an` selection.
//! - [`english`]: present-tense agreement for English verb phrases
//!   (irregular table first, then third-person-singular spelling rules) and
//!   the `do not` negation form.
//! - [`german`]: present-tense conjugation of German infinitives (irregular
//!   table first, then stem + ending) and the split between the finite verb
//!   and its complements needed for verb-final subordinate clauses.
//!
//! ```rust
//! use satzbau_grammar::{articles, english, german};
//! use satzbau_types::{Agreement, Case, Determiner, Gender};
//!
//! assert_eq!(articles::german(Determiner::Negative, Case::Accusative, Gender::Masculine), "keinen");
//! assert_eq!(english::conjugate("watch", Agreement::ThirdSingular), "watches");
//! assert_eq!(german::conjugate("hungrig sein", Agreement::FirstSingular).main_clause(), "bin hungrig");
//! ```

pub mod articles;
pub mod english;
pub mod german;

/// Split off the first word of a phrase: `("be", "hungry")`.
pub(crate) fn split_head(phrase: &str) -> (&str, &str) {
    match phrase.trim().split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (phrase.trim(), ""),
    }
}

pub(crate) fn join_words(first: &str, rest: &str) -> String {
    if rest.is_empty() {
        first.to_string()
    } else {
        format!("{first} {rest}")
    }
}
