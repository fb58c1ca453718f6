//! Parse comma-separated English/German vocabulary lists into entries.
//!
//! The format is deliberately loose: one item per line, an optional header
//! naming the columns, double-quoted cells that may contain commas, and
//! comma-separated synonym lists inside the term cells. Every combination of
//! source synonym × target synonym × alternate synonym becomes its own
//! [`VocabularyEntry`], in row order with the source synonym outermost.
//!
//! Parsing never fails. Missing columns become absent attributes, rows without
//! both terms are skipped, and rows flagged `uncommon` are dropped. The one
//! hard error, empty input, is checked separately by [`require_vocabulary`]
//! so callers decide where to reject it.
//!
//! # Example
//! ```rust
//! use satzbau_types::Gender;
//!
//! let entries = satzbau_vocab::parse("attack,der Angriff\n\"good, well\",gut\n");
//! assert_eq!(entries.len(), 3);
//! assert_eq!(entries[0].target, "Angriff");
//! assert_eq!(entries[0].gender, Some(Gender::Masculine));
//! assert_eq!(entries[2].source, "well");
//! assert_eq!(entries[2].gender, None);
//! ```

pub mod columns;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use satzbau_types::{Gender, VocabularyEntry};
use thiserror::Error;
use tracing::{debug, info};

pub use columns::{Column, ColumnMap};

/// Stand-in for commas inside quoted spans while a row is split.
const COMMA_MASK: char = '\u{1f}';

/// Spreadsheet exports often prefix the text with one.
const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Error, Eq, PartialEq)]
pub enum InputError {
    #[error("must provide vocabulary in csv format")]
    Empty,
}

/// Reject missing or whitespace-only vocabulary text.
pub fn require_vocabulary(text: &str) -> Result<&str, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}

/// Read and parse a vocabulary file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<VocabularyEntry>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("read vocabulary {}", path.display()))?;
    let entries = parse(&text);
    info!("parsed {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse vocabulary text into entries.
pub fn parse(raw: &str) -> Vec<VocabularyEntry> {
    let mut rows = raw
        .trim_start_matches(BYTE_ORDER_MARK)
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, split_row(line)));

    let Some((first_line, first)) = rows.next() else {
        return Vec::new();
    };
    let (columns, pending) = match ColumnMap::from_header(&first) {
        Some(map) => {
            debug!("line {first_line}: using header {first:?}");
            (map, None)
        }
        None => (ColumnMap::positional(), Some((first_line, first))),
    };

    let mut entries = Vec::new();
    for (line, cells) in pending.into_iter().chain(rows) {
        expand_row(line, &cells, &columns, &mut entries);
    }
    entries
}

/// Split a line on commas, leaving commas inside double quotes alone, then
/// drop the quote characters.
pub fn split_row(line: &str) -> Vec<String> {
    let mut in_quotes = false;
    let masked: String = line
        .chars()
        .map(|c| match c {
            '"' => {
                in_quotes = !in_quotes;
                c
            }
            ',' if in_quotes => COMMA_MASK,
            _ => c,
        })
        .collect();
    masked
        .split(',')
        .map(|cell| cell.replace(COMMA_MASK, ",").replace('"', ""))
        .collect()
}

/// Split a term cell into its synonyms. Commas inside parentheses belong to
/// an annotation and do not separate synonyms.
pub fn split_synonyms(cell: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, c) in cell.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                out.push(&cell[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    out.push(&cell[start..]);
    out.into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split a leading definite article off a German term.
///
/// Only the first word is inspected, and only when something follows it.
pub fn split_article(term: &str) -> (Option<Gender>, &str) {
    let term = term.trim();
    if let Some((head, rest)) = term.split_once(char::is_whitespace)
        && let Some(gender) = Gender::from_article(head)
    {
        let rest = rest.trim_start();
        if !rest.is_empty() {
            return (Some(gender), rest);
        }
    }
    (None, term)
}

/// Trim, collapse inner whitespace and drop trailing `(annotations)`.
pub fn clean_term(term: &str) -> String {
    let mut text = term.trim();
    while text.ends_with(')') {
        let Some(open) = text.rfind('(') else {
            break;
        };
        text = text[..open].trim_end();
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn expand_row(line: usize, cells: &[String], columns: &ColumnMap, out: &mut Vec<VocabularyEntry>) {
    let cell = |idx: Option<usize>| idx.and_then(|i| cells.get(i)).map_or("", String::as_str);

    let attributes = columns.attributes(cells);
    if attributes.uncommon {
        debug!("line {line}: skipping uncommon entry");
        return;
    }

    let sources = split_synonyms(cell(columns.source));
    let targets = split_synonyms(cell(columns.target));
    let mut alternates = split_synonyms(cell(columns.alternate));
    if alternates.is_empty() {
        alternates.push("");
    }

    let before = out.len();
    for source in &sources {
        let source = clean_term(source);
        for target in &targets {
            let (gender, bare) = split_article(target);
            let target = clean_term(bare);
            for alternate in &alternates {
                let plural = clean_term(split_article(alternate).1);
                if source.is_empty() || target.is_empty() {
                    continue;
                }
                out.push(VocabularyEntry {
                    source: source.clone(),
                    target: target.clone(),
                    target_plural: (!plural.is_empty()).then_some(plural),
                    gender,
                    attributes: attributes.clone(),
                });
            }
        }
    }
    if out.len() == before {
        debug!("line {line}: no usable term pair in {cells:?}");
    }
}
