//! Header registry: which physical column feeds which logical field.

use satzbau_types::{Attributes, SubjectClass};
use tracing::debug;

/// Logical column a vocabulary list may carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Column {
    Source,
    Target,
    Alternate,
    Abstract,
    Concrete,
    Intransitive,
    Subordinate,
    Subject,
    Object,
    Qualities,
    NoArticle,
    Uncommon,
}

impl Column {
    /// Resolve a header cell to a column. Matching ignores case, `_`/`-` and
    /// repeated whitespace.
    pub fn from_header(name: &str) -> Option<Self> {
        let normalized = name
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let column = match normalized.as_str() {
            "en" | "english" | "source" | "term" => Column::Source,
            "de" | "german" | "target" | "translation" => Column::Target,
            "de other" | "alternate" | "plural" | "other" => Column::Alternate,
            "abstract" => Column::Abstract,
            "concrete" => Column::Concrete,
            "intransitive" => Column::Intransitive,
            "subordinate" => Column::Subordinate,
            "subject" => Column::Subject,
            "object" => Column::Object,
            "qualities" | "quality" => Column::Qualities,
            "no article" | "noarticle" => Column::NoArticle,
            "uncommon" => Column::Uncommon,
            _ => return None,
        };
        Some(column)
    }
}

/// Physical indices for every logical column present in a list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnMap {
    pub source: Option<usize>,
    pub target: Option<usize>,
    pub alternate: Option<usize>,
    flags: Vec<(Column, usize)>,
}

impl ColumnMap {
    /// Header-less layout: source, target, alternate; no flag columns.
    pub fn positional() -> Self {
        Self {
            source: Some(0),
            target: Some(1),
            alternate: Some(2),
            flags: Vec::new(),
        }
    }

    /// Build a map from a header row.
    ///
    /// Returns `None` unless the row names both a source and a target column,
    /// which is how a header is told apart from a data row.
    pub fn from_header(cells: &[String]) -> Option<Self> {
        let mut map = Self {
            source: None,
            target: None,
            alternate: None,
            flags: Vec::new(),
        };
        for (idx, cell) in cells.iter().enumerate() {
            match Column::from_header(cell) {
                Some(Column::Source) => {
                    map.source.get_or_insert(idx);
                }
                Some(Column::Target) => {
                    map.target.get_or_insert(idx);
                }
                Some(Column::Alternate) => {
                    map.alternate.get_or_insert(idx);
                }
                Some(flag) => map.flags.push((flag, idx)),
                None => debug!("ignoring unknown column {:?}", cell.trim()),
            }
        }
        (map.source.is_some() && map.target.is_some()).then_some(map)
    }

    pub fn flag_columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.flags.iter().map(|(column, _)| *column)
    }

    /// Decode the flag cells of a row. Empty and falsy cells leave the
    /// attribute at its default.
    pub fn attributes(&self, cells: &[String]) -> Attributes {
        let mut attrs = Attributes::default();
        for &(column, idx) in &self.flags {
            let Some(value) = cells.get(idx).map(|c| c.trim()) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match column {
                Column::Abstract => attrs.abstract_ |= truthy(value),
                Column::Concrete => attrs.concrete |= truthy(value),
                Column::Intransitive => attrs.intransitive |= truthy(value),
                Column::Subordinate => attrs.subordinate |= truthy(value),
                Column::NoArticle => attrs.no_article |= truthy(value),
                Column::Uncommon => attrs.uncommon |= truthy(value),
                Column::Subject => {
                    attrs.subject_class = SubjectClass::from_label(value);
                    if attrs.subject_class.is_none() {
                        debug!("unknown subject class {value:?}");
                    }
                }
                Column::Object => attrs.object_quality = Some(value.to_lowercase()),
                Column::Qualities => attrs.qualities = split_tags(value),
                Column::Source | Column::Target | Column::Alternate => {}
            }
        }
        attrs
    }
}

/// Numeric markers are true when non-zero; a few words are accepted too.
pub fn truthy(value: &str) -> bool {
    let value = value.trim();
    if let Ok(n) = value.parse::<i64>() {
        return n != 0;
    }
    matches!(
        value.to_lowercase().as_str(),
        "true" | "yes" | "y" | "x"
    )
}

fn split_tags(value: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in value.split(|c: char| matches!(c, ';' | '|' | '/' | ',') || c.is_whitespace()) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_aliases() {
        assert_eq!(Column::from_header(" English "), Some(Column::Source));
        assert_eq!(Column::from_header("de_other"), Some(Column::Alternate));
        assert_eq!(Column::from_header("No-Article"), Some(Column::NoArticle));
        assert_eq!(Column::from_header("notes"), None);
    }

    #[test]
    fn header_requires_source_and_target() {
        assert!(ColumnMap::from_header(&cells(&["attack", "der Angriff"])).is_none());
        assert!(ColumnMap::from_header(&cells(&["en", "plural"])).is_none());

        let map = ColumnMap::from_header(&cells(&["uncommon", "de", "en", "notes", "abstract"]))
            .expect("header");
        assert_eq!(map.source, Some(2));
        assert_eq!(map.target, Some(1));
        assert_eq!(map.alternate, None);
        assert_eq!(
            map.flag_columns().collect::<Vec<_>>(),
            vec![Column::Uncommon, Column::Abstract]
        );
    }

    #[test]
    fn decodes_flag_cells() {
        let map = ColumnMap::from_header(&cells(&[
            "en", "de", "abstract", "subject", "object", "qualities", "no article",
        ]))
        .expect("header");
        let attrs = map.attributes(&cells(&[
            "to drink", "trinken", "0", "Humanoid", "Liquid", "", "1",
        ]));
        assert!(!attrs.abstract_);
        assert_eq!(attrs.subject_class, Some(SubjectClass::Humanoid));
        assert_eq!(attrs.object_quality.as_deref(), Some("liquid"));
        assert!(attrs.qualities.is_empty());
        assert!(attrs.no_article);

        // Short rows simply leave the missing flags unset.
        assert!(map.attributes(&cells(&["water", "das Wasser"])).is_empty());
    }

    #[test]
    fn truthy_markers() {
        assert!(truthy("1"));
        assert!(truthy(" 2 "));
        assert!(truthy("yes"));
        assert!(!truthy("0"));
        assert!(!truthy("NaN"));
        assert!(!truthy("inf"));
        assert!(!truthy("no"));
        assert!(!truthy(""));
    }

    #[test]
    fn quality_tags_are_deduplicated() {
        assert_eq!(
            split_tags("Liquid; edible liquid|cold"),
            vec!["liquid", "edible", "cold"]
        );
    }
}
