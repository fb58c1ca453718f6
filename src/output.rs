//! Plain-text serializations of generated sentences and parsed entries.

use std::borrow::Cow;
use std::io::{self, Write};

use clap::ValueEnum;
use satzbau_types::{GeneratedSentence, VocabularyEntry};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Comma-separated rows.
    #[default]
    Csv,
    /// Columns padded to their widest cell.
    Table,
}

/// Quote-wrap a field that contains the delimiter or a quote.
pub fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

pub fn write_sentences<W: Write>(
    out: &mut W,
    sentences: &[GeneratedSentence],
    format: Format,
) -> io::Result<()> {
    let rows: Vec<Vec<&str>> = sentences
        .iter()
        .map(|s| vec![s.source.as_str(), s.target.as_str()])
        .collect();
    write_rows(out, &rows, format)
}

/// One row per entry: source, target, plural, gender, attribute labels.
pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[VocabularyEntry],
    format: Format,
) -> io::Result<()> {
    let cells: Vec<[String; 5]> = entries
        .iter()
        .map(|e| {
            [
                e.source.clone(),
                e.target.clone(),
                e.target_plural.clone().unwrap_or_default(),
                e.gender.map(|g| g.to_string()).unwrap_or_default(),
                e.attributes.labels().join(", "),
            ]
        })
        .collect();
    let rows: Vec<Vec<&str>> = cells
        .iter()
        .map(|row| row.iter().map(String::as_str).collect())
        .collect();
    write_rows(out, &rows, format)
}

fn write_rows<W: Write>(out: &mut W, rows: &[Vec<&str>], format: Format) -> io::Result<()> {
    match format {
        Format::Csv => {
            for row in rows {
                let fields: Vec<Cow<'_, str>> = row.iter().map(|f| csv_field(f)).collect();
                writeln!(out, "{}", fields.join(","))?;
            }
        }
        Format::Table => {
            let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
            let widths: Vec<usize> = (0..columns)
                .map(|col| {
                    rows.iter()
                        .filter_map(|row| row.get(col))
                        .map(|cell| cell.chars().count())
                        .max()
                        .unwrap_or(0)
                })
                .collect();
            for row in rows {
                let mut line = String::new();
                for (col, cell) in row.iter().enumerate() {
                    if col > 0 {
                        line.push_str("  ");
                    }
                    line.push_str(cell);
                    if col + 1 < row.len() {
                        let pad = widths[col] - cell.chars().count();
                        line.extend(std::iter::repeat_n(' ', pad));
                    }
                }
                writeln!(out, "{}", line.trim_end())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("gut"), "gut");
        assert_eq!(csv_field("Ich denke, dass er schläft."), "\"Ich denke, dass er schläft.\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn table_pads_by_characters() {
        let rows = vec![vec!["Über", "x"], vec!["ab", "y"], vec!["longest", "z"]];
        let mut out = Vec::new();
        write_rows(&mut out, &rows, Format::Table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Über     x\nab       y\nlongest  z\n"
        );
    }
}
