/// Join sentence tokens into one capitalized, period-terminated sentence.
///
/// Empty tokens are skipped and inner whitespace is collapsed. A token that
/// starts with a comma (`, dass`) attaches to the word before it.
pub fn render(tokens: &[&str]) -> String {
    let mut out = String::new();
    for token in tokens {
        let words = token.split_whitespace().collect::<Vec<_>>().join(" ");
        if words.is_empty() {
            continue;
        }
        if !out.is_empty() && !words.starts_with(',') {
            out.push(' ');
        }
        out.push_str(&words);
    }

    let body = out.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    let mut chars = body.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
