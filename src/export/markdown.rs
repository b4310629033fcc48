use crate::core::report::Counts;

/// Two-column pipe table: header, separator, then one row per entry in
/// iteration order. No trailing newline.
pub fn to_markdown_table(counts: &Counts, header1: &str, header2: &str) -> String {
    let mut lines = vec![format!("|{}|{}|", header1, header2), "|---|---|".to_string()];

    for (key, value) in counts.iter() {
        lines.push(format!("|{}|{}|", key, value));
    }

    lines.join("\n")
}
