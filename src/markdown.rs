//! Markdown table rendering for human-readable entry output

/// Render a titled pipe table
///
/// Each row must have one cell per header; missing cells render empty.
pub fn table_to_markdown(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = format!("### {}\n", title);

    if rows.is_empty() {
        out.push_str("**No entries.**\n");
        return out;
    }

    out.push('|');
    for header in headers {
        out.push_str(&escape_cell(header));
        out.push('|');
    }
    out.push('\n');

    out.push('|');
    for _ in headers {
        out.push_str("---|");
    }
    out.push('\n');

    for row in rows {
        out.push('|');
        for idx in 0..headers.len() {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            out.push_str(&escape_cell(cell));
            out.push('|');
        }
        out.push('\n');
    }

    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let rows = vec![
            vec!["a".to_string(), "1".to_string()],
            vec!["b".to_string(), "2".to_string()],
        ];
        let md = table_to_markdown("Things", &["Name", "Count"], &rows);
        assert_eq!(
            md,
            "### Things\n|Name|Count|\n|---|---|\n|a|1|\n|b|2|\n"
        );
    }

    #[test]
    fn test_empty_table() {
        let md = table_to_markdown("Things", &["Name"], &[]);
        assert_eq!(md, "### Things\n**No entries.**\n");
    }

    #[test]
    fn test_escaping_and_short_rows() {
        let rows = vec![vec!["a|b\nc".to_string()]];
        let md = table_to_markdown("T", &["X", "Y"], &rows);
        assert!(md.contains("|a\\|b<br>c||"));
    }
}
