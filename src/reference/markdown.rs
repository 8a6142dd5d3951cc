//! Markdown assembly helpers shared by the reference renderer.

/// Drop trailing newlines beyond two, so sections never stack more than one blank line.
fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = 0usize;
    for ch in out.chars().rev() {
        if ch == '\n' {
            count += 1;
        } else {
            break;
        }
    }
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

pub(crate) fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

pub(crate) fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

/// Push a table header row and its separator.
pub(crate) fn push_table_header(out: &mut String, columns: &[&str]) {
    push_row(out, columns.iter().map(|c| c.to_string()));
    out.push('|');
    for _ in columns {
        out.push_str("---|");
    }
    out.push('\n');
}

pub(crate) fn push_row(out: &mut String, cells: impl IntoIterator<Item = String>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Escape characters that would break a table cell.
pub(crate) fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Wrap text in inline code.
pub(crate) fn code(text: &str) -> String {
    format!("`{text}`")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_keeps_at_most_two_newlines() {
        let mut out = "a\n\n\n\n".to_string();
        trim_trailing_newlines_to_at_most_two(&mut out);
        assert_eq!(out, "a\n\n");
    }

    #[test]
    fn test_ensure_single_blank_line() {
        let mut empty = String::new();
        ensure_single_blank_line(&mut empty);
        assert_eq!(empty, "");

        let mut bare = "a".to_string();
        ensure_single_blank_line(&mut bare);
        assert_eq!(bare, "a\n\n");

        let mut one = "a\n".to_string();
        ensure_single_blank_line(&mut one);
        assert_eq!(one, "a\n\n");
    }

    #[test]
    fn test_table_header() {
        let mut out = String::new();
        push_table_header(&mut out, &["Name", "Value"]);
        assert_eq!(out, "| Name | Value |\n|---|---|\n");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b\nc"), "a\\|b c");
    }
}
