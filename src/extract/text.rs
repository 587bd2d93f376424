//! Whitespace normalization for extracted page text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of spaces and tabs
static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t ]+").unwrap());

/// Three or more consecutive newlines
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw `innerText` output into clean multi-line text.
///
/// Horizontal whitespace runs collapse to a single space, blank-line runs
/// collapse to at most one blank line, every line is trimmed, and the result
/// carries no leading or trailing whitespace. The function is idempotent.
pub fn normalize(text: &str) -> String {
    let collapsed = HORIZONTAL_WS.replace_all(text, " ");
    let collapsed = EXCESS_NEWLINES.replace_all(&collapsed, "\n\n");

    let rejoined = collapsed
        .trim()
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    // Per-line trimming can turn whitespace-only lines into new blank runs
    EXCESS_NEWLINES
        .replace_all(&rejoined, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_spaces_and_tabs() {
        assert_eq!(normalize("a  \t b"), "a b");
        assert_eq!(normalize("one\t\ttwo   three"), "one two three");
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        assert_eq!(normalize("para one\n\n\n\npara two"), "para one\n\npara two");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trims_whole_string() {
        assert_eq!(normalize("\n\n  hello  \n\n"), "hello");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_trims_each_line() {
        assert_eq!(normalize("  a  \n   b\t"), "a\nb");
    }

    #[test]
    fn test_whitespace_only_lines_do_not_stack() {
        // "a\n \n \nb" has no 3-newline run until the per-line trim empties
        // the middle lines
        assert_eq!(normalize("a\n \n \nb"), "a\n\nb");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "a  b\n\n\n\nc",
            "  leading\nand trailing  \n\n",
            "• item one\n• item two",
            "Title\n\nBody",
            "",
            "\t\n \n\t",
        ];

        for sample in samples {
            let once = normalize(sample);
            let twice = normalize(&once);
            assert_eq!(once, twice, "normalize not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_no_triple_newlines_in_output() {
        let samples = ["a\n\n\nb\n\n\n\nc", "x\n \n\t\n \ny", "\n\n\n"];

        for sample in samples {
            assert!(
                !normalize(sample).contains("\n\n\n"),
                "triple newline survived for {:?}",
                sample
            );
        }
    }

    #[test]
    fn test_output_starts_and_ends_with_content() {
        let samples = [" \n a \n ", "\t\nword", "end\n\n"];

        for sample in samples {
            let out = normalize(sample);
            if !out.is_empty() {
                assert!(!out.starts_with(char::is_whitespace), "leading ws for {:?}", sample);
                assert!(!out.ends_with(char::is_whitespace), "trailing ws for {:?}", sample);
            }
        }
    }

    #[test]
    fn test_bullets_pass_through() {
        assert_eq!(normalize("• A\n• B"), "• A\n• B");
    }

    #[test]
    fn test_heading_density() {
        // The shape innerText produces for a heading followed by a paragraph
        assert_eq!(normalize("\nTitle\n\n\nBody\n"), "Title\n\nBody");
    }
}
