use crate::block::Line;

/// Longest `#` run rendered as a heading tag.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Classify a raw line.
///
/// Trailing whitespace (including the line terminator) is ignored. Leading
/// whitespace is significant: an indented `#` is paragraph text.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim_end();

    if line.is_empty() {
        return Line::Blank;
    }

    if line.starts_with('#') {
        let rest = line.trim_start_matches('#');
        return Line::Heading {
            level: line.len() - rest.len(),
            content: rest.trim_start(),
            raw: line,
        };
    }

    if let Some(rest) = line.strip_prefix('-') {
        return Line::UnorderedItem(rest.trim_start());
    }

    if let Some(rest) = line.strip_prefix('*') {
        return Line::OrderedItem(rest.trim_start());
    }

    Line::Text(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("###   Spaced", 3, "Spaced")]
    #[case("######Tight", 6, "Tight")]
    #[case("#######", 7, "")]
    fn heading(#[case] input: &str, #[case] level: usize, #[case] content: &str) {
        assert_eq!(
            classify(input),
            Line::Heading {
                level,
                content,
                raw: input,
            }
        );
    }

    #[test]
    fn strips_line_terminator() {
        assert_eq!(classify("- item\r\n"), Line::UnorderedItem("item"));
        assert_eq!(classify("text \n"), Line::Text("text"));
    }

    #[test]
    fn list_markers() {
        assert_eq!(classify("- a"), Line::UnorderedItem("a"));
        assert_eq!(classify("-a"), Line::UnorderedItem("a"));
        assert_eq!(classify("* b"), Line::OrderedItem("b"));
        assert_eq!(classify("---"), Line::UnorderedItem("--"));
    }

    #[test]
    fn heading_takes_precedence() {
        assert!(matches!(classify("#- x"), Line::Heading { level: 1, .. }));
    }

    #[test]
    fn leading_double_asterisk_is_an_ordered_item() {
        assert_eq!(classify("**bold** start"), Line::OrderedItem("*bold** start"));
    }

    #[test]
    fn blank_and_text() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t\n"), Line::Blank);
        assert_eq!(classify("  # indented"), Line::Text("  # indented"));
    }
}
