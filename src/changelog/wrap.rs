//! Greedy word wrapping for milestone descriptions.

/// Indent applied to continuation lines of `-`/`*` bullet paragraphs.
const BULLET_INDENT: &str = "  ";

/// Wrap every line of `text` to `width` columns. Lines are treated as
/// independent paragraphs, so blank lines and explicit breaks survive.
pub fn wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_paragraph(line, width))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Pack the whitespace separated words of `paragraph` onto lines of at most
/// `width` characters. A word longer than the width gets a line of its own.
pub fn wrap_paragraph(paragraph: &str, width: usize) -> String {
    let words = paragraph.split_whitespace().collect::<Vec<&str>>();

    let Some(first) = words.first() else {
        return String::new();
    };

    let indent = match *first {
        "-" | "*" => BULLET_INDENT,
        _ => "",
    };

    let mut out = String::new();
    let mut line_len = 0;
    let mut line_start = 0;

    for word in words {
        let word_len = word.chars().count();

        if line_len > line_start {
            if line_len + 1 + word_len > width {
                out.push('\n');
                out.push_str(indent);
                line_len = indent.len();
                line_start = line_len;
            } else {
                out.push(' ');
                line_len += 1;
            }
        }

        out.push_str(word);
        line_len += word_len;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_paragraph_is_untouched() {
        assert_eq!(wrap_paragraph("hello   world", 72), "hello world");
    }

    #[test]
    fn wraps_at_width() {
        let wrapped = wrap_paragraph("aaa bbb ccc ddd", 7);
        assert_eq!(wrapped, "aaa bbb\nccc ddd");
    }

    #[test]
    fn word_filling_the_line_exactly_stays() {
        assert_eq!(wrap_paragraph("ab cd", 5), "ab cd");
        assert_eq!(wrap_paragraph("ab cde", 5), "ab\ncde");
    }

    #[test]
    fn bullet_continuation_lines_are_indented() {
        let wrapped = wrap_paragraph("- one two three four", 9);
        assert_eq!(wrapped, "- one two\n  three\n  four");
    }

    #[test]
    fn asterisk_bullets_are_indented() {
        let wrapped = wrap_paragraph("* alpha beta gamma", 10);
        assert_eq!(wrapped, "* alpha\n  beta\n  gamma");
    }

    #[test]
    fn dash_inside_word_is_not_a_bullet() {
        let wrapped = wrap_paragraph("-x alpha beta", 8);
        assert_eq!(wrapped, "-x alpha\nbeta");
    }

    #[test]
    fn long_word_gets_its_own_line() {
        let wrapped = wrap_paragraph("a abcdefghij b", 5);
        assert_eq!(wrapped, "a\nabcdefghij\nb");
    }

    #[test]
    fn preserves_paragraph_breaks() {
        let wrapped = wrap("first para\n\nsecond para", 72);
        assert_eq!(wrapped, "first para\n\nsecond para");
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let wrapped = wrap("one\r\n\r\ntwo", 72);
        assert_eq!(wrapped, "one\n\ntwo");
    }

    #[test]
    fn never_exceeds_width() {
        let text = "The quick brown fox jumps over the lazy dog while the \
                    cat watches from a sunny windowsill, unimpressed by the \
                    whole affair and thinking about lunch.\n\
                    - a bullet with enough words in it to need wrapping \
                    more than once at this width";

        for width in [12, 20, 33, 72] {
            let wrapped = wrap(text, width);
            for line in wrapped.lines() {
                assert!(
                    line.chars().count() <= width,
                    "line {line:?} exceeds {width}"
                );
            }
        }
    }

    #[test]
    fn bullet_continuations_have_exactly_two_spaces() {
        let wrapped = wrap_paragraph(
            "- alpha beta gamma delta epsilon zeta eta theta",
            16,
        );
        for line in wrapped.lines().skip(1) {
            assert!(line.starts_with("  "));
            assert!(!line.starts_with("   "));
        }
        assert!(wrapped.lines().count() > 1);
    }
}
