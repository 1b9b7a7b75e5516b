//! Splits one filter argument into path segments and an optional value.

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Dots split, quotes open a literal, `=` starts the value.
    Normal,
    /// Inside `"..."`: everything is copied except the closing quote.
    Literal,
    /// After `\`: the next character is copied, then `resume` applies.
    Escape { resume: Resume },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    Normal,
    Literal,
}

impl From<Resume> for State {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Normal => State::Normal,
            Resume::Literal => State::Literal,
        }
    }
}

/// Split an argument into segments.
///
/// `attr.href=http://x` becomes `["attr", "href", "http://x"]`. Everything
/// after the first unquoted, unescaped `=` is taken verbatim as the last
/// segment. A trailing `\` is kept as a literal backslash, and an unclosed
/// quote runs to the end of the argument.
pub fn split_arg(arg: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut state = State::Normal;

    for (i, c) in arg.char_indices() {
        match state {
            State::Escape { resume } => {
                current.push(c);
                state = resume.into();
            }
            State::Literal => match c {
                '\\' => state = State::Escape { resume: Resume::Literal },
                '"' => state = State::Normal,
                _ => current.push(c),
            },
            State::Normal => match c {
                '\\' => state = State::Escape { resume: Resume::Normal },
                '"' => state = State::Literal,
                '.' => segments.push(std::mem::take(&mut current)),
                '=' => {
                    segments.push(std::mem::take(&mut current));
                    segments.push(arg[i + c.len_utf8()..].to_string());
                    return segments;
                }
                _ => current.push(c),
            },
        }
    }

    if let State::Escape { .. } = state {
        current.push('\\');
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(split_arg("attr.href"), ["attr", "href"]);
    }

    #[test]
    fn test_value_taken_verbatim() {
        assert_eq!(
            split_arg(r#"attr.href=http://a.b/"c"\d=e"#),
            ["attr", "href", r#"http://a.b/"c"\d=e"#]
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(split_arg("data="), ["data", ""]);
    }

    #[test]
    fn test_leading_equals_gives_empty_segment() {
        assert_eq!(split_arg("=x"), ["", "x"]);
    }

    #[test]
    fn test_empty_segments_between_dots() {
        assert_eq!(split_arg("attr..x"), ["attr", "", "x"]);
    }

    #[test]
    fn test_trailing_dot_drops_empty_tail() {
        assert_eq!(split_arg("attr."), ["attr"]);
    }

    #[test]
    fn test_quoted_segment_keeps_dots() {
        assert_eq!(split_arg(r#"attr."data.id"=1"#), ["attr", "data.id", "1"]);
    }

    #[test]
    fn test_quoted_equals_is_not_a_value() {
        assert_eq!(split_arg(r#"attr."a=b""#), ["attr", "a=b"]);
    }

    #[test]
    fn test_escaped_dot_and_equals() {
        assert_eq!(split_arg(r"attr.a\.b\=c=v"), ["attr", "a.b=c", "v"]);
    }

    #[test]
    fn test_escape_inside_literal() {
        assert_eq!(split_arg(r#"attr."a\"b"=v"#), ["attr", "a\"b", "v"]);
    }

    #[test]
    fn test_trailing_escape_is_literal_backslash() {
        assert_eq!(split_arg(r"attr.a\"), ["attr", r"a\"]);
    }

    #[test]
    fn test_unterminated_literal_runs_to_end() {
        assert_eq!(split_arg(r#"attr."a.b=c"#), ["attr", "a.b=c"]);
    }

    #[test]
    fn test_empty_argument() {
        assert!(split_arg("").is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(split_arg("data=héllo.wörld"), ["data", "héllo.wörld"]);
        assert_eq!(split_arg("attr.ü=ß"), ["attr", "ü", "ß"]);
    }
}
