//! Shared chumsky parser utilities for command scripts
//!
//! Script commands live on a single line, so none of these consume newlines.
//! Every helper is generic over the parser extra so callers can pick their
//! own error type.

use chumsky::extra::ParserExtra;
use chumsky::prelude::*;

/// Parse optional inline whitespace (spaces and tabs, no newlines).
pub fn inline_whitespace<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    one_of(" \t").repeated().ignored()
}

/// Parse required inline whitespace (at least one space or tab).
pub fn inline_whitespace_required<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    one_of(" \t").repeated().at_least(1).ignored()
}

/// Parse a single whitespace-delimited word.
pub fn word<'src, E>() -> impl Parser<'src, &'src str, String, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    none_of(" \t\r\n#")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|s: &str| s.to_string())
}

/// Parse the remainder of a line up to a comment, trimmed.
///
/// Lets type names such as `dict[str, int]` contain spaces.
pub fn rest_of_line<'src, E>() -> impl Parser<'src, &'src str, String, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    none_of("#\r\n")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|s: &str| s.trim().to_string())
        .filter(|s: &String| !s.is_empty())
}

/// Parse a `#` comment running to the end of the line.
pub fn line_comment<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
{
    just('#').ignore_then(none_of('\n').repeated()).ignored()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_whitespace() {
        let parser = inline_whitespace::<extra::Default>()
            .then(just("test"))
            .then_ignore(end());
        assert!(parser.parse("test").into_result().is_ok());
        assert!(parser.parse(" \ttest").into_result().is_ok());
        assert!(parser.parse("\ntest").into_result().is_err());
    }

    #[test]
    fn test_inline_whitespace_required() {
        let parser = just("a")
            .then(inline_whitespace_required::<extra::Default>())
            .then(just("b"))
            .then_ignore(end());
        assert!(parser.parse("a b").into_result().is_ok());
        assert!(parser.parse("a \t b").into_result().is_ok());
        assert!(parser.parse("ab").into_result().is_err());
    }

    #[test]
    fn test_word_stops_at_whitespace_and_comment() {
        let parser = word::<extra::Default>();
        assert_eq!(parser.parse("Vehicle").into_result().unwrap(), "Vehicle");
        assert!(word::<extra::Default>()
            .then_ignore(end())
            .parse("Vehicle Car")
            .into_result()
            .is_err());
        assert!(parser.parse("").into_result().is_err());
    }

    #[test]
    fn test_rest_of_line_trims() {
        let parser = rest_of_line::<extra::Default>().then_ignore(line_comment().or_not());
        assert_eq!(
            parser.parse("dict[str, int]   # note").into_result().unwrap(),
            "dict[str, int]"
        );
        assert!(rest_of_line::<extra::Default>().parse("   ").into_result().is_err());
    }

    #[test]
    fn test_line_comment() {
        let parser = line_comment::<extra::Default>().then_ignore(end());
        assert!(parser.parse("# a comment").into_result().is_ok());
        assert!(parser.parse("#").into_result().is_ok());
        assert!(parser.parse("// nope").into_result().is_err());
    }
}
