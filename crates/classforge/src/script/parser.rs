//! Command script parser using chumsky
//!
//! A script holds one command per line. Blank lines and lines starting with
//! `#` are skipped; a trailing `# comment` is allowed after any command.
//!
//! ```text
//! class Vehicle
//! attribute Vehicle speed int
//! method Vehicle drive None
//! inherit Car Vehicle
//! compose Vehicle Engine
//! aggregate Vehicle Driver   # Driver is never created
//! ```

use chumsky::prelude::*;
use tracing::{debug, span, trace, Level};

use super::command::Command;
use crate::core::chumsky_utils::{
    inline_whitespace, inline_whitespace_required, line_comment, rest_of_line, word,
};
use crate::core::ScriptError;

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// A parsed command with the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

fn command_parser<'src>() -> impl Parser<'src, &'src str, Command, Extra<'src>> {
    let ws = inline_whitespace_required();

    let create = text::keyword("class")
        .ignore_then(ws.clone())
        .ignore_then(word())
        .map(|name| Command::CreateClass { name });

    let attribute = text::keyword("attribute")
        .ignore_then(ws.clone())
        .ignore_then(word())
        .then_ignore(ws.clone())
        .then(word())
        .then_ignore(ws.clone())
        .then(rest_of_line())
        .map(|((class, name), type_name)| Command::AddAttribute {
            class,
            name,
            type_name,
        });

    let method = text::keyword("method")
        .ignore_then(ws.clone())
        .ignore_then(word())
        .then_ignore(ws.clone())
        .then(word())
        .then_ignore(ws.clone())
        .then(rest_of_line())
        .map(|((class, name), return_type)| Command::AddMethod {
            class,
            name,
            return_type,
        });

    let inherit = text::keyword("inherit")
        .ignore_then(ws.clone())
        .ignore_then(word())
        .then_ignore(ws.clone())
        .then(word())
        .map(|(class, parent)| Command::SetInheritance { class, parent });

    let compose = text::keyword("compose")
        .ignore_then(ws.clone())
        .ignore_then(word())
        .then_ignore(ws.clone())
        .then(word())
        .map(|(class, part)| Command::AddComposition { class, part });

    let aggregate = text::keyword("aggregate")
        .ignore_then(ws.clone())
        .ignore_then(word())
        .then_ignore(ws)
        .then(word())
        .map(|(class, part)| Command::AddAggregation { class, part });

    inline_whitespace()
        .ignore_then(choice((
            create, attribute, method, inherit, compose, aggregate,
        )))
        .then_ignore(inline_whitespace())
        .then_ignore(line_comment().or_not())
        .then_ignore(end())
}

/// Parse a single script line into a command
pub fn parse_command(line: &str) -> Result<Command, ScriptError> {
    parse_line(line, 1)
}

fn parse_line(text: &str, line: usize) -> Result<Command, ScriptError> {
    command_parser().parse(text).into_result().map_err(|errors| {
        let first = errors.into_iter().next();
        let (message, column) = match first {
            Some(err) => (err.to_string(), text[..err.span().start].chars().count() + 1),
            None => ("invalid command".to_string(), 1),
        };
        ScriptError::parse_error(message, line, column)
    })
}

/// Parse a whole script, stopping at the first malformed line
pub fn parse_script(input: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let parse_span = span!(Level::INFO, "parse_script", input_len = input.len());
    let _enter = parse_span.enter();

    let mut lines = Vec::new();
    for (index, text) in input.lines().enumerate() {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line = index + 1;
        let command = parse_line(text, line)?;
        trace!(line, command = %command, "Parsed command");
        lines.push(ScriptLine { line, command });
    }

    debug!(command_count = lines.len(), "Script parsed");
    Ok(lines)
}
