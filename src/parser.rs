use winnow::{
    combinator::{alt, cut_err, delimited, preceded, repeat, terminated},
    error::{ContextError, ParseError, StrContext, StrContextValue},
    prelude::*,
    token::{take_till, take_while},
};

use crate::error::InputError;

type ParserResult<T> = winnow::PResult<T, ContextError>;

/// A command token and its arguments, as typed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommandLine {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a line of input into a [`CommandLine`].
///
/// Words are separated by any run of whitespace and may be wrapped in single
/// or double quotes to keep spaces inside them. A blank line yields `None`.
///
/// # Grammar
///
/// ```md
/// line   := ws* (word ws*)*;
/// word   := '"' ^'"'* '"' | "'" ^"'"* "'" | bare;
/// bare   := (^(ws | '"' | "'"))+;
/// ```
pub fn parse_line(line: &str) -> Result<Option<CommandLine>, InputError> {
    let words = parse_words
        .parse(line)
        .map_err(|e| failure_from_err(&e, line))?;

    let mut words = words.into_iter();
    Ok(words.next().map(|command| CommandLine {
        command,
        args: words.collect(),
    }))
}

fn parse_words(input: &mut &str) -> ParserResult<Vec<String>> {
    preceded(wss, repeat(0.., terminated(parse_word, wss))).parse_next(input)
}

fn parse_word(input: &mut &str) -> ParserResult<String> {
    alt((
        quoted('"'),
        quoted('\''),
        take_while(1.., |c: char| !c.is_whitespace() && c != '"' && c != '\'')
            .map(str::to_owned),
    ))
    .parse_next(input)
}

fn quoted<'i>(quote: char) -> impl Parser<&'i str, String, ContextError> {
    delimited(
        quote,
        take_till(0.., quote),
        cut_err(quote).context(StrContext::Expected(StrContextValue::CharLiteral(quote))),
    )
    .map(str::to_owned)
}

/// Parse zero or more whitespace characters from the input
fn wss(input: &mut &str) -> ParserResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

fn failure_from_err(err: &ParseError<&str, ContextError>, line: &str) -> InputError {
    let offset = err.offset();
    // Point back at the quote that was never closed
    let start = line[..offset].rfind(['"', '\'']).unwrap_or(offset);

    InputError::UnterminatedQuote {
        input: line.to_owned(),
        span: (start..offset).into(),
        expected: err.inner().to_string(),
    }
}
