use winnow::{
    combinator::{alt, delimited, repeat},
    error::ContextError,
    prelude::*,
    token::{take, take_till},
};

type ParserResult<T> = winnow::PResult<T, ContextError>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Piece<'i> {
    Text(&'i str),
    Tag(&'i str),
}

/// Turn file content with embedded markup into plain terminal text.
///
/// Images become `[image: <alt>]` and every other tag is dropped. Text
/// between tags, and any `<` that does not start a tag, is kept as is.
///
/// # Grammar
///
/// ```md
/// markup := (tag | text | any)*;
/// tag    := '<' (alpha | '/') ^'>'* '>';
/// text   := (^'<')+;
/// ```
pub fn to_plain_text(markup: &str) -> String {
    match parse_pieces.parse(markup) {
        Ok(pieces) => pieces.into_iter().fold(String::new(), |mut out, piece| {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Tag(tag) => {
                    if let Some(alt) = image_alt(tag) {
                        out.push_str(&format!("[image: {alt}]"));
                    }
                }
            }
            out
        }),
        Err(_) => markup.to_owned(),
    }
}

fn parse_pieces<'i>(input: &mut &'i str) -> ParserResult<Vec<Piece<'i>>> {
    repeat(0.., parse_piece).parse_next(input)
}

fn parse_piece<'i>(input: &mut &'i str) -> ParserResult<Piece<'i>> {
    alt((
        delimited('<', take_till(1.., '>').verify(is_tag_body), '>').map(Piece::Tag),
        take_till(1.., '<').map(Piece::Text),
        take(1usize).map(Piece::Text),
    ))
    .parse_next(input)
}

/// Tags open with a name or a `/`, so `1 < 2 > 0` stays text.
fn is_tag_body(body: &str) -> bool {
    body.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/')
}

/// The `alt` attribute of an `<img ...>` tag body.
fn image_alt(tag: &str) -> Option<&str> {
    let attributes = tag.trim_start().strip_prefix("img")?;
    let (_, rest) = attributes.split_once("alt=\"")?;
    rest.split_once('"').map(|(alt, _)| alt)
}
