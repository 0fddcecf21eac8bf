//! Line parsers for the plain text files kept by the store
//!
//! Every file is line oriented, so each parser here works on a single line
//! with the line ending already removed.

use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, not_line_ending, space0},
    combinator::{all_consuming, map, map_res, opt, rest, verify},
    sequence::{preceded, separated_pair, terminated, tuple},
    IResult,
};

use crate::record::PaletteColor;

/// The metadata line opening every record file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecordHeader<'a> {
    /// How many color lines follow
    pub count: usize,
    /// The name the record was saved with
    pub name: &'a str,
}

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), from_hex)(input)
}

fn hex_triplet(input: &str) -> IResult<&str, PaletteColor> {
    map(
        tuple((hex_primary, hex_primary, hex_primary)),
        |(red, green, blue)| PaletteColor::new(red, green, blue),
    )(input)
}

fn count(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |digits: &str| digits.parse::<usize>())(input)
}

fn header(input: &str) -> IResult<&str, RawRecordHeader<'_>> {
    map(
        separated_pair(
            count,
            char(' '),
            verify(not_line_ending, |name: &str| !name.is_empty()),
        ),
        |(count, name)| RawRecordHeader { count, name },
    )(input)
}

fn color_line(input: &str) -> IResult<&str, PaletteColor> {
    terminated(preceded(tag("#"), hex_triplet), space0)(input)
}

fn lookup_hex(input: &str) -> IResult<&str, PaletteColor> {
    preceded(
        space0,
        terminated(
            preceded(opt(tag("#")), preceded(opt(tag("0x")), hex_triplet)),
            space0,
        ),
    )(input)
}

/// The whole line is the name, only a final `\r` left by CRLF files is dropped
fn index_name(input: &str) -> IResult<&str, &str> {
    map(rest, strip_carriage_return)(input)
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Turn a nom error on `line` into a readable message
fn describe(line: &str, err: nom::Err<nom::error::Error<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let column = line.len() - e.input.len() + 1;
            format!("unexpected input at column {} ({:?})", column, e.code)
        }
        nom::Err::Incomplete(_) => "unexpected end of line".to_string(),
    }
}

/// Parse the first line of a record file, `<count> <name>`
pub fn read_header(line: &str) -> Result<RawRecordHeader<'_>, String> {
    all_consuming(header)(line)
        .map(|(_, header)| header)
        .map_err(|err| describe(line, err))
}

/// Parse one `#RRGGBB` color line of a record file
pub fn read_color(line: &str) -> Result<PaletteColor, String> {
    all_consuming(color_line)(line)
        .map(|(_, color)| color)
        .map_err(|err| describe(line, err))
}

/// Parse a loosely written hex color as used for name lookups
///
/// Accepts `#RRGGBB`, `RRGGBB` and `0xRRGGBB`, in either case.
pub fn read_lookup_hex(value: &str) -> Option<PaletteColor> {
    all_consuming(lookup_hex)(value).ok().map(|(_, color)| color)
}

/// Parse one line of an index file
///
/// Returns `None` for blank lines, which do not name a record.
pub fn read_index_line(line: &str) -> Option<&str> {
    all_consuming(index_name)(line)
        .ok()
        .map(|(_, name)| name)
        .filter(|name| !name.trim().is_empty())
}
