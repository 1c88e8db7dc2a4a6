//! Byte array literals.
//!
//! Firmware for the SmartDMA engine is usually distributed as a C array
//! initializer, e.g. `const uint8_t s_smartdmaCode[] = {0x12U, 0x00U, ...};`.
//! This module turns such a listing back into the binary it describes.

use crate::memory::{Error, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_until, take_while, take_while1},
    character::complete::{char, multispace1, one_of},
    combinator::{map_res, opt, recognize, value},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use std::convert::TryFrom;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a C comment of either style.
fn comment(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(tag("//"), take_while(|c: char| c != '\n'))),
        recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
    ))(input)
}

/// Skip any whitespace and comments.
fn ws(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((multispace1, comment))))(input)
}

fn hex_integer(input: &str) -> IResult<&str, u32> {
    map_res(
        preceded(
            tag_no_case("0x"),
            take_while1(|c: char| c.is_ascii_hexdigit()),
        ),
        |s: &str| u32::from_str_radix(s, 16),
    )(input)
}

fn decimal_integer(input: &str) -> IResult<&str, u32> {
    map_res(take_while1(|c: char| c.is_ascii_digit()), |s: &str| {
        s.parse::<u32>()
    })(input)
}

/// Parse one integer literal, with an optional unsigned suffix.
pub(crate) fn integer(input: &str) -> IResult<&str, u32> {
    terminated(alt((hex_integer, decimal_integer)), opt(one_of("uU")))(input)
}

/// Parse a braced, comma separated list of integers. A trailing comma is
/// permitted.
pub(crate) fn initializer(input: &str) -> IResult<&str, Vec<u32>> {
    delimited(
        pair(char('{'), ws),
        terminated(
            separated_list0(tuple((ws, char(','), ws)), integer),
            opt(pair(ws, char(','))),
        ),
        pair(ws, char('}')),
    )(input)
}

/// Parse the text of a C byte array into the bytes it holds.
///
/// Anything before the opening brace (the declaration) and after the closing
/// brace is ignored.
pub fn parse_byte_array(text: &str) -> Result<Vec<u8>> {
    let start = text
        .find('{')
        .ok_or_else(|| Error::InvalidLiteral("no opening brace".to_string()))?;

    let (_rest, values) = initializer(&text[start..]).map_err(|e| match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => Error::InvalidLiteral(format!(
            "unexpected input at offset {}",
            text.len() - e.input.len()
        )),
        nom::Err::Incomplete(_) => Error::InvalidLiteral("unexpected end of input".to_string()),
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            u8::try_from(v).map_err(|_| {
                Error::InvalidLiteral(format!("element {} ({}) does not fit in a byte", i, v))
            })
        })
        .collect()
}

/// The path a converted literal array is written to: the input path with
/// `.bin` appended.
pub fn binary_path(source: &Path) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".bin");

    PathBuf::from(name)
}

/// Convert a literal array file into a binary image next to it.
///
/// Returns the path of the written image.
pub fn convert_file(source: &Path) -> Result<PathBuf> {
    let text = fs::read_to_string(source)?;
    let bytes = parse_byte_array(&text)?;
    let target = binary_path(source);

    fs::write(&target, &bytes)?;

    Ok(target)
}
