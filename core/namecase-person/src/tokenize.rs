//! Splits a full name into words on runs of whitespace.

use nom::{
    bytes::complete::{take_while, take_while1},
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

fn words(input: &str) -> IResult<&str, Vec<&str>> {
    terminated(many0(preceded(whitespace, word)), whitespace)(input)
}

/// The words of `full_name`, in order. Blank input has none.
pub fn split(full_name: &str) -> Vec<&str> {
    words(full_name).map(|(_, words)| words).unwrap_or_default()
}
