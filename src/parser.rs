use crate::srt::SubtitleEntry;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::rest;
use nom::error::Error;
use nom::multi::separated_list0;
use nom::IResult;

pub(crate) const BLOCK_SEPARATOR: &str = "\n\n";
pub(crate) const LINE_SEPARATOR: &str = "\n";

/// One entry per block, in block order. Never fails.
pub fn parse(input: &str) -> Vec<SubtitleEntry> {
    blocks(input).into_iter().map(entry).collect()
}

pub(crate) fn blocks(input: &str) -> Vec<&str> {
    split(input, BLOCK_SEPARATOR)
}

pub(crate) fn lines(block: &str) -> Vec<&str> {
    split(block, LINE_SEPARATOR)
}

fn entry(block: &str) -> SubtitleEntry {
    let mut lines = lines(block).into_iter();
    let id = lines.next().unwrap_or_default();
    let time = lines.next();
    let sub = lines.next();

    SubtitleEntry {
        id: id.to_string(),
        time: time.map(String::from),
        sub: sub.map(String::from),
    }
}

fn split<'a>(input: &'a str, sep: &'static str) -> Vec<&'a str> {
    match pieces(input, sep) {
        Ok((_, pieces)) => pieces,
        Err(_) => unreachable!("Splitting accepts any input."),
    }
}

// Same result as a plain string split: the element parser always
// succeeds, so the list ends only when no separator follows.
fn pieces<'a>(input: &'a str, sep: &'static str) -> IResult<&'a str, Vec<&'a str>, Error<&'a str>> {
    separated_list0(tag(sep), alt((take_until(sep), rest)))(input)
}
