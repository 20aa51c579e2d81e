use crate::parser;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

const TIME_PATTERN: &str = r"^\d+:\d{1,2}:\d{1,2},\d{1,3}\s+-->\s+\d+:\d{1,2}:\d{1,2},\d{1,3}\s*$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    CarriageReturns,
    MissingFields { block: usize, id: String },
    DiscardedLines { block: usize, id: String, count: usize },
    MalformedTime { block: usize, id: String, time: String },
    DuplicateId { id: String, first: usize, duplicate: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::CarriageReturns => write!(
                fmt,
                "The file uses carriage returns, blocks will not be split"
            ),
            Warning::MissingFields { block, id } => {
                write!(fmt, "Block {} ('{}') has fewer than three lines", block, id)
            }
            Warning::DiscardedLines { block, id, count } => write!(
                fmt,
                "Block {} ('{}') has {} extra line(s) that will be dropped",
                block, id, count
            ),
            Warning::MalformedTime { block, id, time } => write!(
                fmt,
                "Block {} ('{}') has an unexpected timecode: '{}'",
                block, id, time
            ),
            Warning::DuplicateId {
                id,
                first,
                duplicate,
            } => write!(
                fmt,
                "Block {} reuses id '{}' from block {} and replaces it",
                duplicate, id, first
            ),
        }
    }
}

pub fn lint(text: &str) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if text.is_empty() {
        return warnings;
    }
    if text.contains('\r') {
        warnings.push(Warning::CarriageReturns);
    }

    let time_re = time_regex();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, block) in parser::blocks(text).into_iter().enumerate() {
        let block_num = i + 1;
        let lines = parser::lines(block);
        let id = lines[0];

        if lines.len() < 3 {
            warnings.push(Warning::MissingFields {
                block: block_num,
                id: id.to_string(),
            });
        } else if lines.len() > 3 {
            warnings.push(Warning::DiscardedLines {
                block: block_num,
                id: id.to_string(),
                count: lines.len() - 3,
            });
        }

        if let Some(time) = lines.get(1) {
            if !time_re.is_match(time) {
                warnings.push(Warning::MalformedTime {
                    block: block_num,
                    id: id.to_string(),
                    time: time.to_string(),
                });
            }
        }

        match seen.get(id) {
            Some(&first) => warnings.push(Warning::DuplicateId {
                id: id.to_string(),
                first,
                duplicate: block_num,
            }),
            None => {
                seen.insert(id, block_num);
            }
        }
    }
    warnings
}

fn time_regex() -> Regex {
    match Regex::new(TIME_PATTERN) {
        Ok(re) => re,
        Err(err) => unreachable!("Invalid timecode pattern: {}", err),
    }
}
