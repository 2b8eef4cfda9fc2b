use std::fmt::{self, Write};

use tracing::debug;

use crate::numeric::{exceeds, THRESHOLD};
use crate::pass::Pass;

/// One output row. Everything borrows from the input text, nothing is parsed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Row<'a> {
    pub date: &'a str,
    pub num: &'a str,
    pub den: &'a str,
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.date, self.num, self.den)
    }
}

/// Why a segment didn't turn into a row. None of these are errors, the
/// extraction is best effort and just moves on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Skip {
    /// exactly one `/` in the segment, it's already a plain pair
    AlreadyPaired,
    NoTokens,
    /// numerator of the first token isn't a number above the threshold
    BelowThreshold,
    /// fewer than three tokens
    MissingLeft,
    ExcludedLabel,
    /// third token has no `/` to split into numerator and denominator
    UnpairedLeft,
}

/// Turn a single segment (a piece of a line between two pass labels) into a row.
///
/// `date` is the first space-separated field of the whole line the segment came
/// from. The first token of the segment is only used for the threshold check,
/// the emitted pair comes from the third token.
pub fn process_segment<'a>(date: &'a str, segment: &'a str, pass: Pass) -> Result<Row<'a>, Skip> {
    if segment.matches('/').count() == 1 {
        return Err(Skip::AlreadyPaired);
    }

    let mut tokens = segment.split(' ').filter(|t| !t.is_empty());
    let right = tokens.next().ok_or(Skip::NoTokens)?;
    let numerator = right.split_once('/').map_or(right, |(n, _)| n);
    if !exceeds(numerator, THRESHOLD) {
        return Err(Skip::BelowThreshold);
    }

    // `right` was index 0, so this is index 2
    let left = tokens.nth(1).ok_or(Skip::MissingLeft)?;
    if pass.is_excluded(left) {
        return Err(Skip::ExcludedLabel);
    }

    let mut parts = left.split('/');
    let num = parts.next().ok_or(Skip::UnpairedLeft)?;
    let den = parts.next().ok_or(Skip::UnpairedLeft)?;
    Ok(Row { date, num, den })
}

/// Split `line` on the pass label and append one `"date, num, den\n"` per
/// accepted segment to `out`. Returns how many rows were appended.
pub fn process_line(line: &str, pass: Pass, out: &mut String) -> usize {
    let date = line.split(' ').next().unwrap_or_default();
    let mut rows = 0;
    for segment in line.split(pass.label()) {
        match process_segment(date, segment, pass) {
            Ok(row) => {
                // writing into a String can't fail
                let _ = writeln!(out, "{row}");
                rows += 1;
            }
            Err(reason) => debug!(?reason, segment, "segment skipped"),
        }
    }
    rows
}

/// Run every line of `input` through [`process_line`]. Lines are split on `\n`
/// only, so a trailing empty line is visited too (it never emits anything).
pub fn process_chunk(input: &str, pass: Pass, out: &mut String) -> usize {
    let mut rows = 0;
    for (i, line) in input.split('\n').enumerate() {
        let _span = tracing::debug_span!("line", n = i + 1).entered();
        rows += process_line(line, pass, out);
    }
    rows
}
