//! Turning scenario blocks into numbered records.

use std::num::NonZeroUsize;

use nonempty::NonEmpty;

use crate::domain::{Identifier, Record, ScenarioBlock};

/// Builds the record for the block at 1-based `position`.
#[must_use]
pub fn build(identifier: &Identifier, position: NonZeroUsize, block: &ScenarioBlock) -> Record {
    Record {
        name: format!("{identifier} - TC{position} - {}", block.title),
        script: align(&block.body),
    }
}

/// Builds one record per block, numbered from 1 in block order.
#[must_use]
pub fn build_all(identifier: &Identifier, blocks: NonEmpty<ScenarioBlock>) -> NonEmpty<Record> {
    let mut position = NonZeroUsize::MIN;
    blocks.map(|block| {
        let record = build(identifier, position, &block);
        position = position.saturating_add(1);
        record
    })
}

/// Removes the common left margin from a scenario body.
///
/// Trailing blank lines are dropped first. The margin is the shortest run of
/// leading whitespace over the remaining lines, and exactly that many
/// characters are cut from the front of every line.
#[must_use]
pub fn align(body: &str) -> String {
    let mut lines: Vec<&str> = body.split('\n').collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let margin = lines
        .iter()
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| skip_chars(line, margin))
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drops the first `n` characters, leaving an empty string if there are
/// fewer.
fn skip_chars(line: &str, n: usize) -> &str {
    line.char_indices()
        .nth(n)
        .map_or("", |(index, _)| &line[index..])
}
