//! Digit-run tokenizer and sum-of-squares aggregation.
//!
//! The tokenizer is a two-state scanner: outside a token it skips non-digit
//! characters, inside a token it accumulates ASCII digits. A non-digit while
//! inside emits the token. What happens to a token still open when the input
//! ends is governed by [`TrailingTokenPolicy`].

use crate::error::TextError;
use crate::utils::text::{preview, trim_edges};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handling of a digit run that reaches the end of the input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingTokenPolicy {
    /// End of input acts as a separator; `"5,6,7"` yields `[5, 6, 7]`.
    #[default]
    Flush,
    /// Legacy behavior; `"5,6,7"` yields `[5, 6]`.
    Drop,
}

impl fmt::Display for TrailingTokenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailingTokenPolicy::Flush => write!(f, "flush"),
            TrailingTokenPolicy::Drop => write!(f, "drop"),
        }
    }
}

impl FromStr for TrailingTokenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flush" => Ok(TrailingTokenPolicy::Flush),
            "drop" => Ok(TrailingTokenPolicy::Drop),
            other => Err(format!("expected 'flush' or 'drop', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside { start: usize },
}

/// Outcome of a successful [`sum_squares`] call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SumSquares {
    pub tokens: Vec<u64>,
    pub sum: u128,
}

fn parse_token(token: &str) -> Result<u64, TextError> {
    token
        .parse::<u64>()
        .map_err(|e| TextError::invalid_input(format!("cannot parse '{}': {}", token, e)))
}

/// Extract every digit run of `input` as an integer, in order of appearance.
///
/// Fails with `InvalidInput` when the input is empty after trimming.
pub fn tokenize(input: &str, policy: TrailingTokenPolicy) -> Result<Vec<u64>, TextError> {
    let trimmed = trim_edges(input);
    if trimmed.is_empty() {
        return Err(TextError::invalid_input("input is empty"));
    }

    let mut values = Vec::new();
    let mut state = ScanState::Outside;

    for (idx, ch) in trimmed.char_indices() {
        state = match (state, ch.is_ascii_digit()) {
            (ScanState::Outside, true) => ScanState::Inside { start: idx },
            (ScanState::Outside, false) => ScanState::Outside,
            (inside @ ScanState::Inside { .. }, true) => inside,
            (ScanState::Inside { start }, false) => {
                values.push(parse_token(&trimmed[start..idx])?);
                ScanState::Outside
            }
        };
    }

    if let ScanState::Inside { start } = state {
        match policy {
            TrailingTokenPolicy::Flush => values.push(parse_token(&trimmed[start..])?),
            TrailingTokenPolicy::Drop => {
                log::debug!("Dropping trailing token '{}'", &trimmed[start..]);
            }
        }
    }

    Ok(values)
}

/// Sum of `v²` over `values`, failing with `InvalidInput` on `u128` overflow.
pub fn sum_of_squares(values: &[u64]) -> Result<u128, TextError> {
    values.iter().try_fold(0u128, |acc, &v| {
        let v = u128::from(v);
        acc.checked_add(v * v)
            .ok_or_else(|| TextError::invalid_input("sum of squares overflows u128"))
    })
}

/// Tokenize `input` and sum the squares of its numbers.
pub fn sum_squares(input: &str, policy: TrailingTokenPolicy) -> Result<SumSquares, TextError> {
    let tokens = tokenize(input, policy)?;
    let sum = sum_of_squares(&tokens)?;
    log::debug!(
        "Parsed {} numbers from '{}' (trailing: {}), sum of squares = {}",
        tokens.len(),
        preview(input, 40),
        policy,
        sum
    );
    Ok(SumSquares { tokens, sum })
}
