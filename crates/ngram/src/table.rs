use std::fmt;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::NgramError;

/// Reserved join delimiter for serialized multi-token keys.
///
/// Pipeline tokens cannot contain it: the normalizer replaces `|` with a
/// space before tokenization. [`serialize_table`](crate::serialize_table)
/// still checks, so tables built from foreign token sources fail loudly
/// instead of corrupting the file format.
pub const DELIMITER: &str = "||";

/// An ordered sequence of one or more tokens.
///
/// Order 1 keys are conceptually bare tokens; they display and serialize
/// without any delimiter, so `Ngram::unigram("word")` round-trips to the
/// plain string `word`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ngram(Vec<String>);

impl Ngram {
    /// Builds a key from an ordered token sequence.
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Builds an order-1 key from a bare token.
    pub fn unigram(token: impl Into<String>) -> Self {
        Self(vec![token.into()])
    }

    /// The tokens of this key, in order.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// The key's order (number of tokens).
    pub fn order(&self) -> usize {
        self.0.len()
    }

    /// Joins the tokens with the reserved delimiter. Inverse of
    /// [`Ngram::from_joined`].
    pub fn joined(&self) -> String {
        self.0.join(DELIMITER)
    }

    /// Reconstructs a key from its joined form. A string without the
    /// delimiter parses as an order-1 key.
    pub fn from_joined(joined: &str) -> Self {
        Self(joined.split(DELIMITER).map(str::to_string).collect())
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Frequency table mapping n-grams to their counts.
pub type NgramTable = FxHashMap<Ngram, u64>;

/// Counts every contiguous window of `n` tokens.
///
/// Fewer tokens than `n` produce an empty table, not an error: there are
/// simply zero windows. Order zero is rejected.
pub fn ngram_counts(tokens: &[String], n: usize) -> Result<NgramTable, NgramError> {
    if n == 0 {
        return Err(NgramError::InvalidOrder);
    }

    let mut table = NgramTable::default();
    if tokens.len() < n {
        return Ok(table);
    }
    for window in tokens.windows(n) {
        *table.entry(Ngram::new(window.to_vec())).or_insert(0) += 1;
    }
    Ok(table)
}

/// Converts counts to probabilities with additive (Laplace) smoothing.
///
/// Each key's probability is `(count + smoothing) / (total + smoothing ×
/// distinct_keys)`; with `smoothing = 0` this is the maximum-likelihood
/// estimate, which is undefined for an empty table.
pub fn probabilities(
    table: &NgramTable,
    smoothing: f64,
) -> Result<FxHashMap<Ngram, f64>, NgramError> {
    if smoothing < 0.0 || !smoothing.is_finite() {
        return Err(NgramError::InvalidSmoothing(smoothing));
    }
    if table.is_empty() && smoothing == 0.0 {
        return Err(NgramError::EmptyTable);
    }

    let total: f64 =
        table.values().map(|&count| count as f64).sum::<f64>() + smoothing * table.len() as f64;
    Ok(table
        .iter()
        .map(|(key, &count)| (key.clone(), (count as f64 + smoothing) / total))
        .collect())
}
