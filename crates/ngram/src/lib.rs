//! Textmill n-gram layer.
//!
//! Counts contiguous token windows, derives (optionally Laplace-smoothed)
//! probabilities, and persists the table as a flat `key to count` JSON file.
//! Fed by the canonical tokenizers; independent of the rest of the
//! pipeline.
//!
//! Multi-token keys serialize by joining their tokens with the reserved
//! [`DELIMITER`] (`"||"`). Pipeline tokens can never contain it (the
//! normalizer strips `|` as punctuation), and [`serialize_table`] enforces
//! the reservation for tokens from anywhere else, so the round-trip is
//! exact.

mod error;
mod store;
mod table;

pub use crate::error::NgramError;
pub use crate::store::{deserialize_table, load_table, save_table, serialize_table};
pub use crate::table::{ngram_counts, probabilities, Ngram, NgramTable, DELIMITER};

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn round_trip_with_multi_token_keys() {
        let table = ngram_counts(&tokens(&["a", "b", "a", "b", "c"]), 2).unwrap();
        let restored = deserialize_table(&serialize_table(&table).unwrap()).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn round_trip_with_single_pipe_characters() {
        // A lone `|` inside a token is fine; only the two-character
        // delimiter is reserved.
        let table = ngram_counts(&tokens(&["a|b", "c", "a|b"]), 2).unwrap();
        let restored = deserialize_table(&serialize_table(&table).unwrap()).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn delimiter_inside_a_token_is_rejected() {
        let mut table = NgramTable::default();
        table.insert(Ngram::new(vec!["bad||token".to_string(), "x".to_string()]), 1);
        assert!(matches!(
            serialize_table(&table),
            Err(NgramError::ReservedDelimiter(_))
        ));
    }
}
