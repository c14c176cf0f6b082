//! Flat-file persistence for frequency tables.
//!
//! The on-disk format is a UTF-8 JSON object mapping joined keys to
//! integer counts, written in full on every save and read in full on every
//! load. Keys are sorted in the serialized form so saves are byte-stable
//! for identical tables.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::NgramError;
use crate::table::{Ngram, NgramTable, DELIMITER};

/// Serializes a table to the flat `joined-key to count` JSON form.
///
/// Fails with [`NgramError::ReservedDelimiter`] if any token contains the
/// join delimiter, since that key could not be split back apart.
pub fn serialize_table(table: &NgramTable) -> Result<String, NgramError> {
    let mut flat: BTreeMap<String, u64> = BTreeMap::new();
    for (key, &count) in table {
        if let Some(token) = key.tokens().iter().find(|token| token.contains(DELIMITER)) {
            return Err(NgramError::ReservedDelimiter(token.clone()));
        }
        flat.insert(key.joined(), count);
    }
    serde_json::to_string_pretty(&flat).map_err(|err| NgramError::Format(err.to_string()))
}

/// Restores a table from its serialized form, splitting joined keys back
/// into their token sequences.
pub fn deserialize_table(data: &str) -> Result<NgramTable, NgramError> {
    let flat: BTreeMap<String, u64> =
        serde_json::from_str(data).map_err(|err| NgramError::Format(err.to_string()))?;
    Ok(flat
        .into_iter()
        .map(|(joined, count)| (Ngram::from_joined(&joined), count))
        .collect())
}

/// Writes the serialized table to `path`, replacing any previous content.
pub fn save_table(table: &NgramTable, path: impl AsRef<Path>) -> Result<(), NgramError> {
    let serialized = serialize_table(table)?;
    fs::write(path, serialized)?;
    Ok(())
}

/// Reads a full table back from `path`.
pub fn load_table(path: impl AsRef<Path>) -> Result<NgramTable, NgramError> {
    let data = fs::read_to_string(path)?;
    deserialize_table(&data)
}

#[cfg(test)]
mod tests {
    use crate::table::ngram_counts;

    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("frequencies.json");

        let table = ngram_counts(&tokens(&["to", "be", "or", "not", "to", "be"]), 2).unwrap();
        save_table(&table, &path).expect("save succeeds");
        let restored = load_table(&path).expect("load succeeds");
        assert_eq!(restored, table);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("frequencies.json");

        let first = ngram_counts(&tokens(&["a", "b", "c"]), 1).unwrap();
        let second = ngram_counts(&tokens(&["x", "y"]), 1).unwrap();
        save_table(&first, &path).expect("first save");
        save_table(&second, &path).expect("second save");
        assert_eq!(load_table(&path).expect("load"), second);
    }

    #[test]
    fn serialized_form_is_stable() {
        let table = ngram_counts(&tokens(&["b", "a", "b"]), 1).unwrap();
        assert_eq!(
            serialize_table(&table).unwrap(),
            serialize_table(&table).unwrap()
        );
    }

    #[test]
    fn unigram_keys_serialize_as_bare_tokens() {
        let table = ngram_counts(&tokens(&["word"]), 1).unwrap();
        let serialized = serialize_table(&table).unwrap();
        assert!(serialized.contains("\"word\""));
        assert!(!serialized.contains("||"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_table(&missing), Err(NgramError::Io(_))));
    }

    #[test]
    fn malformed_file_is_a_format_error() {
        assert!(matches!(
            deserialize_table("not json at all"),
            Err(NgramError::Format(_))
        ));
        assert!(matches!(
            deserialize_table(r#"{"key": "not a number"}"#),
            Err(NgramError::Format(_))
        ));
    }
}
