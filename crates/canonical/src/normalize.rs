use std::borrow::Cow;

use regex::Regex;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;

/// Primary normalizer. Lowercases, maps typographic quotes and dashes to
/// their ASCII equivalents, strips punctuation under the configured
/// retention policy, and collapses whitespace.
///
/// The strip pattern is assembled at call time from the config, including
/// any [`extra_strip_classes`](NormalizeConfig::extra_strip_classes)
/// fragments, so this path can fail with [`NormalizeError::Pattern`].
/// Callers that must always produce output go through
/// [`normalize_or_fallback`] instead of calling this directly.
pub fn normalize(text: &str, cfg: &NormalizeConfig) -> Result<String, NormalizeError> {
    let strip = build_strip_pattern(cfg)?;
    let text = pre_normalize(text, cfg);
    let stripped = strip.replace_all(&text, " ");
    let stripped = if cfg.preserve_sentence_boundaries {
        stripped.into_owned()
    } else {
        drop_free_apostrophes(&stripped)
    };
    Ok(collapse_whitespace(&stripped))
}

/// Guaranteed-safe normalizer.
///
/// Performs only the literal substitutions and a fixed char-predicate
/// retention scan; there is no runtime-assembled pattern anywhere on this
/// path, so it cannot fail for any input or config. In boundary-preserving
/// mode it retains the same conservative character set as the primary's
/// base class; without boundaries it keeps word characters and whitespace
/// only.
pub fn normalize_safe(text: &str, cfg: &NormalizeConfig) -> String {
    let text = pre_normalize(text, cfg);
    let mut kept = String::with_capacity(text.len());
    for ch in text.chars() {
        let retain = is_word_char(ch)
            || ch.is_whitespace()
            || (cfg.preserve_sentence_boundaries
                && matches!(ch, '.' | '!' | '?' | '\'' | '-'));
        kept.push(if retain { ch } else { ' ' });
    }
    collapse_whitespace(&kept)
}

/// Normalizes with the primary path, degrading to [`normalize_safe`] if the
/// assembled pattern is malformed.
///
/// This is the contract every aggregate caller (statistics, summaries, the
/// pipeline facade) must use: a broken pattern is logged and absorbed here,
/// never surfaced.
pub fn normalize_or_fallback(text: &str, cfg: &NormalizeConfig) -> String {
    match normalize(text, cfg) {
        Ok(normalized) => normalized,
        Err(err) => {
            warn!(error = %err, "normalize_fallback");
            normalize_safe(text, cfg)
        }
    }
}

/// Collapses runs of Unicode whitespace to single ASCII spaces and trims
/// the edges. Deterministic; useful on its own for callers that need
/// whitespace-normalized text without the full pipeline.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}

/// NFKC (when configured), lowercase, and the literal typographic mapping.
/// Shared by the primary and safe paths; infallible.
fn pre_normalize(text: &str, cfg: &NormalizeConfig) -> String {
    let text: Cow<'_, str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };
    let lowered = text.to_lowercase();
    lowered
        .chars()
        .map(|ch| match ch {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{2014}' | '\u{2013}' => '-',
            other => other,
        })
        .collect()
}

/// Builds the strip pattern for the configured policy.
///
/// Base classes:
/// - boundaries preserved: `[^\w\s.!?'-]`
/// - boundaries dropped:   `[^\w\s']` (apostrophes resolved afterwards)
///
/// `extra_strip_classes` fragments are spliced in verbatim before the
/// closing bracket; they are the one untrusted input here and the reason
/// this function returns `Result`.
fn build_strip_pattern(cfg: &NormalizeConfig) -> Result<Regex, NormalizeError> {
    let mut class = String::from(r"[^\w\s");
    if cfg.preserve_sentence_boundaries {
        class.push_str(".!?");
    }
    class.push('\'');
    for extra in &cfg.extra_strip_classes {
        class.push_str(extra);
    }
    if cfg.preserve_sentence_boundaries {
        class.push('-');
    }
    class.push(']');
    Regex::new(&class).map_err(|err| NormalizeError::Pattern {
        pattern: class.clone(),
        message: err.to_string(),
    })
}

/// Replaces apostrophes that are not flanked by word characters on both
/// sides with spaces, keeping contractions (`don't`) intact. The `regex`
/// crate has no lookaround, so this is a plain scan.
fn drop_free_apostrophes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (idx, &ch) in chars.iter().enumerate() {
        if ch != '\'' {
            out.push(ch);
            continue;
        }
        let flanked = idx
            .checked_sub(1)
            .and_then(|prev| chars.get(prev))
            .copied()
            .is_some_and(is_word_char)
            && chars.get(idx + 1).copied().is_some_and(is_word_char);
        out.push(if flanked { ch } else { ' ' });
    }
    out
}

/// Matches the regex `\w` class closely enough for this pipeline.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_cases() {
        let cases = [
            ("  hello   world  ", "hello world"),
            ("hello\t\t\nworld", "hello world"),
            ("", ""),
            ("   \n\t ", ""),
            ("already normal", "already normal"),
            ("hello\u{00A0}world", "hello world"),
        ];
        for (input, expected) in cases {
            assert_eq!(collapse_whitespace(input), expected);
        }
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize("", &cfg).unwrap(), "");
        assert_eq!(normalize_safe("", &cfg), "");
    }

    #[test]
    fn output_contains_only_retained_characters() {
        let cfg = NormalizeConfig::default();
        let out = normalize("A wild mix: $100, 50% off; e-mail me@example.com!", &cfg).unwrap();
        for ch in out.chars() {
            assert!(
                ch.is_alphanumeric()
                    || ch == ' '
                    || matches!(ch, '.' | '!' | '?' | '\'' | '-' | '_'),
                "unexpected character {ch:?} in {out:?}"
            );
        }
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
        assert!(!out.contains("  "), "no double spaces allowed: {out:?}");
    }

    #[test]
    fn extra_classes_extend_the_strip_set() {
        let cfg = NormalizeConfig {
            extra_strip_classes: vec!["«»".into()],
            ..Default::default()
        };
        assert_eq!(normalize("«quoted» text.", &cfg).unwrap(), "quoted text.");
    }

    #[test]
    fn free_apostrophes_dropped_without_boundaries() {
        let cfg = NormalizeConfig {
            preserve_sentence_boundaries: false,
            ..Default::default()
        };
        assert_eq!(normalize("'lone' but isn't gone", &cfg).unwrap(), "lone but isn't gone");
    }

    #[test]
    fn safe_path_ignores_malformed_fragments() {
        let cfg = NormalizeConfig {
            extra_strip_classes: vec![r"\p{Bogus".into()],
            ..Default::default()
        };
        assert_eq!(normalize_safe("It works. Still!", &cfg), "it works. still!");
    }

    #[test]
    fn nfkc_merges_equivalent_forms() {
        let cfg = NormalizeConfig::default();
        let composed = normalize("caf\u{00E9}", &cfg).unwrap();
        let decomposed = normalize("cafe\u{0301}", &cfg).unwrap();
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn nfkc_can_be_disabled() {
        let cfg = NormalizeConfig {
            normalize_unicode: false,
            ..Default::default()
        };
        let composed = normalize("caf\u{00E9}", &cfg).unwrap();
        let decomposed = normalize("cafe\u{0301}", &cfg).unwrap();
        assert_ne!(composed, decomposed);
    }
}
