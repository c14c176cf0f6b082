//! Project Gutenberg boilerplate stripping.
//!
//! Archive files wrap the substantive text in license front matter and a
//! trailing small print block, bounded by well-known marker lines. We keep
//! what lies strictly between the first START marker and the first END
//! marker; text without markers passes through untouched, which is the
//! common case for already-clean input.

/// Marker substrings that bound the retained region.
const GUTENBERG_MARKERS: [&str; 4] = [
    "*** START OF THIS PROJECT GUTENBERG",
    "*** END OF THIS PROJECT GUTENBERG",
    "*** START OF THE PROJECT GUTENBERG",
    "*** END OF THE PROJECT GUTENBERG",
];

/// Removes Project Gutenberg front and back matter.
///
/// The first line containing a START marker moves the retained region to
/// the line after it; the first line containing an END marker closes the
/// region before that line and ends the scan. Afterwards, runs of three or
/// more newlines collapse to a single blank line, runs of two or more
/// spaces collapse to one, and the result is trimmed. Total function; no
/// markers means the whole text is retained.
pub fn strip_boilerplate(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    let mut start = 0usize;
    let mut end = lines.len();

    for (idx, line) in lines.iter().enumerate() {
        if !GUTENBERG_MARKERS.iter().any(|marker| line.contains(marker)) {
            continue;
        }
        if line.contains("START") {
            start = idx + 1;
        } else if line.contains("END") {
            end = idx;
            break;
        }
    }

    let sliced = if start < end {
        lines[start..end].join("\n")
    } else {
        String::new()
    };

    let collapsed = collapse_space_runs(&collapse_blank_lines(&sliced));
    collapsed.trim().to_string()
}

/// Runs of 3+ newlines become exactly one blank line; shorter runs pass
/// through unchanged.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            continue;
        }
        flush_newlines(&mut out, &mut newlines);
        out.push(ch);
    }
    flush_newlines(&mut out, &mut newlines);
    out
}

fn flush_newlines(out: &mut String, newlines: &mut usize) {
    for _ in 0..(*newlines).min(2) {
        out.push('\n');
    }
    *newlines = 0;
}

/// Runs of 2+ ASCII spaces become a single space. Tabs and other
/// whitespace are left for the normalizer.
fn collapse_space_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch == ' ' {
            in_run = true;
            continue;
        }
        if in_run {
            out.push(' ');
            in_run = false;
        }
        out.push(ch);
    }
    if in_run {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retains_region_between_markers() {
        let raw = "\
The Project Gutenberg eBook of Example
*** START OF THE PROJECT GUTENBERG EBOOK EXAMPLE ***
Chapter one text.
More of the story.
*** END OF THE PROJECT GUTENBERG EBOOK EXAMPLE ***
End of the Project Gutenberg eBook";
        assert_eq!(
            strip_boilerplate(raw),
            "Chapter one text.\nMore of the story."
        );
    }

    #[test]
    fn unmarked_text_passes_through() {
        let raw = "Just a plain document.\nNothing to strip.";
        assert_eq!(strip_boilerplate(raw), raw);
    }

    #[test]
    fn scan_stops_at_first_end_marker() {
        let raw = "\
*** START OF THIS PROJECT GUTENBERG EBOOK ***
kept
*** END OF THIS PROJECT GUTENBERG EBOOK ***
dropped
*** END OF THIS PROJECT GUTENBERG EBOOK ***
also dropped";
        assert_eq!(strip_boilerplate(raw), "kept");
    }

    #[test]
    fn blank_line_runs_collapse() {
        let raw = "para one\n\n\n\n\npara two\n\npara three";
        assert_eq!(strip_boilerplate(raw), "para one\n\npara two\n\npara three");
    }

    #[test]
    fn space_runs_collapse() {
        assert_eq!(strip_boilerplate("too   many    spaces"), "too many spaces");
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(strip_boilerplate("\n\n  text  \n\n"), "text");
    }

    #[test]
    fn empty_input_is_fine() {
        assert_eq!(strip_boilerplate(""), "");
    }

    #[test]
    fn start_marker_on_last_line_leaves_nothing() {
        let raw = "intro\n*** START OF THE PROJECT GUTENBERG EBOOK ***";
        assert_eq!(strip_boilerplate(raw), "");
    }
}
