//! Time-window filtering of caption snippets.
//!
//! Captions carry no per-character timing, so a snippet that straddles a window
//! edge is cut by linear interpolation: the snippet's characters are assumed to
//! be spread evenly across its duration, and the characters falling inside the
//! window are kept. This approximates which words were spoken in the window; it
//! does not look for word boundaries.

use crate::Snippet;
use crate::time::TimeWindow;

/// Restrict `snippets` to `window`, trimming snippets that cross its edges.
///
/// An unbounded window returns the input untouched. Snippets are never
/// re-sorted, and an inverted window (start after end) yields nothing.
pub fn filter_snippets(snippets: Vec<Snippet>, window: &TimeWindow) -> Vec<Snippet> {
    if window.is_unbounded() {
        return snippets;
    }

    snippets
        .iter()
        .filter_map(|snippet| clip_snippet(snippet, window))
        .collect()
}

fn clip_snippet(snippet: &Snippet, window: &TimeWindow) -> Option<Snippet> {
    let segment_start = snippet.start.max(window.start.unwrap_or(snippet.start));
    let segment_end = snippet.end().min(window.end.unwrap_or(snippet.end()));

    if segment_start >= segment_end {
        return None;
    }

    let len = snippet.text.chars().count();
    let chars_per_second = if snippet.duration > 0.0 {
        len as f64 / snippet.duration
    } else {
        0.0
    };

    let char_start = char_offset(segment_start - snippet.start, chars_per_second, len);
    let char_end = char_offset(segment_end - snippet.start, chars_per_second, len);

    if char_start >= char_end {
        return None;
    }

    let text = snippet
        .text
        .chars()
        .skip(char_start)
        .take(char_end - char_start)
        .collect::<String>();

    Some(Snippet {
        text,
        start: segment_start,
        duration: segment_end - segment_start,
    })
}

fn char_offset(elapsed: f64, chars_per_second: f64, len: usize) -> usize {
    let offset = (elapsed * chars_per_second).floor().max(0.0) as usize;
    offset.min(len)
}
