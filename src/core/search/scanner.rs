//! Line-oriented substring scanning of a single document.

use crate::core::types::{SearchMatch, SearchResult};
use std::borrow::Cow;

/// Scan one document for `query`
///
/// Returns `None` when the document has no matching line. Matching is
/// plain substring containment; unless `case_sensitive`, both the
/// query and each line are lowercased first.
pub fn scan_document(
    file: &str,
    content: &str,
    query: &str,
    case_sensitive: bool,
    context_lines: usize,
) -> Option<SearchResult> {
    let needle = fold_case(query, case_sensitive);
    let lines: Vec<&str> = content.split('\n').collect();

    let matches: Vec<SearchMatch> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| fold_case(line, case_sensitive).contains(needle.as_ref()))
        .map(|(index, line)| SearchMatch {
            line_number: index + 1,
            line: line.trim().to_string(),
            context: context_around(&lines, index, context_lines),
        })
        .collect();

    if matches.is_empty() {
        return None;
    }

    Some(SearchResult {
        file: file.to_string(),
        matches,
    })
}

fn fold_case(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Up to `radius` trimmed lines before and after `index`, truncated at
/// the document edges
fn context_around(lines: &[&str], index: usize, radius: usize) -> Vec<String> {
    let start = index.saturating_sub(radius);
    let end = lines.len().min(index.saturating_add(radius).saturating_add(1));

    lines[start..index]
        .iter()
        .chain(&lines[index + 1..end])
        .map(|line| line.trim().to_string())
        .collect()
}
