use std::sync::LazyLock;

use regex::Regex;

/// A list item marker (`-` or `{n}.`) and the whitespace run after it.
static ITEM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.|-)\s+").expect("list item marker regex is valid"));

/// Unordered list block type: every line starts with `"- "`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }
}

/// Ordered list block type: line `i` starts with `"{i}. "`, counting from 1.
pub struct OrderedList;

impl OrderedList {
    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    /// Whether the lines number strictly consecutively from 1.
    pub fn is_sequence<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .zip(1..)
            .all(|(line, number)| line.starts_with(&Self::marker(number)))
    }
}

/// Removes a leading list marker from a line, if any.
pub fn strip_item_marker(line: &str) -> &str {
    match ITEM_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}
