use super::{
    cursor::Cursor,
    kinds::{Image, Link},
    types::TextFragment,
};

/// Which bracketed marker a scan looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    /// `![alt](url)`
    Image,
    /// `[text](url)` not preceded by `!`
    Link,
}

impl MarkerKind {
    fn fragment(self, text: &str, url: &str) -> TextFragment {
        match self {
            MarkerKind::Image => TextFragment::image(text, url),
            MarkerKind::Link => TextFragment::link(text, url),
        }
    }
}

/// A marker found in a string, with its byte range and captured parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkerMatch<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

/// Returns `(alt, url)` for every `![alt](url)` in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract(text, MarkerKind::Image)
}

/// Returns `(text, url)` for every `[text](url)` in `text` that is not an
/// image, left to right.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    extract(text, MarkerKind::Link)
}

/// Pulls image markers out of plain fragments into `Image` fragments.
pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_markers(fragments, MarkerKind::Image)
}

/// Pulls link markers out of plain fragments into `Link` fragments.
pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_markers(fragments, MarkerKind::Link)
}

fn extract(text: &str, kind: MarkerKind) -> Vec<(String, String)> {
    find_markers(text, kind)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

fn split_markers(fragments: Vec<TextFragment>, kind: MarkerKind) -> Vec<TextFragment> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }
        match split_text(fragment.content(), kind) {
            Some(pieces) => out.extend(pieces),
            None => out.push(fragment),
        }
    }
    out
}

/// Splits `text` around its markers. `None` when there are no markers, so the
/// caller keeps the original fragment as is.
///
/// Only non-empty plain text before, between and after markers is emitted.
fn split_text(text: &str, kind: MarkerKind) -> Option<Vec<TextFragment>> {
    let markers = find_markers(text, kind);
    if markers.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(markers.len() * 2 + 1);
    let mut last = 0;
    for m in markers {
        if m.start > last {
            out.push(TextFragment::plain(&text[last..m.start]));
        }
        out.push(kind.fragment(m.text, m.url));
        last = m.end;
    }
    if last < text.len() {
        out.push(TextFragment::plain(&text[last..]));
    }
    Some(out)
}

/// Scans `s` left to right for non-overlapping markers of `kind`.
fn find_markers(s: &str, kind: MarkerKind) -> Vec<MarkerMatch<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        let start = cur.pos();
        let found = match kind {
            MarkerKind::Image => try_parse_image(&mut cur),
            MarkerKind::Link => try_parse_link(&mut cur),
        };
        match found {
            Some((text, url)) => out.push(MarkerMatch {
                start,
                end: cur.pos(),
                text,
                url,
            }),
            None => {
                cur.bump();
            }
        }
    }

    out
}

/// Attempts `![alt](url)` at the cursor. On failure the cursor is restored.
fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Image::BANG) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // !
    let parsed = try_parse_bracketed(cur);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

/// Attempts `[text](url)` at the cursor, rejecting a `[` right after `!`.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.prev() == Some(Image::BANG) {
        return None;
    }
    try_parse_bracketed(cur)
}

/// Attempts `[text](url)` at the cursor.
///
/// `text` stops at the first `[` or `]`, `url` at the first `(` or `)`; the
/// marker only matches if those stops are the expected closing bytes. On
/// failure the cursor is restored.
fn try_parse_bracketed<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let text_start = cur.pos();
    cur.bump_while(|b| b != Link::OPEN && b != Link::CLOSE);
    let text_end = cur.pos();

    if !cur.eat(Link::CLOSE) || !cur.eat(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }

    let url_start = cur.pos();
    cur.bump_while(|b| b != Link::URL_OPEN && b != Link::URL_CLOSE);
    let url_end = cur.pos();

    if !cur.eat(Link::URL_CLOSE) {
        *cur = saved;
        return None;
    }

    Some((
        cur.slice(text_start, text_end),
        cur.slice(url_start, url_end),
    ))
}
