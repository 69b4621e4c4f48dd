/// Fenced code block type with owned fence constant.
///
/// A code block is raw: its text never goes through the inline tokenizer.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether `block` both starts and ends with a fence. A lone fence counts.
    pub fn encloses(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Code text of a fenced block, ready to go inside `<code>`.
    ///
    /// One leading newline is dropped and the text always ends with exactly
    /// one trailing newline.
    pub fn code_text(block: &str) -> String {
        let mut code = Self::strip_fences(block);
        if code.starts_with('\n') {
            code.remove(0);
        }
        if !code.ends_with('\n') {
            code.push('\n');
        }
        code
    }

    /// Removes the opening and closing fences.
    ///
    /// Single-line and multi-line blocks follow separate rules and are kept
    /// as separate paths.
    pub fn strip_fences(block: &str) -> String {
        if block.contains('\n') {
            Self::strip_multi_line(block)
        } else {
            Self::strip_single_line(block)
        }
    }

    /// ```` ``` code ``` ````: every backtick at either end goes, then the
    /// surrounding whitespace.
    fn strip_single_line(block: &str) -> String {
        block.trim_matches('`').trim().to_string()
    }

    /// The fence is cut from the first and last lines, which are then
    /// trimmed; middle lines are kept verbatim and an empty last line is
    /// dropped.
    fn strip_multi_line(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        let (first, rest) = match lines.split_first() {
            Some(split) => split,
            None => return String::new(),
        };
        let (last, middle) = match rest.split_last() {
            Some(split) => split,
            None => return String::new(),
        };

        let first = match first.strip_prefix(Self::FENCE) {
            Some(info) => info.trim(),
            None => first,
        };
        let last = match last.strip_suffix(Self::FENCE) {
            Some(body) => body.trim(),
            None => last,
        };

        let mut out = Vec::with_capacity(lines.len());
        out.push(first);
        out.extend_from_slice(middle);
        if !last.is_empty() {
            out.push(last);
        }
        out.join("\n")
    }
}
