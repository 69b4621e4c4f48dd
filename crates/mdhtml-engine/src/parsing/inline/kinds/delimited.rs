use crate::parsing::inline::types::TextKind;

/// Inline styles bounded by a paired delimiter, e.g. `**bold**`.
///
/// Splitting runs in [`Delimited::PIPELINE`] order; a span already tagged by
/// an earlier style is never split again by a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimited {
    Bold,
    Italic,
    Code,
}

impl Delimited {
    pub const PIPELINE: [Delimited; 3] = [Delimited::Bold, Delimited::Italic, Delimited::Code];

    pub const fn delimiter(self) -> &'static str {
        match self {
            Delimited::Bold => "**",
            Delimited::Italic => "_",
            Delimited::Code => "`",
        }
    }

    pub const fn kind(self) -> TextKind {
        match self {
            Delimited::Bold => TextKind::Bold,
            Delimited::Italic => TextKind::Italic,
            Delimited::Code => TextKind::Code,
        }
    }
}
