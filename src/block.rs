/// A single input line, classified by its leading marker.
///
/// Content slices borrow from the line with the marker and any whitespace
/// after it removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// One or more leading `#`. `level` is the full length of the run and may
    /// exceed 6; `raw` keeps the whole line for the passthrough case.
    Heading {
        level: usize,
        content: &'a str,
        raw: &'a str,
    },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Text(&'a str),
    Blank,
}

/// List flavour, used for the open/close tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub(crate) fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// The block left open by the previous line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OpenBlock {
    #[default]
    None,
    Paragraph,
    List(ListKind),
}
