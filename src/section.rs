/// A table of contents entry, one per marked line, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub title: String,
    pub anchor: String,
}

/// A line of the document after section rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Unmarked source line, including its original terminator.
    Text(&'a str),
    /// Heading markup that replaced a marked line.
    Heading {
        markup: String,
        /// Line ending of the marked line, empty on an unterminated last line.
        terminator: &'a str,
        /// The marked line sat inside a fenced code block.
        fenced: bool,
    },
}

/// Result of scanning a document for section markers.
#[derive(Debug, Clone, Default)]
pub struct Extraction<'a> {
    pub lines: Vec<Line<'a>>,
    pub entries: Vec<SectionEntry>,
}

impl Extraction<'_> {
    /// Join the rewritten lines back into markdown source.
    ///
    /// Outside a fenced code block, heading markup is followed by a blank
    /// line so the markdown engine closes the raw HTML block there and parses
    /// the next line as markdown. Inside a fence only the original line
    /// ending is kept.
    pub fn markdown_source(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Text(text) => out.push_str(text),
                Line::Heading {
                    markup,
                    terminator,
                    fenced,
                } => {
                    out.push_str(markup);
                    out.push_str(terminator);
                    if !*fenced {
                        let blank = if terminator.is_empty() { "\n\n" } else { *terminator };
                        out.push_str(blank);
                    }
                }
            }
        }
        out
    }
}
