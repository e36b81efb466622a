use crate::config::SectionsConfig;
use crate::section::{Extraction, Line, SectionEntry};

/// Scan `text` once, front to back, rewriting every marked line into an
/// `<h2>` carrying a sequential anchor.
///
/// Marked lines inside fenced code blocks are rewritten and counted like any
/// other; the extraction only records that they were fenced.
pub fn extract_sections<'a>(text: &'a str, config: &SectionsConfig) -> Extraction<'a> {
    let mut extraction = Extraction::default();
    let mut count = 0usize;
    let mut fence: Option<Fence> = None;

    for line in lines_with_endings(text) {
        let trimmed = line.trim();
        if !trimmed.starts_with(config.marker.as_str()) {
            fence = match fence {
                Some(open) if open.is_closed_by(trimmed) => None,
                Some(open) => Some(open),
                None => Fence::open(trimmed),
            };
            extraction.lines.push(Line::Text(line));
            continue;
        }

        count += 1;
        let title = trimmed.replace(config.marker.as_str(), "").trim().to_string();
        let anchor = format!("{}{}", config.anchor_prefix, count);
        let body_len = line.trim_end_matches(['\r', '\n']).len();

        extraction.lines.push(Line::Heading {
            markup: format!("<h2 id=\"{}\">{} {}</h2>", anchor, config.marker, title),
            terminator: &line[body_len..],
            fenced: fence.is_some(),
        });
        extraction.entries.push(SectionEntry { title, anchor });
    }

    extraction
}

/// Split into lines, each keeping its `\n`, `\r\n` or lone `\r` ending.
fn lines_with_endings(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\r', '\n']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// An open ``` or ~~~ code fence.
#[derive(Clone, Copy)]
struct Fence {
    ch: char,
    len: usize,
}

impl Fence {
    fn open(trimmed: &str) -> Option<Fence> {
        let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = trimmed.chars().take_while(|c| *c == ch).count();
        (len >= 3).then_some(Fence { ch, len })
    }

    fn is_closed_by(self, trimmed: &str) -> bool {
        let run = trimmed.chars().take_while(|c| *c == self.ch).count();
        run >= self.len && trimmed[run * self.ch.len_utf8()..].trim().is_empty()
    }
}
