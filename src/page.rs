use pulldown_cmark_escape::escape_html;

use crate::config::PageConfig;
use crate::section::SectionEntry;

static STYLESHEET: &str = include_str!("style.css");

/// Inputs to the page shell.
pub struct PageParts<'a> {
    /// Base name of the source document, shown in `<title>`.
    pub source_name: &'a str,
    pub toc: &'a str,
    pub content: &'a str,
}

/// Render the sidebar list. Titles are inserted as written, matching the
/// heading markup in the content.
pub fn toc_html(entries: &[SectionEntry]) -> String {
    let mut out = String::from("<ul>");
    for entry in entries {
        out.push_str("<li><a href=\"#");
        out.push_str(&entry.anchor);
        out.push_str("\">");
        out.push_str(&entry.title);
        out.push_str("</a></li>");
    }
    out.push_str("</ul>");
    out
}

/// Wrap the TOC and rendered content in the static two-pane document.
pub fn assemble_page(parts: &PageParts, config: &PageConfig) -> String {
    let capacity = STYLESHEET.len() + parts.toc.len() + parts.content.len() + 512;
    let mut out = String::with_capacity(capacity);

    out.push_str("<!DOCTYPE html>\n");
    match &config.lang {
        Some(lang) => {
            out.push_str("<html lang=\"");
            escape_into(lang, &mut out);
            out.push_str("\">\n");
        }
        None => out.push_str("<html>\n"),
    }

    out.push_str("<head>\n    <meta charset=\"UTF-8\">\n    <title>");
    escape_into(&config.title_prefix, &mut out);
    escape_into(parts.source_name, &mut out);
    out.push_str("</title>\n    <style>\n");
    out.push_str(STYLESHEET);
    if let Some(extra) = &config.extra_css {
        out.push('\n');
        out.push_str(extra);
        out.push('\n');
    }
    out.push_str("    </style>\n</head>\n<body>\n");

    out.push_str("    <div id=\"sidebar\">\n        <h2>");
    escape_into(&config.toc_heading, &mut out);
    out.push_str("</h2>\n        ");
    out.push_str(parts.toc);
    out.push_str("\n    </div>\n");

    out.push_str("    <div id=\"content-wrapper\">\n        <article id=\"main-content\">\n");
    out.push_str(parts.content);
    out.push_str("        </article>\n    </div>\n</body>\n</html>\n");

    out
}

fn escape_into(text: &str, out: &mut String) {
    // Writing into a String cannot fail.
    let _ = escape_html(&mut *out, text);
}
