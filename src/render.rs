use pulldown_cmark::{Event, Options, Parser, html};

/// Render markdown to an HTML fragment.
///
/// Tables are enabled, fenced code is part of CommonMark, and every newline
/// inside a paragraph becomes a `<br />`. Raw HTML in the source is emitted
/// untouched.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
