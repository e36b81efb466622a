mod config;
mod document;
mod error;
mod extract;
mod page;
mod render;
mod section;

pub use config::{Config, PageConfig, SectionsConfig};
pub use document::{load_document, write_document};
pub use error::{EbookError, EbookResult};
pub use extract::extract_sections;
pub use page::{PageParts, assemble_page, toc_html};
pub use render::markdown_to_html;
pub use section::{Extraction, Line, SectionEntry};

use std::path::{Path, PathBuf};

/// A rendered page and the sections listed in its sidebar.
#[derive(Debug, Clone)]
pub struct Ebook {
    pub html: String,
    pub sections: Vec<SectionEntry>,
}

/// What a call to [`generate_ebook`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Written {
        output: PathBuf,
        sections: usize,
    },
    /// The input did not exist; nothing was written.
    InputMissing(PathBuf),
}

/// Convert document text to a complete HTML page without touching the filesystem.
pub fn render_ebook(text: &str, source_name: &str, config: &Config) -> Ebook {
    let extraction = extract_sections(text, &config.sections);
    log::debug!("found {} sections", extraction.entries.len());
    if extraction.entries.is_empty() {
        log::warn!(
            "{}: no lines start with {:?}, table of contents will be empty",
            source_name,
            config.sections.marker
        );
    }

    let content = markdown_to_html(&extraction.markdown_source());
    log::debug!("rendered {} bytes of content", content.len());

    let toc = toc_html(&extraction.entries);
    let html = assemble_page(
        &PageParts {
            source_name,
            toc: &toc,
            content: &content,
        },
        &config.page,
    );

    Ebook {
        html,
        sections: extraction.entries,
    }
}

/// Convert the file at `input` and write the page to `output`.
///
/// A missing input is not an error: it is reported as
/// [`Conversion::InputMissing`] and no output is produced.
pub fn generate_ebook(input: &Path, output: &Path, config: &Config) -> EbookResult<Conversion> {
    let text = match load_document(input) {
        Ok(text) => text,
        Err(EbookError::NotFound(path)) => {
            log::debug!("input {} does not exist", path.display());
            return Ok(Conversion::InputMissing(path));
        }
        Err(e) => return Err(e),
    };
    log::debug!("read {} bytes from {}", text.len(), input.display());

    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| input.to_string_lossy());
    let ebook = render_ebook(&text, &source_name, config);

    write_document(output, &ebook.html)?;
    log::info!(
        "wrote {} ({} sections, {} bytes)",
        output.display(),
        ebook.sections.len(),
        ebook.html.len()
    );

    Ok(Conversion::Written {
        output: output.to_path_buf(),
        sections: ebook.sections.len(),
    })
}
