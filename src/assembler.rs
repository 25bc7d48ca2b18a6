//! The document assembler: turns a [`Curriculum`] into a paginated PDF.
//!
//! The assembler owns all content and ordering decisions and treats the
//! layout engine as an opaque collaborator.  While it emits fixed-height
//! lines it runs the same heights through a [`Paginator`], so it knows the
//! page and rectangle of every linked line up front and can hand them to
//! [`crate::links`] once the bytes exist.

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::style::{Color, Style, StyledString};
use genpdf::Alignment;
use log::{debug, info};

use crate::builder::{Band, DocumentBuilder};
use crate::elements::{mm_to_f64, TextLine, VerticalGap};
use crate::error::{Error, Result};
use crate::layout::{self, Paginator};
use crate::links::{self, LinkAnnotation, LinkRect};
use crate::model::Curriculum;

/// Default output filename used by the CLI.
pub const DEFAULT_OUTPUT: &str = "Cybersecurity_Curriculum.pdf";

const TITLE_FONT_SIZE: u8 = 16;
const INTRO_FONT_SIZE: u8 = 12;
const HEADING_FONT_SIZE: u8 = 13;
const BODY_FONT_SIZE: u8 = 11;
const FOOTER_FONT_SIZE: u8 = 10;

/// Blue used to mark linked text as clickable.
const LINK_COLOR: Color = Color::Rgb(0, 0, 200);
/// Muted grey for the page-number footer.
const FOOTER_COLOR: Color = Color::Greyscale(120);

/// A fully rendered document together with the layout facts the assembler
/// derived while placing content.
pub struct RenderedDocument {
    /// The finished PDF.
    pub bytes: Vec<u8>,
    /// Number of pages in the document.
    pub page_count: usize,
    /// The link annotations embedded into the document, in content order.
    pub links: Vec<LinkAnnotation>,
}

enum Piece {
    Line(TextLine),
    Gap(VerticalGap),
}

/// Renders the curriculum to PDF bytes without touching the filesystem.
pub fn render(curriculum: &Curriculum) -> Result<RenderedDocument> {
    curriculum.validate()?;

    let title = curriculum.title().to_owned();
    let mut document = DocumentBuilder::new(curriculum.title())
        .with_header(Band::new(layout::HEADER_BAND, move |_| header_line(&title)))
        .with_footer(Band::new(layout::FOOTER_BAND, footer_line))
        .build()?;

    let mut paginator = Paginator::new(layout::CONTENT_HEIGHT);
    let mut annotations: Vec<LinkAnnotation> = Vec::new();
    let mut pieces: Vec<Piece> = Vec::new();

    {
        let font_cache = document.font_cache();
        let measure_intro = |text: &str| {
            mm_to_f64(StyledString::new(text.to_owned(), intro_style()).width(font_cache))
        };

        if let Some(intro) = curriculum.intro() {
            for line in layout::wrap_words(intro, layout::CONTENT_WIDTH, measure_intro) {
                paginator.place(layout::INTRO_LINE_HEIGHT);
                pieces.push(Piece::Line(
                    TextLine::new(layout::INTRO_LINE_HEIGHT)
                        .span(StyledString::new(line, intro_style())),
                ));
            }
            paginator.gap(layout::INTRO_GAP);
            pieces.push(Piece::Gap(VerticalGap::new(layout::INTRO_GAP)));
        }

        for section in curriculum.sections() {
            paginator.place(layout::HEADING_LINE_HEIGHT);
            pieces.push(Piece::Line(
                TextLine::new(layout::HEADING_LINE_HEIGHT)
                    .span(StyledString::new(section.heading(), heading_style())),
            ));
            paginator.gap(layout::HEADING_GAP);
            pieces.push(Piece::Gap(VerticalGap::new(layout::HEADING_GAP)));

            for entry in section.entries() {
                let placement = paginator.place(layout::ENTRY_LINE_HEIGHT);
                let mut line = TextLine::new(layout::ENTRY_LINE_HEIGHT).span(StyledString::new(
                    entry.label().to_owned(),
                    label_style(),
                ));

                let mut body_style = body_style();
                if let Some(url) = entry.link() {
                    body_style.set_color(LINK_COLOR);
                    let text = StyledString::new(entry.text().to_owned(), body_style);
                    annotations.push(LinkAnnotation {
                        rect: LinkRect {
                            page: placement.page,
                            left: layout::MARGIN_LEFT + layout::LABEL_COLUMN,
                            top: layout::CONTENT_TOP + placement.y,
                            width: mm_to_f64(text.width(font_cache)),
                            height: layout::ENTRY_LINE_HEIGHT,
                        },
                        url: url.to_owned(),
                    });
                    line = line.span_at(layout::LABEL_COLUMN, text);
                } else {
                    line = line.span_at(
                        layout::LABEL_COLUMN,
                        StyledString::new(entry.text().to_owned(), body_style),
                    );
                }
                pieces.push(Piece::Line(line));
            }

            paginator.gap(layout::SECTION_GAP);
            pieces.push(Piece::Gap(VerticalGap::new(layout::SECTION_GAP)));
        }
    }

    debug!(
        "placed {} sections across {} page(s)",
        curriculum.sections().len(),
        paginator.page_count()
    );

    for piece in pieces {
        match piece {
            Piece::Line(line) => document.push(line),
            Piece::Gap(gap) => document.push(gap),
        }
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes).map_err(Error::Render)?;

    let bytes = links::apply_link_annotations(&bytes, &annotations, layout::PAGE_HEIGHT)?;
    let page_count = paginator.page_count();
    info!(
        "rendered {} page(s) with {} link annotation(s)",
        page_count,
        annotations.len()
    );

    Ok(RenderedDocument {
        bytes,
        page_count,
        links: annotations,
    })
}

/// Renders the curriculum and writes the document to `path`, returning the
/// path written.
///
/// The PDF is produced fully in memory and written with a single call, so a
/// failing path leaves no partial file behind.
pub fn generate(curriculum: &Curriculum, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let rendered = render(curriculum)?;
    fs::write(path, &rendered.bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", rendered.bytes.len(), path.display());
    Ok(path.to_path_buf())
}

fn header_line(title: &str) -> TextLine {
    let mut style = Style::new();
    style.set_bold();
    style.set_font_size(TITLE_FONT_SIZE);
    TextLine::new(layout::HEADER_BAND)
        .aligned(Alignment::Center)
        .span(StyledString::new(title.to_owned(), style))
}

fn footer_line(page: usize) -> TextLine {
    let mut style = Style::new();
    style.set_font_size(FOOTER_FONT_SIZE);
    style.set_color(FOOTER_COLOR);
    TextLine::new(layout::FOOTER_LINE_HEIGHT)
        .aligned(Alignment::Center)
        .span(StyledString::new(format!("Page {page}"), style))
}

fn intro_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(INTRO_FONT_SIZE);
    style
}

fn heading_style() -> Style {
    let mut style = Style::new();
    style.set_bold();
    style.set_font_size(HEADING_FONT_SIZE);
    style
}

fn label_style() -> Style {
    let mut style = Style::new();
    style.set_bold();
    style.set_font_size(BODY_FONT_SIZE);
    style
}

fn body_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(BODY_FONT_SIZE);
    style
}
