//! Document construction and per-page header/footer decoration.

use genpdf::error::{Error, ErrorKind};
use genpdf::{self, Element, Margins, Mm, PageDecorator, PaperSize, Position};

use crate::elements::{mm_from_f64, TextLine};
use crate::fonts;
use crate::layout;

type BandFactory = dyn Fn(usize) -> TextLine;

/// A fixed-height header or footer band rendered on every page.
///
/// The factory receives the 1-based page number and produces the band's
/// line, mirroring the header/footer hooks of classic page-layout engines
/// through composition instead of inheritance.
pub struct Band {
    height: Mm,
    factory: Box<BandFactory>,
}

impl Band {
    /// Creates a band of the given height driven by `factory`.
    pub fn new<F>(height_mm: f64, factory: F) -> Self
    where
        F: Fn(usize) -> TextLine + 'static,
    {
        Self {
            height: mm_from_f64(height_mm),
            factory: Box::new(factory),
        }
    }
}

/// Builder for `genpdf::Document` instances configured for A4 curriculum
/// pages: fixed margins plus optional header and footer bands.
pub struct DocumentBuilder {
    title: String,
    header: Option<Band>,
    footer: Option<Band>,
}

impl DocumentBuilder {
    /// Creates a builder; `title` becomes the PDF document title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            header: None,
            footer: None,
        }
    }

    /// Installs the header band drawn at the top of every page.
    pub fn with_header(mut self, band: Band) -> Self {
        self.header = Some(band);
        self
    }

    /// Installs the footer band drawn at the bottom of every page.
    pub fn with_footer(mut self, band: Band) -> Self {
        self.footer = Some(band);
        self
    }

    /// Builds a fully configured `genpdf::Document`.
    ///
    /// Fails when the bundled fonts cannot be located (see [`crate::fonts`]).
    pub fn build(self) -> Result<genpdf::Document, Error> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);
        document.set_title(self.title);
        document.set_paper_size(PaperSize::A4);

        let margins = Margins::trbl(
            mm_from_f64(layout::MARGIN_TOP),
            mm_from_f64(layout::MARGIN_RIGHT),
            mm_from_f64(layout::MARGIN_BOTTOM),
            mm_from_f64(layout::MARGIN_LEFT),
        );
        document.set_page_decorator(FramedPageDecorator::new(margins, self.header, self.footer));

        Ok(document)
    }
}

struct FramedPageDecorator {
    page: usize,
    margins: Margins,
    header: Option<Band>,
    footer: Option<Band>,
}

impl FramedPageDecorator {
    fn new(margins: Margins, header: Option<Band>, footer: Option<Band>) -> Self {
        Self {
            page: 0,
            margins,
            header,
            footer,
        }
    }
}

impl PageDecorator for FramedPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: genpdf::style::Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.page += 1;
        area.add_margins(self.margins);

        if let Some(band) = &self.header {
            if band.height > area.size().height {
                return Err(Error::new(
                    "Header band exceeds the page height",
                    ErrorKind::PageSizeExceeded,
                ));
            }
            let mut line = (band.factory)(self.page);
            line.render(context, area.clone(), style)?;
            // Offset by the band height, not the rendered height, so the
            // content origin is the same on every page.
            area.add_offset(Position::new(0, band.height));
        }

        if let Some(band) = &self.footer {
            let available = area.size().height;
            if band.height > available {
                return Err(Error::new(
                    "Footer band exceeds the remaining page height",
                    ErrorKind::PageSizeExceeded,
                ));
            }
            let mut footer_area = area.clone();
            footer_area.add_offset(Position::new(0, available - band.height));
            let mut line = (band.factory)(self.page);
            let result = line.render(context, footer_area, style)?;
            if result.has_more {
                return Err(Error::new(
                    "Footer line does not fit into the reserved band",
                    ErrorKind::PageSizeExceeded,
                ));
            }
            area.set_height(available - band.height);
        }

        Ok(area)
    }
}
