//! Fixed-height elements built on top of `genpdf` primitives.
//!
//! `genpdf`'s own paragraph elements derive their heights from font metrics,
//! which makes the resulting pagination hard to predict from outside the
//! renderer.  The elements here take their heights from the caller instead,
//! so the assembler's [`Paginator`][crate::layout::Paginator] can compute the
//! exact page and rectangle of every line before the document is rendered.

use genpdf::error::Error;
use genpdf::style::{Style, StyledString};
use genpdf::{render, Alignment, Element, Mm, Position, RenderResult, Size};

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

struct PlacedSpan {
    /// Explicit x offset from the line start; `None` continues the previous
    /// span.
    at: Option<Mm>,
    string: StyledString,
}

/// A single line of styled text with a caller-assigned height.
///
/// Spans are printed left to right; a span added with [`TextLine::span_at`]
/// starts a new text run at a fixed x offset, which is how entry text is
/// aligned into a column after its label.  If the line does not fit into the
/// remaining page space it reports `has_more` and is rendered again on the
/// next page.
pub struct TextLine {
    spans: Vec<PlacedSpan>,
    height: Mm,
    alignment: Alignment,
}

impl TextLine {
    /// Creates an empty line occupying `height_mm` of vertical space.
    pub fn new(height_mm: f64) -> Self {
        Self {
            spans: Vec::new(),
            height: mm_from_f64(height_mm),
            alignment: Alignment::Left,
        }
    }

    /// Appends a span directly after the previous one.
    pub fn span(mut self, string: StyledString) -> Self {
        self.spans.push(PlacedSpan { at: None, string });
        self
    }

    /// Appends a span starting at a fixed x offset from the line start.
    pub fn span_at(mut self, x_mm: f64, string: StyledString) -> Self {
        self.spans.push(PlacedSpan {
            at: Some(mm_from_f64(x_mm)),
            string,
        });
        self
    }

    /// Sets the horizontal alignment and returns the updated line.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Element for TextLine {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if self.height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let mut runs: Vec<(Mm, Vec<StyledString>)> = Vec::new();
        for span in &self.spans {
            let mut string = span.string.clone();
            string.style = style.and(string.style);
            match span.at {
                Some(x) => runs.push((x, vec![string])),
                None => match runs.last_mut() {
                    Some(run) => run.1.push(string),
                    None => runs.push((Mm::default(), vec![string])),
                },
            }
        }

        let mut line_width = Mm::default();
        for (x, strings) in &runs {
            let mut end = *x;
            for string in strings {
                end += string.width(&context.font_cache);
            }
            line_width = line_width.max(end);
        }

        let x_shift = match self.alignment {
            Alignment::Left => Mm::default(),
            Alignment::Center => (area.size().width - line_width) / 2.0,
            Alignment::Right => area.size().width - line_width,
        };

        for (x, strings) in &runs {
            let Some(mut section) =
                area.text_section(&context.font_cache, Position::new(*x + x_shift, 0), style)
            else {
                result.has_more = true;
                return Ok(result);
            };
            for string in strings {
                section.print_str(&string.s, string.style)?;
            }
        }

        result.size = Size::new(line_width, self.height);
        area.add_offset(Position::new(0, self.height));
        Ok(result)
    }
}

/// A vertical gap that consumes at most the space left on the current page.
///
/// Matching [`Paginator::gap`][crate::layout::Paginator::gap], the gap never
/// spills onto the next page, so section spacing close to a page break does
/// not produce blank bands at the top of the following page.
pub struct VerticalGap {
    height: Mm,
}

impl VerticalGap {
    /// Creates a gap of the given height.
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm),
        }
    }
}

impl Element for VerticalGap {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let consumed = if self.height > available {
            available
        } else {
            self.height
        };
        let mut result = RenderResult::default();
        result.size = Size::new(0, consumed);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_round_trip() {
        let value = mm_to_f64(mm_from_f64(7.0));
        assert!((value - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn text_line_collects_spans() {
        let line = TextLine::new(7.0)
            .span(StyledString::new("Course:", Style::new()))
            .span_at(22.0, StyledString::new("Cryptography I", Style::new()));
        assert_eq!(line.spans.len(), 2);
        assert!(line.spans[0].at.is_none());
        assert_eq!(line.spans[1].at, Some(mm_from_f64(22.0)));
    }
}
