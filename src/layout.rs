//! Pure layout arithmetic: page geometry, word wrapping and pagination.
//!
//! The assembler keeps its own cursor through this module while it emits
//! fixed-height elements, so it always knows which page and vertical offset a
//! line lands on.  The element implementations in [`crate::elements`] consume
//! exactly the heights placed here, which keeps this prediction and the
//! renderer's actual pagination in lockstep.  All values are millimetres.

/// A4 page width.
pub const PAGE_WIDTH: f64 = 210.0;
/// A4 page height.
pub const PAGE_HEIGHT: f64 = 297.0;

pub const MARGIN_TOP: f64 = 10.0;
pub const MARGIN_RIGHT: f64 = 10.0;
pub const MARGIN_BOTTOM: f64 = 10.0;
pub const MARGIN_LEFT: f64 = 10.0;

/// Height of the running header band on every page.
pub const HEADER_BAND: f64 = 12.0;
/// Height reserved at the bottom of every page for the footer band.
pub const FOOTER_BAND: f64 = 15.0;
/// Height of the single footer line inside the footer band.
pub const FOOTER_LINE_HEIGHT: f64 = 10.0;

/// Width available to body content between the side margins.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
/// Height available to body content between the header and footer bands.
pub const CONTENT_HEIGHT: f64 =
    PAGE_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM - HEADER_BAND - FOOTER_BAND;
/// Distance from the top page edge to the first body line.
pub const CONTENT_TOP: f64 = MARGIN_TOP + HEADER_BAND;

pub const INTRO_LINE_HEIGHT: f64 = 6.0;
pub const HEADING_LINE_HEIGHT: f64 = 8.0;
pub const ENTRY_LINE_HEIGHT: f64 = 7.0;
/// Fixed column reserved for entry labels before the descriptive text.
pub const LABEL_COLUMN: f64 = 22.0;

/// Gap between a section heading and its first entry.
pub const HEADING_GAP: f64 = 1.0;
/// Gap after a section's last entry.
pub const SECTION_GAP: f64 = 3.0;
/// Gap after the introductory paragraph.
pub const INTRO_GAP: f64 = 3.0;

/// Where a placed line starts: 1-based page number and the vertical offset
/// from the top of the page's content area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub page: usize,
    pub y: f64,
}

/// Cursor that mirrors the renderer's page-filling behaviour.
///
/// Lines move to the next page when they no longer fit; gaps only consume
/// the space remaining on the current page and never start a new one.
#[derive(Clone, Debug)]
pub struct Paginator {
    page_height: f64,
    page: usize,
    cursor: f64,
}

impl Paginator {
    /// Creates a cursor for pages with the given content height.
    pub fn new(page_height: f64) -> Self {
        Self {
            page_height,
            page: 1,
            cursor: 0.0,
        }
    }

    /// Places a line of the given height and returns where it starts.
    pub fn place(&mut self, height: f64) -> Placement {
        if self.cursor > 0.0 && self.cursor + height > self.page_height {
            self.page += 1;
            self.cursor = 0.0;
        }
        let placement = Placement {
            page: self.page,
            y: self.cursor,
        };
        self.cursor += height;
        placement
    }

    /// Advances past a vertical gap, clamped to the bottom of the page.
    pub fn gap(&mut self, height: f64) {
        self.cursor = (self.cursor + height).min(self.page_height);
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> usize {
        self.page
    }
}

/// Greedily wraps `text` into lines no wider than `max_width`, using
/// `measure` to obtain the rendered width of a candidate line.
///
/// A single word wider than `max_width` is emitted on its own line rather
/// than split.
pub fn wrap_words<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if !current.is_empty() && measure(&candidate) > max_width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
