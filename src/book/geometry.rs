//! Fixed page geometry for a print-ready US Letter book.
//!
//! Page 1 is a right-hand (recto) page, so odd pages have the binding gutter
//! on their left and even pages have it on their right. Everything on a page
//! is positioned relative to its content box, which therefore shifts
//! sideways by the difference between the inner and outer margins from one
//! page to the next.

use crate::layout::{Frame, Margins};
use crate::pagesize::{self, PageSize};
use crate::units::{Pt, POINTS_PER_INCH};

pub const PAGE_SIZE: PageSize = pagesize::LETTER;
pub const PAGE_WIDTH: Pt = PAGE_SIZE.0;
pub const PAGE_HEIGHT: Pt = PAGE_SIZE.1;

/// Gutter margin, on the spine side
pub const MARGIN_INNER: Pt = Pt(0.75 * POINTS_PER_INCH);
pub const MARGIN_OUTER: Pt = Pt(0.5 * POINTS_PER_INCH);
pub const MARGIN_TOP: Pt = Pt(0.5 * POINTS_PER_INCH);
pub const MARGIN_BOTTOM: Pt = Pt(0.5 * POINTS_PER_INCH);

pub const CONTENT_WIDTH: Pt = Pt(PAGE_WIDTH.0 - (MARGIN_INNER.0 + MARGIN_OUTER.0));
pub const CONTENT_HEIGHT: Pt = Pt(PAGE_HEIGHT.0 - (MARGIN_TOP.0 + MARGIN_BOTTOM.0));

/// Whether a 1-based page number is a right-hand page
pub fn is_recto(page_number: usize) -> bool {
    page_number % 2 == 1
}

/// Margins of a 1-based page, with the gutter on the spine side
pub fn margins_for(page_number: usize) -> Margins {
    debug_assert!(page_number >= 1, "page numbers start at 1");
    Margins::trbl(MARGIN_TOP, MARGIN_OUTER, MARGIN_BOTTOM, MARGIN_OUTER)
        .with_gutter(MARGIN_INNER - MARGIN_OUTER, page_number)
}

/// Left margin of a 1-based page: the gutter on rectos, the outer margin on versos
pub fn left_margin_for(page_number: usize) -> Pt {
    margins_for(page_number).left
}

/// The content box of a 1-based page
pub fn content_box(page_number: usize) -> Frame {
    Frame::new(
        left_margin_for(page_number),
        MARGIN_TOP,
        CONTENT_WIDTH,
        CONTENT_HEIGHT,
    )
}
