//! Print-ready coloring book generation.
//!
//! A [`BookState`] is laid out as a fixed sequence of pages (see
//! [`page_plan`]): a title page, an optional dedication, one page per
//! content image and, when needed, a blank notes page so the total page
//! count is even, as required for binding.
//!
//! Layout is written against the [`DocumentWriter`] trait; [`generate_book_pdf`]
//! wires it up to a [`PdfDocumentWriter`] sized and margined for US Letter.
//!
//! Generation never fails because of a bad image: an image that cannot be
//! resolved or decoded is logged and its region left blank, and every other
//! element of that page is still drawn.

pub mod geometry;
pub mod placement;
pub mod plan;
pub mod rendering;
pub mod state;

#[cfg(test)]
pub(crate) mod recording;

pub use geometry::{content_box, is_recto, left_margin_for, margins_for};
pub use placement::{fit_image, place_scaled_image};
pub use plan::{page_plan, PageKind};
pub use state::{BookState, PageText, DEFAULT_TITLE};

use crate::info::Info;
use crate::resolver::ImageResolver;
use crate::writer::{DocumentWriter, PdfDocumentWriter};
use crate::BookError;
use rendering::*;

/// Lay out every page of the book onto `writer`, adding pages as it goes
pub fn render_book<W: DocumentWriter>(state: &BookState, writer: &mut W) {
    let stray = state.stray_pages();
    if !stray.is_empty() {
        log::warn!(
            "ignoring images or text for pages {stray:?}, outside the book's {} pages",
            state.page_count
        );
    }

    for kind in page_plan(state) {
        writer.add_page();
        log::debug!("rendering page {}: {kind}", writer.page_number());
        match kind {
            PageKind::Title => render_title_page(writer, state),
            PageKind::Dedication => render_dedication_page(writer, state),
            PageKind::Content(index) => render_content_page(writer, state, index),
            PageKind::Notes => render_notes_page(writer),
        }
    }
}

/// Lay out the book onto `writer` and serialise the result
pub fn generate<W: DocumentWriter>(state: &BookState, mut writer: W) -> Result<Vec<u8>, BookError> {
    render_book(state, &mut writer);
    Ok(writer.finish()?)
}

/// Generate the complete print-ready PDF for a book, resolving image
/// references through `resolver`
pub fn generate_book_pdf<R: ImageResolver>(
    state: &BookState,
    resolver: R,
) -> Result<Vec<u8>, BookError> {
    let mut writer =
        PdfDocumentWriter::new(geometry::PAGE_SIZE, resolver).with_page_margins(margins_for);
    writer.set_info(
        Info::new()
            .title(state.display_title())
            .subject("Personalized sketch book")
            .clone(),
    );
    let pdf = generate(state, writer)?;
    log::debug!("generated {} byte PDF", pdf.len());
    Ok(pdf)
}
