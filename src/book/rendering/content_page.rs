use super::*;
use crate::book::geometry::{content_box, MARGIN_BOTTOM, PAGE_HEIGHT};
use crate::book::placement::place_scaled_image;
use crate::book::state::BookState;
use crate::colour::Colour;

pub const BLANK_PLACEHOLDER: &str = "Blank Page";

const TOP_LINE_BASELINE: Pt = Pt(40.0);
/// Baseline of the bottom line, above the bottom margin
const BOTTOM_LINE_BASELINE: Pt = Pt(20.0);
/// Baseline of the page number, below the bottom margin
const PAGE_NUMBER_DROP: Pt = Pt(15.0);

/// Clearance between the image band and the content box edge, without and
/// with a heading on that side
const BAND_CLEARANCE: Pt = Pt(20.0);
const BAND_CLEARANCE_WITH_TEXT: Pt = Pt(60.0);

const PLACEHOLDER_GREY: u8 = 150;

/// The region available to a content page's image. Each side of the band
/// pulls back from the content box edge when a heading is printed there.
pub fn content_image_band(content: &Frame, has_top_line: bool, has_bottom_line: bool) -> Frame {
    let top = content.y
        + if has_top_line {
            BAND_CLEARANCE_WITH_TEXT
        } else {
            BAND_CLEARANCE
        };
    let bottom = PAGE_HEIGHT
        - MARGIN_BOTTOM
        - if has_bottom_line {
            BAND_CLEARANCE_WITH_TEXT
        } else {
            BAND_CLEARANCE
        };
    image_band(content, top, bottom)
}

/// Render content page `index` (1-based within the book's content) onto the
/// current page.
pub fn render_content_page<W: DocumentWriter>(writer: &mut W, state: &BookState, index: u32) {
    let content = content_box(writer.page_number());
    let centre_x = content.centre_x();
    let text = state.page_text(index);
    let top_line = text.and_then(|t| t.top_line());
    let bottom_line = text.and_then(|t| t.bottom_line());

    writer.draw_rect(content, BORDER_THIN);

    writer.draw_text(
        &format!("Page {index}"),
        centre_x,
        PAGE_HEIGHT - MARGIN_BOTTOM + PAGE_NUMBER_DROP,
        Align::Centre,
        TextStyle::new(FONT_REGULAR, SIZE_PAGE_NUMBER),
    );

    let heading = TextStyle::new(Font::HelveticaBold, SIZE_HEADING);
    if let Some(line) = top_line {
        writer.draw_text(
            line,
            centre_x,
            content.y + TOP_LINE_BASELINE,
            Align::Centre,
            heading,
        );
    }

    match state.page_image(index) {
        Some(image) => {
            let band = content_image_band(&content, top_line.is_some(), bottom_line.is_some());
            place_scaled_image(writer, image, band);
        }
        None => writer.draw_text(
            BLANK_PLACEHOLDER,
            centre_x,
            PAGE_HEIGHT / 2.0,
            Align::Centre,
            TextStyle::new(Font::HelveticaOblique, SIZE_META)
                .with_colour(Colour::new_grey_bytes(PLACEHOLDER_GREY)),
        ),
    }

    if let Some(line) = bottom_line {
        writer.draw_text(
            line,
            centre_x,
            PAGE_HEIGHT - MARGIN_BOTTOM - BOTTOM_LINE_BASELINE,
            Align::Centre,
            heading,
        );
    }
}
