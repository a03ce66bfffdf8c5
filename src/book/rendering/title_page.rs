//! Title page rendering.
//!
//! The title page is always page 1, a recto. It carries a decorative double
//! border, the uppercased title wrapped to the padded content width, a fixed
//! subtitle, the cover image in the middle of the page and a branding footer.
//!
//! The cover image is framed by a thin rule drawn just outside the image as
//! placed, so the frame follows the letterboxed image rather than the box it
//! was fitted into.

use super::*;
use crate::book::geometry::{content_box, CONTENT_HEIGHT};
use crate::book::placement::place_scaled_image;
use crate::book::state::BookState;
use crate::layout::wrap_text;

pub const SUBTITLE: &str = "PERSONALIZED SKETCH BOOK";
pub const FOOTER: &str = "https://sktchlabs.com/";

const INNER_BORDER_INSET: Pt = Pt(6.0);
const IMAGE_BORDER_GAP: Pt = Pt(2.0);

const TITLE_TOP: Pt = Pt(80.0);
const SUBTITLE_TOP: Pt = Pt(120.0);
const IMAGE_TOP: Pt = Pt(150.0);
/// Distance from the bottom of the content box to the bottom of the cover image
const IMAGE_BOTTOM: Pt = Pt(80.0);
/// Distance from the bottom of the content box to the footer baseline
const FOOTER_BOTTOM: Pt = Pt(20.0);

pub fn render_title_page<W: DocumentWriter>(writer: &mut W, state: &BookState) {
    let content = content_box(writer.page_number());
    let centre_x = content.centre_x();

    writer.draw_rect(content, BORDER_THICK);
    writer.draw_rect(content.inset(INNER_BORDER_INSET), BORDER_THIN);

    let title_style = TextStyle::new(Font::HelveticaBold, SIZE_TITLE);
    let title_lines = wrap_text(
        &state.display_title().to_uppercase(),
        title_style.font,
        title_style.size,
        content.width - TEXT_PADDING * 2.0,
    );
    draw_lines(
        writer,
        &title_lines,
        centre_x,
        content.y + TITLE_TOP,
        title_style,
    );

    writer.draw_text(
        SUBTITLE,
        centre_x,
        content.y + SUBTITLE_TOP,
        Align::Centre,
        TextStyle::new(FONT_REGULAR, SIZE_SUBTITLE),
    );

    if let Some(cover) = state.effective_cover() {
        let bounds = image_band(
            &content,
            content.y + IMAGE_TOP,
            content.y + CONTENT_HEIGHT - IMAGE_BOTTOM,
        );
        if let Some(placed) = place_scaled_image(writer, cover, bounds) {
            writer.draw_rect(placed.outset(IMAGE_BORDER_GAP), BORDER_THIN);
        }
    }

    writer.draw_text(
        FOOTER,
        centre_x,
        content.y + CONTENT_HEIGHT - FOOTER_BOTTOM,
        Align::Centre,
        TextStyle::new(Font::HelveticaBoldOblique, SIZE_META),
    );
}
