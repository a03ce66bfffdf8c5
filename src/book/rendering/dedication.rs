use super::*;
use crate::book::geometry::{content_box, PAGE_HEIGHT};
use crate::book::state::BookState;
use crate::layout::wrap_text;

/// Distance of the first dedication baseline above the middle of the page
const DEDICATION_RAISE: Pt = Pt(40.0);

/// Dedication text, wrapped to the padded content width and centred in the
/// content box, starting a little above the middle of the page.
pub fn render_dedication_page<W: DocumentWriter>(writer: &mut W, state: &BookState) {
    let content = content_box(writer.page_number());
    let style = TextStyle::new(Font::HelveticaOblique, SIZE_SUBTITLE);
    let lines = wrap_text(
        &state.dedication_text,
        style.font,
        style.size,
        content.width - TEXT_PADDING * 2.0,
    );
    draw_lines(
        writer,
        &lines,
        content.centre_x(),
        PAGE_HEIGHT / 2.0 - DEDICATION_RAISE,
        style,
    );
}
