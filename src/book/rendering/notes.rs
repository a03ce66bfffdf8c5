use super::*;
use crate::book::geometry::{content_box, PAGE_HEIGHT};
use crate::colour::Colour;

pub const NOTES_CAPTION: &str = "Notes";

const CAPTION_GREY: u8 = 200;

/// The padding page that keeps the page count even: blank apart from a faint
/// caption in the middle of the content box.
pub fn render_notes_page<W: DocumentWriter>(writer: &mut W) {
    let content = content_box(writer.page_number());
    writer.draw_text(
        NOTES_CAPTION,
        content.centre_x(),
        PAGE_HEIGHT / 2.0,
        Align::Centre,
        TextStyle::new(FONT_REGULAR, SIZE_PAGE_NUMBER)
            .with_colour(Colour::new_grey_bytes(CAPTION_GREY)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::recording::RecordingWriter;

    #[test]
    fn caption_only() {
        let mut writer = RecordingWriter::default();
        for _ in 0..4 {
            writer.add_page();
        }
        render_notes_page(&mut writer);
        let caption = writer.text(NOTES_CAPTION).expect("caption");
        assert_eq!(caption.x, Pt(297.0));
        assert_eq!(caption.baseline, Pt(396.0));
        assert_eq!(caption.style.colour, Colour::new_grey_bytes(200));
        assert_eq!(caption.style.font, Font::Helvetica);
        assert_eq!(caption.style.size, Pt(9.0));
        assert!(writer.rects().is_empty());
        assert!(writer.images().is_empty());
    }
}
