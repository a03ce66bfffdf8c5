//! Section renderers.
//!
//! Each renderer draws one kind of page onto the writer's current page; the
//! assembler adds the page first. Horizontal positions are always taken from
//! the content box of the page being drawn (see
//! [`content_box`](super::geometry::content_box)), never from the physical
//! page centre, so facing pages mirror each other around the spine.
//!
//! Positions below are offsets from the top margin unless noted otherwise.

mod content_page;
mod dedication;
mod notes;
mod title_page;

pub use content_page::{content_image_band, render_content_page, BLANK_PLACEHOLDER};
pub use dedication::render_dedication_page;
pub use notes::{render_notes_page, NOTES_CAPTION};
pub use title_page::{render_title_page, FOOTER, SUBTITLE};

use crate::font::Font;
use crate::layout::{line_height, Frame};
use crate::units::Pt;
use crate::writer::{Align, DocumentWriter, TextStyle};

/// Space between the content box edge and images or wrapped text
pub(crate) const TEXT_PADDING: Pt = Pt(20.0);
pub(crate) const IMAGE_PADDING: Pt = Pt(20.0);

pub(crate) const BORDER_THICK: Pt = Pt(4.0);
pub(crate) const BORDER_THIN: Pt = Pt(1.0);

pub(crate) const SIZE_TITLE: Pt = Pt(32.0);
pub(crate) const SIZE_SUBTITLE: Pt = Pt(14.0);
pub(crate) const SIZE_HEADING: Pt = Pt(22.0);
pub(crate) const SIZE_META: Pt = Pt(10.0);
pub(crate) const SIZE_PAGE_NUMBER: Pt = Pt(9.0);

pub(crate) const FONT_REGULAR: Font = Font::Helvetica;

/// Draw each line centred on `centre_x`, the first with its baseline at
/// `first_baseline` and the rest spaced by the style's line height.
/// Returns the baseline of the last line drawn.
pub(crate) fn draw_lines<W: DocumentWriter>(
    writer: &mut W,
    lines: &[String],
    centre_x: Pt,
    first_baseline: Pt,
    style: TextStyle,
) -> Pt {
    let step = line_height(style.size);
    let mut baseline = first_baseline;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            baseline += step;
        }
        writer.draw_text(line, centre_x, baseline, Align::Centre, style);
    }
    baseline
}

/// The band of a content box left for images: inset horizontally by the image
/// padding, spanning `top..bottom` (absolute page coordinates)
pub(crate) fn image_band(content: &Frame, top: Pt, bottom: Pt) -> Frame {
    Frame::new(
        content.x + IMAGE_PADDING,
        top,
        content.width - IMAGE_PADDING * 2.0,
        bottom - top,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::recording::{Op, RecordingWriter};

    #[test]
    fn lines_step_down_by_the_line_height() {
        let mut writer = RecordingWriter::default();
        writer.add_page();
        let lines = vec!["ONE".to_string(), "TWO".to_string(), "THREE".to_string()];
        let style = TextStyle::new(Font::HelveticaBold, SIZE_TITLE);
        let last = draw_lines(&mut writer, &lines, Pt(315.0), Pt(116.0), style);

        let baselines: Vec<Pt> = writer.texts().map(|t| t.baseline).collect();
        assert_eq!(baselines.len(), 3);
        assert_eq!(baselines[0], Pt(116.0));
        assert!((*baselines[1] - (116.0 + 32.0 * 1.15)).abs() < 1e-3);
        assert_eq!(last, baselines[2]);
        assert!(writer
            .ops()
            .iter()
            .all(|op| !matches!(op, Op::Text(t) if t.align != Align::Centre)));
    }

    #[test]
    fn image_band_is_padded() {
        let content = Frame::new(Pt(54.0), Pt(36.0), Pt(522.0), Pt(720.0));
        let band = image_band(&content, Pt(56.0), Pt(736.0));
        assert_eq!(band, Frame::new(Pt(74.0), Pt(56.0), Pt(482.0), Pt(680.0)));
    }
}
