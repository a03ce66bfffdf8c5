use crate::layout::Frame;
use crate::resolver::ImageRef;
use crate::writer::{DocumentWriter, ImageSize};

/// Scale an image to the largest size that fits inside `bounds` without
/// distorting it, centred in `bounds`. Images relatively wider than the box
/// span its full width and leave space above and below; all others span its
/// full height and leave space to the sides.
pub fn fit_image(image: ImageSize, bounds: Frame) -> Frame {
    let image_ratio = image.width / image.height;
    let box_ratio = bounds.width / bounds.height;

    let (width, height) = if image_ratio > box_ratio {
        (bounds.width, bounds.width / image_ratio)
    } else {
        (bounds.height * image_ratio, bounds.height)
    };

    Frame {
        x: bounds.x + (bounds.width - width) / 2.0,
        y: bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    }
}

/// Draw an image scaled to fit `bounds`, returning where it actually landed.
///
/// A missing or undecodable image is logged and skipped, leaving the region
/// blank, so one bad image never prevents the rest of the book from rendering.
pub fn place_scaled_image<W: DocumentWriter>(
    writer: &mut W,
    image: &ImageRef,
    bounds: Frame,
) -> Option<Frame> {
    let size = match writer.load_image(image) {
        Ok(size) => size,
        Err(e) => {
            log::error!(
                "failed to add image {image} to page {}: {e}",
                writer.page_number()
            );
            return None;
        }
    };

    let placed = fit_image(size, bounds);
    if let Err(e) = writer.draw_image(image, placed) {
        log::error!(
            "failed to draw image {image} on page {}: {e}",
            writer.page_number()
        );
        return None;
    }

    Some(placed)
}
