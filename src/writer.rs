//! The drawing surface that book layouts are rendered onto.
//!
//! Section renderers only ever talk to a [`DocumentWriter`], so the PDF
//! engine underneath can be swapped without touching any layout logic.
//! Coordinates are in points, measured from the top-left corner of the
//! page.

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::Font;
use crate::image::{Image, ImageError};
use crate::info::Info;
use crate::layout::{width_of_text, Frame, Margins};
use crate::page::{ImageLayout, Page, RuleLayout, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::resolver::{ImageRef, ImageResolver};
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;
use std::collections::HashMap;

/// Horizontal alignment of a line of text relative to its anchor x coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    Centre,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    /// Black text in the given face and size
    pub fn new(font: Font, size: Pt) -> TextStyle {
        TextStyle {
            font,
            size,
            colour: colours::BLACK,
        }
    }

    pub fn with_colour(self, colour: Colour) -> TextStyle {
        TextStyle { colour, ..self }
    }
}

/// Intrinsic pixel dimensions of a loaded image
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

/// A multi-page document that can be drawn on and then serialised
pub trait DocumentWriter {
    /// Append a new, blank page and make it the target of all drawing
    fn add_page(&mut self);

    /// The 1-based number of the current page, or 0 if no page exists yet
    fn page_number(&self) -> usize;

    /// Stroke a black rectangle outline
    fn draw_rect(&mut self, frame: Frame, line_width: Pt);

    /// Draw a single line of text with its baseline at `baseline`
    fn draw_text(&mut self, text: &str, x: Pt, baseline: Pt, align: Align, style: TextStyle);

    /// Resolve and decode an image, returning its intrinsic size
    fn load_image(&mut self, image: &ImageRef) -> Result<ImageSize, ImageError>;

    /// Draw an image stretched to fill `frame`
    fn draw_image(&mut self, image: &ImageRef, frame: Frame) -> Result<(), ImageError>;

    /// Serialise the finished document
    fn finish(self) -> Result<Vec<u8>, PDFError>
    where
        Self: Sized;
}

/// A [`DocumentWriter`] producing PDF bytes. Images are decoded once per
/// reference and shared between every page that uses them.
pub struct PdfDocumentWriter<R: ImageResolver> {
    document: Document,
    page_size: PageSize,
    page_margins: Option<fn(usize) -> Margins>,
    resolver: R,
    images: HashMap<ImageRef, Id<Image>>,
}

impl<R: ImageResolver> PdfDocumentWriter<R> {
    pub fn new(page_size: PageSize, resolver: R) -> PdfDocumentWriter<R> {
        PdfDocumentWriter {
            document: Document::default(),
            page_size,
            page_margins: None,
            resolver,
            images: HashMap::new(),
        }
    }

    /// Give each new page the margins returned for its 1-based page number.
    /// They are recorded as the page's art box.
    pub fn with_page_margins(mut self, margins: fn(usize) -> Margins) -> PdfDocumentWriter<R> {
        self.page_margins = Some(margins);
        self
    }

    fn new_page(&mut self) -> Id<Page> {
        let page_number = self.document.page_count() + 1;
        let margins = self.page_margins.map(|margins| margins(page_number));
        self.document.add_page(Page::new(self.page_size, margins))
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    fn current_page(&mut self) -> &mut Page {
        let id = match self.document.page_order.last().copied() {
            Some(id) => id,
            None => self.new_page(),
        };
        &mut self.document.pages[id]
    }

    fn image_id(&mut self, image: &ImageRef) -> Result<Id<Image>, ImageError> {
        if let Some(id) = self.images.get(image) {
            return Ok(*id);
        }

        let bytes = self.resolver.resolve(image)?;
        let decoded = Image::from_bytes(bytes)?;
        log::debug!(
            "loaded image {image} ({}x{})",
            decoded.width,
            decoded.height
        );
        let id = self.document.add_image(decoded);
        self.images.insert(image.clone(), id);
        Ok(id)
    }
}

impl<R: ImageResolver> DocumentWriter for PdfDocumentWriter<R> {
    fn add_page(&mut self) {
        self.new_page();
    }

    fn page_number(&self) -> usize {
        self.document.page_count()
    }

    fn draw_rect(&mut self, frame: Frame, line_width: Pt) {
        let page = self.current_page();
        let position = frame.to_rect(page.height());
        page.add_rule(RuleLayout {
            position,
            line_width,
            colour: colours::BLACK,
        });
    }

    fn draw_text(&mut self, text: &str, x: Pt, baseline: Pt, align: Align, style: TextStyle) {
        if text.is_empty() {
            return;
        }

        let width = width_of_text(text, style.font, style.size);
        let x = match align {
            Align::Left => x,
            Align::Centre => x - width / 2.0,
            Align::Right => x - width,
        };

        let page = self.current_page();
        let y = page.height() - baseline;
        page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: style.font,
                size: style.size,
            },
            colour: style.colour,
            coords: (x, y),
        });
    }

    fn load_image(&mut self, image: &ImageRef) -> Result<ImageSize, ImageError> {
        let id = self.image_id(image)?;
        let image = &self.document.images[id];
        Ok(ImageSize {
            width: image.width,
            height: image.height,
        })
    }

    fn draw_image(&mut self, image: &ImageRef, frame: Frame) -> Result<(), ImageError> {
        let image_index = self.image_id(image)?.index();
        let page = self.current_page();
        let position = frame.to_rect(page.height());
        page.add_image(ImageLayout {
            image_index,
            position,
        });
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, PDFError> {
        self.document.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContents;
    use crate::pagesize::LETTER;
    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([0, 0, 0])))
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .expect("can encode png");
        bytes
    }

    #[test]
    fn text_is_aligned_and_flipped() {
        let images: HashMap<ImageRef, Vec<u8>> = HashMap::new();
        let mut writer = PdfDocumentWriter::new(LETTER, images);
        writer.add_page();
        let style = TextStyle::new(Font::Helvetica, Pt(10.0));
        writer.draw_text("Page 1", Pt(315.0), Pt(771.0), Align::Centre, style);

        let page = writer.current_page();
        let PageContents::Text(spans) = &page.contents[0] else {
            panic!("expected text");
        };
        let expected_x = 315.0 - 31.69 / 2.0;
        assert!((*spans[0].coords.0 - expected_x).abs() < 1e-3);
        assert_eq!(spans[0].coords.1, Pt(21.0));

        writer.draw_text("Page 1", Pt(315.0), Pt(771.0), Align::Right, style);
        writer.draw_text("Page 1", Pt(315.0), Pt(771.0), Align::Left, style);
        let page = writer.current_page();
        let xs: Vec<f32> = page
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => Some(*spans[0].coords.0),
                _ => None,
            })
            .collect();
        assert!((xs[1] - (315.0 - 31.69)).abs() < 1e-3);
        assert_eq!(xs[2], 315.0);
    }

    #[test]
    fn images_are_decoded_once() {
        let mut images: HashMap<ImageRef, Vec<u8>> = HashMap::new();
        images.insert("a".into(), png(30, 10));
        let mut writer = PdfDocumentWriter::new(LETTER, images);
        writer.add_page();

        let size = writer.load_image(&"a".into()).expect("can load image");
        assert_eq!(size, ImageSize { width: 30.0, height: 10.0 });
        let frame = Frame::new(Pt(0.0), Pt(0.0), Pt(30.0), Pt(10.0));
        writer.draw_image(&"a".into(), frame).expect("can draw");
        writer.draw_image(&"a".into(), frame).expect("can draw");
        assert_eq!(writer.document.images.len(), 1);

        assert!(writer.load_image(&"missing".into()).is_err());
        assert_eq!(writer.page_number(), 1);
        let bytes = writer.finish().expect("can finish");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn pages_take_margins_by_number() {
        let images: HashMap<ImageRef, Vec<u8>> = HashMap::new();
        let mut writer = PdfDocumentWriter::new(LETTER, images)
            .with_page_margins(|n| Margins::all(Pt(10.0)).with_gutter(Pt(5.0), n));
        writer.add_page();
        assert_eq!(writer.current_page().content_box.x1, Pt(15.0));
        writer.add_page();
        assert_eq!(writer.current_page().content_box.x1, Pt(10.0));
        assert_eq!(writer.current_page().content_box.x2, Pt(612.0 - 15.0));
    }
}
