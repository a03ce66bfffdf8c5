//! A [`DocumentWriter`] that records drawing operations instead of producing
//! a PDF, so page layouts can be checked geometrically.

use crate::image::ImageError;
use crate::layout::Frame;
use crate::resolver::ImageRef;
use crate::units::Pt;
use crate::writer::{Align, DocumentWriter, ImageSize, TextStyle};
use crate::PDFError;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedText {
    pub page: usize,
    pub text: String,
    pub x: Pt,
    pub baseline: Pt,
    pub align: Align,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Page(usize),
    Rect { page: usize, frame: Frame, line_width: Pt },
    Text(RecordedText),
    Image { page: usize, image: ImageRef, frame: Frame },
}

/// Images known to the writer are "decodable" with the given size; anything
/// else fails to resolve.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub sizes: HashMap<ImageRef, ImageSize>,
    pages: usize,
    ops: Vec<Op>,
}

impl RecordingWriter {
    pub fn with_image(mut self, image: &str, width: f32, height: f32) -> RecordingWriter {
        self.sizes.insert(image.into(), ImageSize { width, height });
        self
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn texts(&self) -> impl Iterator<Item = &RecordedText> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn text(&self, text: &str) -> Option<&RecordedText> {
        self.texts().find(|t| t.text == text)
    }

    pub fn rects(&self) -> Vec<(Frame, Pt)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect {
                    frame, line_width, ..
                } => Some((*frame, *line_width)),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<(ImageRef, Frame)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Image { image, frame, .. } => Some((image.clone(), *frame)),
                _ => None,
            })
            .collect()
    }
}

impl DocumentWriter for RecordingWriter {
    fn add_page(&mut self) {
        self.pages += 1;
        self.ops.push(Op::Page(self.pages));
    }

    fn page_number(&self) -> usize {
        self.pages
    }

    fn draw_rect(&mut self, frame: Frame, line_width: Pt) {
        self.ops.push(Op::Rect {
            page: self.pages,
            frame,
            line_width,
        });
    }

    fn draw_text(&mut self, text: &str, x: Pt, baseline: Pt, align: Align, style: TextStyle) {
        self.ops.push(Op::Text(RecordedText {
            page: self.pages,
            text: text.to_string(),
            x,
            baseline,
            align,
            style,
        }));
    }

    fn load_image(&mut self, image: &ImageRef) -> Result<ImageSize, ImageError> {
        self.sizes
            .get(image)
            .copied()
            .ok_or_else(|| ImageError::Unresolved(image.to_string()))
    }

    fn draw_image(&mut self, image: &ImageRef, frame: Frame) -> Result<(), ImageError> {
        self.load_image(image)?;
        self.ops.push(Op::Image {
            page: self.pages,
            image: image.clone(),
            frame,
        });
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, PDFError> {
        Ok(format!("{} pages", self.pages).into_bytes())
    }
}
