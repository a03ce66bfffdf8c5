use crate::refs::{ObjectReferences, RefType};
use image::{ColorType, DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("invalid base64 payload in data URL: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed data URL")]
    MalformedDataUrl,

    #[error("unsupported image reference `{0}`")]
    Unsupported(String),

    #[error("no image data available for `{0}`")]
    Unresolved(String),

    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

pub enum RasterImageType {
    /// Baseline RGB JPEG data that PDF readers can decode as-is
    DirectlyEmbeddableJpeg(Vec<u8>),
    Image(DynamicImage),
}

/// A decoded raster image ready to be embedded as an image XObject
pub struct Image {
    pub image: RasterImageType,
    pub width: f32,
    pub height: f32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Decode an encoded image (PNG, JPEG, GIF, WebP, ...) from memory.
    /// Images with zero width or height are rejected.
    pub fn from_bytes(data: Vec<u8>) -> Result<Image, ImageError> {
        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;

        if image.width() == 0 || image.height() == 0 {
            return Err(ImageError::Empty {
                width: image.width(),
                height: image.height(),
            });
        }

        match (format, image.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => {
                // we can embed it directly!
                let width = image.width() as f32;
                let height = image.height() as f32;

                Ok(Image {
                    image: RasterImageType::DirectlyEmbeddableJpeg(data),
                    width,
                    height,
                })
            }
            _ => Ok(Self::new_raster(image)),
        }
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            image: RasterImageType::Image(image),
            width,
            height,
        }
    }

    fn encode(&self) -> EncodeOutput {
        match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            RasterImageType::Image(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
            s_mask.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(image: DynamicImage, format: ImageOutputFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), format)
            .expect("can encode test image");
        bytes
    }

    #[test]
    fn rgb_jpegs_are_passed_through() {
        let jpeg = encode(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 20, Rgb([200, 10, 10]))),
            ImageOutputFormat::Jpeg(90),
        );
        let image = Image::from_bytes(jpeg.clone()).expect("can decode jpeg");
        assert_eq!(image.width, 40.0);
        assert_eq!(image.height, 20.0);
        assert!(matches!(
            image.image,
            RasterImageType::DirectlyEmbeddableJpeg(ref data) if *data == jpeg
        ));
    }

    #[test]
    fn transparent_pngs_get_a_mask() {
        let png = encode(
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 128]))),
            ImageOutputFormat::Png,
        );
        let image = Image::from_bytes(png).expect("can decode png");
        assert!(matches!(image.image, RasterImageType::Image(_)));
        let encoded = image.encode();
        assert!(encoded.mask.is_some());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(Image::from_bytes(b"definitely not an image".to_vec()).is_err());
    }
}
