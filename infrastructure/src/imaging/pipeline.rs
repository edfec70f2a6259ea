//! Image preprocessing pipeline.
//!
//! decode → 8-bit grayscale → stretch to a square → per-image PCA → flatten.

use super::pca::{self, PcaError};
use derma_application::{ExtractError, FeatureExtractor};
use derma_domain::{FeatureVector, IMAGE_SIDE, PCA_COMPONENTS};
use image::imageops::{self, FilterType};
use image::{GrayImage, ImageReader, RgbImage};
use nalgebra::DMatrix;
use std::io::Cursor;

impl From<PcaError> for ExtractError {
    fn from(e: PcaError) -> Self {
        ExtractError::Reduction(e.to_string())
    }
}

/// Feature extractor matching the preprocessing the classifier was trained with
#[derive(Debug, Clone, Copy)]
pub struct ImagePipeline {
    side: u32,
    components: usize,
}

impl Default for ImagePipeline {
    fn default() -> Self {
        Self {
            side: IMAGE_SIDE,
            components: PCA_COMPONENTS,
        }
    }
}

impl ImagePipeline {
    /// Pipeline with a custom geometry
    pub fn with_geometry(side: u32, components: usize) -> Self {
        Self { side, components }
    }

    /// Length of the vectors this pipeline produces
    pub fn feature_len(&self) -> usize {
        self.side as usize * self.components
    }

    fn decode(bytes: &[u8]) -> Result<RgbImage, ExtractError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ExtractError::Decode(e.to_string()))?;
        let image = reader
            .decode()
            .map_err(|e| ExtractError::Decode(e.to_string()))?;
        Ok(image.to_rgb8())
    }

    fn resize(&self, gray: &GrayImage) -> GrayImage {
        imageops::resize(gray, self.side, self.side, FilterType::CatmullRom)
    }
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded
pub fn to_grayscale(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (u32::from(r) * 19_595 + u32::from(g) * 38_470 + u32::from(b) * 7_471 + 0x8000)
            >> 16;
        image::Luma([luma as u8])
    })
}

impl FeatureExtractor for ImagePipeline {
    fn extract(&self, bytes: &[u8]) -> Result<FeatureVector, ExtractError> {
        let rgb = Self::decode(bytes)?;
        let gray = self.resize(&to_grayscale(&rgb));

        let side = self.side as usize;
        let pixels = DMatrix::from_fn(side, side, |row, col| {
            f64::from(gray.get_pixel(col as u32, row as u32).0[0])
        });

        let reduced = pca::fit_transform(&pixels, self.components)?;
        Ok(FeatureVector::new(pca::flatten_rows(&reduced)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbaImage};

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 5 % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn test_grayscale_weights() {
        let mut rgb = RgbImage::new(4, 1);
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([0, 255, 0]));
        rgb.put_pixel(2, 0, Rgb([0, 0, 255]));
        rgb.put_pixel(3, 0, Rgb([255, 255, 255]));
        let gray = to_grayscale(&rgb);
        let values: Vec<u8> = gray.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values, vec![76, 150, 29, 255]);
    }

    #[test]
    fn test_png_produces_full_feature_vector() {
        let bytes = encode(DynamicImage::ImageRgb8(gradient(300, 120)), ImageFormat::Png);
        let features = ImagePipeline::default().extract(&bytes).unwrap();
        assert_eq!(features.len(), 256 * 75);
        assert_eq!(features.len(), ImagePipeline::default().feature_len());
        assert_eq!(features.len(), 19_200);
        assert!(features.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_small_geometry_and_other_formats() {
        let pipeline = ImagePipeline::with_geometry(16, 4);
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(5, 9, image::Rgba([10, 20, 30, 0])));
        for (image, format) in [
            (DynamicImage::ImageRgb8(gradient(40, 40)), ImageFormat::Jpeg),
            (DynamicImage::ImageRgb8(gradient(3, 50)), ImageFormat::Bmp),
            (rgba, ImageFormat::Png),
        ] {
            let features = pipeline.extract(&encode(image, format)).unwrap();
            assert_eq!(features.len(), 64, "{format:?}");
        }
    }

    #[test]
    fn test_same_bytes_same_features() {
        let pipeline = ImagePipeline::with_geometry(32, 8);
        let bytes = encode(DynamicImage::ImageRgb8(gradient(64, 48)), ImageFormat::Png);
        assert_eq!(pipeline.extract(&bytes).unwrap(), pipeline.extract(&bytes).unwrap());
    }

    #[test]
    fn test_corrupt_bytes_are_decode_errors() {
        let pipeline = ImagePipeline::default();
        let cases: [&[u8]; 3] = [b"", b"definitely not an image", b"\x89PNG\r\n\x1a\ntruncated"];
        for bytes in cases {
            let err = pipeline.extract(bytes).unwrap_err();
            assert!(matches!(err, ExtractError::Decode(_)), "{err:?}");
            assert!(err.is_client_error());
        }
    }

    #[test]
    fn test_geometry_larger_than_components_limit() {
        let pipeline = ImagePipeline::with_geometry(4, 5);
        let bytes = encode(DynamicImage::ImageRgb8(gradient(8, 8)), ImageFormat::Png);
        assert!(matches!(
            pipeline.extract(&bytes).unwrap_err(),
            ExtractError::Reduction(_)
        ));
    }
}
