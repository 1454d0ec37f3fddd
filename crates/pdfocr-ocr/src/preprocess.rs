//! Image preprocessing: grayscale conversion and Otsu binarization.

use image::{DynamicImage, GrayImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

/// Binarize a page image: luminance conversion followed by global
/// black/white thresholding at the level chosen by Otsu's method.
///
/// The output has the same spatial dimensions as the input, one channel,
/// and every pixel is either 0 or 255. Pure transform, no error path.
#[must_use = "binarized image is returned but not used"]
pub fn binarize(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();
    let level = otsu_level(&gray);
    threshold(&gray, level, ThresholdType::Binary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, RgbImage};

    /// Half dark, half bright image with clearly separated intensity modes.
    fn bimodal_image() -> DynamicImage {
        let mut img = RgbImage::new(40, 20);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            *pixel = if x < 20 {
                image::Rgb([30, 30, 30])
            } else {
                image::Rgb([220, 220, 220])
            };
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_binarize_preserves_dimensions() {
        let binary = binarize(&bimodal_image());
        assert_eq!(binary.dimensions(), (40, 20));
    }

    #[test]
    fn test_binarize_output_is_black_and_white() {
        let binary = binarize(&bimodal_image());
        assert!(binary.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_binarize_separates_modes() {
        let binary = binarize(&bimodal_image());
        assert_eq!(*binary.get_pixel(5, 10), Luma([0u8]));
        assert_eq!(*binary.get_pixel(35, 10), Luma([255u8]));
    }

    #[test]
    fn test_binarize_uniform_image() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, image::Rgb([128, 128, 128])));
        let binary = binarize(&img);
        // A single-mode image still yields a valid binary image
        assert_eq!(binary.dimensions(), (8, 8));
        assert!(binary.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
