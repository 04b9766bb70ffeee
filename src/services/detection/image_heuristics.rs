// Image Heuristic Scorer
// Metadata-driven AI/real scoring: aspect ratio, generator output sizes,
// colour spread and source format.

use crate::models::{ImageFormat, ImageSample};

const PRIOR: f64 = 0.5;

/// Aspect ratios typical of cropped or generated output
const COMMON_RATIOS: [f64; 6] = [1.0, 1.33, 1.5, 1.77, 0.75, 0.67];
const RATIO_TOLERANCE: f64 = 0.02;
const RATIO_WEIGHT: f64 = 0.2;

/// Default output sizes of common image generators
const GENERATOR_SIZES: [(u32, u32); 5] = [
    (512, 512),
    (1024, 1024),
    (768, 768),
    (1024, 576),
    (576, 1024),
];
const SIZE_WEIGHT: f64 = 0.3;

const COLOR_STD_LOW: f64 = 40.0;
const COLOR_WEIGHT: f64 = 0.1;
const FORMAT_WEIGHT: f64 = 0.1;

pub fn has_common_ratio(ratio: f64) -> bool {
    COMMON_RATIOS
        .iter()
        .any(|r| (ratio - r).abs() < RATIO_TOLERANCE)
}

pub fn is_generator_size(width: u32, height: u32) -> bool {
    GENERATOR_SIZES.contains(&(width, height))
}

/// Mean over R, G, B of the per-channel population standard deviation.
/// `None` when the sample carries no pixel data.
pub fn mean_channel_std(image: &ImageSample) -> Option<f64> {
    let pixels = image.pixels()?;
    let count = (pixels.len() / 3) as f64;
    if count == 0.0 {
        return None;
    }

    let mut sums = [0f64; 3];
    for px in pixels.chunks_exact(3) {
        for (c, v) in px.iter().enumerate() {
            sums[c] += *v as f64;
        }
    }
    let means = sums.map(|s| s / count);

    let mut sq = [0f64; 3];
    for px in pixels.chunks_exact(3) {
        for (c, v) in px.iter().enumerate() {
            sq[c] += (*v as f64 - means[c]).powi(2);
        }
    }

    Some(sq.iter().map(|s| (s / count).sqrt()).sum::<f64>() / 3.0)
}

/// Score an image and return `(ai_probability, real_probability)`
pub fn analyze_image_characteristics(image: &ImageSample) -> (f64, f64) {
    let mut ai_score = PRIOR;
    let mut real_score = PRIOR;

    if has_common_ratio(image.aspect_ratio()) {
        ai_score += RATIO_WEIGHT;
    }

    if is_generator_size(image.width(), image.height()) {
        ai_score += SIZE_WEIGHT;
    }

    if let Some(std) = mean_channel_std(image) {
        if std < COLOR_STD_LOW {
            ai_score += COLOR_WEIGHT;
        } else {
            real_score += COLOR_WEIGHT;
        }
    }

    if matches!(image.format(), Some(ImageFormat::Jpeg | ImageFormat::Png)) {
        real_score += FORMAT_WEIGHT;
    }

    let ai = ai_score / (ai_score + real_score);
    (ai, 1.0 - ai)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn checkerboard(width: u32, height: u32, format: Option<ImageFormat>) -> ImageSample {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        ImageSample::new(width, height, format, Some(pixels)).unwrap()
    }

    #[test]
    fn test_generator_size_low_variance_jpeg() {
        let img = ImageSample::solid(512, 512, Some(ImageFormat::Jpeg), [120, 120, 120]).unwrap();
        let (ai, real) = analyze_image_characteristics(&img);
        // ai 0.5 + 0.2 (ratio 1.0) + 0.3 (size) + 0.1 (flat colour), real 0.5 + 0.1
        assert!((ai - 1.1 / 1.7).abs() < 1e-12);
        assert!((ai + real - 1.0).abs() < 1e-12);
        assert!(ai > 0.6);
    }

    #[test]
    fn test_odd_size_high_variance_png_leans_real() {
        let img = checkerboard(37, 23, Some(ImageFormat::Png));
        let (ai, real) = analyze_image_characteristics(&img);
        // ratio 1.61 is not common; std 127.5 credits real; png credits real
        assert!((real - 0.7 / 1.2).abs() < 1e-12);
        assert!(real > ai);
    }

    #[test]
    fn test_metadata_only_sample_skips_colour_rule() {
        let img = ImageSample::new(1024, 576, None, None).unwrap();
        let (ai, _) = analyze_image_characteristics(&img);
        // 1024/576 = 1.777.. within 0.02 of 1.77, plus size bonus
        assert!((ai - 1.0 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_mean_channel_std() {
        let flat = ImageSample::solid(4, 4, None, [1, 2, 3]).unwrap();
        assert_eq!(mean_channel_std(&flat), Some(0.0));
        let board = checkerboard(2, 2, None);
        assert!((mean_channel_std(&board).unwrap() - 127.5).abs() < 1e-9);
        let bare = ImageSample::new(2, 2, None, None).unwrap();
        assert_eq!(mean_channel_std(&bare), None);
    }

    #[test]
    fn test_ratio_tolerance() {
        assert!(has_common_ratio(4.0 / 3.0));
        assert!(has_common_ratio(2.0 / 3.0));
        assert!(!has_common_ratio(2.0));
        assert!(!is_generator_size(512, 513));
    }

    proptest! {
        #[test]
        fn prop_image_pair_sums_to_one(w in 1u32..64, h in 1u32..64, seed in any::<u8>(), png in any::<bool>()) {
            let format = if png { Some(ImageFormat::Png) } else { None };
            let img = ImageSample::solid(w, h, format, [seed, seed / 2, 255 - seed]).unwrap();
            let (ai, real) = analyze_image_characteristics(&img);
            prop_assert!(ai >= 0.0 && ai <= 1.0);
            prop_assert!(real >= 0.0 && real <= 1.0);
            prop_assert!((ai + real - 1.0).abs() < 1e-9);
        }
    }
}
