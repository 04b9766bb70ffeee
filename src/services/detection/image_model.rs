// Placeholder image classifier
// An untrained network with randomly initialised weights. It exists to give the
// "deep learning" path a real inference shape (image in, two-class softmax out);
// its numbers carry no signal.

use crate::models::ImageSample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side length the input is resized to before pooling
pub const INPUT_SIZE: u32 = 224;
pub const DEFAULT_SEED: u64 = 42;

const LAYER_WIDTHS: [usize; 4] = [3, 32, 64, 128];
const CLASS_COUNT: usize = 2;
const REAL_CLASS: usize = 0;
const AI_CLASS: usize = 1;

/// Anything that maps an image to two-class logits `[real, ai]`
pub trait ImageClassifier {
    fn logits(&self, image: &ImageSample) -> [f64; 2];
}

#[derive(Debug, Clone)]
struct DenseLayer {
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

impl DenseLayer {
    /// Uniform init in ±1/sqrt(fan_in)
    fn random(rng: &mut StdRng, fan_in: usize, fan_out: usize) -> Self {
        let bound = 1.0 / (fan_in as f64).sqrt();
        let weights = (0..fan_out)
            .map(|_| (0..fan_in).map(|_| rng.gen_range(-bound..bound)).collect())
            .collect();
        let bias = (0..fan_out).map(|_| rng.gen_range(-bound..bound)).collect();
        Self { weights, bias }
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(self.bias.iter())
            .map(|(row, b)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect()
    }
}

fn relu(values: Vec<f64>) -> Vec<f64> {
    values.into_iter().map(|v| v.max(0.0)).collect()
}

/// Three ReLU layers (3 -> 32 -> 64 -> 128) over pooled channel means and a
/// 128 -> 2 linear head.
#[derive(Debug, Clone)]
pub struct PlaceholderCnn {
    hidden: Vec<DenseLayer>,
    head: DenseLayer,
}

impl PlaceholderCnn {
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let hidden = LAYER_WIDTHS
            .windows(2)
            .map(|w| DenseLayer::random(&mut rng, w[0], w[1]))
            .collect();
        let head = DenseLayer::random(&mut rng, LAYER_WIDTHS[LAYER_WIDTHS.len() - 1], CLASS_COUNT);
        Self { hidden, head }
    }

    /// Fresh weights from OS entropy, like loading an untrained model
    pub fn random() -> Self {
        Self::with_seed(StdRng::from_entropy().gen())
    }
}

impl Default for PlaceholderCnn {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

/// Per-channel means in [0, 1] after a nearest-neighbour resize to
/// `INPUT_SIZE`. Samples without pixel data pool to mid-grey.
pub fn pooled_features(image: &ImageSample) -> [f64; 3] {
    if image.pixels().is_none() {
        return [0.5; 3];
    }

    let mut sums = [0f64; 3];
    for ty in 0..INPUT_SIZE {
        let sy = (ty as u64 * image.height() as u64 / INPUT_SIZE as u64) as u32;
        for tx in 0..INPUT_SIZE {
            let sx = (tx as u64 * image.width() as u64 / INPUT_SIZE as u64) as u32;
            if let Some(rgb) = image.rgb_at(sx, sy) {
                for (sum, v) in sums.iter_mut().zip(rgb) {
                    *sum += v as f64 / 255.0;
                }
            }
        }
    }
    let n = (INPUT_SIZE * INPUT_SIZE) as f64;
    sums.map(|s| s / n)
}

impl ImageClassifier for PlaceholderCnn {
    fn logits(&self, image: &ImageSample) -> [f64; 2] {
        let mut activations = pooled_features(image).to_vec();
        for layer in &self.hidden {
            activations = relu(layer.forward(&activations));
        }
        let out = self.head.forward(&activations);
        [out[REAL_CLASS], out[AI_CLASS]]
    }
}

fn softmax(logits: [f64; CLASS_COUNT]) -> [f64; CLASS_COUNT] {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps = logits.map(|l| (l - max).exp());
    let total: f64 = exps.iter().sum();
    exps.map(|e| e / total)
}

/// Run `model` on `image` and return `(ai_probability, real_probability)`
pub fn image_inference<M: ImageClassifier + ?Sized>(image: &ImageSample, model: &M) -> (f64, f64) {
    let probs = softmax(model.logits(image));
    (probs[AI_CLASS], 1.0 - probs[AI_CLASS])
}
