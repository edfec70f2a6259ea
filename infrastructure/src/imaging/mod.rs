//! Image preprocessing: the [`FeatureExtractor`](derma_application::FeatureExtractor) adapter.

pub mod pca;
pub mod pipeline;

pub use pipeline::ImagePipeline;
