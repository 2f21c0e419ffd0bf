//! Shared data models spanning the validation and prediction layers.

pub mod candle;
pub mod input;
pub mod prediction;

pub use candle::Candle;
pub use input::ManualDataInput;
pub use prediction::{
    AnalysisMode, Direction, PredictionConfig, PredictionFactors, PredictionResult,
};
