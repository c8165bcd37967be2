pub mod clean;
pub mod error;
pub mod pipeline;
pub mod rational;
pub mod rebalance;
pub mod retime;
pub mod srt;
pub mod timestamp;

pub use error::{SrtError, SrtResult};
pub use pipeline::{process_document, PipelineConfig};
pub use rational::Rational;
pub use retime::{RateConversion, ShiftOffset};
