//! Graph Lab sampling: turns catalogue curves into finite point sets.

pub mod api;
pub mod config;
pub mod request;
pub mod result;
pub mod sampler;

pub use api::GraphLab;
pub use config::SamplerConfig;
pub use request::SampleRequest;
pub use result::{Sample, SamplePoint, SampleResult};
pub use sampler::Sampler;
