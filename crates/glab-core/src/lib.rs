//! Graph Lab core types: errors, curve identifiers, shared traits.

pub mod error;
pub mod id;
pub mod traits;

pub use error::{GlabError, Result};
pub use id::CurveId;
pub use traits::{BoundingBox, Validate};
