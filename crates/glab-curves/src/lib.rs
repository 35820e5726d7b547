//! Graph Lab curve catalogue: definitions, registry, and templates.

pub mod catalog;
pub mod definition;
pub mod domain;
pub mod evaluator;
pub mod family;
pub mod params;
pub mod registry;
pub mod templates;

pub use definition::{CurveDefinition, CurveInfo};
pub use domain::Domain;
pub use evaluator::Evaluator;
pub use family::CurveFamily;
pub use params::ParameterSet;
pub use registry::CurveRegistry;
pub use templates::{NameTable, NumberedNames, Template, TemplateNaming, TemplateProvider};
