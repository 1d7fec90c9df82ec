//! SonarQube Web API access

pub mod client;
pub mod errors;
pub mod models;
pub mod source;

pub use client::{ClientConfig, SonarClient};
pub use errors::SonarError;
pub use models::{AnalysisScope, ComponentMeasures, Measure};
pub use source::MetricsSource;
