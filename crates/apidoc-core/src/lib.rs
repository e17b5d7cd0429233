pub mod config;
pub mod docs;
pub mod error;
pub mod export;
pub mod generator;
pub mod model;
pub mod parse;
/// Host-facing request plumbing for the interactive widgets: try-it forms and
/// the assistant. Network access itself is the host's [`remote::HttpClient`].
pub mod remote;
pub mod samples;
pub mod transform;
pub mod validate;

pub use docs::Documentation;
pub use generator::{Generator, assemble};
pub use parse::Source;
pub use samples::{CodeSamples, ResponseExample, SampleContext, SampleLanguage, SampleRenderer};
