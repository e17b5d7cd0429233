pub mod renderer;
pub mod response;

pub use renderer::TemplateSampleRenderer;
pub use response::{EXAMPLE_TIMESTAMP, example_response};
