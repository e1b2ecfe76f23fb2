mod messages;
mod pipeline;

pub use messages::{PipelineOutput, RenderRequest, SeriesStats};
pub use pipeline::Pipeline;
