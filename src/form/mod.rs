//! Form state: the bounded sample-size parameter and the model selection.

mod sample_size;
mod selection;

pub use sample_size::{AUTHOR_STEP, MAX_AUTHORS, MIN_AUTHORS, SampleSize};
pub use selection::{ModelId, ModelSelection};
