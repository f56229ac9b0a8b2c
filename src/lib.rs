pub mod pkg;

pub use pkg::error::{MetadataError, Result};
pub use pkg::metadata::{get_notebook_instance_name, load_metadata, ResourceMetadata};
