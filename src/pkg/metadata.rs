use super::config::{self, RESOURCE_NAME_KEY};
use super::error::{MetadataError, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

// Parsed metadata document, fields kept verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMetadata {
    fields: Map<String, Value>,
}

impl ResourceMetadata {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn resource_name(&self) -> Result<&str> {
        match self.fields.get(RESOURCE_NAME_KEY) {
            Some(Value::String(name)) => Ok(name),
            Some(other) => Err(MetadataError::InvalidField {
                field: RESOURCE_NAME_KEY.to_string(),
                expected: "string".to_string(),
                found: json_kind(other).to_string(),
            }),
            None => Err(MetadataError::MissingField(RESOURCE_NAME_KEY.to_string())),
        }
    }
}

pub fn load_metadata(path: &Path) -> Result<ResourceMetadata> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MetadataError::NotFound {
            path: path.display().to_string(),
        },
        _ => MetadataError::from(e),
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    // undecodable text is a read failure, not a JSON one
    let text = std::str::from_utf8(&bytes)?;

    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Object(fields) => Ok(ResourceMetadata { fields }),
        other => Err(MetadataError::NotAnObject {
            found: json_kind(&other).to_string(),
        }),
    }
}

// Returns the ResourceName from the metadata file, DEFAULT_METADATA_PATH when no path is given
pub fn get_notebook_instance_name(file_path: Option<&Path>) -> Result<String> {
    let path = config::resolve_path(file_path);
    debug!("Reading resource metadata from {}", path.display());

    let metadata = load_metadata(&path).inspect_err(|e| {
        warn!("Failed to load metadata from {}: {}", path.display(), e);
    })?;

    metadata.resource_name().map(str::to_owned)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
