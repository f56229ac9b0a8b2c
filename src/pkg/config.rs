use std::path::{Path, PathBuf};

// Where the notebook platform mounts the instance's resource metadata.
pub const DEFAULT_METADATA_PATH: &str = "/opt/ml/metadata/resource-metadata.json";

// Key holding the notebook instance name.
pub const RESOURCE_NAME_KEY: &str = "ResourceName";

pub fn resolve_path(file_path: Option<&Path>) -> PathBuf {
    file_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_PATH))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn falls_back_to_default_path() {
        assert_eq!(
            resolve_path(None),
            PathBuf::from("/opt/ml/metadata/resource-metadata.json")
        );
    }

    #[test]
    fn keeps_caller_path() {
        let path = Path::new("/tmp/custom.json");
        assert_eq!(resolve_path(Some(path)), path.to_path_buf());
    }
}
