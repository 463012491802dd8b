use std::path::{Path, PathBuf};

use crate::{document::CollabYamlDocument, error::ConvertError};

/// The file where the document of `repository` is written.
pub fn yaml_path(output_dir: &Path, repository: &str) -> PathBuf {
    output_dir.join(format!("{repository}.yaml"))
}

/// Serialize `doc` into `<output_dir>/<repository>.yaml`, replacing any existing file.
pub fn write_document(
    doc: &CollabYamlDocument,
    output_dir: &Path,
) -> Result<PathBuf, ConvertError> {
    let path = yaml_path(output_dir, doc.repository());
    let yaml = serde_yaml::to_string(doc).map_err(|err| ConvertError::write(&path, err))?;
    std::fs::write(&path, yaml).map_err(|err| ConvertError::write(&path, err))?;
    Ok(path)
}
