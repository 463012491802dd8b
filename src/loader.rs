use std::path::Path;

use serde_json::Value;

use crate::error::ConvertError;

/// Load the collaborator listing stored in `path`, as a list of raw JSON records.
///
/// A `null` document is considered as an empty listing.
pub fn load_records(path: &Path) -> Result<Vec<Value>, ConvertError> {
    let text = std::fs::read_to_string(path).map_err(|err| ConvertError::read(path, err))?;
    match serde_json::from_str(&text) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(Value::Null) => Ok(vec![]),
        Ok(_) => Err(ConvertError::NotAnArray(path.into())),
        Err(err) => Err(ConvertError::MalformedInput(path.into(), err)),
    }
}
