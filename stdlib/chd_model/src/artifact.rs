//! JSON artifact reading and shared validation

use crate::error::ModelError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and deserialize one JSON artifact from disk.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let text = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Artifacts must list exactly the expected columns, in the expected order.
pub fn ensure_feature_order<S: AsRef<str>>(
    expected: &[S],
    found: &[String],
) -> Result<(), ModelError> {
    let matches = expected.len() == found.len()
        && expected
            .iter()
            .zip(found.iter())
            .all(|(e, f)| e.as_ref() == f);
    if matches {
        return Ok(());
    }
    Err(ModelError::FeatureMismatch {
        expected: expected.iter().map(|s| s.as_ref().to_string()).collect(),
        found: found.to_vec(),
    })
}

pub(crate) fn ensure_finite(what: &str, values: &[f64]) -> Result<(), ModelError> {
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(ModelError::InvalidParameter(format!(
            "{what}[{idx}] is not a finite number"
        )));
    }
    Ok(())
}
