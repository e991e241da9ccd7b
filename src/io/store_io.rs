use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::task::Task;

/// Error type for data file I/O.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{path} is not a valid task file: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read the task file. A missing file is an empty collection, not an error.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    serde_json::from_str(&data).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the full collection, pretty-printed with two-space indentation.
/// Writes to a temp file next to the target, then renames it into place.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let mut data = serde_json::to_vec_pretty(tasks)?;
    data.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &data).map_err(|e| StoreError::Write {
        path: tmp.clone(),
        source: e,
    })?;
    fs::rename(&tmp, path).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
