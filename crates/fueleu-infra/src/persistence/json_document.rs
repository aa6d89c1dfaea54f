//! Whole-file JSON documents
//!
//! Each repository keeps one document per store directory. Writes go to a
//! sibling temp file which is then renamed over the original, so a reader
//! never sees a half-written document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use fueleu_types::{Result, StoreError};

pub(crate) fn load<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document = serde_json::from_reader(reader).map_err(|e| StoreError::Corrupted {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(document)
}

pub(crate) fn persist<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let tmp_path = tmp_path(path);
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;
    }
    fs::rename(&tmp_path, path).map_err(|e| StoreError::IoError(e.to_string()))?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
