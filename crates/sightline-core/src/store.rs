use std::path::{Path, PathBuf};

use crate::{SightingRecord, StoreError};

/// Default location of the scraped base dataset.
pub const DEFAULT_DATA_PATH: &str = "data/elasmo_sightings_20250415.csv";
/// Default location of the validation save file.
pub const DEFAULT_SAVE_PATH: &str = "data/validated_sightings.csv";
/// Default filename for on-demand snapshot exports.
pub const SNAPSHOT_FILENAME: &str = "validated_sightings.csv";

/// Resolved file locations for one validation run.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub data: PathBuf,
    pub save: PathBuf,
}

impl Default for StorePaths {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            save: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

/// Load the working table.
///
/// Once a save file exists it becomes the source of truth and the base
/// dataset is ignored. Annotation columns (`validation`, `notes`,
/// `N_observed`) missing from either file are back-filled empty by the record
/// deserializer. A missing base dataset is fatal; there is no fallback.
pub fn load(paths: &StorePaths) -> Result<Vec<SightingRecord>, StoreError> {
    let path = if paths.save.exists() {
        &paths.save
    } else {
        &paths.data
    };
    let table = read_table(path)?;
    tracing::info!(path = %path.display(), rows = table.len(), "loaded working table");
    Ok(table)
}

/// Persist the full working table to the save file, overwriting it wholesale.
pub fn save(table: &[SightingRecord], save_path: &Path) -> Result<(), StoreError> {
    write_table(table, save_path)?;
    tracing::debug!(path = %save_path.display(), rows = table.len(), "saved working table");
    Ok(())
}

/// Write an on-demand snapshot of the table to a caller-chosen path.
/// Identical schema to the save file.
pub fn export_snapshot(table: &[SightingRecord], path: &Path) -> Result<(), StoreError> {
    write_table(table, path)?;
    tracing::info!(path = %path.display(), rows = table.len(), "exported snapshot");
    Ok(())
}

fn read_table(path: &Path) -> Result<Vec<SightingRecord>, StoreError> {
    if !path.exists() {
        return Err(StoreError::Missing {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut table = Vec::new();
    for result in reader.deserialize() {
        let record: SightingRecord = result.map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        table.push(record);
    }
    Ok(table)
}

fn write_table(table: &[SightingRecord], path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    for record in table {
        writer.serialize(record).map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
