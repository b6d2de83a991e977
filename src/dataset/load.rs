//! Dataset loading functionality

use super::record::TrackRecord;
use super::store::RecordStore;
use super::validation::validate_record;
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::info;

/// Load a dataset from a JSON file holding an array of track records.
///
/// With `check_all` set, every record is validated up front (in parallel)
/// and all schema problems are reported before giving up; otherwise the
/// store's own fail-fast validation is the only gate.
pub fn load_dataset<P: AsRef<std::path::Path>>(path: P, check_all: bool) -> Result<RecordStore> {
    let path = path.as_ref();
    info!("Loading dataset from {:?}...", path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {:?}", path))?;
    let records: Vec<TrackRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dataset file: {:?}", path))?;

    if check_all {
        info!("Performing schema checks...");
        let problems: Vec<String> = records
            .par_iter()
            .enumerate()
            .filter_map(|(index, record)| match validate_record(record) {
                Ok(()) => None,
                Err(err) => Some(format!(
                    "record {} ({} - {}): {}",
                    index, record.artist, record.track, err
                )),
            })
            .collect();

        if !problems.is_empty() {
            info!("Found {} problems:", problems.len());
            for problem in problems.iter() {
                info!("- {}", problem);
            }
            bail!("Could not load dataset: {} invalid records", problems.len());
        }
    } else {
        info!("Skipping schema checks.");
    }

    let store = RecordStore::load(records)
        .with_context(|| format!("Could not load dataset from {:?}", path))?;

    info!(
        "Dataset has:\n{} records\n{} artists\n{} albums",
        store.len(),
        store.distinct_artist_count(),
        store.distinct_album_count()
    );
    Ok(store)
}
