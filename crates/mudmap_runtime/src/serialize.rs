//! Map snapshot serialization using `MessagePack`.
//!
//! A snapshot carries the room graph together with the client variables,
//! so a session can be stopped and resumed with the same debug flag.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use mudmap_foundation::{Error, ErrorContext, Result};
use mudmap_store::MemoryMapStore;

/// Everything persisted between sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSnapshot {
    /// The room graph.
    pub store: MemoryMapStore,
    /// Client variables.
    pub variables: BTreeMap<String, String>,
}

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &MapSnapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<MapSnapshot> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::io(format!("failed to {action} '{}': {e}", path.display()))
        .with_context(ErrorContext::new().with_source(path.display().to_string()))
}

/// Saves a snapshot to a file, replacing any previous content.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &MapSnapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(snapshot)?;

    let file = File::create(path).map_err(|e| io_error("create file", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to file", path, &e))?;
    writer.flush().map_err(|e| io_error("flush file", path, &e))?;

    tracing::info!(path = %path.display(), rooms = snapshot.store.room_count(), "map saved");
    Ok(())
}

/// Loads a snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<MapSnapshot> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open file", path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read file", path, &e))?;

    let snapshot = from_bytes(&bytes)?;
    tracing::info!(path = %path.display(), rooms = snapshot.store.room_count(), "map loaded");
    Ok(snapshot)
}
