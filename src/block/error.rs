use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::block::atlas::ATLAS_GRID;

/// Raw atlas coordinates that do not name a grid cell.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("atlas coordinate ({col}, {row}) is outside the {grid}x{grid} grid", grid = ATLAS_GRID)]
pub struct TileRangeError {
    pub col: i64,
    pub row: i64,
}

/// Structural failure of a single source entry. Aborts that entry's
/// admission; the rest of the source still loads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("block {entry}: missing required field `{field}`")]
    MissingField { entry: String, field: &'static str },

    #[error("block {entry}: `{field}` expects {expected} components, got {got}")]
    BadArity {
        entry: String,
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("block {entry}: `{field}`: {source}")]
    TileOutOfRange {
        entry: String,
        field: &'static str,
        source: TileRangeError,
    },

    #[error("block {entry}: `{field}` key `{key}` is not a data byte")]
    BadDataKey {
        entry: String,
        field: &'static str,
        key: String,
    },

    #[error("block {entry}: `tex_direction` key `{key}` is not a face side")]
    BadDirection { entry: String, key: String },

    #[error("block {entry}: `mapcolor` component {value} is not a byte")]
    BadColor { entry: String, value: i64 },
}

/// Identity collision detected by the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate block id: {0}")]
    DuplicateId(u8),

    #[error("duplicate block name: {0}")]
    DuplicateName(String),
}

/// Failure to admit one entry, either structural or an identity collision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Whole-source failure: the document could not be read or parsed at all.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read block source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse block source {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
