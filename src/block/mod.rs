use serde::{Deserialize, Serialize};

pub mod atlas;
pub mod definition;
pub mod error;
pub mod facing;
pub mod loader;
pub mod registry;

pub use atlas::{TileIndex, ATLAS_GRID};
pub use definition::{Appearance, BlockFlags, BlockType, MapColor, TileRules};
pub use error::{EntryError, LoadError, RegistryError, SourceError};
pub use facing::{Face, FaceSide, Facing, FacingTable};
pub use loader::{load_sources, normalize, parse_source, LoadFailure, LoadSummary, RawBlock};
pub use registry::BlockRegistry;

/// One block instance as handed over by the world decoder: numeric type
/// id plus the per-instance data byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockData {
    pub id: u8,
    pub data: u8,
}

impl BlockData {
    pub fn new(id: u8, data: u8) -> Self {
        Self { id, data }
    }
}
