pub mod block;
pub mod config;

// Re-export commonly used types
pub use block::atlas::{TileIndex, ATLAS_GRID};
pub use block::definition::{BlockFlags, BlockType, MapColor};
pub use block::error::{EntryError, LoadError, RegistryError, SourceError};
pub use block::facing::{Face, FaceSide, Facing};
pub use block::loader::{load_sources, LoadSummary};
pub use block::registry::BlockRegistry;
pub use block::BlockData;
pub use config::ViewerConfig;
