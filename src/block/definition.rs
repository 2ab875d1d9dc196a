use std::collections::HashMap;

use crate::block::atlas::TileIndex;
use crate::block::facing::{Face, FaceSide, FacingTable};

/// Behavior flags recorded per block type, consumed by the renderer and
/// the map overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockFlags {
    pub solid: bool,
    pub transparent: bool,
}

/// Map overlay color as an RGB triple.
pub type MapColor = [u8; 3];

/// How a block type is textured: from fixed atlas tiles, or computed by
/// the renderer at draw time (fluids, fire, portals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Appearance {
    Generated,
    Tiled(TileRules),
}

/// The prioritized texture rules of one tiled block type. Built by the
/// loader; every instance carries at least the base tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRules {
    pub(crate) base: TileIndex,
    pub(crate) data: HashMap<u8, TileIndex>,
    pub(crate) direction: HashMap<FaceSide, TileIndex>,
    pub(crate) facing: FacingTable,
}

impl TileRules {
    /// Rules that draw the same tile on every face of every instance.
    pub fn uniform(base: TileIndex) -> Self {
        Self {
            base,
            data: HashMap::new(),
            direction: HashMap::new(),
            facing: FacingTable::standard(),
        }
    }

    pub fn base(&self) -> TileIndex {
        self.base
    }

    /// Pick the tile for one face of a block instance, first match wins:
    /// direction rule (when the data byte decodes to a facing and the
    /// classified side has one), then data rule, then the base tile.
    pub fn resolve(&self, face: Face, data: u8) -> TileIndex {
        if !self.direction.is_empty() {
            if let Some(facing) = self.facing.resolve(data) {
                let side = FaceSide::of(face, facing);
                if let Some(&tile) = self.direction.get(&side) {
                    return tile;
                }
            }
        }

        if let Some(&tile) = self.data.get(&data) {
            return tile;
        }

        self.base
    }
}

/// One fully validated block type: identity, display metadata and texture
/// rules. Built by the loader, owned by the registry for process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockType {
    pub id: u8,
    pub name: String,
    pub display_name: String,
    pub map_color: Option<MapColor>,
    pub flags: BlockFlags,
    pub(crate) appearance: Appearance,
    pub(crate) extra: HashMap<String, TileIndex>,
    pub(crate) replace: bool,
}

impl BlockType {
    /// Whether the renderer must texture this type procedurally instead of
    /// resolving atlas tiles for it.
    pub fn is_generated(&self) -> bool {
        matches!(self.appearance, Appearance::Generated)
    }

    pub fn is_solid(&self) -> bool {
        self.flags.solid
    }

    pub fn is_transparent(&self) -> bool {
        self.flags.transparent
    }

    /// Whether this definition was authored with permission to replace an
    /// already registered entry of the same id or name.
    pub fn replaces_existing(&self) -> bool {
        self.replace
    }

    pub fn tile_rules(&self) -> Option<&TileRules> {
        match &self.appearance {
            Appearance::Tiled(rules) => Some(rules),
            Appearance::Generated => None,
        }
    }

    /// Resolve the atlas tile for one face of an instance of this type.
    /// `None` only for generated types; callers branch on `is_generated`
    /// and hand those to their own drawing path.
    pub fn resolve_tile(&self, face: Face, data: u8) -> Option<TileIndex> {
        self.tile_rules().map(|rules| rules.resolve(face, data))
    }

    /// Look up the tile of a named auxiliary part, e.g. an overlay.
    pub fn resolve_extra(&self, name: &str) -> Option<TileIndex> {
        self.extra.get(name).copied()
    }
}
