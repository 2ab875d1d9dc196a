use serde::{Deserialize, Serialize};

/// One of the six cube-aligned faces of a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Top,
    Bottom,
    North,
    South,
    East,
    West,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::North,
        Face::South,
        Face::East,
        Face::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::North => Face::South,
            Face::South => Face::North,
            Face::East => Face::West,
            Face::West => Face::East,
        }
    }

    pub fn is_horizontal(self) -> bool {
        !matches!(self, Face::Top | Face::Bottom)
    }
}

/// Absolute compass direction a block is currently turned towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub fn opposite(self) -> Self {
        match self {
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::East => Facing::West,
            Facing::West => Facing::East,
        }
    }
}

/// Face of a block named relative to the direction it is turned towards.
/// These are the keys a source's `tex_direction` table may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceSide {
    Forward,
    Backward,
    Sides,
    Top,
    Bottom,
}

impl FaceSide {
    /// Parse a source-authored side name. Sources only ever use lowercase.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "forward" => Some(FaceSide::Forward),
            "backward" => Some(FaceSide::Backward),
            "sides" => Some(FaceSide::Sides),
            "top" => Some(FaceSide::Top),
            "bottom" => Some(FaceSide::Bottom),
            _ => None,
        }
    }

    /// Classify a world face against the facing of the block it belongs to.
    /// Vertical faces keep their identity regardless of facing.
    pub fn of(face: Face, facing: Facing) -> FaceSide {
        let side = match face {
            Face::Top => return FaceSide::Top,
            Face::Bottom => return FaceSide::Bottom,
            Face::North => Facing::North,
            Face::South => Facing::South,
            Face::East => Facing::East,
            Face::West => Facing::West,
        };

        if side == facing {
            FaceSide::Forward
        } else if side == facing.opposite() {
            FaceSide::Backward
        } else {
            FaceSide::Sides
        }
    }
}

/// Per-type decode table from a block's data byte to the facing it stores.
/// Attached by the loader to types whose faces vary by orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacingTable([Option<Facing>; 16]);

impl FacingTable {
    pub fn from_entries(entries: &[(u8, Facing)]) -> Self {
        let mut table = [None; 16];
        for &(data, facing) in entries {
            if let Some(slot) = table.get_mut(data as usize) {
                *slot = Some(facing);
            }
        }
        Self(table)
    }

    /// The table shared by every orientable block in the save format:
    /// data bytes 2 through 5 store the four compass directions.
    pub fn standard() -> Self {
        Self::from_entries(&[
            (2, Facing::North),
            (3, Facing::South),
            (4, Facing::West),
            (5, Facing::East),
        ])
    }

    /// Decode a data byte, reporting `None` for bytes with no mapping.
    pub fn resolve(&self, data: u8) -> Option<Facing> {
        self.0.get(data as usize).copied().flatten()
    }
}
