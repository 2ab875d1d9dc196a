use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;

use crate::block::atlas::TileIndex;
use crate::block::definition::{Appearance, BlockFlags, BlockType, TileRules};
use crate::block::error::{EntryError, LoadError, SourceError, TileRangeError};
use crate::block::facing::{FaceSide, FacingTable};
use crate::block::registry::BlockRegistry;

/// Block types the renderer textures at draw time rather than from a
/// fixed atlas tile. Entries with these symbolic names load without a
/// `tex` field.
pub const GENERATED_TYPES: [&str; 7] = [
    "WATER",
    "STATIONARY_WATER",
    "LAVA",
    "STATIONARY_LAVA",
    "FIRE",
    "PORTAL",
    "END_PORTAL",
];

/// One entry of a declarative block source, exactly as authored. Fields
/// are permissive here; all checking happens in [`normalize`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBlock {
    pub id: Option<u8>,
    #[serde(rename = "idStr")]
    pub id_str: Option<String>,
    pub name: Option<String>,
    pub mapcolor: Option<Vec<i64>>,
    pub tex: Option<Vec<i64>>,
    #[serde(default)]
    pub tex_data: HashMap<String, Vec<i64>>,
    #[serde(default)]
    pub tex_direction: HashMap<String, Vec<i64>>,
    #[serde(default)]
    pub tex_extra: HashMap<String, Vec<i64>>,
    #[serde(default, rename = "override")]
    pub replace: bool,
    pub solid: Option<bool>,
    pub transparent: Option<bool>,
}

impl RawBlock {
    /// Human-readable handle for diagnostics, usable before validation.
    pub fn label(&self) -> String {
        match (&self.id_str, self.id) {
            (Some(name), Some(id)) => format!("{name} (id {id})"),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => format!("id {id}"),
            (None, None) => "<unidentified>".to_string(),
        }
    }
}

/// Parse one source document: a JSON array of block entries.
pub fn parse_source(text: &str) -> Result<Vec<RawBlock>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and parse one source file.
pub fn load_file(path: &Path) -> Result<Vec<RawBlock>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&text).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn tile_from_pair(
    entry: &str,
    field: &'static str,
    pair: &[i64],
) -> Result<TileIndex, LoadError> {
    if pair.len() != 2 {
        return Err(LoadError::BadArity {
            entry: entry.to_string(),
            field,
            expected: 2,
            got: pair.len(),
        });
    }

    let (col, row) = (pair[0], pair[1]);
    let out_of_range = LoadError::TileOutOfRange {
        entry: entry.to_string(),
        field,
        source: TileRangeError { col, row },
    };

    match (u8::try_from(col), u8::try_from(row)) {
        (Ok(col), Ok(row)) => TileIndex::from_col_row(col, row).map_err(|_| out_of_range),
        _ => Err(out_of_range),
    }
}

fn color_from_triple(entry: &str, triple: &[i64]) -> Result<[u8; 3], LoadError> {
    if triple.len() != 3 {
        return Err(LoadError::BadArity {
            entry: entry.to_string(),
            field: "mapcolor",
            expected: 3,
            got: triple.len(),
        });
    }

    let mut color = [0u8; 3];
    for (slot, &value) in color.iter_mut().zip(triple) {
        *slot = u8::try_from(value).map_err(|_| LoadError::BadColor {
            entry: entry.to_string(),
            value,
        })?;
    }
    Ok(color)
}

fn tile_table(
    entry: &str,
    field: &'static str,
    raw: &HashMap<String, Vec<i64>>,
) -> Result<HashMap<String, TileIndex>, LoadError> {
    let mut table = HashMap::with_capacity(raw.len());
    for (key, pair) in raw {
        table.insert(key.clone(), tile_from_pair(entry, field, pair)?);
    }
    Ok(table)
}

/// Validate one raw entry and build its runtime definition. All or
/// nothing: any structural problem rejects the whole entry and nothing
/// is admitted anywhere.
pub fn normalize(raw: &RawBlock) -> Result<BlockType, LoadError> {
    let entry = raw.label();

    let id = raw.id.ok_or_else(|| LoadError::MissingField {
        entry: entry.clone(),
        field: "id",
    })?;
    let name = match raw.id_str.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(LoadError::MissingField {
                entry,
                field: "idStr",
            })
        }
    };

    let map_color = match &raw.mapcolor {
        Some(triple) => Some(color_from_triple(&entry, triple)?),
        None => None,
    };

    let appearance = match &raw.tex {
        Some(pair) => {
            let base = tile_from_pair(&entry, "tex", pair)?;

            let mut data = HashMap::with_capacity(raw.tex_data.len());
            for (key, pair) in &raw.tex_data {
                let byte = key.parse::<u8>().map_err(|_| LoadError::BadDataKey {
                    entry: entry.clone(),
                    field: "tex_data",
                    key: key.clone(),
                })?;
                data.insert(byte, tile_from_pair(&entry, "tex_data", pair)?);
            }

            let mut direction = HashMap::with_capacity(raw.tex_direction.len());
            for (key, pair) in &raw.tex_direction {
                let side = FaceSide::from_name(key).ok_or_else(|| LoadError::BadDirection {
                    entry: entry.clone(),
                    key: key.clone(),
                })?;
                direction.insert(side, tile_from_pair(&entry, "tex_direction", pair)?);
            }

            Appearance::Tiled(TileRules {
                base,
                data,
                direction,
                facing: FacingTable::standard(),
            })
        }
        None if GENERATED_TYPES.contains(&name.as_str()) => Appearance::Generated,
        None => {
            return Err(LoadError::MissingField {
                entry,
                field: "tex",
            })
        }
    };

    let extra = tile_table(&entry, "tex_extra", &raw.tex_extra)?;

    Ok(BlockType {
        id,
        display_name: raw.name.clone().unwrap_or_else(|| name.clone()),
        name,
        map_color,
        flags: BlockFlags {
            solid: raw.solid.unwrap_or(true),
            transparent: raw.transparent.unwrap_or(false),
        },
        appearance,
        extra,
        replace: raw.replace,
    })
}

/// One rejected entry, with enough context for a precise diagnostic.
#[derive(Debug)]
pub struct LoadFailure {
    pub source: PathBuf,
    pub entry: String,
    pub error: EntryError,
}

/// Outcome of applying one or more sources to a registry.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub failures: Vec<LoadFailure>,
}

/// Apply sources to `registry` in the given order: the base set first,
/// then each mod set. Admission is entry by entry; a bad entry is
/// recorded and skipped while the rest of its source still loads. Only a
/// source that cannot be read or parsed at all aborts the load.
pub fn load_sources<P: AsRef<Path>>(
    registry: &mut BlockRegistry,
    paths: &[P],
) -> Result<LoadSummary, SourceError> {
    let mut summary = LoadSummary::default();

    for path in paths {
        let path = path.as_ref();
        let raws = load_file(path)?;
        info!(
            "loading {} block entries from {}",
            raws.len(),
            path.display()
        );

        for raw in &raws {
            let entry = raw.label();
            match admit(registry, raw) {
                Ok(()) => {
                    summary.loaded += 1;
                    debug!("registered block {entry}");
                }
                Err(error) => {
                    warn!("rejected block {entry} from {}: {error}", path.display());
                    summary.failures.push(LoadFailure {
                        source: path.to_path_buf(),
                        entry,
                        error,
                    });
                }
            }
        }
    }

    Ok(summary)
}

fn admit(registry: &mut BlockRegistry, raw: &RawBlock) -> Result<(), EntryError> {
    let block = normalize(raw)?;
    registry.add(block)?;
    Ok(())
}
