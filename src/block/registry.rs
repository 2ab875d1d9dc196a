use std::collections::HashMap;

use crate::block::definition::BlockType;
use crate::block::error::RegistryError;

/// Authoritative table of every loaded block type, keyed both by numeric
/// id and by symbolic name. Built incrementally from the base source and
/// any mod sources; immutable once loading finishes. `add` is the only
/// mutator.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    // slab in insertion order; overridden entries leave a hole
    slots: Vec<Option<BlockType>>,
    by_id: [Option<usize>; 256],
    by_name: HashMap<String, usize>,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_id: [None; 256],
            by_name: HashMap::new(),
        }
    }

    /// Existence check for `block` without mutating anything: the dry-run
    /// half of [`add`](Self::add), usable standalone for pre-validation.
    pub fn check(&self, block: &BlockType) -> Result<(), RegistryError> {
        if self.by_id[block.id as usize].is_some() {
            return Err(RegistryError::DuplicateId(block.id));
        }
        if self.by_name.contains_key(&block.name) {
            return Err(RegistryError::DuplicateName(block.name.clone()));
        }
        Ok(())
    }

    /// Register `block`. Without replace permission a collision on either
    /// key is rejected and the registry is left untouched. With it, the
    /// prior entries under both keys are removed first; the id and the
    /// name may each evict a different existing entry.
    pub fn add(&mut self, block: BlockType) -> Result<(), RegistryError> {
        if block.replace {
            self.evict_id(block.id);
            self.evict_name(&block.name);
        } else {
            self.check(&block)?;
        }

        let slot = self.slots.len();
        self.by_id[block.id as usize] = Some(slot);
        self.by_name.insert(block.name.clone(), slot);
        self.slots.push(Some(block));
        Ok(())
    }

    fn evict_id(&mut self, id: u8) {
        if let Some(slot) = self.by_id[id as usize].take() {
            if let Some(old) = self.slots[slot].take() {
                if self.by_name.get(&old.name) == Some(&slot) {
                    self.by_name.remove(&old.name);
                }
            }
        }
    }

    fn evict_name(&mut self, name: &str) {
        if let Some(slot) = self.by_name.remove(name) {
            if let Some(old) = self.slots[slot].take() {
                if self.by_id[old.id as usize] == Some(slot) {
                    self.by_id[old.id as usize] = None;
                }
            }
        }
    }

    pub fn get_by_id(&self, id: u8) -> Option<&BlockType> {
        self.by_id[id as usize].and_then(|slot| self.slots[slot].as_ref())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&BlockType> {
        self.by_name.get(name).and_then(|&slot| self.slots[slot].as_ref())
    }

    pub fn id_for_name(&self, name: &str) -> Option<u8> {
        self.get_by_name(name).map(|block| block.id)
    }

    /// Live entries in the order they were inserted. A replacement sits at
    /// its own insertion position, not the position of what it replaced.
    pub fn iter(&self) -> impl Iterator<Item = &BlockType> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        // names are unique per live entry, so this counts live entries
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::block::atlas::TileIndex;
    use crate::block::definition::{Appearance, BlockFlags, TileRules};

    fn block(id: u8, name: &str, replace: bool) -> BlockType {
        BlockType {
            id,
            name: name.to_string(),
            display_name: name.to_string(),
            map_color: None,
            flags: BlockFlags::default(),
            appearance: Appearance::Tiled(TileRules::uniform(TileIndex::from_index(id))),
            extra: HashMap::new(),
            replace,
        }
    }

    #[test]
    fn test_lookup_by_both_keys() {
        let mut registry = BlockRegistry::new();
        registry.add(block(5, "STONE", false)).unwrap();

        assert_eq!(registry.get_by_id(5).unwrap().name, "STONE");
        assert_eq!(registry.get_by_name("STONE").unwrap().id, 5);
        assert_eq!(registry.id_for_name("STONE"), Some(5));
        assert!(registry.get_by_id(6).is_none());
        assert!(registry.get_by_name("DIRT").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = BlockRegistry::new();
        registry.add(block(5, "STONE", false)).unwrap();

        let err = registry.add(block(5, "BASALT", false)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId(5));

        // the original entry is unchanged
        assert_eq!(registry.get_by_id(5).unwrap().name, "STONE");
        assert!(registry.get_by_name("BASALT").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = BlockRegistry::new();
        registry.add(block(5, "STONE", false)).unwrap();

        let err = registry.add(block(6, "STONE", false)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("STONE".to_string()));
        assert!(registry.get_by_id(6).is_none());
    }

    #[test]
    fn test_check_does_not_mutate() {
        let mut registry = BlockRegistry::new();
        registry.add(block(5, "STONE", false)).unwrap();

        assert!(registry.check(&block(5, "BASALT", false)).is_err());
        assert!(registry.check(&block(6, "BASALT", false)).is_ok());
        // the successful check admitted nothing
        assert!(registry.get_by_id(6).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_override_replaces_both_keys() {
        let mut registry = BlockRegistry::new();
        registry.add(block(5, "STONE", false)).unwrap();

        let mut replacement = block(5, "STONE", true);
        replacement.display_name = "Polished Stone".to_string();
        registry.add(replacement).unwrap();

        let by_id = registry.get_by_id(5).unwrap();
        let by_name = registry.get_by_name("STONE").unwrap();
        assert_eq!(by_id.display_name, "Polished Stone");
        assert_eq!(by_name.display_name, "Polished Stone");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_override_evicts_two_distinct_entries() {
        let mut registry = BlockRegistry::new();
        registry.add(block(5, "STONE", false)).unwrap();
        registry.add(block(7, "MARBLE", false)).unwrap();

        // same id as STONE, same name as MARBLE: both must go
        registry.add(block(5, "MARBLE", true)).unwrap();

        assert_eq!(registry.get_by_id(5).unwrap().name, "MARBLE");
        assert_eq!(registry.get_by_name("MARBLE").unwrap().id, 5);
        assert!(registry.get_by_id(7).is_none());
        assert!(registry.get_by_name("STONE").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_order_after_override() {
        let mut registry = BlockRegistry::new();
        registry.add(block(1, "A", false)).unwrap();
        registry.add(block(10, "B", false)).unwrap();
        registry.add(block(3, "C", false)).unwrap();

        registry.add(block(10, "B", true)).unwrap();

        let order: Vec<&str> = registry.iter().map(|b| b.name.as_str()).collect();
        // the replacement appears at its own insertion position
        assert_eq!(order, vec!["A", "C", "B"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_override_into_empty_slot() {
        let mut registry = BlockRegistry::new();
        registry.add(block(9, "NEW", true)).unwrap();
        assert_eq!(registry.get_by_id(9).unwrap().name, "NEW");
    }
}
