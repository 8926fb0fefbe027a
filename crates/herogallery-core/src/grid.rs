//! Grid projection.
//!
//! The grid is rebuilt in full from the catalog on every render; there is
//! no diffing. Tile images start from the record's hint and fall back to
//! the placeholder when disabled or when the surface reports an error.

use crate::image::{display_slot, ImageSlot};
use crate::record::Record;

/// One clickable tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Position in the catalog; activation opens the modal at this index
    pub index: usize,
    pub name: String,
    pub image: ImageSlot,
}

impl Tile {
    pub fn alt(&self) -> &str {
        &self.name
    }
}

/// Project the catalog into tiles, in catalog order.
pub fn project_tiles(catalog: &[Record], images_enabled: bool, placeholder: &str) -> Vec<Tile> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, record)| Tile {
            index,
            name: record.name.clone(),
            image: display_slot(record, images_enabled, placeholder),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PH: &str = "https://ph.test/p.png";

    fn catalog() -> Vec<Record> {
        vec![
            Record {
                name: "Miya".to_string(),
                image: "https://img.test/miya.png".to_string(),
                ..Record::default()
            },
            Record {
                name: "Nana".to_string(),
                image: "https://img.test/nana.png".to_string(),
                ..Record::default()
            },
        ]
    }

    #[test]
    fn test_tiles_follow_catalog_order() {
        let tiles = project_tiles(&catalog(), true, PH);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].index, 1);
        assert_eq!(tiles[1].alt(), "Nana");
        assert_eq!(tiles[0].image.src(), "https://img.test/miya.png");
    }

    #[test]
    fn test_disabled_images_use_placeholder() {
        let tiles = project_tiles(&catalog(), false, PH);
        assert!(tiles.iter().all(|t| t.image.src() == PH));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(project_tiles(&[], true, PH).is_empty());
    }
}
