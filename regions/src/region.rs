use std::collections::HashSet;

use crate::error::{RegionsError, Result};

/// A selectable region. Immutable once the list is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: u32,
    pub label: String,
}

impl Region {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

const TV2_REGIONS: [(u32, &str); 11] = [
    (1, "TV2 Lorry"),
    (2, "TV2 Nordsjælland"),
    (3, "TV2 Fyn"),
    (4, "TV2 Bornholm"),
    (5, "TV2 Nordjylland"),
    (6, "TV2 Midtjylland"),
    (7, "TV2 Sønderjylland"),
    (8, "TV2 Anholt"),
    (9, "TV2 Samsø"),
    (10, "TV2 Sydfynske Øhav"),
    (11, "TV2 Mallorca"),
];

/// Ordered, non-empty list of regions with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionList {
    items: Vec<Region>,
}

impl RegionList {
    pub fn new(items: impl IntoIterator<Item = Region>) -> Result<Self> {
        let items: Vec<Region> = items.into_iter().collect();
        if items.is_empty() {
            return Err(RegionsError::EmptyRegionList);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for region in &items {
            if !seen.insert(region.id) {
                return Err(RegionsError::DuplicateRegion(region.id));
            }
        }

        Ok(Self { items })
    }

    /// The built-in list of TV2 regions.
    pub fn tv2() -> Self {
        Self {
            items: TV2_REGIONS
                .iter()
                .map(|(id, label)| Region::new(*id, *label))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> &Region {
        &self.items[0]
    }

    pub fn get(&self, id: u32) -> Option<&Region> {
        self.items.iter().find(|region| region.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn label_of(&self, id: u32) -> Option<&str> {
        self.get(id).map(|region| region.label.as_str())
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|region| region.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Region> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a RegionList {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
