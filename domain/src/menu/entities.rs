//! Menu entities
//!
//! Only the sections that carry orderable items are modelled. The backend
//! also sends deals and ingredients; those are ignored.

use serde::{Deserialize, Serialize};

/// One orderable item, combo or extra
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualItems {
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub combos: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Upsells {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Response of `GET /menus`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default)]
    pub virtual_items: VirtualItems,
    #[serde(default)]
    pub upsells: Upsells,
}

impl Menu {
    /// Titled sections in display order, empty ones skipped
    pub fn sections(&self) -> Vec<(&'static str, &[MenuItem])> {
        [
            ("Items", self.virtual_items.items.as_slice()),
            ("Combos", self.virtual_items.combos.as_slice()),
            ("Extras", self.upsells.items.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections().is_empty()
    }
}
