use std::fmt;

use bevy::prelude::*;

/// Stable identifier of a menu entry (`1..=6`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct EntryId(pub u8);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One selectable menu item pinned to a cube vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Unique, stable id.
    pub id: EntryId,
    /// Row and panel heading.
    pub label: &'static str,
    /// Info panel body text.
    pub description: &'static str,
    /// Cube vertex, each component `-1` or `+1`.
    pub position: IVec3,
}

/// The fixed menu. Two cube corners, `(1, -1, -1)` and `(-1, 1, 1)`, carry no entry.
pub const MENU_ENTRIES: [MenuEntry; 6] = [
    MenuEntry {
        id: EntryId(1),
        label: "1. Extent",
        description: "GEOSPATIAL ANALYSIS: Total sector coverage confirmed at 98.4%. \
            Boundary fluctuation detected in quadrant 4. Grid integrity remains nominal.",
        position: IVec3::new(1, 1, 1),
    },
    MenuEntry {
        id: EntryId(2),
        label: "2. Condition",
        description: "SYSTEM DIAGNOSTICS: Environmental stability at optimal levels. \
            Atmospheric scrubbers operating at 94% efficiency. Surface mineral density: High.",
        position: IVec3::new(-1, -1, -1),
    },
    MenuEntry {
        id: EntryId(3),
        label: "3. State of Species",
        description: "BIO-INDEX MONITORING: Tracking 4,200+ active genetic markers. \
            Population dynamics show sustainable growth trajectories. Biodiversity stable.",
        position: IVec3::new(1, -1, 1),
    },
    MenuEntry {
        id: EntryId(4),
        label: "4. State of Communities",
        description: "SOCIETAL METRICS: Inter-district connectivity efficiency at 99%. \
            Resource distribution algorithms optimized. Social cohesion index: Positive.",
        position: IVec3::new(-1, -1, 1),
    },
    MenuEntry {
        id: EntryId(5),
        label: "5. Pollution",
        description: "CONTAMINANT ALERT: Particulate matter levels slightly elevated in Sector 7. \
            Purging protocols initiated. Air quality index: Moderate.",
        position: IVec3::new(1, 1, -1),
    },
    MenuEntry {
        id: EntryId(6),
        label: "6. Water Resources",
        description: "HYDROLOGICAL STATUS: Aquifer reserves at 78% capacity. \
            Filtration systems active. H2O purity levels within potable standards (Grade A).",
        position: IVec3::new(-1, 1, -1),
    },
];

/// Read-only view of the menu table, shared by every consumer.
#[derive(Resource, Clone, Copy, Debug)]
pub struct MenuCatalog {
    entries: &'static [MenuEntry],
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self {
            entries: &MENU_ENTRIES,
        }
    }
}

impl MenuCatalog {
    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static MenuEntry> + use<> {
        self.entries.iter()
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&'static MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// `true` if `id` names an entry.
    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// The entry pinned to `corner`, if any.
    pub fn at_corner(&self, corner: IVec3) -> Option<&'static MenuEntry> {
        self.entries.iter().find(|e| e.position == corner)
    }
}

/// Errors raised when writing the hover slot.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// The id does not name any catalog entry.
    #[error("no menu entry with id {0}")]
    UnknownEntry(EntryId),
}

/// Which entry, if any, is currently hovered.
///
/// Written only by [`super::apply_hover_intents`]; read by the flare and
/// overlay systems. `None` after startup.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct HoverState(Option<EntryId>);

impl HoverState {
    /// The hovered id.
    pub fn current(&self) -> Option<EntryId> {
        self.0
    }

    /// Marks `id` hovered. Returns `Ok(false)` if it already was.
    pub fn enter(&mut self, id: EntryId, catalog: &MenuCatalog) -> Result<bool, MenuError> {
        if !catalog.contains(id) {
            return Err(MenuError::UnknownEntry(id));
        }
        if self.0 == Some(id) {
            return Ok(false);
        }
        self.0 = Some(id);
        Ok(true)
    }

    /// Clears the slot. Returns `false` if nothing was hovered.
    pub fn leave(&mut self) -> bool {
        self.0.take().is_some()
    }

    /// The entry matching the hovered id.
    pub fn active_entry(&self, catalog: &MenuCatalog) -> Option<&'static MenuEntry> {
        self.0.and_then(|id| catalog.get(id))
    }
}

/// Pointer request to change [`HoverState`], emitted by the overlay rows.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverIntent {
    /// The pointer entered the row of this entry.
    Enter(EntryId),
    /// The pointer left the hovered row.
    Leave,
}
