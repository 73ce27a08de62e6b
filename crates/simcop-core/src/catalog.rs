use uuid::Uuid;

use crate::models::{SpecialtyCatalogEntry, SpecialtyCategory};

/// A fixed `specialty_catalog` row. Ids are minted when the seed is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialtySeed {
    pub code: &'static str,
    pub name: &'static str,
    pub category: SpecialtyCategory,
    pub description: &'static str,
}

pub const SPECIALTY_SEEDS: [SpecialtySeed; 3] = [
    SpecialtySeed {
        code: "11B",
        name: "Infantería",
        category: SpecialtyCategory::ProfessionalSoldiers,
        description: "Especialidad de infantería básica",
    },
    SpecialtySeed {
        code: "19D",
        name: "Caballería Blindada",
        category: SpecialtyCategory::ProfessionalSoldiers,
        description: "Operador de vehículos blindados",
    },
    SpecialtySeed {
        code: "31B",
        name: "Policía Militar",
        category: SpecialtyCategory::ProfessionalSoldiers,
        description: "Policía militar y seguridad",
    },
];

impl SpecialtySeed {
    #[must_use]
    pub fn to_entry(&self) -> SpecialtyCatalogEntry {
        SpecialtyCatalogEntry {
            id: Uuid::now_v7(),
            code: self.code.to_string(),
            name: self.name.to_string(),
            category: self.category,
            description: Some(self.description.to_string()),
        }
    }

    /// True when `entry` carries this seed's fixed values, whatever its id.
    #[must_use]
    pub fn matches(&self, entry: &SpecialtyCatalogEntry) -> bool {
        entry.code == self.code
            && entry.name == self.name
            && entry.category == self.category
            && entry.description.as_deref() == Some(self.description)
    }
}

#[must_use]
pub fn seed_entries() -> Vec<SpecialtyCatalogEntry> {
    SPECIALTY_SEEDS.iter().map(SpecialtySeed::to_entry).collect()
}
