//! Core data structures for waste collection records.
//!
//! Defines the two record shapes produced by the reader and the closed
//! categorical types their label columns map into.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Waste Types
// =============================================================================

/// Waste stream a tonnage record belongs to
///
/// The mapping from source labels is total: any label outside the known set
/// becomes [`WasteType::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteType {
    Residual,
    Packaging,
    Glass,
    CommercialGlass,
    Organic,
    PaperAndCardboard,
    CommercialCardboard,
    ConstructionDebris,
    RecyclingCenters,
    UsedClothingBins,
    Batteries,
    DeadAnimals,
    Unrecognized,
}

impl WasteType {
    /// Every waste type, in reporting order
    pub const ALL: [WasteType; 13] = [
        WasteType::Residual,
        WasteType::Packaging,
        WasteType::Glass,
        WasteType::CommercialGlass,
        WasteType::Organic,
        WasteType::PaperAndCardboard,
        WasteType::CommercialCardboard,
        WasteType::ConstructionDebris,
        WasteType::RecyclingCenters,
        WasteType::UsedClothingBins,
        WasteType::Batteries,
        WasteType::DeadAnimals,
        WasteType::Unrecognized,
    ];

    /// Label used for this waste type in the source files
    pub fn label(&self) -> &'static str {
        match self {
            WasteType::Residual => "RESTO",
            WasteType::Packaging => "ENVASES",
            WasteType::Glass => "VIDRIO",
            WasteType::CommercialGlass => "VIDRIO COMERCIAL",
            WasteType::Organic => "ORGANICA",
            WasteType::PaperAndCardboard => "PAPEL-CARTON",
            WasteType::CommercialCardboard => "CARTON COMERCIAL",
            WasteType::ConstructionDebris => "RCD",
            WasteType::RecyclingCenters => "PUNTOS LIMPIOS",
            WasteType::UsedClothingBins => "CONTENEDORES DE ROPA",
            WasteType::Batteries => "PILAS",
            WasteType::DeadAnimals => "ANIMALES MUERTOS",
            WasteType::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Whether the source label matched one of the known waste types
    pub fn is_recognized(&self) -> bool {
        *self != WasteType::Unrecognized
    }
}

impl From<&str> for WasteType {
    fn from(label: &str) -> Self {
        match label {
            "RESTO" => WasteType::Residual,
            "ENVASES" => WasteType::Packaging,
            "VIDRIO" => WasteType::Glass,
            "VIDRIO COMERCIAL" => WasteType::CommercialGlass,
            "ORGANICA" => WasteType::Organic,
            "PAPEL-CARTON" => WasteType::PaperAndCardboard,
            "CARTON COMERCIAL" => WasteType::CommercialCardboard,
            "RCD" => WasteType::ConstructionDebris,
            "PUNTOS LIMPIOS" => WasteType::RecyclingCenters,
            "CONTENEDORES DE ROPA" => WasteType::UsedClothingBins,
            "PILAS" => WasteType::Batteries,
            "ANIMALES MUERTOS" => WasteType::DeadAnimals,
            _ => WasteType::Unrecognized,
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Container Types
// =============================================================================

/// Kind of street-side collection container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    Organic,
    Residual,
    Packaging,
    Glass,
    PaperAndCardboard,
    Unknown,
}

impl ContainerType {
    /// Every container type, in reporting order
    pub const ALL: [ContainerType; 6] = [
        ContainerType::Organic,
        ContainerType::Residual,
        ContainerType::Packaging,
        ContainerType::Glass,
        ContainerType::PaperAndCardboard,
        ContainerType::Unknown,
    ];

    /// Label used for this container type in the source files
    pub fn label(&self) -> &'static str {
        match self {
            ContainerType::Organic => "ORGANICA",
            ContainerType::Residual => "RESTO",
            ContainerType::Packaging => "ENVASES",
            ContainerType::Glass => "VIDRIO",
            ContainerType::PaperAndCardboard => "PAPEL-CARTON",
            ContainerType::Unknown => "UNKNOWN",
        }
    }

    /// Whether the source label matched one of the known container types
    pub fn is_recognized(&self) -> bool {
        *self != ContainerType::Unknown
    }
}

impl From<&str> for ContainerType {
    fn from(label: &str) -> Self {
        match label {
            "ORGANICA" => ContainerType::Organic,
            "RESTO" => ContainerType::Residual,
            "ENVASES" => ContainerType::Packaging,
            "VIDRIO" => ContainerType::Glass,
            "PAPEL-CARTON" => ContainerType::PaperAndCardboard,
            _ => ContainerType::Unknown,
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Records
// =============================================================================

/// Tonnage collected for one waste stream in one district and month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    /// Collection year, kept as it appears in the file
    pub year: String,

    /// Collection month, kept as it appears in the file
    pub month: String,

    /// Operational batch the collection belongs to
    pub batch_id: i32,

    pub waste_type: WasteType,

    pub district_id: i32,

    pub district_name: String,

    /// Collected weight in metric tons
    pub tonnage: f64,
}

/// One entry of the street container inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Code identifying the container site
    pub site_code: String,
    pub container_type: ContainerType,
    pub model: String,
    pub model_description: String,
    /// Number of containers at the site
    pub quantity: i32,
    pub batch_id: i32,
    pub district: String,
    pub neighborhood: String,
    pub street_type: String,
    pub street_name: String,
    pub street_number: String,
    /// Full postal address
    pub address: String,
}
