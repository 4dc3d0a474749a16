use crate::model::{Person, PersonId, ShiftId};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AvailabilityStatus {
    Available,
    Busy,
    /// Jamais produit par le moteur ; réservé aux appelants (personne inconnue...).
    Unknown,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Unknown => "unknown",
        }
    }
}

/// Résultat d'une vérification de disponibilité (dérivé, jamais persisté).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AvailabilityCheck {
    pub person_id: PersonId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: AvailabilityStatus,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub conflicting_shift_id: Option<ShiftId>,
}

impl AvailabilityCheck {
    pub fn is_available(&self) -> bool {
        self.status == AvailabilityStatus::Available
    }
    pub fn is_busy(&self) -> bool {
        self.status == AvailabilityStatus::Busy
    }
}

/// Partition de l'équipe pour une fenêtre donnée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityReport<'a> {
    pub available: Vec<&'a Person>,
    pub busy: Vec<&'a Person>,
    pub percentage: u32,
}

/// Compteurs du tableau de bord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Stats {
    pub total_people: usize,
    pub total_shifts: usize,
    pub shifts_this_week: usize,
}
