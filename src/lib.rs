#![forbid(unsafe_code)]
//! Escala — équipe, turnos et disponibilités, stockés dans un fichier local.
//!
//! - Heures locales naïves `HH:MM`, dates ISO `YYYY-MM-DD`, aucun fuseau.
//! - Moteur de disponibilité pur : l'appelant fournit l'instantané.
//! - Dépôt JSON atomique ; suppression en cascade personne -> shifts.

pub mod availability;
pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod planner;
pub mod query;
pub mod storage;
pub mod time;

pub use availability::{
    availability_percentage, available_people, busy_people, check_availability, partition,
    AvailabilityCheck, AvailabilityReport, AvailabilityStatus, Stats,
};
pub use calendar::{day_name, week_dates, DateError, Locale};
pub use model::{Person, PersonId, Roster, Shift, ShiftId};
pub use planner::{PlanError, Planner, ShiftRequest};
pub use query::{shifts_for_date, shifts_for_date_range, shifts_for_person};
#[cfg(feature = "serde")]
pub use storage::JsonStorage;
pub use storage::{MemoryStorage, PersonRemoval, Storage};
pub use time::{overlaps, validate_shift_times, TimePreset};
