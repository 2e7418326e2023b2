#![forbid(unsafe_code)]
//! Dutyroster — moteur de tableaux de garde hospitaliers mensuels (sans BD).
//!
//! - Génération gloutonne d'un mois complet (New GGH / Old GGH / RICU).
//! - Requête d'éligibilité pour l'édition manuelle d'un créneau.
//! - Manquements consignés en liste, jamais levés en erreur.
//! - Stockage fichiers (JSON/CSV) ; aléa injectable pour des tests reproductibles.

pub mod io;
pub mod model;
pub mod scheduler;
pub mod stats;
pub mod storage;

pub use model::{DayAssignment, DoctorId, DutyKind, Roster, RosterConfig, SlotAssignments};
pub use scheduler::{
    eligible_doctors, generate, validate_roster, DutyRules, EligibilityPolicy, ScheduleError,
    ScheduleOutcome, Violation,
};
pub use stats::duty_counts;
pub use storage::{JsonStorage, ScheduleDocument, ScheduleId, Storage};
