//! Moteur de contraintes du tableau de garde.
//!
//! Trois opérations, toutes sans état retenu entre les appels :
//! - [`generate`] : un mois complet en une passe gloutonne ;
//! - [`eligible_doctors`] : candidats légaux pour l'édition d'un créneau ;
//! - [`validate_roster`] : audit d'un planning existant.

mod constraints;
mod eligibility;
mod generate;
mod types;
mod validate;

pub use eligibility::eligible_doctors;
pub use generate::generate;
pub use types::{DutyRules, EligibilityPolicy, ScheduleError, ScheduleOutcome, Violation};
pub use validate::validate_roster;
