use crate::model::{DoctorId, DutyKind, Roster};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Règles de garde appliquées à la génération et à la validation.
#[derive(Debug, Clone, Copy)]
pub struct DutyRules {
    pub max_duties: u32,
    pub min_duties: u32,
    pub rest_gap_days: u32,
}

impl Default for DutyRules {
    fn default() -> Self {
        Self {
            max_duties: 5,
            min_duties: 4,
            rest_gap_days: 4,
        }
    }
}

/// Politique de la requête d'éligibilité pendant l'édition manuelle.
///
/// Le plafond de gardes n'est pas appliqué par défaut : l'éditeur laisse
/// un administrateur dépasser le plafond en connaissance de cause.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityPolicy {
    pub enforce_duty_cap: bool,
}

/// Règle non satisfaite, consignée sans interrompre le traitement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Aucun médecin éligible pour un créneau pendant la génération.
    UnfillableSlot { day: u32, kind: DutyKind },
    /// Médecin sous le minimum de gardes en fin de mois (consultatif).
    BelowMinimum {
        doctor: DoctorId,
        count: u32,
        minimum: u32,
    },
    /// Même médecin sur deux créneaux du même jour.
    DoubleBooked { day: u32, doctor: DoctorId },
    /// Deux gardes trop rapprochées pour un même médecin.
    RestBroken {
        doctor: DoctorId,
        first_day: u32,
        second_day: u32,
    },
    /// Plafond de gardes dépassé.
    OverCap {
        doctor: DoctorId,
        count: u32,
        maximum: u32,
    },
    /// Plus de deux occupants en RICU.
    RicuOverfull { day: u32, count: usize },
    /// Identifiant absent du tableau de service.
    UnknownDoctor { day: u32, doctor: DoctorId },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnfillableSlot { day, kind } => {
                write!(f, "Day {day}: No eligible doctor for {kind}")
            }
            Violation::BelowMinimum {
                doctor,
                count,
                minimum,
            } => {
                write!(f, "Doctor {doctor} has less than {minimum} duties ({count})")
            }
            Violation::DoubleBooked { day, doctor } => {
                write!(f, "Day {day}: Doctor {doctor} assigned to more than one slot")
            }
            Violation::RestBroken {
                doctor,
                first_day,
                second_day,
            } => {
                write!(
                    f,
                    "Doctor {doctor} has insufficient rest between day {first_day} and day {second_day}"
                )
            }
            Violation::OverCap {
                doctor,
                count,
                maximum,
            } => {
                write!(f, "Doctor {doctor} has more than {maximum} duties ({count})")
            }
            Violation::RicuOverfull { day, count } => {
                write!(f, "Day {day}: RICU has {count} doctors assigned")
            }
            Violation::UnknownDoctor { day, doctor } => {
                write!(f, "Day {day}: Unknown doctor {doctor}")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("days in month must be within 1..=31, got {0}")]
    InvalidDaysInMonth(u32),
    #[error("{requested} RICU double days requested for a {days_in_month}-day month")]
    TooManyDoubleDays { requested: u32, days_in_month: u32 },
    #[error("duplicate doctor in roster: {0}")]
    DuplicateDoctor(DoctorId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Résultat complet d'une génération : planning (éventuellement partiel),
/// charge par médecin et règles non satisfaites.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    pub roster: Roster,
    pub duty_counts: BTreeMap<DoctorId, u32>,
    pub violations: Vec<Violation>,
}

impl ScheduleOutcome {
    /// La génération est un succès ssi aucune règle n'a été enfreinte.
    pub fn success(&self) -> bool {
        self.violations.is_empty()
    }
}
