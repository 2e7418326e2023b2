use super::constraints::within_rest_window;
use super::{DutyRules, Violation};
use crate::model::{DoctorId, Roster};
use std::collections::HashSet;

/// Audit complet d'un planning existant (chargé ou édité à la main).
///
/// Revérifie les invariants que la génération garantit d'elle-même :
/// unicité des occupants d'un jour, repos minimal, plafond de gardes,
/// occupation RICU bornée à deux, identifiants connus du tableau de
/// service. Les manquements sont accumulés, jamais levés en erreur.
pub fn validate_roster(doctors: &[DoctorId], roster: &Roster, rules: DutyRules) -> Vec<Violation> {
    let mut out = Vec::new();
    let known: HashSet<&DoctorId> = doctors.iter().collect();

    for assignment in &roster.days {
        let mut seen: HashSet<&DoctorId> = HashSet::new();
        for doc in assignment.doctors_on_duty() {
            if !seen.insert(doc) {
                out.push(Violation::DoubleBooked {
                    day: assignment.day,
                    doctor: doc.clone(),
                });
            }
            if !known.contains(doc) {
                out.push(Violation::UnknownDoctor {
                    day: assignment.day,
                    doctor: doc.clone(),
                });
            }
        }

        let ricu_occupied = assignment
            .assignments
            .ricu
            .iter()
            .filter(|doc| !doc.is_blank())
            .count();
        if ricu_occupied > 2 {
            out.push(Violation::RicuOverfull {
                day: assignment.day,
                count: ricu_occupied,
            });
        }
    }

    for doc in doctors {
        let duty_days: Vec<u32> = roster
            .days
            .iter()
            .filter(|a| a.doctors_on_duty().any(|d| d == doc))
            .map(|a| a.day)
            .collect();

        // Jours croissants par construction : les paires successives
        // suffisent à détecter tout repos insuffisant.
        for pair in duty_days.windows(2) {
            if within_rest_window(pair[0], pair[1], rules.rest_gap_days) {
                out.push(Violation::RestBroken {
                    doctor: doc.clone(),
                    first_day: pair[0],
                    second_day: pair[1],
                });
            }
        }

        let count = duty_days.len() as u32;
        if count > rules.max_duties {
            out.push(Violation::OverCap {
                doctor: doc.clone(),
                count,
                maximum: rules.max_duties,
            });
        }
    }

    out
}
