use super::constraints::within_rest_window;
use super::{DutyRules, EligibilityPolicy};
use crate::model::{DoctorId, Roster};
use std::collections::HashSet;

/// Médecins encore assignables au créneau en cours d'édition.
///
/// `current_slot` contient le ou les occupants actuels de ce créneau
/// précis : ils sont retirés du calcul d'occupation du jour pour que
/// l'éditeur puisse re-proposer la valeur courante. Le repos, lui, n'est
/// jamais levé : les autres gardes proches d'un occupant courant comptent.
///
/// Contrairement à la génération, le contrôle de repos est symétrique :
/// toute garde à moins de `rest_gap_days` du jour cible, avant ou après,
/// rend le médecin inéligible. Aucune mutation ; l'appel est idempotent et
/// peut être répété à chaque rendu de l'éditeur. Le plafond de gardes n'est
/// appliqué que si `policy.enforce_duty_cap` est vrai.
pub fn eligible_doctors(
    doctors: &[DoctorId],
    roster: &Roster,
    target_day: u32,
    current_slot: &[DoctorId],
    rules: DutyRules,
    policy: EligibilityPolicy,
) -> Vec<DoctorId> {
    let mut busy_today: HashSet<&DoctorId> = HashSet::new();
    if let Some(assignment) = roster.day(target_day) {
        for doc in assignment.doctors_on_duty() {
            if !current_slot.contains(doc) {
                busy_today.insert(doc);
            }
        }
    }

    let mut resting: HashSet<&DoctorId> = HashSet::new();
    for assignment in &roster.days {
        if assignment.day == target_day {
            continue;
        }
        if within_rest_window(assignment.day, target_day, rules.rest_gap_days) {
            resting.extend(assignment.doctors_on_duty());
        }
    }

    let over_cap = if policy.enforce_duty_cap {
        doctors_over_cap(doctors, roster, current_slot, &rules)
    } else {
        HashSet::new()
    };

    doctors
        .iter()
        .filter(|doc| !busy_today.contains(doc))
        .filter(|doc| !resting.contains(doc))
        .filter(|doc| !over_cap.contains(doc))
        .cloned()
        .collect()
}

/// Médecins au plafond sur l'ensemble du mois, l'occupation du créneau
/// édité étant décomptée pour ne pas exclure sa valeur courante.
fn doctors_over_cap<'a>(
    doctors: &'a [DoctorId],
    roster: &Roster,
    current_slot: &[DoctorId],
    rules: &DutyRules,
) -> HashSet<&'a DoctorId> {
    let mut counts = crate::stats::duty_counts(doctors, roster);
    for doc in current_slot {
        if let Some(count) = counts.get_mut(doc) {
            *count = count.saturating_sub(1);
        }
    }
    doctors
        .iter()
        .filter(|doc| counts.get(*doc).copied().unwrap_or(0) >= rules.max_duties)
        .collect()
}
