use super::constraints::{already_working_today, ConstraintState};
use super::{DutyRules, ScheduleError, ScheduleOutcome, Violation};
use crate::model::{DayAssignment, DoctorId, DutyKind, Roster, RosterConfig};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

/// Génère le planning d'un mois complet en une passe gloutonne.
///
/// Chaque jour propose les créneaux dans l'ordre fixe New GGH, Old GGH,
/// RICU, plus un second RICU les jours doublés. Un créneau sans médecin
/// éligible reste vide et produit une [`Violation`] ; aucun retour en
/// arrière n'est tenté. L'aléa (tirage des jours doublés, départage des
/// ex aequo) vient du générateur injecté, ce qui rend les appels
/// reproductibles avec une graine fixe.
pub fn generate<R: Rng>(
    doctors: &[DoctorId],
    config: RosterConfig,
    rules: DutyRules,
    rng: &mut R,
) -> Result<ScheduleOutcome, ScheduleError> {
    if config.days_in_month == 0 || config.days_in_month > 31 {
        return Err(ScheduleError::InvalidDaysInMonth(config.days_in_month));
    }
    if config.ricu_double_days > config.days_in_month {
        return Err(ScheduleError::TooManyDoubleDays {
            requested: config.ricu_double_days,
            days_in_month: config.days_in_month,
        });
    }
    ensure_unique(doctors)?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        days = config.days_in_month,
        doubles = config.ricu_double_days,
        doctors = doctors.len(),
        "generating roster"
    );

    let double_days = draw_double_days(config, rng);
    let mut state = ConstraintState::new(doctors);
    let mut violations = Vec::new();
    let mut days = Vec::with_capacity(config.days_in_month as usize);

    for day in 1..=config.days_in_month {
        let mut assignment = DayAssignment::empty(day);

        let mut slots = vec![DutyKind::NewGgh, DutyKind::OldGgh, DutyKind::Ricu];
        if double_days.contains(&day) {
            slots.push(DutyKind::Ricu);
        }

        for kind in slots {
            let mut eligible: Vec<&DoctorId> = doctors
                .iter()
                .filter(|doc| !state.cap_reached(doc, &rules))
                .filter(|doc| !state.rest_violated(doc, day, &rules))
                .filter(|doc| !already_working_today(doc, &assignment))
                .collect();

            if eligible.is_empty() {
                #[cfg(feature = "logging")]
                tracing::warn!(day, kind = %kind, "no eligible doctor");
                violations.push(Violation::UnfillableSlot { day, kind });
                continue;
            }

            // Mélange d'abord, tri stable par charge ensuite : les ex aequo
            // restent dans un ordre aléatoire.
            eligible.shuffle(rng);
            eligible.sort_by_key(|doc| state.duty_count(doc));

            let chosen = eligible[0].clone();
            assignment.assign(kind, chosen.clone());
            state.record(&chosen, day);
        }

        days.push(assignment);
    }

    for doc in doctors {
        let count = state.duty_count(doc);
        if count < rules.min_duties {
            violations.push(Violation::BelowMinimum {
                doctor: doc.clone(),
                count,
                minimum: rules.min_duties,
            });
        }
    }

    let duty_counts: BTreeMap<DoctorId, u32> = doctors
        .iter()
        .map(|doc| (doc.clone(), state.duty_count(doc)))
        .collect();

    Ok(ScheduleOutcome {
        roster: Roster { days },
        duty_counts,
        violations,
    })
}

/// Tire `ricu_double_days` jours distincts uniformément dans le mois.
/// Termine toujours : le nombre demandé est validé contre la taille du mois.
fn draw_double_days<R: Rng>(config: RosterConfig, rng: &mut R) -> HashSet<u32> {
    let mut days = HashSet::new();
    while (days.len() as u32) < config.ricu_double_days {
        days.insert(rng.random_range(1..=config.days_in_month));
    }
    days
}

fn ensure_unique(doctors: &[DoctorId]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::new();
    for doc in doctors {
        if !seen.insert(doc) {
            return Err(ScheduleError::DuplicateDoctor(doc.clone()));
        }
    }
    Ok(())
}
