use super::DutyRules;
use crate::model::{DayAssignment, DoctorId};
use std::collections::HashMap;

/// Jour sentinelle « aucune garde antérieure ».
pub(super) const LAST_DUTY_SENTINEL: i64 = -100;

/// État courant par médecin pendant la génération : charge cumulée et jour
/// de la dernière garde. Reconstruit à chaque appel, jamais conservé.
#[derive(Debug, Default)]
pub(super) struct ConstraintState {
    duty_counts: HashMap<DoctorId, u32>,
    last_duty_day: HashMap<DoctorId, i64>,
}

impl ConstraintState {
    pub(super) fn new(doctors: &[DoctorId]) -> Self {
        let mut state = Self::default();
        for doc in doctors {
            state.duty_counts.insert(doc.clone(), 0);
            state.last_duty_day.insert(doc.clone(), LAST_DUTY_SENTINEL);
        }
        state
    }

    pub(super) fn duty_count(&self, doctor: &DoctorId) -> u32 {
        self.duty_counts.get(doctor).copied().unwrap_or(0)
    }

    fn last_duty_day(&self, doctor: &DoctorId) -> i64 {
        self.last_duty_day
            .get(doctor)
            .copied()
            .unwrap_or(LAST_DUTY_SENTINEL)
    }

    pub(super) fn record(&mut self, doctor: &DoctorId, day: u32) {
        *self.duty_counts.entry(doctor.clone()).or_insert(0) += 1;
        self.last_duty_day.insert(doctor.clone(), i64::from(day));
    }

    /// Plafond de gardes atteint.
    pub(super) fn cap_reached(&self, doctor: &DoctorId, rules: &DutyRules) -> bool {
        self.duty_count(doctor) >= rules.max_duties
    }

    /// Repos insuffisant depuis la dernière garde. Contrôle uniquement vers
    /// l'arrière : la génération avance jour par jour, aucune garde future
    /// n'existe encore pour le médecin considéré.
    pub(super) fn rest_violated(&self, doctor: &DoctorId, day: u32, rules: &DutyRules) -> bool {
        i64::from(day) - self.last_duty_day(doctor) < i64::from(rules.rest_gap_days)
    }
}

/// Le médecin occupe déjà un créneau de ce jour.
pub(super) fn already_working_today(doctor: &DoctorId, day: &DayAssignment) -> bool {
    day.doctors_on_duty().any(|doc| doc == doctor)
}

/// Distance symétrique entre deux jours. Utilisée par la requête
/// d'éligibilité et la validation : le planning existe déjà dans les deux
/// directions, contrairement à la génération.
pub(super) fn within_rest_window(day: u32, target_day: u32, rest_gap_days: u32) -> bool {
    day.abs_diff(target_day) < rest_gap_days
}
