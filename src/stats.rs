use crate::model::{DoctorId, Roster};
use std::collections::BTreeMap;

/// Nombre de gardes par médecin sur l'ensemble du planning.
///
/// Chaque médecin du tableau de service démarre à zéro ; un identifiant
/// présent dans le planning mais absent du tableau est compté sous sa
/// propre clé. Une occupation = une garde, un médecin doublement inscrit
/// le même jour compte donc deux fois.
pub fn duty_counts(doctors: &[DoctorId], roster: &Roster) -> BTreeMap<DoctorId, u32> {
    let mut counts: BTreeMap<DoctorId, u32> =
        doctors.iter().map(|doc| (doc.clone(), 0)).collect();
    for assignment in &roster.days {
        for doc in assignment.doctors_on_duty() {
            *counts.entry(doc.clone()).or_insert(0) += 1;
        }
    }
    counts
}
