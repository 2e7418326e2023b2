use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant fort pour un médecin du tableau de service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoctorId(String);

impl DoctorId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Vrai si l'identifiant est vide (cellule non renseignée d'un planning édité).
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type de garde journalière.
///
/// `NewGgh` et `OldGgh` sont des créneaux à occupant unique ; `Ricu` accepte
/// un deuxième occupant les jours doublés.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DutyKind {
    #[serde(rename = "New GGH")]
    NewGgh,
    #[serde(rename = "Old GGH")]
    OldGgh,
    #[serde(rename = "RICU")]
    Ricu,
}

impl DutyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyKind::NewGgh => "New GGH",
            DutyKind::OldGgh => "Old GGH",
            DutyKind::Ricu => "RICU",
        }
    }
}

impl fmt::Display for DutyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupation des créneaux d'un jour (format de stockage d'origine).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignments {
    #[serde(rename = "New GGH", default, skip_serializing_if = "Option::is_none")]
    pub new_ggh: Option<DoctorId>,
    #[serde(rename = "Old GGH", default, skip_serializing_if = "Option::is_none")]
    pub old_ggh: Option<DoctorId>,
    #[serde(rename = "RICU", default)]
    pub ricu: Vec<DoctorId>,
}

/// Un jour calendaire (1-based) et ses gardes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    pub day: u32,
    pub assignments: SlotAssignments,
}

impl DayAssignment {
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            assignments: SlotAssignments::default(),
        }
    }

    /// Itère sur chaque occupation du jour (une entrée par créneau occupé,
    /// identifiants vides ignorés).
    pub fn doctors_on_duty(&self) -> impl Iterator<Item = &DoctorId> {
        self.assignments
            .new_ggh
            .iter()
            .chain(self.assignments.old_ggh.iter())
            .chain(self.assignments.ricu.iter())
            .filter(|doc| !doc.is_blank())
    }

    /// Place `doctor` dans le créneau `kind` ; en RICU l'occupant est ajouté
    /// à la liste.
    pub fn assign(&mut self, kind: DutyKind, doctor: DoctorId) {
        match kind {
            DutyKind::NewGgh => self.assignments.new_ggh = Some(doctor),
            DutyKind::OldGgh => self.assignments.old_ggh = Some(doctor),
            DutyKind::Ricu => self.assignments.ricu.push(doctor),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.doctors_on_duty().next().is_none()
    }
}

/// Planning complet d'un mois : un `DayAssignment` par jour, 1..=jours du
/// mois, croissant, sans trou.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub days: Vec<DayAssignment>,
}

impl Roster {
    /// Planning vide prêt à l'édition manuelle.
    pub fn empty(days_in_month: u32) -> Self {
        Self {
            days: (1..=days_in_month).map(DayAssignment::empty).collect(),
        }
    }

    pub fn day(&self, day: u32) -> Option<&DayAssignment> {
        self.days.iter().find(|d| d.day == day)
    }
    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayAssignment> {
        self.days.iter_mut().find(|d| d.day == day)
    }
    pub fn len(&self) -> usize {
        self.days.len()
    }
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Paramètres de génération d'un mois, conservés avec le planning pour
/// pouvoir le regénérer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterConfig {
    pub days_in_month: u32,
    pub ricu_double_days: u32,
}
