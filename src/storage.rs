use crate::model::{Roster, RosterConfig};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Identifiant fort pour un document de planning persisté
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Document persisté : le planning d'un mois et sa configuration de
/// génération (pour pouvoir regénérer à l'identique de paramètres).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub id: ScheduleId,
    /// Étiquette du mois, p. ex. `2026-08`.
    pub month: String,
    pub config: RosterConfig,
    pub roster: Roster,
}

impl ScheduleDocument {
    pub fn new<M: Into<String>>(month: M, config: RosterConfig, roster: Roster) -> Self {
        Self {
            id: ScheduleId::random(),
            month: month.into(),
            config,
            roster,
        }
    }
}

pub trait Storage {
    /// Charge un document depuis un support.
    fn load(&self) -> anyhow::Result<ScheduleDocument>;
    /// Sauvegarde de manière atomique.
    fn save(&self, doc: &ScheduleDocument) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<ScheduleDocument> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let doc: ScheduleDocument =
            serde_json::from_slice(&data).with_context(|| "parsing schedule.json")?;
        Ok(doc)
    }

    fn save(&self, doc: &ScheduleDocument) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(doc)?;
        let mut tmp =
            NamedTempFile::new_in(self.path.parent().unwrap_or_else(|| Path::new(".")))
                .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
