use crate::model::{DoctorId, Roster};
use crate::storage::ScheduleDocument;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import du tableau de service depuis CSV : header `name`
pub fn import_doctors_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<DoctorId>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out: Vec<DoctorId> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid doctor row (empty)");
        }
        let id = DoctorId::new(name);
        if out.contains(&id) {
            bail!("duplicate doctor: {name}");
        }
        out.push(id);
    }
    Ok(out)
}

/// Export CSV du planning : header `Day,New GGH,Old GGH,RICU`,
/// les occupants RICU joints par ` & `.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["Day", "New GGH", "Old GGH", "RICU"])?;
    for day in &roster.days {
        let ricu = day
            .assignments
            .ricu
            .iter()
            .map(|doc| doc.as_str())
            .collect::<Vec<_>>()
            .join(" & ");
        let day_number = day.day.to_string();
        w.write_record([
            day_number.as_str(),
            day.assignments
                .new_ggh
                .as_ref()
                .map(|doc| doc.as_str())
                .unwrap_or(""),
            day.assignments
                .old_ggh
                .as_ref()
                .map(|doc| doc.as_str())
                .unwrap_or(""),
            ricu.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON d'un document complet (jolie mise en forme)
pub fn export_document_json<P: AsRef<Path>>(path: P, doc: &ScheduleDocument) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)?;
    Ok(())
}
