#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use dutyroster::{
    eligible_doctors, generate, io,
    model::{DoctorId, Roster, RosterConfig},
    scheduler::{DutyRules, EligibilityPolicy, ScheduleOutcome},
    stats::duty_counts,
    storage::{JsonStorage, ScheduleDocument, Storage},
    validate_roster,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de tableaux de garde (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning
    #[arg(long, global = true, default_value = "schedule.json")]
    schedule: String,

    /// Tableau de service (CSV, header `name`)
    #[arg(long, global = true, default_value = "doctors.csv")]
    doctors: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning d'un mois
    Generate {
        /// Étiquette du mois, p. ex. 2026-08
        #[arg(long)]
        month: String,
        /// Nombre de jours à double garde RICU
        #[arg(long, default_value_t = 0)]
        ricu_double_days: u32,
        /// Graine du générateur aléatoire (reproductible)
        #[arg(long)]
        seed: Option<u64>,
        /// Sauvegarder même en cas de manquements
        #[arg(long)]
        force: bool,
    },

    /// Regénérer le planning stocké avec ses paramètres d'origine
    Regenerate {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        force: bool,
    },

    /// Créer un planning vide prêt à l'édition manuelle
    Init {
        #[arg(long)]
        month: String,
        #[arg(long, default_value_t = 0)]
        ricu_double_days: u32,
    },

    /// Vérifier les invariants du planning stocké
    Check,

    /// Lister les médecins assignables à un créneau d'un jour donné
    Eligible {
        #[arg(long)]
        day: u32,
        /// Occupants actuels du créneau édité, "a,b"
        #[arg(long)]
        slot_occupants: Option<String>,
        /// Applique aussi le plafond de gardes
        #[arg(long)]
        enforce_cap: bool,
    },

    /// Charge par médecin sur le planning stocké
    Stats,

    /// Exporter le planning stocké
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.schedule)?;

    let code = match cli.cmd {
        Commands::Generate {
            month,
            ricu_double_days,
            seed,
            force,
        } => {
            let config = RosterConfig {
                days_in_month: days_in_month(&month)?,
                ricu_double_days,
            };
            let doctors = io::import_doctors_csv(&cli.doctors)
                .with_context(|| format!("loading doctor roster {}", cli.doctors))?;
            let outcome = run_generate(&doctors, config, seed)?;
            report_violations(&outcome);
            let ok = outcome.success();
            if ok || force {
                let doc = ScheduleDocument::new(month, config, outcome.roster);
                storage.save(&doc)?;
                println!("Schedule saved to {}", cli.schedule);
            } else {
                eprintln!("Schedule not saved (use --force to keep a partial month)");
            }
            if ok {
                0
            } else {
                2
            }
        }
        Commands::Regenerate { seed, force } => {
            let mut doc = storage.load()?;
            let doctors = io::import_doctors_csv(&cli.doctors)
                .with_context(|| format!("loading doctor roster {}", cli.doctors))?;
            let outcome = run_generate(&doctors, doc.config, seed)?;
            report_violations(&outcome);
            let ok = outcome.success();
            if ok || force {
                doc.roster = outcome.roster;
                storage.save(&doc)?;
                println!("Schedule saved to {}", cli.schedule);
            } else {
                eprintln!("Schedule not saved (use --force to keep a partial month)");
            }
            if ok {
                0
            } else {
                2
            }
        }
        Commands::Init {
            month,
            ricu_double_days,
        } => {
            let config = RosterConfig {
                days_in_month: days_in_month(&month)?,
                ricu_double_days,
            };
            let doc = ScheduleDocument::new(month, config, Roster::empty(config.days_in_month));
            storage.save(&doc)?;
            println!("Empty schedule saved to {}", cli.schedule);
            0
        }
        Commands::Check => {
            let doc = storage.load()?;
            let doctors = io::import_doctors_csv(&cli.doctors)
                .with_context(|| format!("loading doctor roster {}", cli.doctors))?;
            let violations = validate_roster(&doctors, &doc.roster, DutyRules::default());
            if violations.is_empty() {
                println!("OK: no violations");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    eprintln!("{v}");
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Eligible {
            day,
            slot_occupants,
            enforce_cap,
        } => {
            let doc = storage.load()?;
            let doctors = io::import_doctors_csv(&cli.doctors)
                .with_context(|| format!("loading doctor roster {}", cli.doctors))?;
            let current_slot: Vec<DoctorId> = slot_occupants
                .as_deref()
                .unwrap_or("")
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(DoctorId::new)
                .collect();
            let policy = EligibilityPolicy {
                enforce_duty_cap: enforce_cap,
            };
            let eligible = eligible_doctors(
                &doctors,
                &doc.roster,
                day,
                &current_slot,
                DutyRules::default(),
                policy,
            );
            for doc_id in &eligible {
                println!("{doc_id}");
            }
            0
        }
        Commands::Stats => {
            let doc = storage.load()?;
            let doctors = io::import_doctors_csv(&cli.doctors)
                .with_context(|| format!("loading doctor roster {}", cli.doctors))?;
            for (doc_id, count) in duty_counts(&doctors, &doc.roster) {
                println!("{doc_id}: {count}");
            }
            0
        }
        Commands::Export { out_json, out_csv } => {
            let doc = storage.load()?;
            if let Some(path) = out_json {
                io::export_document_json(path, &doc)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &doc.roster)?;
            }
            0
        }
    };

    std::process::exit(code);
}

fn run_generate(
    doctors: &[DoctorId],
    config: RosterConfig,
    seed: Option<u64>,
) -> Result<ScheduleOutcome> {
    let outcome = match seed {
        Some(seed) => generate(
            doctors,
            config,
            DutyRules::default(),
            &mut SmallRng::seed_from_u64(seed),
        )?,
        None => generate(doctors, config, DutyRules::default(), &mut rand::rng())?,
    };
    Ok(outcome)
}

fn report_violations(outcome: &ScheduleOutcome) {
    if outcome.success() {
        println!("OK: full month generated");
        return;
    }
    eprintln!("Found {} violation(s)", outcome.violations.len());
    for v in &outcome.violations {
        eprintln!("{v}");
    }
}

/// Nombre de jours du mois `YYYY-MM` d'après le calendrier.
fn days_in_month(month: &str) -> Result<u32> {
    let first = NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid month label: {month}"))?;
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let Some(next) = next else {
        bail!("date overflow for month {month}");
    };
    Ok(next.signed_duration_since(first).num_days() as u32)
}
