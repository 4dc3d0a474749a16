#![forbid(unsafe_code)]
use anyhow::{anyhow, bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use escala::{
    availability::{self, AvailabilityStatus},
    calendar::{self, Locale},
    io,
    model::{PersonId, Roster, ShiftId},
    planner::{Planner, ShiftRequest},
    query,
    storage::{JsonStorage, Storage},
    time::{self, TimePreset},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de gestion d'équipe et de disponibilités (fichier JSON local)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du magasin
    #[arg(long, global = true, default_value = "escala.json")]
    store: String,

    /// Langue des noms de jours
    #[arg(long, global = true, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une personne
    AddPerson {
        name: String,
        /// Couleur `#rrggbb` (sinon tirée de la palette)
        #[arg(long)]
        color: Option<String>,
    },

    /// Renommer ou recolorer une personne (nom ou id)
    EditPerson {
        person: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },

    /// Supprimer une personne et tous ses shifts
    RemovePerson { person: String },

    /// Lister l'équipe
    People,

    /// Créer un shift (refusé en cas de conflit)
    AddShift {
        #[arg(long)]
        person: String,
        /// YYYY-MM-DD ou DD/MM/YYYY
        #[arg(long)]
        date: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// Modifier un shift en place
    EditShift {
        #[arg(long)]
        shift_id: String,
        #[arg(long)]
        person: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// Supprimer un shift
    RemoveShift {
        #[arg(long)]
        shift_id: String,
    },

    /// Dupliquer un shift, éventuellement vers une autre date
    DuplicateShift {
        #[arg(long)]
        shift_id: String,
        #[arg(long)]
        date: Option<String>,
    },

    /// Lister les shifts (filtres optionnels)
    Shifts {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        person: Option<String>,
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Vue semaine (lundi-dimanche)
    Week {
        /// Date de référence (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
        /// Décalage en semaines
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },

    /// Vérifier la disponibilité d'une personne
    Check {
        #[arg(long)]
        person: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// Shift ignoré (édition en place)
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Disponibles / occupés pour une fenêtre
    Available {
        #[arg(long)]
        date: String,
        #[arg(long, required_unless_present = "preset")]
        start: Option<String>,
        #[arg(long, required_unless_present = "preset")]
        end: Option<String>,
        /// morning | afternoon | night | full-day
        #[arg(long, conflicts_with_all = ["start", "end"])]
        preset: Option<String>,
    },

    /// Compteurs globaux
    Stats {
        #[arg(long)]
        date: Option<String>,
    },

    /// Lister les créneaux prédéfinis
    Presets,

    /// Importer des personnes depuis un CSV
    ImportPeople {
        #[arg(long)]
        csv: String,
    },

    /// Importer des shifts depuis un CSV
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Exporter le magasin
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn resolve_person(roster: &Roster, who: &str) -> Result<PersonId> {
    roster
        .find_person_by_name(who)
        .or_else(|| roster.find_person_by_id(&PersonId::new(who)))
        .map(|p| p.id.clone())
        .ok_or_else(|| anyhow!("unknown person: {who}"))
}

fn parse_date_arg(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(calendar::parse_iso_date(&calendar::parse_display_date(raw)?)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let planner = Planner::new(JsonStorage::open(&cli.store)?);
    let locale = cli.locale;

    let code = match cli.cmd {
        Commands::AddPerson { name, color } => {
            let person = match color {
                Some(color) => planner.add_person_with_color(&name, &color)?,
                None => planner.add_person(&name)?,
            };
            println!("{} | {} | {}", person.id.as_str(), person.name, person.color);
            0
        }
        Commands::EditPerson {
            person,
            name,
            color,
        } => {
            let id = resolve_person(&planner.roster()?, &person)?;
            if name.is_none() && color.is_none() {
                bail!("nothing to change: pass --name and/or --color");
            }
            if let Some(name) = name {
                planner.rename_person(&id, &name)?;
            }
            if let Some(color) = color {
                planner.recolor_person(&id, &color)?;
            }
            0
        }
        Commands::RemovePerson { person } => {
            let id = resolve_person(&planner.roster()?, &person)?;
            let removal = planner.remove_person(&id)?;
            println!(
                "Removed {} and {} shift(s)",
                removal.person.name,
                removal.shifts.len()
            );
            0
        }
        Commands::People => {
            let roster = planner.roster()?;
            for p in &roster.people {
                let count = query::shifts_for_person(&p.id, &roster.shifts).len();
                println!("{} | {} | {} | {} shift(s)", p.id.as_str(), p.name, p.color, count);
            }
            0
        }
        Commands::AddShift {
            person,
            date,
            start,
            end,
            kind,
        } => {
            let id = resolve_person(&planner.roster()?, &person)?;
            let mut req = ShiftRequest::new(id, calendar::parse_display_date(&date)?, start, end);
            req.kind = kind;
            let shift = planner.schedule_shift(req)?;
            println!("{}", shift.id.as_str());
            0
        }
        Commands::EditShift {
            shift_id,
            person,
            date,
            start,
            end,
            kind,
        } => {
            let roster = planner.roster()?;
            let sid = ShiftId::new(shift_id);
            let current = roster
                .find_shift(&sid)
                .ok_or_else(|| anyhow!("unknown shift: {}", sid.as_str()))?;
            let person_id = match person {
                Some(who) => resolve_person(&roster, &who)?,
                None => current.person_id.clone(),
            };
            let date = match date {
                Some(d) => calendar::parse_display_date(&d)?,
                None => current.date.clone(),
            };
            let req = ShiftRequest {
                person_id,
                date,
                start_time: start.unwrap_or_else(|| current.start_time.clone()),
                end_time: end.unwrap_or_else(|| current.end_time.clone()),
                kind: kind.or_else(|| current.kind.clone()),
            };
            planner.update_shift(&sid, req)?;
            0
        }
        Commands::RemoveShift { shift_id } => {
            let shift = planner.remove_shift(&ShiftId::new(shift_id))?;
            println!(
                "Removed {} {}",
                calendar::format_display_date(&shift.date)?,
                shift.id.as_str()
            );
            0
        }
        Commands::DuplicateShift { shift_id, date } => {
            let date = date.map(|d| calendar::parse_display_date(&d)).transpose()?;
            let copy = planner.duplicate_shift(&ShiftId::new(shift_id), date.as_deref())?;
            println!("{}", copy.id.as_str());
            0
        }
        Commands::Shifts {
            date,
            person,
            from,
            to,
        } => {
            let roster = planner.roster()?;
            let mut shifts = match (&date, &from, &to) {
                (Some(d), _, _) => {
                    query::shifts_for_date(&calendar::parse_display_date(d)?, &roster.shifts)
                }
                (None, Some(f), Some(t)) => query::shifts_for_date_range(
                    &calendar::parse_display_date(f)?,
                    &calendar::parse_display_date(t)?,
                    &roster.shifts,
                ),
                _ => query::chronological(&roster.shifts),
            };
            if let Some(who) = person {
                let id = resolve_person(&roster, &who)?;
                shifts.retain(|s| s.person_id == id);
            }
            for s in shifts {
                println!(
                    "{} | {} {} | {}-{} | {}{}",
                    s.id.as_str(),
                    calendar::day_name_iso(&s.date, locale)?,
                    calendar::format_display_date(&s.date)?,
                    s.start_time,
                    s.end_time,
                    roster.person_name(&s.person_id),
                    s.kind.as_deref().map(|k| format!(" ({k})")).unwrap_or_default()
                );
            }
            0
        }
        Commands::Week { date, offset } => {
            let roster = planner.roster()?;
            let reference = calendar::shift_week(parse_date_arg(date.as_deref())?, offset)?;
            for day in calendar::week_dates(reference)? {
                let iso = calendar::to_iso(day);
                println!(
                    "{} {}",
                    calendar::day_name(day, locale),
                    calendar::format_display_date(&iso)?
                );
                for s in query::shifts_for_date(&iso, &roster.shifts) {
                    println!(
                        "    {}-{} {}",
                        s.start_time,
                        s.end_time,
                        roster.person_name(&s.person_id)
                    );
                }
            }
            0
        }
        Commands::Check {
            person,
            date,
            start,
            end,
            exclude,
        } => {
            let roster = planner.roster()?;
            // Une personne inconnue reste interrogeable : le statut sera `unknown`.
            let id = resolve_person(&roster, &person).unwrap_or_else(|_| PersonId::new(&person));
            let exclude = exclude.map(ShiftId::new);
            let check = planner.check(
                &id,
                &calendar::parse_display_date(&date)?,
                &start,
                &end,
                exclude.as_ref(),
            )?;
            match (check.status, &check.conflicting_shift_id) {
                (AvailabilityStatus::Busy, Some(sid)) => {
                    let conflict = roster.find_shift(sid);
                    println!(
                        "busy: {}",
                        conflict
                            .map(|s| format!(
                                "{} {}-{} ({})",
                                s.date,
                                s.start_time,
                                s.end_time,
                                s.id.as_str()
                            ))
                            .unwrap_or_else(|| sid.as_str().to_string())
                    );
                    2
                }
                (status, _) => {
                    println!("{}", status.as_str());
                    0
                }
            }
        }
        Commands::Available {
            date,
            start,
            end,
            preset,
        } => {
            let (start, end) = match preset {
                Some(label) => {
                    let p = TimePreset::by_label(&label)
                        .ok_or_else(|| anyhow!("unknown preset: {label}"))?;
                    (p.start.to_string(), p.end.to_string())
                }
                None => (
                    start.ok_or_else(|| anyhow!("--start is required"))?,
                    end.ok_or_else(|| anyhow!("--end is required"))?,
                ),
            };
            if !time::validate_shift_times(&start, &end) {
                bail!("invalid times {start}-{end}");
            }
            let date = calendar::parse_display_date(&date)?;
            let roster = planner.roster()?;
            let report = availability::partition(&date, &start, &end, &roster.people, &roster.shifts);
            println!("{}", calendar::period_summary(&date, &start, &end)?);
            println!("available ({}%):", report.percentage);
            for p in &report.available {
                println!("  + {}", p.name);
            }
            println!("busy:");
            for p in &report.busy {
                println!("  - {}", p.name);
            }
            0
        }
        Commands::Stats { date } => {
            let stats = planner.stats(parse_date_arg(date.as_deref())?)?;
            println!("people: {}", stats.total_people);
            println!("shifts: {}", stats.total_shifts);
            println!("shifts this week: {}", stats.shifts_this_week);
            0
        }
        Commands::Presets => {
            for p in TimePreset::ALL {
                println!("{} {}-{}", p.label, p.start, p.end);
            }
            0
        }
        Commands::ImportPeople { csv } => {
            let people = io::import_people_csv(csv)?;
            let storage = planner.storage();
            let mut roster = storage.load()?;
            for p in people {
                roster.upsert_person(p);
            }
            storage.save(&roster)?;
            0
        }
        Commands::ImportShifts { csv } => {
            let storage = planner.storage();
            let mut roster = storage.load()?;
            let shifts = io::import_shifts_csv(csv, &roster)?;
            roster.shifts.extend(shifts);
            storage.save(&roster)?;
            0
        }
        Commands::Export { out_json, out_csv } => {
            let roster = planner.roster()?;
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, &roster)?;
            }
            0
        }
    };

    std::process::exit(code);
}
