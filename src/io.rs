use crate::availability;
use crate::calendar;
use crate::model::{is_hex_color, Person, PersonId, Roster, Shift};
use crate::query;
use crate::time;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnes depuis CSV: header `name[,color]`
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid people row (empty name)");
        }
        let mut person = Person::new(name);
        if let Some(color) = rec.get(1).map(str::trim).filter(|c| !c.is_empty()) {
            if !is_hex_color(color) {
                bail!("invalid color for {name}: {color}");
            }
            person = person.with_color(color);
        }
        out.push(person);
    }
    Ok(out)
}

/// Import de shifts: header `person,date,start,end[,type]`.
///
/// `person` est un nom ou un id présent dans `roster` ; `date` accepte l'ISO ou
/// `DD/MM/YYYY`. Une ligne qui chevauche un shift existant, ou une ligne
/// précédente du même fichier, rejette tout l'import.
pub fn import_shifts_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<Vec<Shift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let who = rec.get(0).context("missing person")?.trim();
        let date = rec.get(1).context("missing date")?.trim();
        let start = rec.get(2).context("missing start")?.trim();
        let end = rec.get(3).context("missing end")?.trim();

        let person = roster
            .find_person_by_name(who)
            .or_else(|| roster.find_person_by_id(&PersonId::new(who)))
            .with_context(|| format!("row {}: unknown person {who}", line + 1))?;
        let date = calendar::parse_display_date(date)
            .with_context(|| format!("row {}: bad date", line + 1))?;
        if !time::validate_shift_times(start, end) {
            bail!("row {}: invalid times {start}-{end}", line + 1);
        }

        let conflict = [roster.shifts.as_slice(), out.as_slice()]
            .into_iter()
            .find_map(|shifts| {
                availability::find_conflict(&person.id, &date, start, end, shifts, None)
            });
        if let Some(conflict) = conflict {
            bail!(
                "row {}: {} already has a shift on {} {}-{} ({})",
                line + 1,
                person.name,
                conflict.date,
                conflict.start_time,
                conflict.end_time,
                conflict.id.as_str()
            );
        }

        let mut shift = Shift::new(
            person.id.clone(),
            date,
            time::format_time(start),
            time::format_time(end),
        );
        if let Some(kind) = rec.get(4) {
            shift = shift.with_kind(kind.trim());
        }
        out.push(shift);
    }
    Ok(out)
}

/// Export JSON de l'instantané (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des shifts par date puis heure :
/// header `id,person,date,start,end,type`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let w = WriterBuilder::new().has_headers(true).from_path(path)?;
    write_shifts_csv(w, roster)
}

/// Même format que [`export_shifts_csv`], vers n'importe quel writer.
pub fn write_shifts_csv<W: std::io::Write>(
    mut w: csv::Writer<W>,
    roster: &Roster,
) -> anyhow::Result<()> {
    w.write_record(["id", "person", "date", "start", "end", "type"])?;
    for s in query::chronological(&roster.shifts) {
        w.write_record([
            s.id.as_str(),
            roster.person_name(&s.person_id),
            s.date.as_str(),
            s.start_time.as_str(),
            s.end_time.as_str(),
            s.kind.as_deref().unwrap_or(""),
        ])?;
    }
    w.flush()?;
    Ok(())
}
