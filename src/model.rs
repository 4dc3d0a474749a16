use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Palette de couleurs attribuées aux nouvelles personnes.
pub const PALETTE: [&str; 10] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#10b981", // green
    "#f59e0b", // amber
    "#8b5cf6", // purple
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#84cc16", // lime
    "#f97316", // orange
    "#6366f1", // indigo
];

/// Couleur affichée quand la personne d'un shift est introuvable.
pub const FALLBACK_COLOR: &str = "#9ca3af";
/// Nom affiché quand la personne d'un shift est introuvable.
pub const FALLBACK_NAME: &str = "Unknown";

/// Couleur au format `#rrggbb`.
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Identifiant fort pour Person
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PersonId(String);

impl PersonId {
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

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ShiftId(String);

impl ShiftId {
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

/// Membre de l'équipe
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Nouvelle personne avec une couleur tirée de la palette.
    pub fn new<N: Into<String>>(name: N) -> Self {
        let id = Uuid::new_v4();
        let color = PALETTE[usize::from(id.as_bytes()[0]) % PALETTE.len()];
        Self {
            id: PersonId(id.to_string()),
            name: name.into(),
            color: color.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn with_color<C: Into<String>>(mut self, color: C) -> Self {
        self.color = color.into();
        self
    }
}

/// Turno d'une personne sur une date (heures locales naïves `HH:MM`).
///
/// Les champs restent sous leur forme textuelle canonique ; la validation
/// des heures se fait via [`crate::time::validate_shift_times`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Shift {
    pub id: ShiftId,
    pub person_id: PersonId,
    /// Date ISO `YYYY-MM-DD`
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shift {
    pub fn new<D, S, E>(person_id: PersonId, date: D, start_time: S, end_time: E) -> Self
    where
        D: Into<String>,
        S: Into<String>,
        E: Into<String>,
    {
        let now = Utc::now();
        Self {
            id: ShiftId::random(),
            person_id,
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            kind: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_kind<K: Into<String>>(mut self, kind: K) -> Self {
        let kind = kind.into();
        self.kind = if kind.trim().is_empty() { None } else { Some(kind) };
        self
    }

    /// Copie du shift avec un nouvel identifiant et des horodatages neufs.
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        Self {
            id: ShiftId::random(),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Durée en minutes, `None` si une des heures est illisible.
    pub fn duration_minutes(&self) -> Option<i32> {
        let start = crate::time::minutes(&self.start_time)?;
        let end = crate::time::minutes(&self.end_time)?;
        end.checked_sub(start)
    }
}

/// Instantané complet : l'équipe et tous ses turnos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    #[cfg_attr(feature = "serde", serde(default))]
    pub people: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shifts: Vec<Shift>,
}

impl Roster {
    pub fn find_person_by_id<'a>(&'a self, id: &PersonId) -> Option<&'a Person> {
        self.people.iter().find(|p| &p.id == id)
    }
    pub fn find_person_by_name<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
    pub fn find_person_mut_by_id(&mut self, id: &PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| &p.id == id)
    }
    pub fn find_shift<'a>(&'a self, id: &ShiftId) -> Option<&'a Shift> {
        self.shifts.iter().find(|s| &s.id == id)
    }
    pub fn find_shift_mut(&mut self, id: &ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| &s.id == id)
    }

    pub fn person_name(&self, id: &PersonId) -> &str {
        self.find_person_by_id(id)
            .map_or(FALLBACK_NAME, |p| p.name.as_str())
    }

    pub fn person_color(&self, id: &PersonId) -> &str {
        self.find_person_by_id(id)
            .map_or(FALLBACK_COLOR, |p| p.color.as_str())
    }

    /// Insère ou remplace (par id) une personne.
    pub fn upsert_person(&mut self, person: Person) {
        match self.find_person_mut_by_id(&person.id) {
            Some(slot) => *slot = person,
            None => self.people.push(person),
        }
    }

    /// Insère ou remplace (par id) un shift.
    pub fn upsert_shift(&mut self, shift: Shift) {
        match self.find_shift_mut(&shift.id) {
            Some(slot) => *slot = shift,
            None => self.shifts.push(shift),
        }
    }

    /// Retire une personne et, en cascade, tous ses shifts.
    pub fn remove_person(&mut self, id: &PersonId) -> Option<(Person, Vec<Shift>)> {
        let pos = self.people.iter().position(|p| &p.id == id)?;
        let person = self.people.remove(pos);
        let (removed, kept): (Vec<Shift>, Vec<Shift>) = std::mem::take(&mut self.shifts)
            .into_iter()
            .partition(|s| &s.person_id == id);
        self.shifts = kept;
        Some((person, removed))
    }

    pub fn remove_shift(&mut self, id: &ShiftId) -> Option<Shift> {
        let pos = self.shifts.iter().position(|s| &s.id == id)?;
        Some(self.shifts.remove(pos))
    }
}
