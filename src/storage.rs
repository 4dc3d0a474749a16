use crate::model::{Person, PersonId, Roster, Shift, ShiftId};
#[cfg(feature = "serde")]
use anyhow::Context;
use std::cell::RefCell;
#[cfg(feature = "serde")]
use std::fs;
#[cfg(feature = "serde")]
use std::io::{ErrorKind, Write};
#[cfg(feature = "serde")]
use std::path::{Path, PathBuf};
#[cfg(feature = "serde")]
use tempfile::NamedTempFile;

/// Personne retirée avec ses shifts, de quoi annuler la suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRemoval {
    pub person: Person,
    pub shifts: Vec<Shift>,
}

/// Dépôt de l'équipe et des shifts.
///
/// Seuls `load` et `save` sont à fournir ; les opérations unitaires passent
/// par un instantané complet, ce qui rend la cascade personne -> shifts
/// atomique vue de l'appelant.
pub trait Storage {
    /// Charge l'instantané complet.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Sauvegarde de manière atomique.
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;

    fn load_people(&self) -> anyhow::Result<Vec<Person>> {
        Ok(self.load()?.people)
    }

    fn load_shifts(&self) -> anyhow::Result<Vec<Shift>> {
        Ok(self.load()?.shifts)
    }

    /// Insère ou remplace par id.
    fn save_person(&self, person: Person) -> anyhow::Result<()> {
        let mut roster = self.load()?;
        roster.upsert_person(person);
        self.save(&roster)
    }

    /// Insère ou remplace par id.
    fn save_shift(&self, shift: Shift) -> anyhow::Result<()> {
        let mut roster = self.load()?;
        roster.upsert_shift(shift);
        self.save(&roster)
    }

    /// Supprime la personne et tous ses shifts en une seule écriture.
    fn delete_person(&self, id: &PersonId) -> anyhow::Result<Option<PersonRemoval>> {
        let mut roster = self.load()?;
        let Some((person, shifts)) = roster.remove_person(id) else {
            return Ok(None);
        };
        self.save(&roster)?;
        Ok(Some(PersonRemoval { person, shifts }))
    }

    fn delete_shift(&self, id: &ShiftId) -> anyhow::Result<Option<Shift>> {
        let mut roster = self.load()?;
        let removed = roster.remove_shift(id);
        if removed.is_some() {
            self.save(&roster)?;
        }
        Ok(removed)
    }
}

/// Fichier JSON unique `{ "people": [...], "shifts": [...] }`.
#[cfg(feature = "serde")]
pub struct JsonStorage {
    path: PathBuf,
}

#[cfg(feature = "serde")]
impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "serde")]
impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            // Premier lancement : magasin vide.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Roster::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let roster: Roster = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        #[cfg(feature = "logging")]
        tracing::debug!(
            people = roster.people.len(),
            shifts = roster.shifts.len(),
            "store loaded"
        );
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(roster)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        #[cfg(feature = "logging")]
        tracing::debug!(path = %self.path.display(), "store saved");
        Ok(())
    }
}

/// Dépôt en mémoire, pour les tests et les appelants sans fichier.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    roster: RefCell<Roster>,
}

impl MemoryStorage {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: RefCell::new(roster),
        }
    }

    pub fn snapshot(&self) -> Roster {
        self.roster.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        Ok(self.roster.borrow().clone())
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        *self.roster.borrow_mut() = roster.clone();
        Ok(())
    }
}
