//! Arithmétique sur les heures `HH:MM` (minutes depuis minuit, sans fuseau).

/// Sépare `H:M` en (heures, minutes). Aucune borne n'est vérifiée ici.
fn parts(time: &str) -> Option<(i32, i32)> {
    let (h, m) = time.split_once(':')?;
    let h = h.trim().parse::<i32>().ok()?;
    let m = m.trim().parse::<i32>().ok()?;
    Some((h, m))
}

/// Minutes depuis minuit (`h*60+m`), `None` si la chaîne est illisible
/// ou hors de portée d'un `i32`.
pub fn minutes(time: &str) -> Option<i32> {
    let (h, m) = parts(time)?;
    h.checked_mul(60)?.checked_add(m)
}

/// Vrai si `[start1, end1)` et `[start2, end2)` se chevauchent.
///
/// Une borne illisible ne chevauche jamais rien : filtrer en amont avec
/// [`validate_shift_times`].
pub fn overlaps(start1: &str, end1: &str, start2: &str, end2: &str) -> bool {
    match (minutes(start1), minutes(end1), minutes(start2), minutes(end2)) {
        (Some(s1), Some(e1), Some(s2), Some(e2)) => s1 < e2 && s2 < e1,
        _ => false,
    }
}

/// Heures dans `00:00..=23:59` et fin strictement après le début.
pub fn validate_shift_times(start: &str, end: &str) -> bool {
    let (Some((h1, m1)), Some((h2, m2))) = (parts(start), parts(end)) else {
        return false;
    };
    if !in_clock(h1, m1) || !in_clock(h2, m2) {
        return false;
    }
    h2 * 60 + m2 > h1 * 60 + m1
}

fn in_clock(h: i32, m: i32) -> bool {
    (0..=23).contains(&h) && (0..=59).contains(&m)
}

/// Forme d'affichage `HH:MM` ; une entrée illisible est rendue telle quelle.
pub fn format_time(time: &str) -> String {
    match time.split_once(':') {
        Some((h, m)) => format!("{:0>2}:{:0>2}", h.trim(), m.trim()),
        None => time.to_string(),
    }
}

/// Créneaux prédéfinis proposés pour les recherches de disponibilité.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePreset {
    pub label: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl TimePreset {
    pub const MORNING: Self = Self { label: "morning", start: "09:00", end: "13:00" };
    pub const AFTERNOON: Self = Self { label: "afternoon", start: "14:00", end: "18:00" };
    pub const NIGHT: Self = Self { label: "night", start: "19:00", end: "23:00" };
    pub const FULL_DAY: Self = Self { label: "full-day", start: "09:00", end: "18:00" };

    pub const ALL: [Self; 4] = [Self::MORNING, Self::AFTERNOON, Self::NIGHT, Self::FULL_DAY];

    pub fn by_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_accepts_unpadded() {
        assert_eq!(minutes("9:5"), Some(545));
        assert_eq!(minutes("00:00"), Some(0));
        assert_eq!(minutes("23:59"), Some(1439));
    }

    #[test]
    fn minutes_rejects_garbage() {
        assert_eq!(minutes("nine"), None);
        assert_eq!(minutes("09"), None);
        assert_eq!(minutes("09:xx"), None);
        assert_eq!(minutes(""), None);
    }

    #[test]
    fn huge_hours_are_unreadable_not_a_panic() {
        assert_eq!(minutes("99999999:00"), None);
        assert_eq!(minutes("35791394:07"), Some(i32::MAX));
        assert_eq!(minutes("-99999999:00"), None);
        assert!(!overlaps("99999999:00", "12:00", "09:00", "10:00"));
        assert!(!overlaps("09:00", "10:00", "08:00", "40000000:00"));
        assert!(!validate_shift_times("99999999:00", "12:00"));
    }

    #[test]
    fn format_time_pads() {
        assert_eq!(format_time("9:5"), "09:05");
        assert_eq!(format_time("14:30"), "14:30");
        assert_eq!(format_time("late"), "late");
    }

    #[test]
    fn presets_are_valid_windows() {
        for p in TimePreset::ALL {
            assert!(validate_shift_times(p.start, p.end), "{}", p.label);
        }
        assert_eq!(TimePreset::by_label("Night"), Some(TimePreset::NIGHT));
        assert_eq!(TimePreset::by_label("brunch"), None);
    }
}
