#![forbid(unsafe_code)]
use escala::{io, Person, PersonId, Roster, Shift, ShiftId};
use std::fs;
use tempfile::tempdir;

fn fixed_shift(id: &str, person: &PersonId, date: &str, start: &str, end: &str) -> Shift {
    let mut s = Shift::new(person.clone(), date, start, end);
    s.id = ShiftId::new(id);
    s
}

#[test]
fn shifts_csv_is_chronological() {
    let mut ana = Person::new("Ana");
    ana.id = PersonId::new("p-ana");
    let roster = Roster {
        shifts: vec![
            fixed_shift("s3", &ana.id, "2024-06-11", "08:00", "09:00"),
            fixed_shift("s2", &ana.id, "2024-06-10", "13:00", "17:00").with_kind("tarde"),
            fixed_shift("s1", &ana.id, "2024-06-10", "08:00", "12:00"),
            fixed_shift("s4", &PersonId::new("gone"), "2024-06-12", "08:00", "09:00"),
        ],
        people: vec![ana],
    };

    let mut buf = Vec::new();
    io::write_shifts_csv(csv::Writer::from_writer(&mut buf), &roster).unwrap();
    let out = String::from_utf8(buf).unwrap();

    insta::assert_snapshot!(out.trim_end(), @r"
    id,person,date,start,end,type
    s1,Ana,2024-06-10,08:00,12:00,
    s2,Ana,2024-06-10,13:00,17:00,tarde
    s3,Ana,2024-06-11,08:00,09:00,
    s4,Unknown,2024-06-12,08:00,09:00,
    ");
}

#[test]
fn import_people_and_shifts() {
    let dir = tempdir().unwrap();
    let people_csv = dir.path().join("people.csv");
    fs::write(&people_csv, "name,color\nAna,#10b981\nBruno,\n").unwrap();

    let people = io::import_people_csv(&people_csv).unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].color, "#10b981");
    assert!(escala::model::PALETTE.contains(&people[1].color.as_str()));

    let roster = Roster {
        people,
        shifts: Vec::new(),
    };
    let shifts_csv = dir.path().join("shifts.csv");
    fs::write(
        &shifts_csv,
        "person,date,start,end,type\nana,10/06/2024,9:00,12:00,manhã\nBruno,2024-06-11,14:00,18:00,\n",
    )
    .unwrap();

    let shifts = io::import_shifts_csv(&shifts_csv, &roster).unwrap();
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].person_id, roster.people[0].id);
    assert_eq!(shifts[0].date, "2024-06-10");
    assert_eq!(shifts[0].start_time, "09:00");
    assert_eq!(shifts[0].kind.as_deref(), Some("manhã"));
    assert_eq!(shifts[1].kind, None);
}

#[test]
fn import_rejects_bad_rows() {
    let dir = tempdir().unwrap();
    let people_csv = dir.path().join("people.csv");
    fs::write(&people_csv, "name,color\nAna,blue\n").unwrap();
    assert!(io::import_people_csv(&people_csv).is_err());

    let roster = Roster {
        people: vec![Person::new("Ana")],
        shifts: Vec::new(),
    };
    let shifts_csv = dir.path().join("shifts.csv");
    fs::write(&shifts_csv, "person,date,start,end\nAna,2024-06-10,12:00,09:00\n").unwrap();
    assert!(io::import_shifts_csv(&shifts_csv, &roster).is_err());

    fs::write(&shifts_csv, "person,date,start,end\nZoe,2024-06-10,09:00,12:00\n").unwrap();
    assert!(io::import_shifts_csv(&shifts_csv, &roster).is_err());
}

#[test]
fn import_refuses_overlapping_rows() {
    let dir = tempdir().unwrap();
    let mut ana = Person::new("Ana");
    ana.id = PersonId::new("p-ana");
    let roster = Roster {
        shifts: vec![fixed_shift("s1", &ana.id, "2024-06-10", "09:00", "12:00")],
        people: vec![ana, Person::new("Bruno")],
    };
    let shifts_csv = dir.path().join("shifts.csv");

    // chevauche un shift déjà stocké
    fs::write(
        &shifts_csv,
        "person,date,start,end\nBruno,2024-06-10,09:00,12:00\nAna,10/06/2024,11:00,13:00\n",
    )
    .unwrap();
    let err = io::import_shifts_csv(&shifts_csv, &roster).unwrap_err().to_string();
    assert!(err.starts_with("row 2:"), "{err}");
    assert!(err.contains("(s1)"), "{err}");

    // deux lignes du même fichier qui se chevauchent
    fs::write(
        &shifts_csv,
        "person,date,start,end\nBruno,2024-06-11,14:00,18:00\nbruno,2024-06-11,17:30,19:00\n",
    )
    .unwrap();
    let err = io::import_shifts_csv(&shifts_csv, &roster).unwrap_err().to_string();
    assert!(
        err.starts_with("row 2: Bruno already has a shift on 2024-06-11 14:00-18:00"),
        "{err}"
    );

    // bord à bord et autre date : accepté
    fs::write(
        &shifts_csv,
        "person,date,start,end\nAna,2024-06-10,12:00,13:00\nAna,2024-06-11,09:00,12:00\n",
    )
    .unwrap();
    assert_eq!(io::import_shifts_csv(&shifts_csv, &roster).unwrap().len(), 2);
}
