#![forbid(unsafe_code)]
use escala::{
    availability, check_availability, overlaps, query, validate_shift_times,
    AvailabilityStatus, Person, PersonId, Shift, ShiftId,
};

fn shift(id: &str, person: &PersonId, date: &str, start: &str, end: &str) -> Shift {
    let mut s = Shift::new(person.clone(), date, start, end);
    s.id = ShiftId::new(id);
    s
}

#[test]
fn overlapping_window_is_busy() {
    let p = Person::new("Ana");
    let shifts = vec![shift("s1", &p.id, "2024-06-10", "09:00", "12:00")];

    let check = check_availability(&p.id, "2024-06-10", "11:00", "13:00", &shifts, None);
    assert_eq!(check.status, AvailabilityStatus::Busy);
    assert_eq!(check.conflicting_shift_id, Some(ShiftId::new("s1")));
}

#[test]
fn touching_boundary_is_available() {
    let p = Person::new("Ana");
    let shifts = vec![shift("s1", &p.id, "2024-06-10", "09:00", "12:00")];

    let check = check_availability(&p.id, "2024-06-10", "12:00", "13:00", &shifts, None);
    assert_eq!(check.status, AvailabilityStatus::Available);
    assert_eq!(check.conflicting_shift_id, None);
}

#[test]
fn other_person_or_date_never_conflicts() {
    let ana = Person::new("Ana");
    let bruno = Person::new("Bruno");
    let shifts = vec![
        shift("s1", &bruno.id, "2024-06-10", "09:00", "12:00"),
        shift("s2", &ana.id, "2024-06-11", "09:00", "12:00"),
    ];
    let check = check_availability(&ana.id, "2024-06-10", "10:00", "11:00", &shifts, None);
    assert!(check.is_available());
}

#[test]
fn excluded_shift_is_ignored_when_editing() {
    let p = Person::new("Ana");
    let shifts = vec![shift("s1", &p.id, "2024-06-10", "09:00", "12:00")];
    let exclude = ShiftId::new("s1");

    let check = check_availability(
        &p.id,
        "2024-06-10",
        "10:00",
        "13:00",
        &shifts,
        Some(&exclude),
    );
    assert!(check.is_available());
}

#[test]
fn reports_first_conflict_in_input_order() {
    let p = Person::new("Ana");
    let shifts = vec![
        shift("late", &p.id, "2024-06-10", "14:00", "18:00"),
        shift("early", &p.id, "2024-06-10", "08:00", "10:00"),
    ];
    let check = check_availability(&p.id, "2024-06-10", "09:00", "15:00", &shifts, None);
    assert_eq!(check.conflicting_shift_id, Some(ShiftId::new("late")));
}

#[test]
fn check_is_idempotent() {
    let p = Person::new("Ana");
    let shifts = vec![shift("s1", &p.id, "2024-06-10", "09:00", "12:00")];
    let a = check_availability(&p.id, "2024-06-10", "08:00", "09:30", &shifts, None);
    let b = check_availability(&p.id, "2024-06-10", "08:00", "09:30", &shifts, None);
    assert_eq!(a, b);
}

#[test]
fn malformed_stored_times_never_conflict() {
    let p = Person::new("Ana");
    let shifts = vec![shift("bad", &p.id, "2024-06-10", "nine", "12:00")];
    let check = check_availability(&p.id, "2024-06-10", "09:00", "12:00", &shifts, None);
    assert!(check.is_available());
}

#[test]
fn overlap_is_symmetric_and_half_open() {
    let cases = [
        ("09:00", "12:00", "11:00", "13:00", true),
        ("09:00", "12:00", "12:00", "13:00", false),
        ("09:00", "17:00", "10:00", "11:00", true),
        ("00:00", "00:30", "23:00", "23:59", false),
        ("10:00", "11:00", "10:00", "11:00", true),
    ];
    for (a, b, c, d, expected) in cases {
        assert_eq!(overlaps(a, b, c, d), expected, "{a}-{b} vs {c}-{d}");
        assert_eq!(overlaps(c, d, a, b), expected, "{c}-{d} vs {a}-{b}");
    }
    assert!(!overlaps("xx:00", "12:00", "09:00", "10:00"));
}

#[test]
fn validator_bounds_and_ordering() {
    assert!(validate_shift_times("09:00", "17:00"));
    assert!(validate_shift_times("00:00", "23:59"));
    assert!(validate_shift_times("9:00", "9:01"));
    assert!(!validate_shift_times("09:00", "09:00"));
    assert!(!validate_shift_times("17:00", "09:00"));
    assert!(!validate_shift_times("24:00", "24:30"));
    assert!(!validate_shift_times("09:60", "10:00"));
    assert!(!validate_shift_times("-1:00", "10:00"));
    assert!(!validate_shift_times("09:00", "abc"));
}

#[test]
fn validator_matches_minute_comparison_over_whole_day() {
    for start in (0..24 * 60).step_by(37) {
        for end in (0..24 * 60).step_by(41) {
            let s = format!("{:02}:{:02}", start / 60, start % 60);
            let e = format!("{:02}:{:02}", end / 60, end % 60);
            assert_eq!(validate_shift_times(&s, &e), end > start, "{s}-{e}");
        }
    }
}

#[test]
fn shifts_for_date_sorted_and_stable() {
    let p = PersonId::new("p");
    let shifts = vec![
        shift("c", &p, "2024-06-10", "14:00", "15:00"),
        shift("a", &p, "2024-06-10", "9:00", "10:00"),
        shift("other-day", &p, "2024-06-11", "08:00", "09:00"),
        shift("b", &p, "2024-06-10", "09:00", "11:00"),
    ];
    let ids: Vec<&str> = query::shifts_for_date("2024-06-10", &shifts)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
    // l'entrée n'est pas modifiée
    assert_eq!(shifts[0].id.as_str(), "c");
}

#[test]
fn shifts_for_person_by_date_then_time() {
    let ana = PersonId::new("ana");
    let bruno = PersonId::new("bruno");
    let shifts = vec![
        shift("3", &ana, "2024-06-12", "08:00", "09:00"),
        shift("x", &bruno, "2024-06-10", "08:00", "09:00"),
        shift("2", &ana, "2024-06-10", "13:00", "14:00"),
        shift("1", &ana, "2024-06-10", "07:30", "09:00"),
    ];
    let ids: Vec<&str> = query::shifts_for_person(&ana, &shifts)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn date_range_is_inclusive() {
    let p = PersonId::new("p");
    let shifts = vec![
        shift("before", &p, "2024-06-09", "08:00", "09:00"),
        shift("first", &p, "2024-06-10", "08:00", "09:00"),
        shift("last", &p, "2024-06-16", "08:00", "09:00"),
        shift("after", &p, "2024-06-17", "08:00", "09:00"),
    ];
    let ids: Vec<&str> = query::shifts_for_date_range("2024-06-10", "2024-06-16", &shifts)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, ["first", "last"]);
}

#[test]
fn roster_partition_is_complete() {
    let people = vec![Person::new("Ana"), Person::new("Bruno"), Person::new("Carla")];
    let shifts = vec![
        shift("s1", &people[0].id, "2024-06-10", "09:00", "12:00"),
        shift("s2", &people[2].id, "2024-06-10", "11:30", "12:30"),
    ];

    let available = availability::available_people("2024-06-10", "11:00", "12:00", &people, &shifts);
    let busy = availability::busy_people("2024-06-10", "11:00", "12:00", &people, &shifts);
    assert_eq!(available.len() + busy.len(), people.len());
    for p in &people {
        let in_a = available.iter().any(|a| a.id == p.id);
        let in_b = busy.iter().any(|b| b.id == p.id);
        assert!(in_a ^ in_b, "{} must be in exactly one set", p.name);
    }
    assert_eq!(available[0].name, "Bruno");

    let report = availability::partition("2024-06-10", "11:00", "12:00", &people, &shifts);
    assert_eq!(report.available, available);
    assert_eq!(report.busy, busy);
    assert_eq!(report.percentage, 33);
}

#[test]
fn percentage_rounds_and_handles_empty_roster() {
    assert_eq!(availability::availability_percentage(0, 0), 0);
    assert_eq!(availability::availability_percentage(2, 3), 67);
    assert_eq!(availability::availability_percentage(1, 8), 13);
    assert_eq!(availability::availability_percentage(4, 4), 100);

    let report = availability::partition("2024-06-10", "09:00", "10:00", &[], &[]);
    assert_eq!(report.percentage, 0);
    assert!(report.available.is_empty() && report.busy.is_empty());
}
