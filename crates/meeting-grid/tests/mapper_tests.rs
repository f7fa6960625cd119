//! Tests for grid placement on the standard layout.

use meeting_grid::clock::parse_hhmm;
use meeting_grid::{map_to_grid, map_to_grid_str, Day, GridError, GridLayout, GridPosition};

fn pos(row: u32, column: u32, span: u32) -> GridPosition {
    GridPosition { row, column, span }
}

#[test]
fn tuesday_nine_to_ten_fifteen() {
    // 75 minutes is 1.25 rows of 60 minutes, rounded to 1.
    let p = map_to_grid_str("09:00", "10:15", "TU").unwrap();
    assert_eq!(p, pos(3, 4, 1));
}

#[test]
fn first_and_last_rows() {
    assert_eq!(map_to_grid_str("08:00", "09:00", "MO").unwrap(), pos(2, 3, 1));
    assert_eq!(map_to_grid_str("18:00", "19:00", "FR").unwrap(), pos(12, 7, 1));
}

#[test]
fn every_day_gets_its_column() {
    let expected = [("MO", 3), ("TU", 4), ("WE", 5), ("TH", 6), ("FR", 7), ("SA", 8), ("SU", 9)];
    for (code, column) in expected {
        let p = map_to_grid_str("10:00", "11:00", code).unwrap();
        assert_eq!(p.column, column, "column for {code}");
        assert_eq!(p.row, 4);
    }
}

#[test]
fn off_grid_start_snaps_to_nearest_instant() {
    // 10:10 is 10 minutes after 10:00 and 50 minutes before 11:00.
    assert_eq!(map_to_grid_str("10:10", "11:00", "WE").unwrap().row, 4);
    // 10:40 is closer to 11:00.
    assert_eq!(map_to_grid_str("10:40", "11:30", "WE").unwrap().row, 5);
}

#[test]
fn equidistant_start_resolves_to_earlier_instant() {
    // 08:30 sits exactly between 08:00 (row 2) and 09:00 (row 3).
    assert_eq!(map_to_grid_str("08:30", "09:30", "TH").unwrap().row, 2);
}

#[test]
fn starts_outside_the_day_clamp_to_edge_rows() {
    assert_eq!(map_to_grid_str("06:00", "07:00", "MO").unwrap().row, 2);
    assert_eq!(map_to_grid_str("21:00", "22:00", "MO").unwrap().row, 12);
}

#[test]
fn long_meetings_span_several_rows() {
    // 2h45 = 2.75 rows -> 3
    assert_eq!(map_to_grid_str("18:00", "20:45", "TU").unwrap().span, 3);
    // 1h30 = 1.5 rows -> 2 (half-up)
    assert_eq!(map_to_grid_str("09:00", "10:30", "TU").unwrap().span, 2);
}

#[test]
fn reversed_or_empty_range_does_not_panic() {
    let empty = map_to_grid_str("09:00", "09:00", "MO").unwrap();
    assert_eq!(empty.span, 0);
    let reversed = map_to_grid_str("11:00", "09:00", "MO").unwrap();
    assert_eq!(reversed.span, 0);
    assert_eq!(reversed.row, 5);
}

#[test]
fn same_input_same_position() {
    let a = map_to_grid_str("13:05", "14:20", "FR").unwrap();
    let b = map_to_grid_str("13:05", "14:20", "FR").unwrap();
    assert_eq!(a, b);
}

#[test]
fn typed_and_string_entry_points_agree() {
    let typed = map_to_grid(parse_hhmm("14:00").unwrap(), parse_hhmm("15:15").unwrap(), Day::Sat);
    assert_eq!(typed, map_to_grid_str("14:00", "15:15", "SA").unwrap());
    assert_eq!(
        typed,
        GridLayout::standard().place(parse_hhmm("14:00").unwrap(), parse_hhmm("15:15").unwrap(), Day::Sat)
    );
}

#[test]
fn malformed_time_fails_fast() {
    assert!(matches!(
        map_to_grid_str("9am", "10:00", "MO"),
        Err(GridError::MalformedTime(s)) if s == "9am"
    ));
    assert!(matches!(
        map_to_grid_str("09:00", "25:00", "MO"),
        Err(GridError::MalformedTime(_))
    ));
}

#[test]
fn unknown_day_fails_fast() {
    assert!(matches!(
        map_to_grid_str("09:00", "10:00", "XX"),
        Err(GridError::UnknownDay(s)) if s == "XX"
    ));
}

#[test]
fn position_serializes_as_plain_object() {
    let p = map_to_grid_str("09:00", "10:15", "TU").unwrap();
    let json = serde_json::to_value(p).unwrap();
    assert_eq!(json, serde_json::json!({"row": 3, "column": 4, "span": 1}));
}
