use criterion::{criterion_group, criterion_main, Criterion};
use meeting_grid::clock::parse_hhmm;
use meeting_grid::{check_conflict, map_to_grid_str, Day, Meeting};
use std::hint::black_box;

fn week_of_meetings() -> Vec<Meeting> {
    let mut meetings = Vec::new();
    for day in Day::ALL {
        for (start, end) in [("08:00", "09:15"), ("09:30", "10:45"), ("11:00", "12:15"), ("14:00", "16:45")] {
            meetings.push(Meeting::new(
                day,
                parse_hhmm(start).unwrap(),
                parse_hhmm(end).unwrap(),
                "101",
                "HC",
            ));
        }
    }
    meetings
}

fn bench_place(c: &mut Criterion) {
    c.bench_function("map_to_grid_str", |b| {
        b.iter(|| map_to_grid_str(black_box("13:05"), black_box("14:20"), black_box("TH")))
    });
}

fn bench_check(c: &mut Criterion) {
    let existing = week_of_meetings();
    let candidate = Meeting::new(
        Day::Sun,
        parse_hhmm("17:00").unwrap(),
        parse_hhmm("18:15").unwrap(),
        "205",
        "HC",
    );
    c.bench_function("check_conflict_week", |b| {
        b.iter(|| check_conflict(black_box(&candidate), None, black_box(&existing)))
    });
}

criterion_group!(benches, bench_place, bench_check);
criterion_main!(benches);
