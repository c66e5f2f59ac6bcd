// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chime_core::time::time_of_day::TimeOfDay;
use chime_engine::evaluator::Evaluator;
use chime_model::expr::Expr;
use chime_model::predicate::{At, DayOfMonth, Every, TimeRange, Weekday};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn tod(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

/// (Saturday | Sunday) & (at 10:00 | at 18:00)
fn weekend_schedule() -> Arc<Expr> {
    let weekend = Expr::or(vec![
        Arc::new(Expr::Weekday(Weekday::SATURDAY)),
        Arc::new(Expr::Weekday(Weekday::SUNDAY)),
    ])
    .unwrap();
    let times = Expr::or(vec![
        Arc::new(Expr::At(At::new(tod("10:00")))),
        Arc::new(Expr::At(At::new(tod("18:00")))),
    ])
    .unwrap();
    Expr::and(vec![weekend, times]).unwrap()
}

/// day 1..=7 & Monday & every 15 minutes in [8:00, 20:00)
fn first_monday_grid_schedule() -> Arc<Expr> {
    let first_week = Arc::new(Expr::DayOfMonth(DayOfMonth::range(1, 7).unwrap()));
    let monday = Arc::new(Expr::Weekday(Weekday::MONDAY));
    let window = Arc::new(Expr::TimeRange(TimeRange::new(tod("8:00"), tod("20:00"))));
    let grid = Arc::new(Expr::Every(
        Every::new(900).unwrap().with_anchor(dt(2024, 1, 1, 0, 0, 0)),
    ));
    Expr::and(vec![first_week, monday, window, grid]).unwrap()
}

fn bench_next(c: &mut Criterion) {
    let evaluator = Evaluator::default();
    let base = dt(2024, 1, 1, 0, 0, 0);

    let weekend = weekend_schedule();
    c.bench_function("next_weekend_times", |b| {
        let mut offset = 0i64;
        b.iter(|| {
            let t = base + Duration::seconds(offset % (365 * 86_400));
            offset += 4_271;
            black_box(evaluator.next(black_box(&weekend), t).unwrap())
        })
    });

    let monthly = first_monday_grid_schedule();
    c.bench_function("next_first_monday_grid", |b| {
        let mut offset = 0i64;
        b.iter(|| {
            let t = base + Duration::seconds(offset % (365 * 86_400));
            offset += 98_321;
            black_box(evaluator.next(black_box(&monthly), t).unwrap())
        })
    });
}

criterion_group!(benches, bench_next);
criterion_main!(benches);
