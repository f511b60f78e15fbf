//! Benchmarks for the timezone resolver's matching tiers.

use criterion::{Criterion, criterion_group, criterion_main};
use multiship::domain::services::timezone::{TimezoneMap, TimezoneResolver};
use std::hint::black_box;

/// Builds a synthetic table of `countries * cities_per_country` entries.
fn synthetic_map(countries: usize, cities_per_country: usize) -> TimezoneMap {
    let mut map = TimezoneMap::new();
    for c in 0..countries {
        let country = format!(
            "{}{}",
            char::from(b'A' + (c / 26) as u8),
            char::from(b'A' + (c % 26) as u8)
        );
        for i in 0..cities_per_country {
            map.insert(
                &country,
                &format!("city {c} {i} of the {country} region"),
                format!("Zone/{country}_{i}"),
            );
        }
    }
    map
}

fn bench_resolution(c: &mut Criterion) {
    let resolver = TimezoneResolver::new(synthetic_map(50, 100));

    c.bench_function("exact_hit_scoped", |b| {
        b.iter(|| black_box(resolver.find(black_box("city 10 50 of the AK region"), "AK")));
    });

    c.bench_function("fuzzy_scan_scoped", |b| {
        b.iter(|| black_box(resolver.find(black_box("city 10 5 of AK region"), "AK")));
    });

    c.bench_function("fuzzy_scan_global", |b| {
        b.iter(|| black_box(resolver.find(black_box("city 10 5 of AK regio"), "")));
    });
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
