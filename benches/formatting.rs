use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use fanlog::record::LogRecord;
use fanlog::{Level, config};
use std::hint::black_box;

fn sample() -> LogRecord {
    LogRecord {
        label: "svc".to_string(),
        timestamp: NaiveDate::from_ymd_opt(2026, 8, 25)
            .unwrap()
            .and_hms_milli_opt(14, 30, 5, 123)
            .unwrap(),
        level: Level::Error,
        file: "src/net.rs (42)".to_string(),
        function: "svc::net::connect".to_string(),
        message: "connection refused".to_string(),
        source: None,
    }
}

fn bench_record_encode(c: &mut Criterion) {
    let record = sample();
    c.bench_function("LogRecord::encode", |b| {
        b.iter(|| black_box(&record).encode());
    });
}

fn bench_timestamp_format(c: &mut Criterion) {
    let timestamp = sample().timestamp;
    c.bench_function("config::format_timestamp", |b| {
        b.iter(|| config::format_timestamp(black_box(timestamp)));
    });
}

criterion_group!(benches, bench_record_encode, bench_timestamp_format);
criterion_main!(benches);
