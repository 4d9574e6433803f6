use criterion::{criterion_group, criterion_main, Criterion};
use lapse_log::{LoggerConfig, MemorySink, MonotonicClock, Severity, TimingLogger, TracingSink};

fn format_benchmarks(c: &mut Criterion) {
    let logger = TimingLogger::with_sink(TracingSink);

    c.bench_function("format", |b| {
        b.iter(|| {
            let _line = logger.format("benchmark message");
        })
    });

    c.bench_function("emit_tracing_no_subscriber", |b| {
        b.iter(|| {
            let _receipt = logger.emit(Severity::Info, "Bench", "benchmark message", None);
        })
    });

    let gated = TimingLogger::new(MonotonicClock::new(), MemorySink::new(), LoggerConfig::default());
    c.bench_function("debug_suppressed", |b| {
        b.iter(|| {
            let _receipt = gated.debug("Bench", "never written");
        })
    });
}

criterion_group!(benches, format_benchmarks);
criterion_main!(benches);
