#![no_main]

// Harness: format_prefix
// Strategy: drive a manual clock through arbitrary (possibly backwards) readings,
// interleave checkpoints, and check every formatted line keeps the
// "(<thread>) [<elapsed>,<total>] <message>" layout with elapsed <= total
// whenever the clock only moved forward.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use lapse_log::{Clock, LoggerConfig, ManualClock, MemorySink, TimingLogger};

#[derive(Arbitrary, Debug, Clone)]
enum Step {
    Set(u64),
    Advance(u32),
    Checkpoint,
    Format(String),
}

fuzz_target!(|steps: Vec<Step>| {
    let logger = TimingLogger::new(ManualClock::new(0), MemorySink::new(), LoggerConfig::default());
    let thread = lapse_log::current_thread_name();
    let mut forward_only = true;

    for step in steps {
        match step {
            Step::Set(millis) => {
                if millis < logger.tracker().clock().now_millis() {
                    forward_only = false;
                }
                logger.tracker().clock().set(millis);
            }
            Step::Advance(millis) => {
                let clock = logger.tracker().clock();
                clock.set(clock.now_millis().saturating_add(millis as u64));
            }
            Step::Checkpoint => {
                logger.checkpoint("Fuzz", "cp");
            }
            Step::Format(message) => {
                let out = logger.format(&message);
                let head = format!("({}) [", thread);
                assert!(out.starts_with(&head));
                assert!(out.ends_with(&message));

                let inner = &out[head.len()..out.len() - message.len()];
                let inner = inner.strip_suffix("] ").expect("closing bracket");
                let (elapsed, total) = inner.split_once(',').expect("comma");
                let elapsed: u64 = elapsed.parse().expect("elapsed");
                let total: u64 = total.parse().expect("total");
                if forward_only {
                    assert!(elapsed <= total);
                }
            }
        }
    }
});
