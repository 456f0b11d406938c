//! Example: Running Known-Answer Records
//!
//! Builds the compiled-in registry, runs the reference table plus one
//! deliberately wrong record through an executor, and prints each outcome.
//!
//! Run with: `cargo run --example run_reference -p ctr-kat-runner`

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::unwrap_used)]

use ctr_kat_gen::GeneratorKind;
use ctr_kat_runner::{
    AdaptorClass, ErrorReporter, ExecutionConfig, Executor, Registry, TestRecord,
    reference_records,
};

fn main() {
    let registry = Registry::builtin();
    println!("Registry holds {} bindings", registry.len());

    let mut records = reference_records().unwrap();
    records.push(
        TestRecord::new(GeneratorKind::Philox2x32, 10, &[0, 0], &[0], &[1, 2]).unwrap(),
    );

    let executor = Executor::with_reporter(
        &registry,
        ExecutionConfig { preflight: true },
        ErrorReporter::stderr(),
    );
    let result = executor.execute(&mut records).unwrap();

    println!();
    println!("Record Outcomes");
    println!("===============");
    for (index, outcome) in result.outcomes.iter().enumerate() {
        let status = if outcome.is_published() { "PASS" } else { "FAIL" };
        println!(
            "[{status}] #{index:<3} {}_{} (adaptor errors: {}, engine errors: {})",
            outcome.kind, outcome.rounds, outcome.adaptor_errors, outcome.engine_errors
        );
    }

    println!();
    println!(
        "{} published, {} suppressed in {}ms",
        result.published, result.suppressed, result.duration_ms
    );
    println!(
        "Mismatches counted: single-use {}, engine {}",
        executor.reporter().count(AdaptorClass::SingleUse),
        executor.reporter().count(AdaptorClass::Engine)
    );
}
