//! Session Trace
//!
//! This example runs a scripted session, prints it as an encoded dataset,
//! and resumes it from a checkpoint.
//!
//! Key concepts:
//! - Input scripts with the `inputs!` macro
//! - External resets after ERROR or COFFEE_PRODUCED
//! - Integer dataset rows (token, status and state codes)
//! - Checkpoint and resume
//!
//! Run with: cargo run --example session_trace

use coffee_fsm::checkpoint::Checkpoint;
use coffee_fsm::core::{CleanPolicy, StatusCode};
use coffee_fsm::{inputs, MachineBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Session Trace ===\n");

    let mut session = MachineBuilder::new()
        .clean_policy(CleanPolicy::Reset)
        .build_session();

    let script = inputs![
        pod, water, [water, pod], button, clean,
        water, button,
        water, pod, [pod, pod], clean,
        pod, water, button,
    ];

    for input in script {
        let status = session.step(input).status;
        if status != StatusCode::Ok {
            // Reset the way the training driver does
            session.reset();
        }
    }

    println!("step,input_sequence,output_sequence,current_state");
    for row in session.history().encoded() {
        println!("{},{},{},{}", row.step, row.input, row.output, row.state);
    }

    let checkpoint = Checkpoint::capture(&session);
    let json = checkpoint.to_json()?;
    println!("\nCheckpoint {} ({} bytes as JSON)", checkpoint.id, json.len());

    let mut resumed = Checkpoint::from_json(&json)?.restore()?;
    resumed.run(inputs![pod, water, button]);

    let metadata = resumed.metadata();
    println!("\nResumed session:");
    println!("  steps: {}", resumed.history().len());
    println!("  coffees produced: {}", metadata.coffees_produced);
    println!("  errors: {}", metadata.errors);
    println!("  resets: {}", metadata.resets);
    println!("  state: {}", resumed.current_state_name());

    println!("\n=== Example Complete ===");
    Ok(())
}
