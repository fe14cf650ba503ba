//! Interactive Coffee Machine
//!
//! This example drives the coffee machine from standard input.
//!
//! Key concepts:
//! - Text inputs: `water`, `pod`, `button`, `clean`
//! - Batches as bracketed token lists: `[water,pod]` or `[pod]`
//! - The trap state and the external `reset` command
//!
//! Run with: cargo run --example interactive
//! Set RUST_LOG=debug to see every step logged.

use coffee_fsm::core::Input;
use coffee_fsm::session::Session;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Coffee Machine Simulator ===\n");
    println!("Enter water, pod, button or clean, a batch such as [water,pod],");
    println!("'reset' to put the machine back in its initial state, or 'exit'.");

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("\n[{}] > ", session.current_state_name());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "exit" => break,
            "reset" => {
                session.reset();
                continue;
            }
            _ => {}
        }

        let input: Input = match line.parse() {
            Ok(input) => input,
            Err(e) => {
                println!("Invalid input: {e}");
                continue;
            }
        };

        let record = session.step(input);
        println!(
            "Input: {} -> Output: {} ({}), New State: {}",
            record.input,
            record.status.code(),
            record.status,
            record.to
        );
    }

    let metadata = session.metadata();
    println!("\nSteps: {}", session.history().len());
    println!("Coffees produced: {}", metadata.coffees_produced);
    println!("Errors: {}", metadata.errors);
    println!("\n=== Simulator Closed ===");
    Ok(())
}
