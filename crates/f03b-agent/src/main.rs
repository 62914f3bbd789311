//! CLI entry point for running clean steps by hand.
//!
//! Operators use this on a booted rescue image to run individual BIOS
//! steps outside a full host-agent clean cycle.

use clap::{Arg, ArgAction, Command};
use f03b_agent::{clean_step_registrations, evaluate_hardware_support, HARDWARE_MANAGER_VERSION};
use f03b_steps::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("f03b-agent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Quanta F03B BIOS clean-step plugin")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list-steps")
                .about("List the clean steps this plugin registers")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("run-step")
                .about("Run a single clean step against this node")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .help("Registered step name (see list-steps)"),
                )
                .arg(
                    Arg::new("bios-dir")
                        .long("bios-dir")
                        .default_value(DEFAULT_BIOS_DIR)
                        .help("Directory holding the vendor BIOS scripts"),
                )
                .arg(
                    Arg::new("context")
                        .long("context")
                        .help("Path to a JSON file with the node/port context"),
                ),
        )
        .subcommand(Command::new("support").about("Report the hardware support level"));

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("list-steps", args)) => {
            let registrations = clean_step_registrations();
            if args.get_flag("json") {
                match serde_json::to_string_pretty(&registrations) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to encode steps: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                for reg in registrations {
                    println!(
                        "{:<24} priority={:<3} interface={:?} reboot_requested={}",
                        reg.step, reg.priority, reg.interface, reg.reboot_requested
                    );
                }
            }
        }
        Some(("run-step", args)) => {
            let name = args.get_one::<String>("name").unwrap();
            let bios_dir = args.get_one::<String>("bios-dir").unwrap();

            let context = match args.get_one::<String>("context") {
                Some(path) => match load_context(path) {
                    Ok(context) => context,
                    Err(e) => {
                        eprintln!("Failed to load context from {path}: {e:#}");
                        std::process::exit(1);
                    }
                },
                None => ExecutionContext::default(),
            };

            tracing::info!(step = %name, bios_dir = %bios_dir, "manual clean step requested");
            let executor = StepExecutor::new(bios_dir).with_metrics(Arc::new(TracingMetrics));

            match executor.run_step(name, &context) {
                Ok(result) => {
                    print!("{}", result.output);
                    println!("Step '{name}' succeeded");
                }
                Err(err) => {
                    eprintln!("Step '{name}' failed: {err}");
                    if let Some(output) = err.output() {
                        eprint!("{output}");
                    }
                    std::process::exit(err.exit_code().map_or(1, |code| code.max(1)));
                }
            }
        }
        Some(("support", _)) => {
            println!(
                "support={:?} manager_version={}",
                evaluate_hardware_support(),
                HARDWARE_MANAGER_VERSION
            );
        }
        _ => unreachable!("arg_required_else_help"),
    }
}

fn load_context(path: &str) -> anyhow::Result<ExecutionContext> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
