// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Ink Resistivity Application
//!
//! Command line front end that runs one of the built-in comparisons, writes
//! the chart to an image and optionally shows it in a window.

use anyhow::{bail, Context, Result};
use ink_resistivity::{
    display, get_default_config, run_scenario, AppConfig, Catalog, ComparativePlot,
    DerivedQuantityEngine, Scenario, ScenarioOutput,
};
use std::env;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();
    setup_signal_handlers()?;

    let args: Vec<String> = env::args().skip(1).collect();

    let mut scenario = None;
    let mut config = get_default_config();

    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-v" => {
                print_version();
                return Ok(());
            }
            "--list" | "-l" => {
                print_scenarios();
                return Ok(());
            }
            "--no-window" => config.show_window = false,
            name if name.starts_with('-') => {
                eprintln!("Error: Unknown option '{name}'");
                print_usage();
                std::process::exit(1);
            }
            name => {
                if scenario.is_some() {
                    eprintln!("Error: Too many arguments");
                    print_usage();
                    std::process::exit(1);
                }
                match Scenario::from_name(name) {
                    Some(s) => scenario = Some(s),
                    None => bail!("unknown scenario '{name}', see --list"),
                }
            }
        }
    }

    run(scenario.unwrap_or_default(), &config)
}

fn run(scenario: Scenario, config: &AppConfig) -> Result<()> {
    let catalog = Catalog::standard().context("failed to build the material catalog")?;
    let engine = DerivedQuantityEngine::default();

    let output = run_scenario(scenario, &catalog, &engine)
        .with_context(|| format!("failed to run scenario '{}'", scenario.name()))?;

    match output {
        ScenarioOutput::Chart(plot) => {
            print_summaries(&plot);
            display(&plot, config).with_context(|| {
                format!("failed to render chart to {}", config.output_path.display())
            })?;
            println!("Chart written to {}", config.output_path.display());
        }
        ScenarioOutput::Report(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn print_summaries(plot: &ComparativePlot) {
    if plot.summaries().is_empty() {
        return;
    }

    println!("group\tmean\tstdev\tmin\tmax (Ω)");
    for summary in plot.summaries() {
        println!("{}\t{}", summary.label, summary.statistics);
    }
    println!();
}

fn print_scenarios() {
    println!("SCENARIOS:");
    for scenario in Scenario::ALL {
        let marker = if scenario == Scenario::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "    {:<24}{}{marker}",
            scenario.name(),
            scenario.description()
        );
    }
}

fn print_help() {
    println!("{}", ink_resistivity::get_library_info());
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] [SCENARIO]", env!("CARGO_PKG_NAME"));
    println!();
    println!("ARGS:");
    println!(
        "    <SCENARIO>    Comparison to run (default: {})",
        Scenario::default().name()
    );
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message");
    println!("    -v, --version    Print version information");
    println!("    -l, --list       List available scenarios");
    println!("        --no-window  Write the chart image without opening a window");
    println!();
    print_scenarios();
    println!();
    println!("EXAMPLES:");
    println!(
        "    {}                          # Carbon trace resistance vs width",
        env!("CARGO_PKG_NAME")
    );
    println!(
        "    {} sheet-resistance         # Sheet resistance chart",
        env!("CARGO_PKG_NAME")
    );
    println!(
        "    {} thickness-check          # Print implied film thicknesses",
        env!("CARGO_PKG_NAME")
    );
}

fn print_version() {
    println!("{} v{}", ink_resistivity::NAME, ink_resistivity::VERSION);
    println!("{}", ink_resistivity::DESCRIPTION);
    println!();
    println!("Build information:");
    println!(
        "  Profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );
}

fn print_usage() {
    eprintln!("Usage: {} [OPTIONS] [SCENARIO]", env!("CARGO_PKG_NAME"));
    eprintln!(
        "Try '{} --help' for more information.",
        env!("CARGO_PKG_NAME")
    );
}

// Handle Ctrl+C gracefully
fn setup_signal_handlers() -> Result<()> {
    ctrlc::set_handler(move || {
        println!("\nReceived Ctrl+C, shutting down gracefully...");
        std::process::exit(0);
    })
    .context("Error setting Ctrl+C handler")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_function_with_help() {
        // Should not panic
        print_help();
        print_version();
        print_usage();
        print_scenarios();
    }

    #[test]
    fn test_report_scenario_runs_without_window() {
        let config = get_default_config().with_window(false);
        run(Scenario::ThicknessCheck, &config).unwrap();
    }

    #[test]
    fn test_print_summaries() {
        let catalog = Catalog::standard().unwrap();
        let engine = DerivedQuantityEngine::default();
        let ScenarioOutput::Chart(plot) =
            run_scenario(Scenario::TraceResistance, &catalog, &engine).unwrap()
        else {
            panic!("expected a chart");
        };

        // Should not panic
        print_summaries(&plot);
    }
}
