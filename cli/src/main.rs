//! Fourier Series CLI
//!
//! Command-line interface for the Fourier library.
//! Provides an interactive shell for sampling functions, inspecting their
//! spectrum and coefficients and evaluating the reconstructed series.

use std::process;

use clap::{Arg, ArgAction, Command};
use fourier_lib::{
    evaluate,
    utils::{self, presets},
    FourierConfig, FourierProcessor,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Application state
struct AppState {
    processor: FourierProcessor,
}

impl AppState {
    fn new(config: FourierConfig) -> fourier_lib::Result<Self> {
        Ok(Self {
            processor: FourierProcessor::with_config(config)?,
        })
    }
}

/// What the shell should do after a command
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// Print the help message showing available commands
fn print_help() {
    println!("Available commands:");
    println!("  func <expression>                  - Set the function f(x) and analyze it");
    println!("  preset <n>                         - Use an example function");
    println!("  presets                            - List example functions");
    println!("  set size <n>                       - Set transform size (power of 2)");
    println!("  set points <m>                     - Set number of reconstruction points");
    println!("  config                             - Show current configuration");
    println!("  points [count]                     - Show samples of f(x) (default: transform size)");
    println!("  spectrum                           - Show the transform bins");
    println!("  coeffs                             - Show the series coefficients a[k], b[k]");
    println!("  formula                            - Show the series as a formula");
    println!("  interp [count]                     - Show the reconstructed series at count points");
    println!("  eval <x>                           - Evaluate f(x) and the series at x (x may be an expression)");
    println!("  info                               - Show analysis summary");
    println!("  help                               - Show this help message");
    println!("  quit                               - Exit the program");
    println!();
    println!("Function syntax:");
    println!("  numbers, pi, x, + - * / ^, ( ), |...| for absolute value");
    println!("  functions: sin cos tan asin acos atan sinh cosh tanh exp sqrt ln log abs sign floor ceil");
    println!("  implicit multiplication: 2x, 2(x+1), pi|x|, sin(x)cos(x)");
    println!();
    println!("Examples:");
    println!("  func pi*(pi-x)");
    println!("  set size 64");
    println!("  coeffs");
    println!("  eval pi/2");
    println!("  interp 32");
}

fn require_analysis(state: &AppState) -> bool {
    if state.processor.has_analysis() {
        true
    } else {
        println!("No function analyzed. Use 'func <expression>' first.");
        false
    }
}

fn parse_count(arg: Option<&&str>, default: usize) -> Option<usize> {
    match arg {
        None => Some(default),
        Some(value) => match value.parse::<usize>() {
            Ok(count) if count > 0 => Some(count),
            _ => {
                println!("Invalid count: {}", value);
                None
            }
        },
    }
}

fn set_function(state: &mut AppState, expr: &str) {
    match state.processor.set_expression(expr) {
        Ok(analysis) => {
            println!("f(x) = {}", expr);
            println!(
                "S(x) = {}",
                utils::series_formula(&analysis.coefficients, 1e-9)
            );
        }
        Err(e) => {
            log::debug!("Rejected expression '{}': {:?}", expr, e);
            println!("Error: {}", e);
        }
    }
}

/// Process a user command
fn process_command(command: &str, state: &mut AppState) -> Flow {
    let parts: Vec<&str> = command.split_whitespace().collect();

    if parts.is_empty() {
        return Flow::Continue;
    }

    match parts[0] {
        "func" | "f" => {
            let expr = command.trim_start()[parts[0].len()..].trim();
            if expr.is_empty() {
                println!("Usage: func <expression>");
            } else {
                set_function(state, expr);
            }
        }

        "preset" => {
            if parts.len() != 2 {
                println!("Usage: preset <number>");
                return Flow::Continue;
            }

            match parts[1].parse::<usize>() {
                Ok(n) => match presets::get_preset(n) {
                    Some(preset) => {
                        println!("Using preset {}: {}", n, preset.name);
                        set_function(state, preset.expression);
                    }
                    None => println!("Invalid preset number: {}", n),
                },
                Err(_) => println!("Invalid preset number: {}", parts[1]),
            }
        }

        "presets" => {
            println!("Available presets:");
            for preset in presets::list_presets() {
                println!(
                    "  {}: {:<16} {:<14} {}",
                    preset.id, preset.name, preset.expression, preset.description
                );
            }
        }

        "set" => {
            if parts.len() != 3 {
                println!("Usage: set <parameter> <value>");
                println!("Parameters: size, points");
                return Flow::Continue;
            }

            let param = parts[1];
            let value = parts[2];
            let current = *state.processor.config();

            let new_config = match (param, value.parse::<usize>()) {
                ("size", Ok(size)) => current.with_size(size),
                ("points", Ok(points)) => current.with_plot_points(points),
                ("size" | "points", Err(_)) => {
                    println!("Invalid {}: {}", param, value);
                    return Flow::Continue;
                }
                _ => {
                    println!("Unknown parameter: {}", param);
                    println!("Valid parameters: size, points");
                    return Flow::Continue;
                }
            };

            match new_config.and_then(|config| state.processor.set_config(config)) {
                Ok(()) => println!("{} set to {}", param, value),
                Err(e) => println!("Error setting {}: {}", param, e),
            }
        }

        "config" => {
            let config = state.processor.config();
            println!("Current configuration:");
            println!("  Transform size: {}", config.size);
            println!("  Series degree: {}", config.degree());
            println!("  Plot points: {}", config.plot_points);
        }

        "points" => {
            if !require_analysis(state) {
                return Flow::Continue;
            }
            let size = state.processor.config().size;
            if let Some(count) = parse_count(parts.get(1), size) {
                if count == size {
                    if let Some(analysis) = state.processor.analysis() {
                        print!("{}", utils::format_points(&analysis.points));
                    }
                } else if let Some(points) = state.processor.function_points_with(count) {
                    print!("{}", utils::format_points(&points));
                }
            }
        }

        "spectrum" => {
            if let Some(analysis) = state.processor.analysis() {
                print!("{}", utils::format_spectrum(&analysis.spectrum));
            } else {
                require_analysis(state);
            }
        }

        "coeffs" => {
            if let Some(analysis) = state.processor.analysis() {
                print!("{}", utils::format_coefficients(&analysis.coefficients));
            } else {
                require_analysis(state);
            }
        }

        "formula" => {
            if let Some(analysis) = state.processor.analysis() {
                println!(
                    "S(x) = {}",
                    utils::series_formula(&analysis.coefficients, 1e-9)
                );
            } else {
                require_analysis(state);
            }
        }

        "interp" => {
            if !require_analysis(state) {
                return Flow::Continue;
            }
            let default = state.processor.config().plot_points;
            if let Some(count) = parse_count(parts.get(1), default) {
                if let Some(points) = state.processor.interpolate_with(count) {
                    print!("{}", utils::format_points(&points));
                }
            }
        }

        "eval" => {
            if !require_analysis(state) {
                return Flow::Continue;
            }
            let arg = command.trim_start()[parts[0].len()..].trim();
            if arg.is_empty() {
                println!("Usage: eval <x>");
                return Flow::Continue;
            }

            // The position itself may be written as an expression, e.g. pi/3
            match evaluate(arg, 0.0) {
                Ok(x) => {
                    let f = state.processor.evaluate_function(x).unwrap_or(f64::NAN);
                    let s = state.processor.evaluate_series(x).unwrap_or(f64::NAN);
                    println!("x    = {}", utils::format_angle(x));
                    println!("f(x) = {}", utils::format_value(f));
                    println!("S(x) = {}", utils::format_value(s));
                    println!("diff = {}", utils::format_value(s - f));
                }
                Err(e) => println!("Invalid position: {}", e),
            }
        }

        "info" | "status" => {
            print!("{}", utils::analysis_summary(&state.processor));
        }

        "help" => print_help(),

        "quit" | "exit" => return Flow::Quit,

        _ => {
            println!("Unknown command: '{}'", parts[0]);
            println!("Type 'help' for available commands");
        }
    }

    Flow::Continue
}

fn main() {
    // Parse command line arguments
    let matches = Command::new("Fourier Series")
        .version(fourier_lib::VERSION)
        .about("Fourier series analysis of periodic functions")
        .arg(
            Arg::new("expression")
                .help("Function of x to analyze on startup, e.g. \"pi*(pi-x)\"")
                .value_name("EXPRESSION")
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .short('n')
                .help("Transform size (power of 2)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("points")
                .long("points")
                .short('p')
                .help("Number of reconstruction points")
                .value_name("M")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Print the analysis of EXPRESSION and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Initialize the library
    fourier_lib::init();

    let defaults = FourierConfig::default();
    let size = matches
        .get_one::<usize>("size")
        .copied()
        .unwrap_or(defaults.size);
    let points = matches
        .get_one::<usize>("points")
        .copied()
        .unwrap_or(defaults.plot_points);

    let mut state = match FourierConfig::new(size, points).and_then(AppState::new) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let once = matches.get_flag("once");
    if let Some(expr) = matches.get_one::<String>("expression") {
        let result = state.processor.set_expression(expr).map(|_| ());
        match result {
            Ok(()) if once => {
                print!("{}", utils::analysis_summary(&state.processor));
                process_command("coeffs", &mut state);
                process_command("formula", &mut state);
                return;
            }
            Ok(()) => println!("{}", utils::analysis_summary(&state.processor)),
            Err(e) => {
                eprintln!("Error: {}", e);
                if once {
                    process::exit(1);
                }
            }
        }
    } else if once {
        eprintln!("--once requires an EXPRESSION");
        process::exit(2);
    }

    println!("Fourier Series v{}", fourier_lib::VERSION);
    println!("Type 'help' for available commands\n");

    // Setup readline
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {}", e);
            process::exit(1);
        }
    };

    // Main command loop
    loop {
        let readline = rl.readline("fourier> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    rl.add_history_entry(trimmed).ok();
                    if process_command(trimmed, &mut state) == Flow::Quit {
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                log::error!("Readline failure: {:?}", err);
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
}
