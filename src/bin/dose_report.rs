//! Non-interactive dose report.
//!
//! Prints the reference table, the three model curves and the personal
//! dose total as JSON, for scripting or for feeding another front end.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dose_report -- [--flights N] [--chest-xrays N] [--samples N] [--compact]
//! ```

use radscope::application::ExposureService;
use radscope::domain::DEFAULT_SAMPLES;

const USAGE: &str =
    "Usage: dose_report [--flights N] [--chest-xrays N] [--samples N] [--compact]";

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    let value = value.unwrap_or_default();
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {flag}: {value:?}\n{USAGE}");
        std::process::exit(2);
    })
}

fn main() {
    let mut args = std::env::args().skip(1);
    let mut flights: i64 = 5;
    let mut chest_xrays: i64 = 1;
    let mut samples: usize = DEFAULT_SAMPLES;
    let mut compact = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--flights" => flights = parse_value(&arg, args.next()),
            "--chest-xrays" => chest_xrays = parse_value(&arg, args.next()),
            "--samples" => samples = parse_value(&arg, args.next()),
            "--compact" => compact = true,
            "-h" | "--help" => {
                println!(
                    "{USAGE}\n\nPrints the reference doses, the LNT/Threshold/Hormesis curves over [0, 100] mSv and the annual dose for the given activity counts as JSON."
                );
                return;
            }
            _ => {
                eprintln!("Unknown arg: {arg}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let service = ExposureService::new();
    let report = match service.report(flights, chest_xrays, samples) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    match report.to_json(!compact) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            std::process::exit(1);
        }
    }
}
