// Enable warnings for all clippy lints.
#![warn(
    clippy::correctness,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::cargo,
    clippy::restriction
)]
// Selectively disable warnings for some lints.
#![allow(
    clippy::indexing_slicing, // Allow `vec[i]` indexing.
    clippy::module_name_repetitions,  // Allow name repetitions in module and type names.
    clippy::use_debug, // Debug formatting is useful.
    clippy::missing_docs_in_private_items, // Disabled.
    clippy::missing_inline_in_public_items, // Not considered for now.
    clippy::implicit_return, // Allow.
    clippy::use_self, // Too pedantic.
    clippy::multiple_crate_versions, // Beyond our control.
    clippy::result_expect_used,
    clippy::unknown_clippy_lints
)]
// Mark some lints as errors.
#![deny(clippy::print_stdout)]

use clap::{arg_enum, value_t, App, Arg, ArgMatches};
use log::{info, Level};
use std::num::NonZeroUsize;
use tempograph::analysis::{run_analysis, AnalysisConfig};
use tempograph::error::TGError;
use tempograph::snapshot::loader::parse_date;
use tempograph::temporal::DEFAULT_YEARS_WINDOW;
use tempograph::util::logger::init_logger_with_level;
use tempograph::util::timer::TgTimer;

arg_enum! {
    #[derive(PartialEq, Debug)]
    pub enum LogLevel {
        Error,
        Warn,
        Info,
        Debug,
        Trace,
    }
}

fn main() -> Result<(), TGError> {
    // Parse command line arguments.
    let matches = App::new("tempograph")
        .about("Builds temporal co-presence graphs from tie snapshots and reports their metrics")
        .arg(
            Arg::from_usage("-l, --loglevel=[LEVEL] 'Set the log level'")
                .possible_values(&LogLevel::variants())
                .case_insensitive(true),
        )
        .arg(
            Arg::from_usage("-d, --dates=<DATE>... 'Threshold dates (YYYY-MM-DD), one graph each'")
                .use_delimiter(true),
        )
        .arg(
            Arg::from_usage("-w, --years-window=[YEARS] 'Length of the trailing window in years'")
                .allow_hyphen_values(true),
        )
        .args_from_usage(
            "-a, --aggregated 'Also report the undated aggregation of all snapshots'
            -t, --threads=[N] 'Worker threads for metric evaluation'
            -o, --output=[FILE] 'Write the metrics table to a CSV file'
            <tie_files>... 'CSV tie lists, one snapshot collection each'",
        )
        .get_matches();

    setup_logger(&matches)?;

    let config = parse_config(&matches)?;
    let timer = TgTimer::now();
    let table = run_analysis(&config)?;
    if let Some(output) = matches.value_of("output") {
        table.write_csv_file(output)?;
        info!("Wrote metrics of {} graphs to '{}'", table.columns().len(), output);
    } else {
        info!("Metrics:\n{}", table);
    }
    info!("[Done][{}]", timer.elapsed().to_seconds_string());

    Ok(())
}

fn parse_config(matches: &ArgMatches) -> Result<AnalysisConfig, TGError> {
    let tie_files =
        matches.values_of("tie_files").into_iter().flatten().map(str::to_owned).collect();
    let threshold_dates = matches
        .values_of("dates")
        .into_iter()
        .flatten()
        .map(parse_date)
        .collect::<Result<Vec<_>, _>>()?;
    let years_window = match matches.value_of("years-window") {
        Some(value) => value
            .parse::<i32>()
            .map_err(|e| TGError::Parse(value.to_owned(), format!("years window: {}", e)))?,
        None => DEFAULT_YEARS_WINDOW,
    };
    let threads = match matches.value_of("threads") {
        Some(value) => value
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| TGError::Generic("Threads should be a positive number".to_owned()))?,
        None => NonZeroUsize::new(1).expect("Unreachable"),
    };
    Ok(AnalysisConfig::new(
        tie_files,
        threshold_dates,
        years_window,
        matches.is_present("aggregated"),
        threads,
    ))
}

fn setup_logger(matches: &ArgMatches) -> Result<(), TGError> {
    // Set log level.
    let log_level = match value_t!(matches, "loglevel", LogLevel).unwrap_or(LogLevel::Info) {
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    };
    init_logger_with_level(log_level)
}
