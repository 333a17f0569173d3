// ============================================================================
// mtfps-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// Log records go to stderr so they never mix with the summaries on stdout.
// - default: warnings and errors only
// - --verbose: debug
// - RUST_LOG overrides both (e.g. RUST_LOG=mtfps_core=trace)

use console::style;
use log::LevelFilter;
use std::io::Write;

/// Returns the level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes the global logger. Calling it twice is harmless.
pub fn init_logging(verbose: bool) {
    let level = default_level(verbose);

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => style("ERROR").red().bold(),
                log::Level::Warn => style("WARN ").yellow(),
                log::Level::Info => style("INFO ").green(),
                log::Level::Debug => style("DEBUG").blue(),
                log::Level::Trace => style("TRACE").magenta(),
            };
            writeln!(buf, "{} {}", level_str.for_stderr(), record.args())
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with level: {}", level);
    }
}
