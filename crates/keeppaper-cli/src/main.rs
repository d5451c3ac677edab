use keeppaper_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        tracing::error!("keeppaper failed: {:#}", err);
        eprintln!("keeppaper error: {:#}", err);
        std::process::exit(1);
    }
}
