use std::io;

use oddjobs_core::api::run_solver;

/// Returns the process exit code: 0 on success, 1 on any input error.
pub fn run() -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_solver(stdin.lock(), stdout.lock()) {
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "solver failed");
            eprintln!("{e}");
            1
        }
    }
}
