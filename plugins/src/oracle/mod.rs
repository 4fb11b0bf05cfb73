mod process;
mod solver;

pub use process::ProcessOracle;
pub use solver::SolverOracle;

/// First line of captured output without its terminator; `None` when nothing
/// was printed.
pub(crate) fn first_line(output: &[u8]) -> Option<String> {
    if output.is_empty() {
        return None;
    }
    let line = output.split(|b| *b == b'\n').next().unwrap_or(output);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    Some(String::from_utf8_lossy(line).into_owned())
}
