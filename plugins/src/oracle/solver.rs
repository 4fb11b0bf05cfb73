use async_trait::async_trait;

use oddjobs_core::api::{probe_input, run_solver, EchoOracle, VerifyError};

use super::first_line;

/// Answers probes with the built-in savehouse solver, without spawning. A
/// solver input error yields no output, as the child process would print
/// nothing on stdout.
#[derive(Debug, Default)]
pub struct SolverOracle;

#[async_trait]
impl EchoOracle for SolverOracle {
    fn name(&self) -> &str {
        "solver"
    }

    async fn echo(&self, value: u32) -> Result<Option<String>, VerifyError> {
        let probe = probe_input(value);
        let mut out = Vec::new();
        match run_solver(probe.as_bytes(), &mut out) {
            Ok(_) => Ok(first_line(&out)),
            Err(e) => {
                tracing::debug!(value, error = %e, "solver rejected probe");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn solver_echoes_small_values() {
        let oracle = SolverOracle;
        for value in 0..50 {
            assert_eq!(oracle.echo(value).await.unwrap(), Some(value.to_string()));
        }
    }

    #[tokio::test]
    async fn out_of_range_probe_prints_nothing() {
        assert_eq!(SolverOracle.echo(4_000_000_000).await.unwrap(), None);
    }
}
