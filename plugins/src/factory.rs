use std::time::Duration;

use anyhow::{Context, Result};

use oddjobs_core::api::{EchoOracle, VerifyConfig};

use crate::oracle::{ProcessOracle, SolverOracle};

/// Subcommand the default echo child runs when no program is configured.
pub const DEFAULT_CHILD_SUBCOMMAND: &str = "solve";

pub fn build_oracle(cfg: &VerifyConfig) -> Result<Box<dyn EchoOracle>> {
    if cfg.in_process {
        return Ok(Box::new(SolverOracle));
    }

    let oracle = match &cfg.program {
        Some(program) => ProcessOracle::new(program, cfg.args.clone()),
        None => {
            let exe = std::env::current_exe().context("cannot locate the running executable")?;
            let mut args = vec![DEFAULT_CHILD_SUBCOMMAND.to_string()];
            args.extend(cfg.args.iter().cloned());
            ProcessOracle::new(&exe.to_string_lossy(), args)
        }
    };

    tracing::info!(program = %oracle.program().display(), "using process echo oracle");
    Ok(Box::new(
        oracle.with_timeout(cfg.timeout_ms.map(Duration::from_millis)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_process_uses_the_solver() {
        let cfg = VerifyConfig {
            in_process: true,
            ..VerifyConfig::default()
        };
        assert_eq!(build_oracle(&cfg).unwrap().name(), "solver");
    }

    #[test]
    fn configured_program_spawns_children() {
        let cfg = VerifyConfig {
            program: Some("./loesung".to_string()),
            ..VerifyConfig::default()
        };
        assert_eq!(build_oracle(&cfg).unwrap().name(), "process");
    }
}
