use std::io::Write;

use oddjobs_core::api::{run_range, AppConfig, CliError, VerifyOpts};
use oddjobs_plugins::factory;

use super::cli::VerifyArgs;

pub async fn run(args: VerifyArgs, cfg: &AppConfig) -> Result<(), CliError> {
    let mut verify_cfg = cfg.verify.clone();
    if let Some(program) = args.program {
        verify_cfg.program = Some(program);
    }
    if !args.child_args.is_empty() {
        verify_cfg.args = args.child_args;
    }
    if args.timeout_ms.is_some() {
        verify_cfg.timeout_ms = args.timeout_ms;
    }
    verify_cfg.in_process |= args.in_process;

    let opts = VerifyOpts {
        start: args.start.unwrap_or(verify_cfg.start),
        end: args.end.unwrap_or(verify_cfg.end),
        progress_every: verify_cfg.progress_every,
    };

    let oracle = factory::build_oracle(&verify_cfg)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_range(oracle.as_ref(), &opts, &mut out).await?;

    if args.summary_json {
        let line = serde_json::to_string(&summary).map_err(anyhow::Error::from)?;
        writeln!(out, "{line}").map_err(anyhow::Error::from)?;
    }
    Ok(())
}
