use oddjobs_core::api::{run_remap, AppConfig, RemapError, RemapSpec, RetryRange};

use super::cli::RemapArgs;

pub fn run(args: RemapArgs, cfg: &AppConfig) -> Result<(), RemapError> {
    let retry = if args.bounded_retry {
        RetryRange::Bounded
    } else {
        cfg.remap.retry
    };
    let spec = RemapSpec::default().with_retry(retry);

    let mut rng = rand::thread_rng();
    let stdout = std::io::stdout();
    run_remap(&mut rng, &spec, &mut stdout.lock())?;
    Ok(())
}
