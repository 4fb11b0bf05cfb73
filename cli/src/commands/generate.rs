use rand::rngs::StdRng;
use rand::SeedableRng;

use oddjobs_core::api::{generate_files, GenerateError, GenerateSpec};

use super::cli::GenerateArgs;

pub fn run(args: GenerateArgs) -> Result<(), GenerateError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let spec = GenerateSpec {
        nodes: args.nodes,
        mode: args.mode.into(),
    };
    generate_files(&mut rng, &spec, &args.graph_out, &args.expected_out)?;
    Ok(())
}
