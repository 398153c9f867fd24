// Demonstration: run the waste-collection environment with a baseline policy.
//
// Build/run from this repo root:
//   cargo run --example rollout -- --policy greedy --episodes 20 --grid-size 5
//
// Set RUST_LOG=debug to see per-episode and collision logs.

use std::env;

use tracing_subscriber::EnvFilter;
use wastegrid::{
    EnvConfig, EvaluationMetrics, GreedyPolicy, Policy, RandomPolicy, WasteCollectionEnv,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("greedy");
    let episodes: usize = parse_arg(&args, "--episodes").unwrap_or(25);
    let seed: u64 = parse_arg(&args, "--seed").unwrap_or(42);

    let defaults = EnvConfig::default();
    let config = EnvConfig {
        grid_size: parse_arg(&args, "--grid-size").unwrap_or(defaults.grid_size),
        max_steps: parse_arg(&args, "--max-steps").unwrap_or(defaults.max_steps),
        ..defaults
    };

    let mut environment = match WasteCollectionEnv::new(config, seed) {
        Ok(environment) => environment,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(seed)),
        "greedy" => Box::new(GreedyPolicy::new()),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'greedy' or 'random'.", other);
            std::process::exit(2);
        }
    };

    match EvaluationMetrics::evaluate(&mut environment, policy.as_mut(), episodes) {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
        }
        Err(err) => {
            eprintln!("rollout failed: {}", err);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], key: &str) -> Option<T> {
    arg_value(args, key).and_then(|s| s.parse().ok())
}
