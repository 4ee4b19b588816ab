//! routeacl: answer access queries against a config file.
//!
//! Usage: `routeacl <config.yaml> "<VERB> <PATH>" [subjects]`
//!
//! `subjects` is a comma-separated list; any one granted subject grants
//! access. Exit code 0 when granted, 1 when denied, 2 on usage or config
//! errors.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use routeacl_core::{Decision, Subjects};
use routeacl_host::{app_state::AppState, config};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (path, route, subjects) = match args.as_slice() {
        [path, route] => (path, route, Subjects::default()),
        [path, route, subjects] => (path, route, parse_subjects(subjects)),
        _ => {
            eprintln!("usage: routeacl <config.yaml> \"<VERB> <PATH>\" [subjects]");
            return ExitCode::from(2);
        }
    };

    let state = match config::load_from_file(path).and_then(AppState::new) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, config = %path, "config load failed");
            eprintln!("routeacl: {e}");
            return ExitCode::from(2);
        }
    };

    let decision = match state.check(route, subjects) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("routeacl: {e}");
            return ExitCode::from(2);
        }
    };

    let verdict = if decision.is_granted() { "granted" } else { "denied" };
    match &decision {
        Decision::Matched { subject, pattern, .. } => {
            println!("{verdict} (rule: {subject} {pattern})")
        }
        Decision::Default { policy } => println!("{verdict} (default policy: {policy})"),
    }

    if decision.is_granted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn parse_subjects(raw: &str) -> Subjects {
    Subjects::Many(raw.split(',').map(|s| s.trim().to_string()).collect())
}
