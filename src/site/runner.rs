/// Forwarding to the host site generator.
///
/// The pipeline subcommands (`build`, `start`, `serve`, `deploy`, `swizzle`)
/// are thin wrappers: each builds an argv from its parsed flags and hands it
/// to the generator process. Argv construction is pure so it can be tested
/// without spawning anything.
use std::path::Path;
use std::process::Command;

use crate::cli::args::{BuildArgs, DeployArgs, ServeArgs, StartArgs, SwizzleArgs};

use super::errors::SiteError;

/// Environment variable overriding the generator binary.
pub const GENERATOR_ENV: &str = "SITECLI_GENERATOR";

/// Generator binary used when [`GENERATOR_ENV`] is unset.
pub const DEFAULT_GENERATOR: &str = "docusaurus";

/// Resolve the generator program to invoke.
#[must_use]
pub fn generator_program() -> String {
    std::env::var(GENERATOR_ENV).unwrap_or_else(|_| DEFAULT_GENERATOR.to_owned())
}

/// Argv for `build`.
#[must_use]
pub fn build_args(args: &BuildArgs) -> Vec<String> {
    let mut argv = vec!["build".to_owned()];
    push_path_opt(&mut argv, "--out-dir", args.out_dir.as_deref());
    push_path_opt(&mut argv, "--config", args.config.as_deref());
    push_opt(&mut argv, "--locale", args.locale.as_deref());
    push_flag(&mut argv, "--no-minify", args.no_minify);
    push_flag(&mut argv, "--dev", args.dev);
    argv
}

/// Argv for `start`.
#[must_use]
pub fn start_args(args: &StartArgs) -> Vec<String> {
    let mut argv = vec![
        "start".to_owned(),
        "--port".to_owned(),
        args.port.to_string(),
        "--host".to_owned(),
        args.host.clone(),
    ];
    push_opt(&mut argv, "--locale", args.locale.as_deref());
    push_flag(&mut argv, "--no-open", args.no_open);
    push_flag(&mut argv, "--poll", args.poll);
    argv
}

/// Argv for `serve`.
#[must_use]
pub fn serve_args(args: &ServeArgs) -> Vec<String> {
    let mut argv = vec![
        "serve".to_owned(),
        "--port".to_owned(),
        args.port.to_string(),
        "--host".to_owned(),
        args.host.clone(),
        "--dir".to_owned(),
        args.dir.to_string_lossy().into_owned(),
    ];
    push_flag(&mut argv, "--build", args.build);
    push_flag(&mut argv, "--no-open", args.no_open);
    argv
}

/// Argv for `deploy`.
#[must_use]
pub fn deploy_args(args: &DeployArgs) -> Vec<String> {
    let mut argv = vec!["deploy".to_owned()];
    push_opt(&mut argv, "--locale", args.locale.as_deref());
    push_path_opt(&mut argv, "--out-dir", args.out_dir.as_deref());
    push_flag(&mut argv, "--skip-build", args.skip_build);
    argv
}

/// Argv for `swizzle`.
#[must_use]
pub fn swizzle_args(args: &SwizzleArgs) -> Vec<String> {
    let mut argv = vec!["swizzle".to_owned()];
    if let Some(theme) = &args.theme {
        argv.push(theme.clone());
    }
    if let Some(component) = &args.component {
        argv.push(component.clone());
    }
    push_flag(&mut argv, "--typescript", args.typescript);
    push_flag(&mut argv, "--danger", args.danger);
    push_flag(&mut argv, "--eject", args.eject);
    push_flag(&mut argv, "--wrap", args.wrap);
    push_flag(&mut argv, "--list", args.list);
    argv
}

/// Run the generator with the given argv, inheriting stdio.
///
/// # Errors
///
/// - `SiteError::Spawn` — the binary could not be launched
/// - `SiteError::Failed` — the generator exited with a nonzero code
/// - `SiteError::Interrupted` — the generator died without an exit code
pub fn run_generator(argv: &[String]) -> Result<(), SiteError> {
    let program = generator_program();
    let status = Command::new(&program)
        .args(argv)
        .status()
        .map_err(|source| SiteError::Spawn {
            program: program.clone(),
            source,
        })?;

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(SiteError::Failed { program, code }),
        None => Err(SiteError::Interrupted { program }),
    }
}

fn push_flag(argv: &mut Vec<String>, flag: &str, on: bool) {
    if on {
        argv.push(flag.to_owned());
    }
}

fn push_opt(argv: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        argv.push(flag.to_owned());
        argv.push(value.to_owned());
    }
}

fn push_path_opt(argv: &mut Vec<String>, flag: &str, value: Option<&Path>) {
    if let Some(value) = value {
        argv.push(flag.to_owned());
        argv.push(value.to_string_lossy().into_owned());
    }
}
