//! `capstan apply` command
//!
//! Snapshots the process environment, runs the patcher, prints one notice
//! line on stderr, and emits the changed assignments on stdout for the host
//! build tool to absorb.

use anyhow::Result;

use capstan::ops::apply::{apply_hook, ApplyOptions, HookOutcome};
use capstan::util::config;
use capstan::{BuildEnv, HookContext, HostOs};

use crate::cli::{ApplyArgs, OutputFormat};

pub fn execute(args: ApplyArgs) -> Result<()> {
    let ctx = HookContext::resolve(args.project_dir)?;
    let cfg = config::load_merged(
        ctx.global_config_path().as_deref(),
        &ctx.project_config_path(),
    )?;

    let mut opts = ApplyOptions::from_config(&cfg);
    if args.jobs.is_some() {
        opts.jobs = args.jobs;
    }

    let original = BuildEnv::from_process_env();
    let mut env = original.clone();
    let outcome = apply_hook(&mut env, HostOs::detect(), ctx.project_dir(), &opts);

    match &outcome {
        HookOutcome::SkippedHost => {
            eprintln!("capstan: not a windows host, nothing to do");
        }
        HookOutcome::Disabled => {
            eprintln!("capstan: hook disabled by configuration");
        }
        HookOutcome::SystemToolchain => {
            eprintln!("capstan: tools/bin wrappers not found, using system gcc/g++");
        }
        HookOutcome::Wrappers { tools_bin } => {
            eprintln!(
                "capstan: using toolchain wrappers from {}",
                tools_bin.display()
            );
        }
    }

    emit(&original, &env, &outcome, args.format)
}

/// Print the assignments the hook changed.
///
/// The four wrapper variables appear in both maps; the env format prints the
/// env map only, the json format carries both maps separately.
fn emit(
    original: &BuildEnv,
    patched: &BuildEnv,
    outcome: &HookOutcome,
    format: OutputFormat,
) -> Result<()> {
    let changed: Vec<(&str, &str)> = patched
        .env_iter()
        .filter(|&(key, value)| original.env(key) != Some(value))
        .collect();

    match format {
        OutputFormat::Env => {
            for (key, value) in changed {
                println!("{}={}", key, value);
            }
        }
        OutputFormat::Json => {
            let env: serde_json::Map<String, serde_json::Value> = changed
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect();
            let vars: serde_json::Map<String, serde_json::Value> = patched
                .vars_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect();

            let event = serde_json::json!({
                "outcome": outcome.as_str(),
                "tools_bin": outcome.tools_bin().map(|p| p.display().to_string()),
                "env": env,
                "vars": vars,
            });
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    Ok(())
}
