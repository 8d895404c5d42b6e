//! Command dispatch and the check pipeline.
//!
//! Files are read and parsed in parallel with rayon; each file gets its own
//! `Arc<SourceMap>` so passes stay fully independent across threads.

use std::{collections::BTreeSet, fs, path::Path, sync::Arc};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use super::{
    args::{Arguments, CheckCommand, Command},
    exit_status::ExitStatus,
    report,
};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json, load_config},
    core::{FileChecker, parse_source, scan_files},
    issues::{Issue, ParseErrorIssue, Rule},
    rules::{self, LintRule},
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        Some(Command::Rules) => {
            print_rules();
            Ok(ExitStatus::Success)
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}

fn print_rules() {
    for rule in rules::ALL {
        println!(
            "{}  {}{}",
            rule.meta.id.to_string().bold(),
            rule.meta.description,
            if rule.meta.fixable {
                " (fixable)".dimmed().to_string()
            } else {
                String::new()
            }
        );
        println!("  {}", rule.meta.url.dimmed());
    }
}

/// Resolve the rules to run: CLI selection wins over the config file.
fn selected_rules(cmd: &CheckCommand, config_rules: &[String]) -> Vec<&'static LintRule> {
    let ids: BTreeSet<Rule> = if cmd.checks.is_empty() {
        rules::ALL
            .iter()
            .filter(|rule| config_rules.contains(&rule.meta.id.to_string()))
            .map(|rule| rule.meta.id)
            .collect()
    } else {
        cmd.checks.iter().map(|check| check.id()).collect()
    };

    ids.into_iter().filter_map(rules::find).collect()
}

fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let base_dir = Path::new(&cmd.path);
    if !base_dir.is_dir() {
        bail!("Not a directory: {}", cmd.path);
    }

    let load_result = load_config(base_dir)
        .with_context(|| format!("Failed to load configuration for {}", cmd.path))?;
    let config = load_result.config;
    if cmd.verbose && !load_result.from_file {
        eprintln!("No {} found, using defaults", CONFIG_FILE_NAME);
    }

    let module_name = cmd.module.clone().unwrap_or_else(|| config.module.clone());
    let rules = selected_rules(&cmd, &config.rules);
    if rules.is_empty() {
        bail!("No rules enabled");
    }

    let scan_result = scan_files(
        &cmd.path,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        cmd.verbose,
    );
    let mut files: Vec<String> = scan_result.files.into_iter().collect();
    files.sort();

    if cmd.verbose {
        eprintln!("Checking {} source files", files.len());
        if scan_result.skipped_count > 0 {
            eprintln!("Skipped {} unreadable entries", scan_result.skipped_count);
        }
    }

    let issues: Vec<Issue> = files
        .par_iter()
        .flat_map(|file_path| {
            let code = match fs::read_to_string(file_path) {
                Ok(code) => code,
                Err(e) => {
                    return vec![Issue::ParseError(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: format!("Failed to read file: {}", e),
                    })];
                }
            };

            // Each thread creates its own SourceMap
            let source_map = Arc::new(SourceMap::default());
            match parse_source(code, file_path, source_map.clone()) {
                Ok(parsed) => {
                    let checker = FileChecker::new(file_path, &source_map, &rules, &module_name);
                    checker.check(&parsed.module)
                }
                Err(e) => vec![Issue::ParseError(ParseErrorIssue {
                    file_path: file_path.clone(),
                    error: e.to_string(),
                })],
            }
        })
        .collect();

    if issues.is_empty() {
        report::print_success(files.len());
        Ok(ExitStatus::Success)
    } else {
        report::report(&issues);
        Ok(ExitStatus::Failure)
    }
}
