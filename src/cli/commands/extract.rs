//! The `extract` command: scan source code, write the default catalog.

use anyhow::Result;

use super::context::RunContext;
use crate::cli::args::ExtractCommand;
use crate::cli::report::{self, success};
use crate::cli::ExitStatus;
use crate::core::aggregate::AggregateOptions;
use crate::core::extract::ExtractOptions;
use crate::core::pipeline::extract_catalog;
use crate::core::scanner::scan_source_files;
use crate::persist::write_catalog;

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;

    let marker = cmd.marker.unwrap_or_else(|| ctx.config.marker.clone());
    let key_index = cmd.key_index.unwrap_or(ctx.config.key_argument_index);
    let extract_options = ExtractOptions::new(&marker, key_index)?;
    let aggregate_options = AggregateOptions {
        default_locale: ctx.default_locale.clone(),
        key_scheme: ctx.config.key_scheme,
        namespace: ctx.config.namespace.clone(),
    };

    let scan = scan_source_files(&ctx.source_root, &ctx.config.ignores, ctx.verbose)?;
    if scan.skipped_count > 0 {
        report::warn(&format!(
            "{} path(s) skipped due to access errors{}",
            scan.skipped_count,
            if ctx.verbose { "" } else { " (use -v for details)" }
        ));
    }
    if ctx.verbose {
        println!(
            "Scanning {} source file(s) for '{}' calls...",
            scan.files.len(),
            marker
        );
    }

    let outcome = extract_catalog(&scan.files, &extract_options, &aggregate_options);

    for warning in &outcome.site_warnings {
        report::warn(&warning.to_string());
    }
    if !outcome.parse_failures.is_empty() {
        report::warn(&format!(
            "{} file(s) skipped because they could not be parsed{}",
            outcome.parse_failures.len(),
            if ctx.verbose { ":" } else { " (use -v for details)" }
        ));
        if ctx.verbose {
            for failure in &outcome.parse_failures {
                report::warn(&failure.to_string());
            }
        }
    }

    let target = ctx.catalog_path(&ctx.default_locale);
    write_catalog(&target, &outcome.catalog)?;

    success(&format!(
        "Extracted {} message key(s) from {} file(s) to \"{}\"",
        outcome.catalog.len(),
        scan.files.len() - outcome.parse_failures.len(),
        target.display()
    ));

    Ok(if outcome.parse_failures.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
