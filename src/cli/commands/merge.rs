//! The `merge` command: reconcile the default catalog with other locales.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use super::context::RunContext;
use crate::cli::args::MergeCommand;
use crate::cli::report::{MergeReport, success};
use crate::cli::ExitStatus;
use crate::core::catalog::Catalog;
use crate::core::merge::merge;
use crate::core::scanner::{locale_name, scan_locale_files};
use crate::persist::{read_catalog, read_catalog_if_exists, write_catalog};

pub fn run_merge(cmd: MergeCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;

    let source_path = ctx.catalog_path(&ctx.default_locale);
    let source = read_catalog(&source_path).with_context(|| {
        format!(
            "No catalog for default locale '{}'; run `lingot extract` first",
            ctx.default_locale
        )
    })?;

    let targets = merge_targets(&ctx, cmd.locale.as_deref())?;
    if targets.is_empty() {
        success(&format!(
            "No other locale files in \"{}\"; nothing to merge",
            ctx.messages_root.display()
        ));
        return Ok(ExitStatus::Success);
    }

    let mut report = cmd.report.then(MergeReport::new);
    if let Some(report) = &mut report {
        report.push_default(&ctx.default_locale, source.len());
    }

    for (locale, path) in &targets {
        let existing = read_catalog_if_exists(path)?;
        let created = existing.is_none();
        let target = existing.unwrap_or_else(Catalog::new);

        let (merged, stats) = merge(&source, &target);
        write_catalog(path, &merged)?;

        if let Some(report) = &mut report {
            report.push(locale, merged.len(), stats);
        }
        if created {
            success(&format!(
                "Messages saved to new locale \"{}\"",
                path.display()
            ));
        } else {
            success(&format!("Messages merged with \"{}\"", path.display()));
        }
    }

    if let Some(report) = &report {
        report.print();
    }

    Ok(ExitStatus::Success)
}

/// Locales to merge into, as `(locale, file path)` pairs.
///
/// With `--locale` the single named target is used whether or not its file
/// exists yet. Otherwise every locale file in the messages root except the
/// default locale's own is merged, in lexicographic order.
fn merge_targets(
    ctx: &RunContext,
    only_locale: Option<&str>,
) -> Result<Vec<(String, PathBuf)>> {
    if let Some(locale) = only_locale {
        if locale == ctx.default_locale {
            bail!("Cannot merge the default locale '{}' into itself", locale);
        }
        return Ok(vec![(locale.to_string(), ctx.catalog_path(locale))]);
    }

    let files = scan_locale_files(&ctx.messages_root)?;
    Ok(files
        .into_iter()
        .filter_map(|path| locale_name(&path).map(|locale| (locale, path)))
        .filter(|(locale, _)| *locale != ctx.default_locale)
        .collect())
}
