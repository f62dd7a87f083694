//! The `convert` command: map catalogs to/from the flat external format.

use anyhow::{Result, bail};

use super::context::RunContext;
use crate::cli::args::ConvertCommand;
use crate::cli::report::success;
use crate::cli::ExitStatus;
use crate::core::convert::{externalize, internalize};
use crate::core::scanner::scan_locale_files;
use crate::persist::{read_catalog, read_flat, write_catalog, write_flat};

pub fn convert(cmd: ConvertCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;

    let files = scan_locale_files(&ctx.messages_root)?;
    if files.is_empty() {
        bail!(
            "No locale files found in \"{}\"",
            ctx.messages_root.display()
        );
    }

    for path in &files {
        let file_name = path
            .file_name()
            .expect("locale files always have a file name");
        let out_path = cmd.out.join(file_name);

        if cmd.import {
            let flat = read_flat(path)?;
            write_catalog(&out_path, &internalize(&flat))?;
        } else {
            let catalog = read_catalog(path)?;
            write_flat(&out_path, &externalize(&catalog))?;
        }
        success(&format!("Messages copied to \"{}\"", out_path.display()));
    }

    Ok(ExitStatus::Success)
}
