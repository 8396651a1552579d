//! `generate` subcommand.
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Generate man pages for the `jmask` command and all of its subcommands
/// into the output directory if specified, else the current directory.
///
/// # Errors
///
/// Returns a [`Result`] with an [`anyhow::Error`] if the output directory
/// could not be created or a page could not be written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let output_dir: PathBuf = output_dir.unwrap_or(
        std::env::current_dir().context("Opening current directory")?,
    );

    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    render_man_page(cmd.clone(), &output_dir, cmd.get_name())?;
    generate_subcommand_man_pages(cmd, &output_dir, cmd.get_name())?;

    Ok(())
}

/// Generate subcommand man pages recursively, prefixing each page name with
/// its parent chain (e.g. `jmask-generate-man.1`).
fn generate_subcommand_man_pages(
    cmd: &clap::Command,
    output_dir: &Path,
    prefix: &str,
) -> Result<()> {
    for subcmd in cmd.get_subcommands() {
        let prefixed_name = format!("{}-{}", prefix, subcmd.get_name());

        // Rename the Command so clap_mangen uses the prefixed name in NAME,
        // SYNOPSIS, and SEE ALSO sections. The leaked &'static str is fine
        // here since man page generation is a one-shot operation.
        let leaked_name: &'static str =
            Box::leak(prefixed_name.clone().into_boxed_str());
        let renamed = subcmd
            .clone()
            .name(leaked_name)
            .disable_help_subcommand(true);

        render_man_page(renamed, output_dir, &prefixed_name)?;

        if subcmd.has_subcommands() {
            generate_subcommand_man_pages(subcmd, output_dir, &prefixed_name)?;
        }
    }

    Ok(())
}

/// Render one man page for `cmd` as `<name>.1` in `output_dir`.
fn render_man_page(
    cmd: clap::Command,
    output_dir: &Path,
    name: &str,
) -> Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let man_path = output_dir.join(format!("{name}.1"));
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&man_path)
        .with_context(|| format!("failed to create {}", man_path.display()))?;
    man.render(&mut file)?;
    println!("Generated: {}", man_path.display());
    Ok(())
}
