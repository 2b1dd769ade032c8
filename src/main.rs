use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use formula_updater::cli::orchestration::{run_update_workflow, UpdateWorkflowArgs};
use formula_updater::config::{self, UpdaterConfig};
use formula_updater::ui;

#[derive(clap::Parser)]
#[command(
    name = "formula-updater",
    about = "Update the Homebrew formula version and sha256 after a release build"
)]
struct Args {
    #[arg(
        long,
        env = "GIT_REF",
        help = "Git reference to take the version from, e.g. refs/tags/v1.2.3"
    )]
    git_ref: Option<String>,

    #[arg(
        long,
        env = "FORMULA_REPO_DIR",
        help = "Checked-out formula repository (absolute or relative to the working directory)"
    )]
    formula_repo_dir: Option<String>,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<String>,

    #[arg(long, help = "Release archive to hash instead of the configured one")]
    archive: Option<PathBuf>,

    #[arg(long, help = "Show the new version and checksum without writing the formula")]
    dry_run: bool,

    #[arg(long, help = "Print progress, warnings and a summary of the update")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("formula-updater {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Required inputs are checked before any file is opened
    let cwd = std::env::current_dir()?;
    let updater_config = match UpdaterConfig::new(args.git_ref, args.formula_repo_dir, &cwd) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let settings = match config::load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&format!("Error loading settings: {}", e));
            std::process::exit(1);
        }
    };

    // A plain successful run stays silent
    let report = args.verbose || args.dry_run;
    if report {
        ui::display_status(&format!(
            "Updating formula in {} for {}",
            updater_config.formula_repo_dir.display(),
            updater_config.git_ref
        ));
    }

    let workflow_args = UpdateWorkflowArgs {
        archive: args.archive,
        dry_run: args.dry_run,
    };
    let outcome = match run_update_workflow(workflow_args, &updater_config, &settings) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if report {
        for warning in &outcome.warnings {
            ui::display_boundary_warning(warning);
        }
        ui::display_update_summary(&outcome);

        if outcome.written {
            ui::display_success(&format!("Updated {}", outcome.formula_path.display()));
        }
    }

    Ok(())
}
