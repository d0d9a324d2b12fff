//! Implementation of the `docscaff check` command.
//!
//! Loads each meta file and plans it without touching the filesystem, so the
//! warnings shown are exactly the entries `generate` would skip.

use std::path::Path;

use serde::Serialize;
use tracing::instrument;

use docscaff_adapters::LocalFilesystem;
use docscaff_core::{
    application::{ScaffoldService, TreeService, TreeSummary},
    domain::SkippedEntry,
};

use crate::{
    cli::CheckArgs,
    commands::{meta_dir, meta_files, tree_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Result of checking one meta file.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    #[serde(flatten)]
    pub summary: TreeSummary,
    pub warnings: Vec<SkippedEntry>,
}

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let trees = tree_service();
    let planner = ScaffoldService::new(Box::new(LocalFilesystem::new()), config.scaffold_options());

    let results = meta_files(&trees, &args.path)?
        .iter()
        .map(|meta| check_one(meta, &trees, &planner))
        .collect::<CliResult<Vec<_>>>()?;

    let total: usize = results.iter().map(|r| r.warnings.len()).sum();

    if output.is_json() {
        output.json(&results)?;
    } else {
        for result in &results {
            render(result, &output)?;
        }
        output.print("")?;
        if total == 0 {
            output.success(&format!("{} meta file(s), no problems found", results.len()))?;
        } else {
            output.warning(&format!(
                "{} meta file(s), {} warning(s)",
                results.len(),
                total
            ))?;
        }
    }

    if args.strict && total > 0 {
        return Err(CliError::StrictCheckFailed { warnings: total });
    }
    Ok(())
}

fn check_one(meta: &Path, trees: &TreeService, planner: &ScaffoldService) -> CliResult<CheckResult> {
    let tree = trees.load(meta)?;
    let structure = planner.plan(&tree, meta_dir(meta))?;
    Ok(CheckResult {
        summary: TreeService::summarize_tree(meta, &tree),
        warnings: structure.warnings().cloned().collect(),
    })
}

fn render(result: &CheckResult, output: &OutputManager) -> CliResult<()> {
    let stats = &result.summary.stats;
    output.header(&result.summary.path.display().to_string())?;
    output.print(&format!(
        "  {} page(s): {} leaf, {} branch; {} separator(s); depth {}",
        stats.pages(),
        stats.leaves,
        stats.branches,
        stats.separators,
        stats.depth
    ))?;
    for warning in &result.warnings {
        output.warning(&format!(
            "  {}: {}",
            warning.location(),
            warning.reason
        ))?;
    }
    Ok(())
}
