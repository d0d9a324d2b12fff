//! Implementation of the `docscaff generate` command.
//!
//! Responsibility: resolve which meta files go where, build the scaffold
//! options, call the core scaffold service, and display results.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use docscaff_adapters::LocalFilesystem;
use docscaff_core::{
    application::{ScaffoldService, TreeService},
    domain::{ScaffoldOptions, ScaffoldReport},
};

use crate::{
    cli::GenerateArgs,
    commands::{meta_dir, meta_files, tree_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One meta file and the directory its pages go into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub meta: PathBuf,
    pub out_dir: PathBuf,
}

/// Execute the `docscaff generate` command.
///
/// 1. Build scaffold options (config, then `--ext` / `--index`)
/// 2. Resolve jobs: one meta file, or every meta file under a directory
/// 3. Scaffold (or preview) each job in order, stopping at the first error
/// 4. Render each report, or all of them as JSON
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = build_options(&args, &config)?;
    let trees = tree_service();
    let jobs = resolve_jobs(&args, &trees)?;
    debug!(jobs = jobs.len(), dry_run = args.dry_run, "Jobs resolved");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), options);
    let mut reports = Vec::with_capacity(jobs.len());

    for job in &jobs {
        let report = run_job(job, &trees, &service, args.dry_run)?;
        if !output.is_json() {
            output.header(&format!(
                "{} \u{2192} {}",
                job.meta.display(),
                job.out_dir.display()
            ))?;
            output.report(&report)?;
        }
        reports.push(report);
    }

    if output.is_json() {
        match reports.as_slice() {
            [one] => output.json(one)?,
            many => output.json(many)?,
        }
    }

    Ok(())
}

fn run_job(
    job: &Job,
    trees: &TreeService,
    service: &ScaffoldService,
    dry_run: bool,
) -> CliResult<ScaffoldReport> {
    let tree = trees.load(&job.meta)?;
    info!(meta = %job.meta.display(), out = %job.out_dir.display(), "Scaffold started");

    let report = if dry_run {
        service.preview(&tree, &job.out_dir)?
    } else {
        service.scaffold(&tree, &job.out_dir)?
    };
    Ok(report)
}

/// Config options with CLI overrides applied, validated.
pub fn build_options(args: &GenerateArgs, config: &AppConfig) -> CliResult<ScaffoldOptions> {
    let mut options = config.scaffold_options();
    if let Some(ext) = &args.extension {
        options = options.with_extension(ext.as_str());
    }
    if let Some(index) = &args.index_name {
        options = options.with_index_name(index.as_str());
    }
    options
        .validate()
        .map_err(|e| CliError::Core(e.into()))?;
    Ok(options)
}

/// A file goes to `-o` or its own directory; a directory fans out to every
/// meta file beneath it, each into its own directory.
pub fn resolve_jobs(args: &GenerateArgs, trees: &TreeService) -> CliResult<Vec<Job>> {
    if args.path.is_dir() && args.output.is_some() {
        return Err(CliError::OutputWithDirectory {
            path: args.path.clone(),
        });
    }

    let jobs = meta_files(trees, &args.path)?
        .into_iter()
        .map(|meta| Job {
            out_dir: args.output.clone().unwrap_or_else(|| meta_dir(&meta)),
            meta,
        })
        .collect();
    Ok(jobs)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(path: impl Into<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            path: path.into(),
            output: None,
            extension: None,
            index_name: None,
            dry_run: false,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.scaffold.extension = "md".into();

        let mut a = args("_meta.json");
        let from_config = build_options(&a, &config).unwrap();
        assert_eq!(from_config.extension, "md");

        a.extension = Some(".markdown".into());
        a.index_name = Some("README".into());
        let overridden = build_options(&a, &config).unwrap();
        assert_eq!(overridden.extension, "markdown");
        assert_eq!(overridden.index_file_name(), "README.markdown");
    }

    #[test]
    fn unusable_index_name_is_a_user_error() {
        let mut a = args("_meta.json");
        a.index_name = Some("../escape".into());
        let err = build_options(&a, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn single_file_defaults_to_its_directory() {
        let jobs = resolve_jobs(&args("pages/python/_meta.json"), &tree_service()).unwrap();
        assert_eq!(
            jobs,
            [Job {
                meta: PathBuf::from("pages/python/_meta.json"),
                out_dir: PathBuf::from("pages/python"),
            }]
        );
    }

    #[test]
    fn single_file_honours_output() {
        let mut a = args("pages/python/_meta.json");
        a.output = Some(PathBuf::from("site/python"));
        let jobs = resolve_jobs(&a, &tree_service()).unwrap();
        assert_eq!(jobs[0].out_dir, PathBuf::from("site/python"));
    }

    #[test]
    fn directory_fans_out_per_meta_file() {
        let temp = TempDir::new().unwrap();
        for track in ["python", "sql"] {
            fs::create_dir_all(temp.path().join(track)).unwrap();
            fs::write(temp.path().join(track).join("_meta.json"), "{}").unwrap();
        }

        let jobs = resolve_jobs(&args(temp.path()), &tree_service()).unwrap();
        let dirs: Vec<_> = jobs.iter().map(|j| j.out_dir.clone()).collect();
        assert_eq!(dirs, [temp.path().join("python"), temp.path().join("sql")]);
    }

    #[test]
    fn output_with_directory_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut a = args(temp.path());
        a.output = Some(PathBuf::from("out"));
        assert!(matches!(
            resolve_jobs(&a, &tree_service()),
            Err(CliError::OutputWithDirectory { .. })
        ));
    }
}
