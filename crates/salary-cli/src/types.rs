use std::path::PathBuf;

use salary_transform::NormalizeReport;

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Source salary CSV.
    pub input: PathBuf,
    /// Stop after the template step.
    pub generate_only: bool,
    /// Explicit template; when absent `template.json` in `work_dir` is used.
    pub template: Option<PathBuf>,
    /// Scripted interview answers, one per line.
    pub answers: Option<PathBuf>,
    /// Defaults to `work_dir`.
    pub output_dir: Option<PathBuf>,
    pub work_dir: PathBuf,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// No template was passed and `template.json` is already there.
    TemplateExists { path: PathBuf },
    /// `--generate-template` stopped the run before normalization.
    TemplateOnly { template: PathBuf, generated: bool },
    Processed(ProcessResult),
}

#[derive(Debug)]
pub struct ProcessResult {
    pub entity: String,
    pub input: PathBuf,
    pub template: PathBuf,
    pub template_generated: bool,
    pub output: PathBuf,
    pub rows_read: usize,
    pub report: NormalizeReport,
}
