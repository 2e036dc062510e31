use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use salary_ingest::read_source_table;
use salary_map::{MappingBuilder, MappingRepository, Prompter, ScriptedPrompter};
use salary_model::{MappingDocument, SourceTable};
use salary_output::{CsvRecordWriter, output_path};
use salary_transform::{CanonicalNameNormalizer, NormalizeReport, Normalizer};

use crate::logging::redact_value;
use crate::prompt::DialoguerPrompter;
use crate::types::{ProcessResult, RunOptions, RunOutcome};

pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let run_span = info_span!("run", input = %options.input.display());
    let _run_guard = run_span.enter();

    let table = ingest(&options.input)?;

    let default_repository = MappingRepository::in_dir(&options.work_dir);
    let (repository, generated) = match &options.template {
        Some(path) => (MappingRepository::new(path.clone()), false),
        None if default_repository.exists() => {
            return Ok(RunOutcome::TemplateExists {
                path: default_repository.path().to_path_buf(),
            });
        }
        None => {
            generate_template(&table, &default_repository, options.answers.as_deref())?;
            (default_repository, true)
        }
    };

    if options.generate_only {
        return Ok(RunOutcome::TemplateOnly {
            template: repository.path().to_path_buf(),
            generated,
        });
    }

    let mapping = repository
        .load()
        .with_context(|| format!("load template {}", repository.path().display()))?;
    mapping
        .validate_against(&table.header)
        .with_context(|| {
            format!(
                "template {} does not fit {}",
                repository.path().display(),
                options.input.display()
            )
        })?;

    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| options.work_dir.clone());
    let output = output_path(&output_dir, &mapping);
    let report = normalize(&table, &mapping, &output)?;

    Ok(RunOutcome::Processed(ProcessResult {
        entity: mapping.entity_name.clone(),
        input: options.input.clone(),
        template: repository.path().to_path_buf(),
        template_generated: generated,
        output,
        rows_read: table.len(),
        report,
    }))
}

fn ingest(path: &Path) -> Result<SourceTable> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_source_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        rows = table.len(),
        columns = table.header.len(),
        duration_ms = start.elapsed().as_millis(),
        "source table loaded"
    );
    Ok(table)
}

fn generate_template(
    table: &SourceTable,
    repository: &MappingRepository,
    answers: Option<&Path>,
) -> Result<()> {
    let span = info_span!("mapping", template = %repository.path().display());
    let _guard = span.enter();
    let document = match answers {
        Some(path) => {
            let mut prompter = ScriptedPrompter::from_file(path)
                .with_context(|| format!("read answers {}", path.display()))?;
            let document = build_mapping(&mut prompter, table)?;
            if prompter.remaining() > 0 {
                debug!(unused = prompter.remaining(), "answers file has unused lines");
            }
            document
        }
        None => build_mapping(&mut DialoguerPrompter::new(), table)?,
    };
    repository.save(&document).context("save template")?;
    Ok(())
}

fn build_mapping<P>(prompter: &mut P, table: &SourceTable) -> Result<MappingDocument>
where
    P: Prompter + ?Sized,
{
    MappingBuilder::new(prompter)
        .build(table)
        .context("build template")
}

fn normalize(
    table: &SourceTable,
    mapping: &MappingDocument,
    output: &Path,
) -> Result<NormalizeReport> {
    let span = info_span!("normalize", entity = %mapping.entity_name);
    let _guard = span.enter();
    let mut writer = CsvRecordWriter::create(output).context("create output file")?;
    let names = CanonicalNameNormalizer;
    let report = Normalizer::new(mapping, &names)
        .run(table, &mut writer)
        .context("normalize rows")?;
    writer.finish().context("finish output file")?;
    for fallback in &report.salary_fallbacks {
        debug!(row = fallback.row, raw = redact_value(&fallback.raw), "salary fallback");
    }
    Ok(report)
}
