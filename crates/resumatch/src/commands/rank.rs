use crate::cli::{OutputFormat, RankArgs};
use anyhow::Context;
use resumatch_core::{Candidate, Config, ScreenError, Screener, ScreeningOutcome};
use resumatch_text::EnglishModel;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub fn run(args: &RankArgs) -> anyhow::Result<()> {
    let config = build_config(args)?;

    // Loaded once, before any input is read
    let model = EnglishModel::load(args.lexicon.as_deref()).map_err(ScreenError::from)?;
    let screener = Screener::new(config, Arc::new(model));

    let query = read_query(args.job.as_deref(), args.job_text.as_deref())?;
    let candidates = load_candidates(&args.resumes)?;
    let outcome = screener.screen(&query, &candidates)?;

    let mut stdout = std::io::stdout().lock();
    match args.format {
        OutputFormat::Text => write!(stdout, "{}", render_text(&outcome))?,
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(&outcome)?)?,
        OutputFormat::Csv => stdout.write_all(&outcome.table.to_csv()?)?,
    }

    if let Some(path) = export_path(args.output.as_ref(), screener.config()) {
        outcome
            .table
            .write_csv(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), rows = outcome.table.len(), "wrote csv export");
    }

    Ok(())
}

fn build_config(args: &RankArgs) -> anyhow::Result<Config> {
    if args.medium > args.high {
        anyhow::bail!(
            "--medium ({}) must not exceed --high ({})",
            args.medium,
            args.high
        );
    }
    let config = Config::new()
        .with_max_features(args.max_features)
        .with_thresholds(args.high, args.medium);
    config.tfidf.validate()?;
    Ok(config)
}

/// `--output CSV` wins; a bare `--output` falls back to the configured name
fn export_path(output: Option<&Option<PathBuf>>, config: &Config) -> Option<PathBuf> {
    output.map(|explicit| {
        explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.export_file_name))
    })
}

fn read_query(job: Option<&Path>, job_text: Option<&str>) -> anyhow::Result<String> {
    match (job, job_text) {
        (_, Some(text)) => Ok(text.to_string()),
        (Some(path), None) => {
            let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let text = resumatch_extract::extract_text(&bytes)
                .with_context(|| format!("extracting job description {}", path.display()))?;
            Ok(text)
        }
        // the screener reports the missing query
        (None, None) => Ok(String::new()),
    }
}

fn load_candidates(paths: &[PathBuf]) -> anyhow::Result<Vec<Candidate>> {
    paths
        .iter()
        .map(|path| {
            let content =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(Candidate::new(name, content))
        })
        .collect()
}

fn render_text(outcome: &ScreeningOutcome) -> String {
    let mut out = outcome.table.render_text();
    if !outcome.notices.is_empty() {
        out.push_str("\nSkipped:\n");
        for notice in &outcome.notices {
            out.push_str(&format!("  {notice}\n"));
        }
    }
    out
}
