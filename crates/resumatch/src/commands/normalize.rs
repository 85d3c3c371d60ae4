use anyhow::Context;
use resumatch_text::{EnglishModel, Normalizer};
use std::path::Path;
use std::sync::Arc;

pub fn run(file: Option<&Path>, text: Option<&str>, lexicon: Option<&Path>) -> anyhow::Result<()> {
    let input = match (file, text) {
        (_, Some(text)) => text.to_string(),
        (Some(path), None) => {
            let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            resumatch_extract::extract_text(&bytes)
                .with_context(|| format!("extracting {}", path.display()))?
        }
        (None, None) => anyhow::bail!("pass a file or --text"),
    };

    let model = EnglishModel::load(lexicon).context("loading language model")?;
    let normalizer = Normalizer::new(Arc::new(model));
    println!("{}", normalizer.normalize(&input));
    Ok(())
}
