use anyhow::Context;
use std::path::Path;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let document = resumatch_extract::extract(&bytes)
        .with_context(|| format!("extracting {}", file.display()))?;

    tracing::debug!(kind = ?document.kind, pages = document.pages, "extracted");
    println!("{}", document.text);
    Ok(())
}
