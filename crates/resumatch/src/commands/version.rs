pub fn run() -> anyhow::Result<()> {
    println!("resumatch {}", env!("CARGO_PKG_VERSION"));
    println!("Lexical resume ranking against a job description");
    Ok(())
}
