use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resumatch")]
#[command(version)]
#[command(about = "Rank resumes against a job description by lexical similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank resumes against a job description
    Rank(RankArgs),

    /// Print the extracted text of one document
    Extract {
        file: PathBuf,
    },

    /// Print the normalized tokens of a document or inline text
    Normalize {
        /// Document to read (PDF or plain text)
        #[arg(conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Inline text instead of a file
        #[arg(long)]
        text: Option<String>,

        /// Extra lemma lexicon (TSV: form<TAB>lemma)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Job description file (PDF or plain text)
    #[arg(long, conflicts_with = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description given inline
    #[arg(long)]
    pub job_text: Option<String>,

    /// Resume documents, ranked in the order given on ties
    pub resumes: Vec<PathBuf>,

    /// Write the CSV export; without a value it goes to ranked_resumes.csv
    #[arg(short, long, num_args = 0..=1, value_name = "CSV")]
    pub output: Option<Option<PathBuf>>,

    /// Output format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Vocabulary cap of the term space
    #[arg(long, default_value_t = 5000)]
    pub max_features: usize,

    /// Extra lemma lexicon (TSV: form<TAB>lemma)
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Lowest percentage of the high tier
    #[arg(long, default_value_t = 80.0)]
    pub high: f64,

    /// Lowest percentage of the medium tier
    #[arg(long, default_value_t = 50.0)]
    pub medium: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["resumatch", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_rank() {
        let cli = Cli::try_parse_from([
            "resumatch",
            "rank",
            "--job",
            "jd.txt",
            "a.pdf",
            "b.pdf",
            "--output",
            "out.csv",
            "--format",
            "json",
        ])
        .unwrap();
        let Commands::Rank(args) = cli.command else {
            panic!("Expected Rank command");
        };
        assert_eq!(args.job, Some(PathBuf::from("jd.txt")));
        assert_eq!(args.resumes, vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
        assert_eq!(args.output, Some(Some(PathBuf::from("out.csv"))));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.max_features, 5000);
        assert_eq!(args.high, 80.0);
    }

    #[test]
    fn test_cli_output_without_value() {
        let cli =
            Cli::try_parse_from(["resumatch", "rank", "--job-text", "rust", "a.pdf", "--output"])
                .unwrap();
        let Commands::Rank(args) = cli.command else {
            panic!("Expected Rank command");
        };
        assert_eq!(args.output, Some(None));
        assert_eq!(args.resumes, vec![PathBuf::from("a.pdf")]);
    }

    #[test]
    fn test_cli_job_sources_conflict() {
        let cli = Cli::try_parse_from([
            "resumatch",
            "rank",
            "--job",
            "jd.txt",
            "--job-text",
            "rust",
            "a.pdf",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_normalize_text() {
        let cli = Cli::try_parse_from(["resumatch", "normalize", "--text", "Managed teams"]);
        assert!(cli.is_ok());
    }
}
