use clap::Parser;
use log::{debug, info};
use protseq::config::AnalysisConfig;
use protseq::errors::ProtSeqError;
use protseq::protein::fasta::SequenceCollection;
use protseq::report::property_report::{build_report, build_report_partial, AnalysisReport};
use protseq::report::writers::{write_results, OutputFormat, RULE_WIDTH};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Analyze protein sequences from a FASTA file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the FASTA file
    fasta: PathBuf,

    /// Where to write the report [default: analysis_results.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Literal motif to locate in every sequence (repeatable)
    #[arg(short, long = "motif")]
    motifs: Vec<String>,

    /// Regex motif to locate in every sequence (repeatable)
    #[arg(short, long = "pattern")]
    patterns: Vec<String>,

    /// Also locate N-glycosylation sequons (N[^P][ST])
    #[arg(long)]
    glycosylation: bool,

    /// Report sequences that can be analysed instead of stopping at the first bad one
    #[arg(long)]
    partial: bool,

    /// Optional path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<(PathBuf, AnalysisConfig), ProtSeqError> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::default(),
        };
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.motifs.extend(self.motifs);
        config.patterns.extend(self.patterns);
        config.glycosylation |= self.glycosylation;
        config.partial |= self.partial;
        Ok((self.fasta, config))
    }
}

fn analyze(
    collection: &SequenceCollection,
    config: &AnalysisConfig,
) -> Result<(AnalysisReport, bool), ProtSeqError> {
    let motifs = config.build_motifs()?;
    if !config.partial {
        return Ok((build_report(collection, &motifs)?, true));
    }

    let partial = build_report_partial(collection, &motifs);
    for failure in &partial.failures {
        eprintln!("Error analysing '{}': {}", failure.identifier, failure.error);
    }
    let complete = partial.is_complete();
    Ok((partial.report, complete))
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let (fasta_location, config) = match cli.into_config() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);
    println!("Protein Sequence Analysis Tool");
    println!("{}", rule);
    println!("\nAnalyzing sequences from {}...", fasta_location.display());
    println!("{}", thin_rule);

    let start = Instant::now();
    let sequences = match SequenceCollection::from_fasta_file(&fasta_location) {
        Ok(x) => x,
        Err(e @ ProtSeqError::FileNotFound { .. }) => {
            eprintln!("Error: {}", e);
            SequenceCollection::default()
        }
        Err(e) if e.is_data_error() => {
            eprintln!("Error: invalid FASTA input: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Loading took {:?}", start.elapsed());
    debug!("\n{}", sequences.summary());

    if sequences.is_empty() {
        eprintln!("Error: No sequences found or could not read file.");
        return ExitCode::FAILURE;
    }
    println!("Successfully loaded {} sequence(s)\n", sequences.len());

    let (report, complete) = match analyze(&sequences, &config) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Analysis Summary:");
    println!("{}", thin_rule);
    for sequence in &report.sequences {
        print!("\n{}", sequence);
    }

    println!("\n{}", thin_rule);
    if let Err(e) = write_results(&report, &config.output, config.format) {
        eprintln!("Error writing results: {}", e);
        return ExitCode::FAILURE;
    }
    println!("\nResults written to {}", config.output.display());

    println!("\n{}", rule);
    if !complete {
        println!("Analysis finished with errors.");
        return ExitCode::FAILURE;
    }
    println!("Analysis complete!");
    ExitCode::SUCCESS
}
