use std::process;

use clap::Parser;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use ngram_core::io::read_document;
use ngram_core::model::{Analysis, NGramEngine};
use ngram_core::{EngineConfig, MatchMode, NGramResult, SplitMode};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Count word n-grams in a document", long_about = None)]
struct Cli {
    /// Document to analyze
    #[arg(short, long, default_value = "a good puzzle is a fun puzzle", conflicts_with = "file")]
    text: String,

    /// Read the document from a file instead of --text
    #[arg(short, long)]
    file: Option<String>,

    /// Longest n-gram to count
    #[arg(short = 'n', long, default_value_t = 2)]
    max_length: usize,

    /// Keep first-seen order instead of sorting alphabetically
    #[arg(long, default_value_t = false)]
    unsorted: bool,

    /// JSON engine config; --match-mode and --split-mode override it
    #[arg(short, long)]
    config: Option<String>,

    /// exact | substring
    #[arg(long)]
    match_mode: Option<MatchMode>,

    /// whitespace | literal
    #[arg(long)]
    split_mode: Option<SplitMode>,

    /// Print the grouped result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Count the entries containing this word (see --in-length)
    #[arg(long)]
    count: Option<String>,

    /// Segment searched by --count
    #[arg(long, default_value_t = 1)]
    in_length: usize,
}

impl Cli {
    /// Config file first, then command-line overrides.
    fn engine_config(&self) -> NGramResult<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading config from: {}", path);
                EngineConfig::load_from_file(path)?
            }
            None => EngineConfig::default(),
        };
        if let Some(match_mode) = self.match_mode {
            config.match_mode = match_mode;
        }
        if let Some(split_mode) = self.split_mode {
            config.split_mode = split_mode;
        }
        Ok(config)
    }

    fn document(&self) -> NGramResult<String> {
        match &self.file {
            Some(path) => read_document(path),
            None => Ok(self.text.clone()),
        }
    }
}

/// One table per n-gram length.
fn print_tables(analysis: &Analysis, sorted: bool) {
    for (length, ngrams) in analysis.grouped(sorted) {
        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new(format!("{}-gram", length)).add_attribute(Attribute::Bold),
            Cell::new("Frequency").add_attribute(Attribute::Bold),
        ]);
        if let Some(col) = table.column_mut(1) {
            col.set_cell_alignment(CellAlignment::Right);
        }

        for ngram in ngrams.values() {
            table.add_row(vec![Cell::new(ngram.word()), Cell::new(ngram.frequency())]);
        }

        println!("{table}");
    }
}

fn run(cli: &Cli) -> NGramResult<()> {
    let engine = NGramEngine::new(cli.engine_config()?);
    let text = cli.document()?;

    // Warnings are already logged by the engine
    let analysis = engine.process_document(&text, cli.max_length);

    if let Some(word) = &cli.count {
        // Lookup misses are logged by the engine and count as 0
        let occurrences = analysis.occurrences_of_word(cli.in_length, word).unwrap_or(0);
        println!("{}", occurrences);
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis.grouped(!cli.unsorted))?);
    } else {
        print_tables(&analysis, !cli.unsorted);
    }

    if !analysis.diagnostics().is_empty() {
        warn!("Finished with {} diagnostic(s)", analysis.diagnostics().len());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}
