use std::path::PathBuf;

use clap::Parser;
use log::info;

use headline_gen_core::config::{DEFAULT_NGRAM_ORDERS, DEFAULT_SENTENCE_COUNT, DEFAULT_TOP_N};
use headline_gen_core::model::GenerationInput;
use headline_gen_core::stats::FrequencyDistribution;
use headline_gen_core::text::StopWords;
use headline_gen_core::{AnalyticsConfig, HeadlineReport};

mod io;

/// Headline statistics and fake headline generation.
///
/// Reads `<timestamp>\t<headline>` lines, prints word / n-gram / date
/// statistics and writes headlines generated by the word-chain graph.
#[derive(Parser, Debug)]
#[command(name = "headline-gen", version)]
struct Args {
	/// Tab-separated headline file
	#[arg(short, long, default_value = "news.csv")]
	input: PathBuf,

	/// Generated headlines file (default: `<input>_fake.csv`)
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Entries per top-N table
	#[arg(long, default_value_t = DEFAULT_TOP_N)]
	top: usize,

	/// Number of generated headlines
	#[arg(long, default_value_t = DEFAULT_SENTENCE_COUNT)]
	sentences: usize,

	/// N-gram order to report (repeatable)
	#[arg(long = "ngram", default_values_t = DEFAULT_NGRAM_ORDERS)]
	ngram: Vec<usize>,

	/// Retries when a generated headline copies a real one
	#[arg(long, default_value_t = 0)]
	nb_try: usize,

	/// Seed for reproducible generation
	#[arg(long)]
	seed: Option<u64>,

	/// Keep stop words in word statistics
	#[arg(long)]
	no_stop_words: bool,

	/// Print the report as JSON
	#[arg(long)]
	json: bool,
}

impl Args {
	/// Builds the analysis configuration from the command line.
	fn config(&self) -> Result<AnalyticsConfig, headline_gen_core::Error> {
		let mut config = AnalyticsConfig::default();
		config.top_n = self.top;
		config.set_ngram_orders(self.ngram.clone())?;
		if self.no_stop_words {
			config.set_stop_words(StopWords::none());
		}

		let mut generation = GenerationInput::new(self.sentences).with_nb_try(self.nb_try);
		if let Some(seed) = self.seed {
			generation = generation.with_seed(seed);
		}
		config.generation = generation;

		Ok(config)
	}
}

fn print_distribution(title: &str, distribution: &FrequencyDistribution) {
	println!("{title}");
	for (key, count) in distribution.iter() {
		println!("  {count:>4}  {key}");
	}
	println!();
}

fn print_report(report: &HeadlineReport) {
	println!("{} headlines\n", report.headline_count);

	print_distribution("Most frequent words", &report.top_words);
	for table in &report.top_ngrams {
		print_distribution(&format!("Most frequent {}-grams", table.n), &table.top);
	}
	print_distribution("Articles per date", &report.articles_per_date);

	println!("Most frequent word per date");
	for (date, word) in &report.most_common_word_per_date {
		println!("  {date}: {word}");
	}
	println!();

	println!("Generated headlines");
	for sentence in &report.generated {
		println!("  {sentence}");
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	if !io::is_file(&args.input) {
		return Err(format!("Input file not found: {}", args.input.display()).into());
	}
	let news = io::read_news(&args.input)?;
	info!("read {} headlines from {}", news.len(), args.input.display());

	let config = args.config()?;
	let report = HeadlineReport::build(&news, &config)?;

	let output = match &args.output {
		Some(path) => path.clone(),
		None => io::build_output_path(&args.input, "_fake", "csv")?,
	};
	io::write_lines(&output, &report.generated)?;
	info!("wrote {} generated headlines to {}", report.generated.len(), output.display());

	if args.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		print_report(&report);
	}

	Ok(())
}
