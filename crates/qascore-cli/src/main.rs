use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use qascore_core::{
	render_summary, DataConfig, DataSource, Eval, EvalConfig, EvalError, JsonDataSource,
	TextNormalizer,
};

#[derive(Debug, Parser)]
#[command(name = "qascore", about = "Score QA reader predictions with EM and token-F1")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	Run(RunArgs),
}

#[derive(Debug, Clone, Parser)]
struct RunArgs {
	/// Predictions file: a JSON array of reader records
	#[arg(long, conflicts_with_all = ["results_dir", "sample_size"])]
	data: Option<PathBuf>,

	/// Directory holding reader_<n>_predictions.json files
	#[arg(long, requires = "sample_size")]
	results_dir: Option<PathBuf>,

	/// Sample size embedded in the predictions file name
	#[arg(long, requires = "results_dir")]
	sample_size: Option<u32>,

	/// YAML config file; --data and --results-dir/--sample-size win over it
	#[arg(long)]
	config: Option<PathBuf>,

	/// Print the per-question table before the summary
	#[arg(long, action = ArgAction::SetTrue)]
	table: bool,

	/// Write the full report as pretty JSON to a file
	#[arg(long)]
	json_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	match cli.command {
		Commands::Run(args) => run(args).await?,
	}
	Ok(())
}

async fn run(args: RunArgs) -> Result<()> {
	let config = match &args.config {
		Some(path) => Some(EvalConfig::from_yaml_file(path)?),
		None => None,
	};

	let data_config = if let Some(path) = args.data {
		DataConfig::File { path }
	} else if let (Some(results_dir), Some(sample_size)) = (args.results_dir, args.sample_size) {
		DataConfig::Sample { results_dir, sample_size }
	} else if let Some(config) = &config {
		config.data.clone()
	} else {
		anyhow::bail!("one of --data, --results-dir with --sample-size, or --config is required");
	};

	let path = data_config.resolve();
	let normalizer = config
		.as_ref()
		.map(EvalConfig::normalizer)
		.unwrap_or_else(TextNormalizer::default);
	let scorers = config
		.as_ref()
		.map(|c| c.build_scorers(&normalizer))
		.unwrap_or_default();

	let data = Arc::new(JsonDataSource::new(&path));
	let eval = Eval::builder()
		.data_source(data.clone())
		.normalizer(normalizer)
		.scorers(scorers) // empty falls back to EM + token-F1
		.build()?;

	println!("Reading predictions from: {}", path.display());

	let records = match data.load().await {
		Ok(records) => records,
		Err(EvalError::FileNotFound(_)) => {
			println!("Error: File not found.");
			return Ok(());
		}
		Err(err) => return Err(err.into()),
	};

	println!("Loaded {} entries. Calculating scores...", records.len());

	let report = match eval.run_records(records).await {
		Ok(report) => report,
		Err(EvalError::NoValidEntries) => {
			println!("Error: No valid entries found.");
			return Ok(());
		}
		Err(err) => return Err(err.into()),
	};

	if args.table {
		println!("{}", report.question_table());
	}
	println!("\n{}", render_summary(&report));

	if let Some(path) = args.json_out {
		let json = serde_json::to_string_pretty(&report)?;
		tokio::fs::write(path, json).await?;
	}

	Ok(())
}
