use clap::Parser;
use colored::Colorize;
use sbtx_cli::cli::Cli;
use sbtx_cli::config::ExportConfig;
use sbtx_cli::{export, logging, report};

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();

	let cli = Cli::parse();
	logging::init_logging(cli.verbose);
	let config = ExportConfig::from(cli);

	match export::run(&config).await {
		Ok(summary) => report::print_result(&summary),
		Err(err) => {
			eprintln!("{} {err}", "Error:".red().bold());
			std::process::exit(1);
		}
	}
}
