use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colored::Colorize;
use glnmaps::{
	config::Config,
	server::MapServer,
	source::resolve_source,
	template::MapDocument,
};
use std::{
	io::{self, IsTerminal},
	path::PathBuf,
	process::ExitCode,
};

/// Show a CSV or GeoJSON file on an interactive map in the browser.
///
/// Pipe GeoJSON into glnmaps to show it without a file.
#[derive(Parser, Debug)]
#[command(author, version, disable_help_subcommand = true)]
struct Cli {
	/// Input file, either *.csv or *.geojson. Ignored when standard input is piped.
	#[arg(value_name = "FILE")]
	input: Option<PathBuf>,

	/// Path to a YAML configuration file
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Serve via this IP [default: 127.0.0.1]
	#[arg(short, long)]
	ip: Option<String>,

	/// Serve via this port [default: 3000]
	#[arg(short, long)]
	port: Option<u16>,

	/// HTML shell to use instead of the built-in map viewer
	#[arg(short, long, value_name = "FILE")]
	template: Option<PathBuf>,

	/// CSV field separator [default: ,]
	#[arg(short, long)]
	separator: Option<char>,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn load_config(cli: &Cli) -> Result<Config> {
	let mut config = match &cli.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};

	config.server.override_optional_ip(&cli.ip);
	config.server.override_optional_port(&cli.port);
	config.override_optional_template(&cli.template);
	config.csv.override_optional_separator(&cli.separator);

	Ok(config)
}

fn run(cli: &Cli) -> Result<ExitCode> {
	let config = load_config(cli)?;
	let csv_reader = config.csv.reader()?;

	let source = match resolve_source(io::stdin().is_terminal(), cli.input.as_deref()) {
		Ok(source) => source,
		Err(err) => {
			eprintln!("{}", err.to_string().red());
			return Ok(ExitCode::from(err.exit_code()));
		}
	};
	log::debug!("input source: {source:?}");

	let geojson = source.read_geojson(io::stdin().lock(), &csv_reader)?;
	let document = MapDocument::from_template(config.template.as_deref(), geojson)?;

	serve(&config, document)?;
	Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn serve(config: &Config, document: MapDocument) -> Result<()> {
	let mut server = MapServer::from_config(&config.server, document);
	server.start().await?;

	if let Some(url) = server.url() {
		eprintln!("{} {}", "glnmaps is running. Access it at:".green(), url.bold());
	}

	tokio::signal::ctrl_c().await?;
	server.stop().await;
	Ok(())
}
