mod start;
mod version;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::env::RELEASE;
pub use start::StartCommandArguments;

const INFO: &str = "
To get started, run a server over an in-process store:

  $ school start --conn mem://

then send GraphQL requests to http://127.0.0.1:4000/graphql.
";

#[derive(Parser, Debug)]
#[command(name = "School GraphQL server", bin_name = "school")]
#[command(about = INFO, before_help = RELEASE.as_str())]
#[command(disable_version_flag = true, arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	#[command(about = "Start the GraphQL server")]
	Start(StartCommandArguments),
	#[command(about = "Output the command-line tool version information")]
	Version,
}

pub fn init() -> ExitCode {
	let args = Cli::parse();
	let output = match args.command {
		Commands::Start(args) => start::init(args),
		Commands::Version => version::init(),
	};
	if let Err(e) = output {
		error!("{}", e);
		// Logging may not have been set up when the failure occurred
		eprintln!("{e}");
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}
