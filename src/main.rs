use std::process::ExitCode;

fn main() -> ExitCode {
	school_gql::cli::init() // Initiate the command line
}
