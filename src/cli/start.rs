use std::net::SocketAddr;

use clap::Args;
use clap::builder::PossibleValuesParser;

use crate::cnf::{DEFAULT_BIND, DEFAULT_DATABASE, DEFAULT_NAMESPACE};
use crate::dbs::{self, StoreConfig};
use crate::err::Error;
use crate::telemetry::{self, LOG_LEVELS};
use crate::{env, gql, net};

#[derive(Args, Debug)]
pub struct StartCommandArguments {
	#[arg(help = "Database connection string, or mem:// for an in-process store")]
	#[arg(env = "SCHOOL_CONN", long = "conn")]
	pub(crate) connection: String,
	#[arg(help = "The hostname or ip address to listen for connections on")]
	#[arg(env = "SCHOOL_BIND", short = 'b', long = "bind", default_value = DEFAULT_BIND)]
	pub(crate) listen_address: SocketAddr,
	#[arg(help = "The namespace selected on the database")]
	#[arg(env = "SCHOOL_NS", long = "ns", default_value = DEFAULT_NAMESPACE)]
	pub(crate) namespace: String,
	#[arg(help = "The database selected on the database server")]
	#[arg(env = "SCHOOL_DB", long = "db", default_value = DEFAULT_DATABASE)]
	pub(crate) database: String,
	#[arg(help = "Database authentication username to use when connecting")]
	#[arg(env = "SCHOOL_USER", short = 'u', long = "user", requires = "password")]
	pub(crate) username: Option<String>,
	#[arg(help = "Database authentication password to use when connecting")]
	#[arg(env = "SCHOOL_PASS", short = 'p', long = "pass", requires = "username")]
	pub(crate) password: Option<String>,
	#[arg(help = "Whether to serve the GraphiQL IDE on the GraphQL endpoint")]
	#[arg(env = "SCHOOL_GRAPHIQL", long)]
	pub(crate) graphiql: bool,
	#[arg(help = "The logging level for the server")]
	#[arg(env = "SCHOOL_LOG", short = 'l', long = "log", default_value = "info")]
	#[arg(value_parser = PossibleValuesParser::new(LOG_LEVELS))]
	pub(crate) log: String,
}

#[tokio::main]
pub async fn init(
	StartCommandArguments {
		connection,
		listen_address,
		namespace,
		database,
		username,
		password,
		graphiql,
		log,
	}: StartCommandArguments,
) -> Result<(), Error> {
	// Initialize logging
	telemetry::builder().with_log_level(&log)?.init();
	// Output the release
	env::init();
	// Connect to the document store
	let config = StoreConfig {
		endpoint: connection,
		namespace,
		database,
		username,
		password,
	};
	let datastore = dbs::connect(&config).await?;
	info!("Connected to the datastore at {}", config.endpoint);
	// Build the GraphQL schema over the store
	let schema = gql::create_schema(datastore.clone());
	// Start the web server
	net::init(listen_address, net::router(schema, datastore, graphiql)).await?;
	// All ok
	Ok(())
}
