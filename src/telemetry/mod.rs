use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::err::Error;

/// The log levels accepted on the command line
pub const LOG_LEVELS: [&str; 7] = ["none", "error", "warn", "info", "debug", "trace", "full"];

#[derive(Default, Debug)]
pub struct Builder {
	filter: Option<EnvFilter>,
}

pub fn builder() -> Builder {
	Builder::default()
}

impl Builder {
	/// Set the log level on the builder.
	///
	/// A `RUST_LOG` environment variable takes precedence over the level.
	pub fn with_log_level(mut self, log_level: &str) -> Result<Self, Error> {
		let filter = match EnvFilter::try_from_default_env() {
			Ok(filter) => filter,
			Err(_) => EnvFilter::builder()
				.parse(directives(log_level)?)
				.map_err(|_| Error::InvalidLogLevel(log_level.to_owned()))?,
		};
		self.filter = Some(filter);
		Ok(self)
	}

	/// Build a tracing dispatcher with the fmt subscriber
	pub fn build(self) -> Box<dyn Subscriber + Send + Sync + 'static> {
		let filter = self.filter.unwrap_or_else(|| EnvFilter::new("info"));
		let registry = tracing_subscriber::registry().with(
			tracing_subscriber::fmt::layer()
				.compact()
				.with_ansi(true)
				.with_target(true)
				.with_span_events(FmtSpan::NONE)
				.with_writer(std::io::stderr)
				.with_filter(filter),
		);
		Box::new(registry)
	}

	/// Install the tracing pipeline globally
	pub fn init(self) {
		self.build().init()
	}
}

/// Convert a command line log level into filter directives.
///
/// Only this crate and the HTTP trace layer log at the chosen level;
/// dependencies are limited to warnings unless `full` is requested.
fn directives(log_level: &str) -> Result<String, Error> {
	match log_level {
		"none" => Ok("off".to_owned()),
		"full" => Ok("trace".to_owned()),
		"error" => Ok("error".to_owned()),
		"warn" | "info" | "debug" | "trace" => {
			Ok(format!("warn,school={log_level},school_gql={log_level},tower_http={log_level}"))
		}
		_ => Err(Error::InvalidLogLevel(log_level.to_owned())),
	}
}
