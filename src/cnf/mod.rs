use std::sync::LazyLock;

/// The publicly visible name of the server
pub const PKG_NAME: &str = "school";

/// The version identifier of this build
pub static PKG_VERSION: LazyLock<String> =
	LazyLock::new(|| match option_env!("SCHOOL_BUILD_METADATA") {
		Some(metadata) if !metadata.trim().is_empty() => {
			let version = env!("CARGO_PKG_VERSION");
			format!("{version}+{metadata}")
		}
		_ => env!("CARGO_PKG_VERSION").to_owned(),
	});

/// The default address the web server listens on
pub const DEFAULT_BIND: &str = "127.0.0.1:4000";

/// The namespace used when none is specified
pub const DEFAULT_NAMESPACE: &str = "school";

/// The database used when none is specified
pub const DEFAULT_DATABASE: &str = "school";

/// The connection string which selects the in-process store
pub const MEMORY_STORE: &str = "mem://";

/// The path the GraphQL endpoint is served on
pub const GRAPHQL_PATH: &str = "/graphql";

/// The collection holding student documents
pub const STUDENTS: &str = "students";

/// The collection holding teacher documents
pub const TEACHERS: &str = "teachers";

/// The collection holding course documents
pub const COURSES: &str = "courses";
