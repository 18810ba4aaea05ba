use std::env::consts::{ARCH, OS};
use std::sync::LazyLock;

use crate::cnf::PKG_VERSION;

/// Stores the current release identifier
pub static RELEASE: LazyLock<String> =
	LazyLock::new(|| format!("{} for {} on {}", *PKG_VERSION, OS, ARCH));

pub fn init() {
	// Log version
	info!("Running {}", *RELEASE);
}
