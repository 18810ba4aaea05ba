use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::err::Error;

/// The opaque identifier of a stored document.
///
/// Identifiers are assigned by the store when a document is inserted and
/// never change afterwards. Version 7 UUIDs are used, so identifiers
/// generated by one process sort in creation order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(Uuid);

impl Id {
	/// Generate a new unique identifier
	pub fn generate() -> Self {
		Self(Uuid::now_v7())
	}
}

impl FromStr for Id {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// Only the hyphenated form is an identifier
		if s.len() != uuid::fmt::Hyphenated::LENGTH {
			return Err(Error::InvalidId(s.to_owned()));
		}
		Uuid::parse_str(s).map(Self).map_err(|_| Error::InvalidId(s.to_owned()))
	}
}

impl fmt::Display for Id {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.hyphenated().fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn display_roundtrips_through_parse() {
		let id = Id::generate();
		let parsed: Id = id.to_string().parse().unwrap();
		assert_eq!(id, parsed);
	}

	#[test]
	fn generated_ids_are_unique() {
		let a = Id::generate();
		let b = Id::generate();
		assert_ne!(a, b);
	}

	#[rstest]
	#[case("")]
	#[case("not-an-id")]
	#[case("65a1f0c2e4b0a1b2c3d4e5f6")]
	#[case("0191d3c8-7b3a-7c3e-9f3a-2b1c0d9e8f7")]
	#[case(" 0191d3c8-7b3a-7c3e-9f3a-2b1c0d9e8f70")]
	#[case("0191d3c8-7b3a-7c3e-9f3a-2b1c0d9e8f70\n")]
	#[case("0191d3c87b3a7c3e9f3a2b1c0d9e8f70")]
	#[case("{0191d3c8-7b3a-7c3e-9f3a-2b1c0d9e8f70}")]
	#[case("urn:uuid:0191d3c8-7b3a-7c3e-9f3a-2b1c0d9e8f70")]
	fn malformed_ids_are_rejected(#[case] input: &str) {
		match input.parse::<Id>() {
			Err(Error::InvalidId(v)) => assert_eq!(v, input),
			other => panic!("expected an invalid identifier error, got {other:?}"),
		}
	}

	#[test]
	fn ids_render_as_lowercase_hyphenated() {
		let id: Id = "0191D3C8-7B3A-7C3E-9F3A-2B1C0D9E8F70".parse().unwrap();
		assert_eq!(id.to_string(), "0191d3c8-7b3a-7c3e-9f3a-2b1c0d9e8f70");
	}
}
