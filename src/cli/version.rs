use crate::cnf::PKG_NAME;
use crate::env::RELEASE;
use crate::err::Error;

pub fn init() -> Result<(), Error> {
	println!("{PKG_NAME} {}", *RELEASE);
	Ok(())
}
