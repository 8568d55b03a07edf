// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: regmac
// File: app.rs

//! CLI wiring. Without arguments the binary prints the MAC of the
//! built-in sample registration; every field can be overridden with
//! a flag.

use crate::rmac::mac::generator::{
	generate_registration_mac, RegistrationRequest,
};
use crate::rmac::mac::secret::{
	REGISTRATION_SHARED_SECRET, SAMPLE_ADMIN, SAMPLE_NONCE,
	SAMPLE_PASSWORD, SAMPLE_USER,
};
use clap::{
	crate_name, crate_version, value_parser, Arg, Command,
};
use std::error::Error;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
Running without arguments prints the MAC of the built-in sample
registration (nonce 1234567890, user groot, admin, no user type).

{usage-heading} {usage}

{all-args}{after-help}
";

fn build_command() -> Command {
	Command::new(crate_name!())
		.version(crate_version!())
		.about(
			"Generates the shared-secret registration MAC used as a test fixture.",
		)
		.help_template(HELP_TEMPLATE)
		.arg(
			Arg::new("nonce")
				.long("nonce")
				.value_name("NONCE")
				.default_value(SAMPLE_NONCE)
				.help("Nonce fed into the MAC"),
		)
		.arg(
			Arg::new("user")
				.long("user")
				.value_name("USER")
				.default_value(SAMPLE_USER)
				.help("Username fed into the MAC"),
		)
		.arg(
			Arg::new("password")
				.long("password")
				.value_name("PASSWORD")
				.default_value(SAMPLE_PASSWORD)
				.help("Password fed into the MAC (hashed as data, not used as a key)"),
		)
		.arg(
			Arg::new("admin")
				.long("admin")
				.value_name("BOOL")
				.value_parser(value_parser!(bool))
				.default_value("true")
				.help("Selects the `admin` or `notadmin` marker"),
		)
		.arg(
			Arg::new("user-type")
				.long("user-type")
				.value_name("TYPE")
				.help("Optional user type appended as a final field; empty means absent"),
		)
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let matches = build_command().get_matches();

	let nonce = matches
		.get_one::<String>("nonce")
		.map(String::as_str)
		.unwrap_or(SAMPLE_NONCE);
	let user = matches
		.get_one::<String>("user")
		.map(String::as_str)
		.unwrap_or(SAMPLE_USER);
	let password = matches
		.get_one::<String>("password")
		.map(String::as_str)
		.unwrap_or(SAMPLE_PASSWORD);
	let admin = matches
		.get_one::<bool>("admin")
		.copied()
		.unwrap_or(SAMPLE_ADMIN);
	let user_type =
		matches.get_one::<String>("user-type").map(String::as_str);

	let request = RegistrationRequest::new(nonce, user, password)
		.admin(admin)
		.user_type(user_type);
	let mac = generate_registration_mac(
		REGISTRATION_SHARED_SECRET,
		&request,
	)?;
	println!("{}", mac);
	Ok(())
}
