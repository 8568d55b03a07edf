// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: regmac
// File: main.rs

use regmac::rmac::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
