// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: regmac
// File: lib.rs

pub mod rmac {
	pub mod app;
	pub mod mac;
}
