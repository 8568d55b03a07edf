// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: regmac
// File: secret.rs

//! The fixed registration shared secret and the built-in sample
//! invocation.

use super::generator::{
	generate_registration_mac, MacError, RegistrationRequest,
};

/// Pre-shared secret keying every registration MAC. Opaque constant,
/// reproduced byte-for-byte; the reference digests depend on it.
pub const REGISTRATION_SHARED_SECRET: &[u8] =
	b"m@;wYOUOh0f:CH5XA65sJB1^q01~DmIriOysRImot,OR_vzN&B";

pub const SAMPLE_NONCE: &str = "1234567890";
pub const SAMPLE_USER: &str = "groot";
pub const SAMPLE_PASSWORD: &str = "imroot!1234";
pub const SAMPLE_ADMIN: bool = true;

/// The sample registration hashed when the binary runs without
/// arguments. No user type.
pub fn sample_request() -> RegistrationRequest<'static> {
	RegistrationRequest::new(
		SAMPLE_NONCE,
		SAMPLE_USER,
		SAMPLE_PASSWORD,
	)
	.admin(SAMPLE_ADMIN)
}

pub fn sample_mac() -> Result<String, MacError> {
	generate_registration_mac(
		REGISTRATION_SHARED_SECRET,
		&sample_request(),
	)
}
