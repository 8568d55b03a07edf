// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: regmac
// File: generator.rs

//! HMAC-SHA1 computation over the null-delimited registration
//! fields.

use std::borrow::Cow;

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

const FIELD_DELIMITER: &[u8] = b"\x00";
const ADMIN_MARKER: &[u8] = b"admin";
const NOT_ADMIN_MARKER: &[u8] = b"notadmin";

/// The fields covered by one registration MAC. Values are hashed
/// as-is; no format constraints are enforced, empty strings
/// included.
#[derive(Clone, Copy, Debug)]
pub struct RegistrationRequest<'a> {
	pub nonce: &'a str,
	pub user: &'a str,
	pub password: &'a str,
	pub admin: bool,
	pub user_type: Option<&'a str>,
}

impl<'a> RegistrationRequest<'a> {
	pub fn new(
		nonce: &'a str,
		user: &'a str,
		password: &'a str,
	) -> Self {
		Self {
			nonce,
			user,
			password,
			admin: false,
			user_type: None,
		}
	}

	pub fn admin(mut self, admin: bool) -> Self {
		self.admin = admin;
		self
	}

	pub fn user_type(mut self, user_type: Option<&'a str>) -> Self {
		self.user_type = user_type;
		self
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacErrorKind {
	InvalidKeyLength,
}

#[derive(Debug)]
pub struct MacError {
	kind: MacErrorKind,
	message: Cow<'static, str>,
}

impl MacError {
	pub fn new(
		kind: MacErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn kind(&self) -> MacErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for MacError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for MacError {}

/// Computes the registration MAC: HMAC-SHA1 over the request fields
/// in a fixed order, each separated by a single NUL byte, with the
/// admin flag encoded as the literal marker `admin` or `notadmin`.
/// Returns the digest as a lowercase hex string.
pub fn generate_registration_mac(
	shared_secret: &[u8],
	request: &RegistrationRequest<'_>,
) -> Result<String, MacError> {
	let mut mac =
		HmacSha1::new_from_slice(shared_secret).map_err(|_| {
			MacError::new(
				MacErrorKind::InvalidKeyLength,
				"HMAC key length must be at least one byte",
			)
		})?;

	mac.update(request.nonce.as_bytes());
	mac.update(FIELD_DELIMITER);
	mac.update(request.user.as_bytes());
	mac.update(FIELD_DELIMITER);
	mac.update(request.password.as_bytes());
	mac.update(FIELD_DELIMITER);
	mac.update(if request.admin {
		ADMIN_MARKER
	} else {
		NOT_ADMIN_MARKER
	});
	// An empty user type is skipped like an absent one; the
	// reference digests depend on this.
	if let Some(user_type) =
		request.user_type.filter(|ut| !ut.is_empty())
	{
		mac.update(FIELD_DELIMITER);
		mac.update(user_type.as_bytes());
	}

	let digest = mac.finalize().into_bytes();
	Ok(digest_to_hex(digest.as_slice()))
}

pub fn digest_to_hex(bytes: &[u8]) -> String {
	hex::encode(bytes)
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn admin_and_notadmin_markers_never_collide() {
		let base = RegistrationRequest::new("n", "u", "p");
		let admin =
			generate_registration_mac(b"k", &base.admin(true))
				.expect("mac");
		let not_admin =
			generate_registration_mac(b"k", &base.admin(false))
				.expect("mac");
		assert_ne!(admin, not_admin);
	}

	#[test]
	fn empty_user_type_matches_absent_user_type() {
		let base = RegistrationRequest::new("n", "u", "p");
		let absent =
			generate_registration_mac(b"k", &base).expect("mac");
		let empty = generate_registration_mac(
			b"k",
			&base.user_type(Some("")),
		)
		.expect("mac");
		assert_eq!(absent, empty);
	}

	#[test]
	fn digest_to_hex_renders_lowercase() {
		assert_eq!(digest_to_hex(&hex!("C272FB1C")), "c272fb1c");
	}
}
