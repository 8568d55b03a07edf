// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: regmac
// Module: mac (registration message authentication codes)

//! Shared-secret registration MAC support. Submodules provide the
//! HMAC-SHA1 generator and the fixed secret with its sample fixture.

pub mod generator;
pub mod secret;
