// Copyright (C) 2020-2026  The Blockhouse Technology Limited (TBTL).
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public
// License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! This crate provides a client for the [XKMS2][1]-based trust service
//! validation operation: it builds validation requests from an X.509
//! certificate chain (optionally scoped to a trust domain, a historical
//! point in time, a timestamp token or attribute certificates) and
//! interprets the structured verdict the service returns, including optional
//! revocation evidence.
//!
//! [1]: <https://www.w3.org/TR/xkms2/>
//!
//! # Details
//!
//! The primary API of this crate is the [`XkmsClient`] struct, parameterized
//! by an [`XkmsTransport`] implementation. The transport is an external
//! collaborator owning endpoint addressing, TLS trust (see
//! [`PinnedServerCertificate`]), message signing and SOAP/XML framing; this
//! crate owns the message semantics.
//!
//! Optional call inputs are gathered in [`ValidationOptions`]; the
//! extension-bearing fields among them are mutually exclusive per call, see
//! the type documentation. A call returns a [`ValidationReport`] on success
//! or exactly one of the [`XkmsError`] failures, with invalid reason URIs
//! accumulating in a caller-owned [`InvalidReasons`].
//!
//! Requests can also be built and results interpreted without the client,
//! via [`ValidateRequest::build`] and [`interpret_validate_result`].
//!
//! # Examples
//!
//! ```
//! use bhxkms::{
//!     constants, InvalidReasons, KeyBinding, KeyBindingStatus, ValidateRequest, ValidateResult,
//!     ValidationOptions, Verdict, XkmsClient, XkmsTransport,
//! };
//!
//! // A stand-in for a real SOAP transport.
//! struct LoopbackTransport;
//!
//! impl XkmsTransport for LoopbackTransport {
//!     type Err = std::convert::Infallible;
//!
//!     fn send(&self, _request: &ValidateRequest) -> Result<ValidateResult, Self::Err> {
//!         Ok(ValidateResult {
//!             result_major: constants::RESULT_MAJOR_SUCCESS.to_string(),
//!             result_minor: None,
//!             key_bindings: vec![KeyBinding {
//!                 status: KeyBindingStatus {
//!                     status_value: constants::KEY_BINDING_STATUS_VALID.to_string(),
//!                     invalid_reasons: Vec::new(),
//!                 },
//!             }],
//!             message_extensions: Vec::new(),
//!         })
//!     }
//! }
//!
//! let client = XkmsClient::new(LoopbackTransport);
//!
//! // Validate a timestamp token; these calls pass an empty certificate chain.
//! let options = ValidationOptions {
//!     trust_domain: Some("BE-TSA".to_string()),
//!     timestamp_token: Some(vec![0x30, 0x00]),
//!     ..Default::default()
//! };
//!
//! let mut invalid_reasons = InvalidReasons::new();
//! let report = client.validate(&[], &options, &mut invalid_reasons).unwrap();
//! assert_eq!(report.verdict, Verdict::Valid);
//! ```

mod client;
pub mod constants;
mod error;
mod models;
mod request;
mod response;

pub use client::*;
pub use error::*;
pub use models::*;
pub use request::*;
pub use response::*;

#[cfg(test)]
mod test_utils;
