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

//! Wire model for XKMS2 validation requests and results.
//!
//! The types here mirror the XKMS2 `ValidateRequest` / `ValidateResult`
//! message shapes. They carry already-encoded certificate, OCSP, CRL and
//! timestamp material as opaque DER blobs; producing and consuming those
//! blobs is the job of the cryptography collaborator, and SOAP/XML framing
//! is the job of the [transport collaborator][crate::XkmsTransport].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single DER-encoded PKI object (OCSP response, CRL, timestamp token or
/// attribute certificate), wrapped for embedding into a message extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncapsulatedPkiData(
    /// The wrapped DER bytes.
    pub Vec<u8>,
);

impl EncapsulatedPkiData {
    /// The wrapped DER bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for EncapsulatedPkiData {
    fn from(der: Vec<u8>) -> Self {
        Self(der)
    }
}

/// Combined revocation evidence: OCSP responses and CRLs, each individually
/// DER-encoded.
///
/// Both lists may be empty; historical validation attaches an empty instance
/// when the caller supplied no revocation evidence at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationValues {
    /// DER-encoded OCSP responses.
    pub ocsp_values: Vec<EncapsulatedPkiData>,
    /// DER-encoded CRLs.
    pub crl_values: Vec<EncapsulatedPkiData>,
}

impl RevocationValues {
    /// Combine lists of DER-encoded OCSP responses and CRLs, preserving
    /// their order.
    pub fn from_der_parts(ocsp_responses: &[Vec<u8>], crls: &[Vec<u8>]) -> Self {
        Self {
            ocsp_values: ocsp_responses
                .iter()
                .cloned()
                .map(EncapsulatedPkiData)
                .collect(),
            crl_values: crls.iter().cloned().map(EncapsulatedPkiData).collect(),
        }
    }
}

/// An entry of the `X509Data` key material of a query key binding.
///
/// The enum tag is the kind marker the trust service uses to distinguish the
/// entry kinds; validation requests built by this crate only ever carry
/// certificates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum X509DataEntry {
    /// A DER-encoded X.509 certificate.
    Certificate(Vec<u8>),
}

/// Key material of a [`QueryKeyBinding`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    /// The `X509Data` entries, in caller order (leaf certificate first).
    pub x509_data: Vec<X509DataEntry>,
}

/// A `UseKeyWith` directive scoping the key binding to an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseKeyWith {
    /// The application identifier URI, e.g.
    /// [`TRUST_DOMAIN_APPLICATION_URI`][crate::constants::TRUST_DOMAIN_APPLICATION_URI].
    pub application: String,
    /// The application-specific subject identifier, e.g. a trust domain name.
    pub identifier: String,
}

/// The point in time for which the key binding should be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInstant {
    /// The validation time.
    pub time: DateTime<Utc>,
}

/// A message extension attached to a validation request or returned with a
/// validation result.
///
/// A request carries at most one extension; see
/// [`ValidationOptions`][crate::ValidationOptions] for the slot rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageExtension {
    /// Revocation evidence, either supplied by the caller on a request or
    /// echoed back by the trust service on a result.
    RevocationData(RevocationValues),
    /// A DER-encoded RFC 3161 timestamp token to be validated as a trust
    /// object.
    TimestampToken(EncapsulatedPkiData),
    /// DER-encoded attribute certificates (certified roles) to be validated
    /// alongside the certificate chain.
    AttributeCertificates(Vec<EncapsulatedPkiData>),
}

impl MessageExtension {
    /// The revocation values carried by this extension, if it is a
    /// [`MessageExtension::RevocationData`].
    pub fn revocation_values(&self) -> Option<&RevocationValues> {
        match self {
            Self::RevocationData(values) => Some(values),
            _ => None,
        }
    }
}

/// The key binding the trust service is queried about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryKeyBinding {
    /// The key material to validate.
    pub key_info: KeyInfo,
    /// Application scoping directives; at most one trust-domain directive.
    pub use_key_with: Vec<UseKeyWith>,
    /// Historical validation time; `None` validates as of "now".
    pub time_instant: Option<TimeInstant>,
}

/// A complete, protocol-ready XKMS2 validation request.
///
/// Build one with [`ValidateRequest::build`][crate::ValidateRequest::build];
/// no network activity happens until it is handed to an
/// [`XkmsTransport`][crate::XkmsTransport].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// The queried key binding.
    pub query_key_binding: QueryKeyBinding,
    /// `RespondWith` directive URIs.
    pub respond_with: Vec<String>,
    /// The single message extension of this request, if any.
    pub message_extension: Option<MessageExtension>,
}

/// Validity status of a single key binding of a [`ValidateResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindingStatus {
    /// The status URI; compare against
    /// [`KEY_BINDING_STATUS_VALID`][crate::constants::KEY_BINDING_STATUS_VALID].
    pub status_value: String,
    /// Reason URIs explaining a non-valid status, in server order.
    pub invalid_reasons: Vec<String>,
}

/// A server-asserted key binding verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// The validity status of this binding.
    pub status: KeyBindingStatus,
}

/// The raw result of an XKMS2 validation call, as returned by the transport
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResult {
    /// The top-level result code URI.
    pub result_major: String,
    /// The result sub-code URI, when the service reports one.
    pub result_minor: Option<String>,
    /// Key binding verdicts, in server order.
    pub key_bindings: Vec<KeyBinding>,
    /// Message extensions returned with the result.
    pub message_extensions: Vec<MessageExtension>,
}
