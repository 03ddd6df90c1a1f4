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

//! The validation client and its transport collaborator interface.

use bherror::traits::{ErrorContext as _, ForeignError as _};
use openssl::x509::{X509Ref, X509};

use crate::{
    interpret_validate_result, InvalidReasons, Result, ValidateRequest, ValidateResult,
    ValidationOptions, ValidationReport, XkmsError,
};

/// Trait that defines the interface for delivering validation requests to
/// the trust service.
///
/// Implementations own everything below the message semantics: endpoint
/// addressing, server/mutual TLS trust decisions (see
/// [`PinnedServerCertificate`]), WS-Security signing and signature
/// verification, and SOAP/XML framing. A call is synchronous and blocks
/// until the trust service answers or the transport fails.
pub trait XkmsTransport {
    /// The error type returned by the transport.
    type Err: std::error::Error + Send + Sync + 'static;

    /// Deliver the request and return the raw validation result.
    fn send(&self, request: &ValidateRequest) -> std::result::Result<ValidateResult, Self::Err>;
}

/// A pinned trust service TLS certificate, for transports performing
/// unilateral server authentication.
///
/// Transport implementations compare the certificate presented during the
/// TLS handshake against the pinned one and reject the connection on a
/// mismatch.
#[derive(Debug, Clone)]
pub struct PinnedServerCertificate(X509);

impl PinnedServerCertificate {
    /// Pin the given certificate.
    pub fn new(certificate: X509) -> Self {
        Self(certificate)
    }

    /// Whether the presented certificate is the pinned one, compared by DER
    /// encoding.
    pub fn matches(&self, presented: &X509Ref) -> Result<bool> {
        let pinned = self.0.to_der().foreign_err(|| XkmsError::Encoding)?;
        let presented = presented.to_der().foreign_err(|| XkmsError::Encoding)?;

        Ok(pinned == presented)
    }
}

/// Client of the trust service XKMS2 validation operation.
///
/// The client itself holds no call-spanning state; invalid reasons
/// accumulate in the caller-owned [`InvalidReasons`] passed to
/// [`validate`][Self::validate].
#[derive(Debug)]
pub struct XkmsClient<T> {
    transport: T,
}

impl<T: XkmsTransport> XkmsClient<T> {
    /// Create a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Validate a certificate chain (or, via
    /// [`ValidationOptions::timestamp_token`], a timestamp token) against
    /// the trust service.
    ///
    /// The chain **MUST BE** ordered leaf certificate first. The call blocks
    /// until the trust service answers; transport failures are propagated
    /// with the underlying error as their source.
    ///
    /// On a non-valid key binding, the binding's reason URIs are appended to
    /// `invalid_reasons` and the returned [`XkmsError::ValidationFailed`]
    /// carries a snapshot of everything accumulated so far.
    pub fn validate(
        &self,
        certificate_chain: &[X509],
        options: &ValidationOptions,
        invalid_reasons: &mut InvalidReasons,
    ) -> Result<ValidationReport> {
        let request = ValidateRequest::build(certificate_chain, options)?;

        let result = self
            .transport
            .send(&request)
            .foreign_err(|| XkmsError::Transport)
            .ctx(|| "trust service validate call failed")?;

        interpret_validate_result(&result, options.return_revocation_data, invalid_reasons)
    }
}
