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

//! This module defines the error values returned by the crate API.

/// Error type used across the crate API.
#[derive(strum_macros::Display, Debug, PartialEq, Clone)]
pub enum XkmsError {
    /// The trust service does not recognize the requested trust domain.
    #[strum(to_string = "Trust domain not found")]
    TrustDomainNotFound,
    /// The trust service reported at least one inspected key binding as not
    /// valid. Carries all invalid reason URIs accumulated so far, ending with
    /// the reasons of the failing binding.
    #[strum(to_string = "Certificate validation failed: {0}")]
    ValidationFailed(InvalidReasons),
    /// Revocation data was requested but the trust service response did not
    /// carry it. This is a violation of the protocol contract by the server,
    /// not a verdict on the certificate chain.
    #[strum(to_string = "Revocation data not found in the trust service response")]
    RevocationDataNotFound,
    /// More than one message extension kind was supplied for a single
    /// request. See [`ValidationOptions`][crate::ValidationOptions] for the
    /// extension slot rules.
    #[strum(to_string = "Conflicting message extensions supplied for a single request")]
    ConflictingExtensions,
    /// Error when encoding request material (e.g. a certificate) to DER.
    #[strum(to_string = "Failed to encode request material")]
    Encoding,
    /// The transport collaborator failed to deliver the request or the
    /// response. The underlying transport error is preserved as the source.
    #[strum(to_string = "Transport failure")]
    Transport,
}

impl bherror::BhError for XkmsError {}

/// The [`bherror::Result`] type with the error type of
/// [`XkmsError`], used throughout this crate.
pub type Result<T> = bherror::Result<T, XkmsError>;

/// Append-only accumulator of invalid reason URIs reported by the trust
/// service.
///
/// The accumulator is owned by the caller and passed to each
/// [`validate`][crate::XkmsClient::validate] call. Reasons accumulate across
/// calls for as long as the caller keeps the same instance; callers that need
/// per-call isolation should use a fresh instance per validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidReasons(Vec<String>);

impl InvalidReasons {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the given reason URIs, preserving their order.
    pub fn append<I, S>(&mut self, reasons: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(reasons.into_iter().map(Into::into));
    }

    /// All accumulated reason URIs, oldest first.
    pub fn reasons(&self) -> &[String] {
        &self.0
    }

    /// Whether no reasons have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for InvalidReasons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
