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

//! Well-known XKMS2 protocol identifiers.
//!
//! These values are part of the wire contract with the trust service and
//! **MUST** be preserved bit-exact for interoperability.

/// `ResultMajor` value reported by the trust service on success, as specified
/// in [XKMS 2.0, section 2.6.2][1].
///
/// [1]: <https://www.w3.org/TR/xkms2/#XKMS_2_0_Section_2_6_2>
pub const RESULT_MAJOR_SUCCESS: &str = "http://www.w3.org/2002/03/xkms#Success";

/// `ResultMinor` value reported by the trust service when the requested trust
/// domain is not known to it.
///
/// This is a trust-service extension of the `ResultMinor` codes from
/// [XKMS 2.0, section 2.6.3][1].
///
/// [1]: <https://www.w3.org/TR/xkms2/#XKMS_2_0_Section_2_6_3>
pub const RESULT_MINOR_TRUST_DOMAIN_NOT_FOUND: &str =
    "urn:be:fedict:trust-service:resultminor:trust-domain-not-found";

/// Key binding `StatusValue` asserting the binding is valid, as specified in
/// [XKMS 2.0, section 5.1][1].
///
/// [1]: <https://www.w3.org/TR/xkms2/#XKMS_2_0_Section_5_1>
pub const KEY_BINDING_STATUS_VALID: &str = "http://www.w3.org/2002/03/xkms#Valid";

/// `UseKeyWith` application identifier scoping a validation request to a
/// named trust domain of the trust service.
pub const TRUST_DOMAIN_APPLICATION_URI: &str = "urn:be:fedict:trust-service:trust-domain";

/// `RespondWith` identifier asking the trust service to echo back the
/// revocation data it used during validation.
pub const RETURN_REVOCATION_DATA_URI: &str = "urn:be:fedict:trust-service:revocation-data";
