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

//! Interpreting raw trust service results into caller-visible verdicts.

use crate::{
    constants::{
        KEY_BINDING_STATUS_VALID, RESULT_MAJOR_SUCCESS, RESULT_MINOR_TRUST_DOMAIN_NOT_FOUND,
    },
    models::{MessageExtension, RevocationValues, ValidateResult},
    InvalidReasons, Result, XkmsError,
};

/// The verdict of a completed validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The trust service asserted a valid key binding.
    Valid,
    /// The result carried no key bindings at all, so the trust service made
    /// no assertion either way.
    NoKeyBindings,
}

/// The outcome of a validation call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// The verdict; note that [`Verdict::NoKeyBindings`] is an ambiguous
    /// outcome, not a positive validity assertion.
    pub verdict: Verdict,
    /// Revocation data the trust service used, present only when the call
    /// requested it.
    pub revocation_values: Option<RevocationValues>,
}

/// Interpret a raw validation result.
///
/// The interpretation happens in three steps:
///
/// 1. A non-success result major with the trust-domain-not-found result
///    minor fails with [`XkmsError::TrustDomainNotFound`] without consulting
///    any further result fields. Other non-success majors are still
///    inspected for key bindings, matching the trust service contract.
/// 2. When `return_revocation_data` was requested on the call, the result
///    extensions are scanned for revocation data; a result without it fails
///    with [`XkmsError::RevocationDataNotFound`].
/// 3. The first key binding decides the verdict: a valid status succeeds,
///    anything else appends the binding's reason URIs to `invalid_reasons`
///    and fails with [`XkmsError::ValidationFailed`] carrying a snapshot of
///    the accumulator. Later bindings are never inspected. A result with no
///    key bindings yields [`Verdict::NoKeyBindings`].
pub fn interpret_validate_result(
    result: &ValidateResult,
    return_revocation_data: bool,
    invalid_reasons: &mut InvalidReasons,
) -> Result<ValidationReport> {
    if result.result_major != RESULT_MAJOR_SUCCESS
        && result.result_minor.as_deref() == Some(RESULT_MINOR_TRUST_DOMAIN_NOT_FOUND)
    {
        return Err(bherror::Error::root(XkmsError::TrustDomainNotFound)
            .ctx(format!("result major: {}", result.result_major)));
    }

    let revocation_values = if return_revocation_data {
        match result
            .message_extensions
            .iter()
            .find_map(MessageExtension::revocation_values)
        {
            Some(values) => Some(values.clone()),
            None => {
                return Err(bherror::Error::root(XkmsError::RevocationDataNotFound)
                    .ctx("revocation data was requested on the call"))
            }
        }
    } else {
        None
    };

    match result.key_bindings.first() {
        Some(key_binding) if key_binding.status.status_value == KEY_BINDING_STATUS_VALID => {
            Ok(ValidationReport {
                verdict: Verdict::Valid,
                revocation_values,
            })
        }
        Some(key_binding) => {
            invalid_reasons.append(key_binding.status.invalid_reasons.iter().cloned());
            Err(bherror::Error::root(XkmsError::ValidationFailed(
                invalid_reasons.clone(),
            )))
        }
        None => Ok(ValidationReport {
            verdict: Verdict::NoKeyBindings,
            revocation_values,
        }),
    }
}
