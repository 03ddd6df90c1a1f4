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

//! Assembling validation requests from caller inputs.

use bherror::traits::{ErrorContext as _, ForeignError as _};
use chrono::{DateTime, Utc};
use openssl::x509::X509;

use crate::{
    constants::{RETURN_REVOCATION_DATA_URI, TRUST_DOMAIN_APPLICATION_URI},
    models::{
        EncapsulatedPkiData, KeyInfo, MessageExtension, QueryKeyBinding, RevocationValues,
        TimeInstant, UseKeyWith, ValidateRequest, X509DataEntry,
    },
    Result, XkmsError,
};

/// Optional inputs of a validation call, each defaulting to "absent".
///
/// # Message extension slot
///
/// A validation request carries at most **one** message extension, so the
/// extension-bearing fields are mutually exclusive per call:
///
/// * revocation evidence ([`ocsp_responses`][Self::ocsp_responses] /
///   [`crls`][Self::crls] / [`revocation_values`][Self::revocation_values]),
/// * [`timestamp_token`][Self::timestamp_token],
/// * [`attribute_certificates`][Self::attribute_certificates].
///
/// Supplying more than one of these kinds makes
/// [`ValidateRequest::build`] fail with [`XkmsError::ConflictingExtensions`].
/// Within the revocation kind, exactly one representation is used per
/// request: a supplied [`revocation_values`][Self::revocation_values] takes
/// precedence over the OCSP/CRL lists.
///
/// # Historical validation
///
/// Setting [`validation_time`][Self::validation_time] requests validation as
/// of that past time instead of "now". The trust service does not support
/// historical validation without revocation data attached, so when no
/// extension-bearing field is supplied the builder attaches revocation
/// values synthesized from the (possibly empty) OCSP/CRL lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Trust domain to validate under; `None` means the default domain.
    pub trust_domain: Option<String>,
    /// Ask the trust service to echo back the revocation data it used.
    pub return_revocation_data: bool,
    /// Historical validation time; `None` validates as of "now".
    pub validation_time: Option<DateTime<Utc>>,
    /// DER-encoded OCSP responses to attach as revocation evidence.
    pub ocsp_responses: Vec<Vec<u8>>,
    /// DER-encoded CRLs to attach as revocation evidence.
    pub crls: Vec<Vec<u8>>,
    /// Pre-combined revocation evidence, already in wire shape.
    pub revocation_values: Option<RevocationValues>,
    /// DER-encoded RFC 3161 timestamp token to validate instead of a live
    /// certificate chain. Callers typically pass an empty chain with this.
    pub timestamp_token: Option<Vec<u8>>,
    /// DER-encoded attribute certificates to validate.
    pub attribute_certificates: Vec<Vec<u8>>,
}

impl ValidationOptions {
    /// Resolve the single message extension of the request, enforcing the
    /// slot rules documented on the type.
    fn message_extension(&self) -> Result<Option<MessageExtension>> {
        let has_revocation = self.revocation_values.is_some()
            || !self.ocsp_responses.is_empty()
            || !self.crls.is_empty();
        let has_timestamp = self.timestamp_token.is_some();
        let has_attribute_certificates = !self.attribute_certificates.is_empty();

        let supplied = usize::from(has_revocation)
            + usize::from(has_timestamp)
            + usize::from(has_attribute_certificates);
        if supplied > 1 {
            return Err(bherror::Error::root(XkmsError::ConflictingExtensions)
                .ctx("a validation request carries a single message extension"));
        }

        if let Some(token) = &self.timestamp_token {
            return Ok(Some(MessageExtension::TimestampToken(
                EncapsulatedPkiData(token.clone()),
            )));
        }

        if has_attribute_certificates {
            return Ok(Some(MessageExtension::AttributeCertificates(
                self.attribute_certificates
                    .iter()
                    .cloned()
                    .map(EncapsulatedPkiData)
                    .collect(),
            )));
        }

        if has_revocation || self.validation_time.is_some() {
            let values = match &self.revocation_values {
                Some(values) => values.clone(),
                None => RevocationValues::from_der_parts(&self.ocsp_responses, &self.crls),
            };
            return Ok(Some(MessageExtension::RevocationData(values)));
        }

        Ok(None)
    }
}

impl ValidateRequest {
    /// Assemble a protocol-ready validation request from a certificate chain
    /// and the given options.
    ///
    /// The chain **MUST BE** ordered leaf certificate first; it is embedded
    /// as key binding material in input order with its DER encoding
    /// preserved byte-exact. An empty chain is allowed for timestamp-token
    /// validation calls.
    ///
    /// No network activity happens here; hand the request to an
    /// [`XkmsTransport`][crate::XkmsTransport] to get it validated.
    pub fn build(certificate_chain: &[X509], options: &ValidationOptions) -> Result<Self> {
        let x509_data = certificate_chain
            .iter()
            .enumerate()
            .map(|(i, certificate)| {
                certificate
                    .to_der()
                    .foreign_err(|| XkmsError::Encoding)
                    .ctx(|| i)
                    .map(X509DataEntry::Certificate)
            })
            .collect::<Result<Vec<_>>>()
            .ctx(|| "failed to encode certificate chain")?;

        let use_key_with = options
            .trust_domain
            .as_ref()
            .map(|domain| UseKeyWith {
                application: TRUST_DOMAIN_APPLICATION_URI.to_string(),
                identifier: domain.clone(),
            })
            .into_iter()
            .collect();

        let respond_with = if options.return_revocation_data {
            vec![RETURN_REVOCATION_DATA_URI.to_string()]
        } else {
            Vec::new()
        };

        let time_instant = options.validation_time.map(|time| TimeInstant { time });

        let message_extension = options.message_extension()?;

        Ok(Self {
            query_key_binding: QueryKeyBinding {
                key_info: KeyInfo { x509_data },
                use_key_with,
                time_instant,
            },
            respond_with,
            message_extension,
        })
    }
}
