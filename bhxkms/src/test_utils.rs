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

//! Certificate fixtures shared across the crate tests.

use openssl::x509::X509;

// TBTL test chain in order: leaf, intermediary, root.
const CERTS: &str = "
-----BEGIN CERTIFICATE-----
MIICGDCCAb6gAwIBAgIUaZlAtJebcQ6Zk9ZXiVZ48dSaeekwCgYIKoZIzj0EAwIw
bTELMAkGA1UEBhMCSFIxFDASBgNVBAgMC0dyYWQgWmFncmViMQ8wDQYDVQQHDAZa
YWdyZWIxDTALBgNVBAoMBFRCVEwxETAPBgNVBAsMCFRlYW0gQmVlMRUwEwYDVQQD
DAxpbnRlcm1lZGlhcnkwIBcNMjQxMjA0MDg1NzEyWhgPMjEyNDExMTAwODU3MTJa
MGUxCzAJBgNVBAYTAkhSMRQwEgYDVQQIDAtHcmFkIFphZ3JlYjEPMA0GA1UEBwwG
WmFncmViMQ0wCwYDVQQKDARUQlRMMREwDwYDVQQLDAhUZWFtIEJlZTENMAsGA1UE
AwwEbGVhZjBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABK+HDuLLHyjzQaiQxysC
mPtdksQauXv9S/ZQgTM/AlBZ/J6Lr/Uim7J+r2droplL95Hcpa6MZn1KfAacfAes
MCijQjBAMB0GA1UdDgQWBBSCezR2kWEbEzxHbhXNXbKm+hd8qzAfBgNVHSMEGDAW
gBTwnYWLumOoJFIwwm+auFeyXFFdJTAKBggqhkjOPQQDAgNIADBFAiAYQG8xMTi+
dEWCv7UwquS/6YKaaUHntGhdlU3qoyAskgIhAID2Alt1qOnWb9tPYAjmlSoT5NLZ
8Tig+6l55pHi9XhV
-----END CERTIFICATE-----
-----BEGIN CERTIFICATE-----
MIICPDCCAeKgAwIBAgIUXcbNAmZ3c8WpP4nlWPrfLRyA6yEwCgYIKoZIzj0EAwIw
ZTELMAkGA1UEBhMCSFIxFDASBgNVBAgMC0dyYWQgWmFncmViMQ8wDQYDVQQHDAZa
YWdyZWIxDTALBgNVBAoMBFRCVEwxETAPBgNVBAsMCFRlYW0gQmVlMQ0wCwYDVQQD
DARyb290MCAXDTI0MTIwNDA4NTcxMloYDzIxMjQxMTEwMDg1NzEyWjBtMQswCQYD
VQQGEwJIUjEUMBIGA1UECAwLR3JhZCBaYWdyZWIxDzANBgNVBAcMBlphZ3JlYjEN
MAsGA1UECgwEVEJUTDERMA8GA1UECwwIVGVhbSBCZWUxFTATBgNVBAMMDGludGVy
bWVkaWFyeTBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABJJXtP84I3hrmlSSZxyv
8ATGrPdpEOffsYZikkMumR6cvKX2qZ4RP6tiXAdpOsr0qYlumUR5iHRxRG3u9dYu
bFujZjBkMB0GA1UdDgQWBBTwnYWLumOoJFIwwm+auFeyXFFdJTAfBgNVHSMEGDAW
gBRTPefvvzFcr8+4XU9x1ND5d/YLPjASBgNVHRMBAf8ECDAGAQH/AgEAMA4GA1Ud
DwEB/wQEAwIBhjAKBggqhkjOPQQDAgNIADBFAiArVWwaWqiEYWXjY09BZHCFHe9r
ntSfXIHDIZIuKQdjDQIhAI8IZHXM0pDx3otGT0we1/XeW2mOgVL32fVLVY3xvZSM
-----END CERTIFICATE-----
-----BEGIN CERTIFICATE-----
MIICtTCCAlugAwIBAgIUAS+XO01IVXrFnsiOmClfU9A8CRMwCgYIKoZIzj0EAwIw
ZTELMAkGA1UEBhMCSFIxFDASBgNVBAgMC0dyYWQgWmFncmViMQ8wDQYDVQQHDAZa
YWdyZWIxDTALBgNVBAoMBFRCVEwxETAPBgNVBAsMCFRlYW0gQmVlMQ0wCwYDVQQD
DARyb290MB4XDTI0MTIwNDA4NTcxMloXDTI1MTIwNDA4NTcxMlowZTELMAkGA1UE
BhMCSFIxFDASBgNVBAgMC0dyYWQgWmFncmViMQ8wDQYDVQQHDAZaYWdyZWIxDTAL
BgNVBAoMBFRCVEwxETAPBgNVBAsMCFRlYW0gQmVlMQ0wCwYDVQQDDARyb290MFkw
EwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE5xkaU0L4AjAP1odEvrPHorGJyKnlpySA
BXBv855QIsE4RNK3WXdzP67cgbKxqd2sAM4iAICjoZkawvdjUl7hQKOB6DCB5TAP
BgNVHRMBAf8EBTADAQH/MB0GA1UdDgQWBBRTPefvvzFcr8+4XU9x1ND5d/YLPjCB
ogYDVR0jBIGaMIGXgBRTPefvvzFcr8+4XU9x1ND5d/YLPqFppGcwZTELMAkGA1UE
BhMCSFIxFDASBgNVBAgMC0dyYWQgWmFncmViMQ8wDQYDVQQHDAZaYWdyZWIxDTAL
BgNVBAoMBFRCVEwxETAPBgNVBAsMCFRlYW0gQmVlMQ0wCwYDVQQDDARyb290ghQB
L5c7TUhVesWeyI6YKV9T0DwJEzAOBgNVHQ8BAf8EBAMCAQYwCgYIKoZIzj0EAwID
SAAwRQIgQFZcV8g8pWID+BtS8nsulkve1i/OEBy9XbnQwt/i2FQCIQDsNlcxSkKK
jdc01UGluQ7Pq6abMWPn5OZaPDyCSqpjbw==
-----END CERTIFICATE-----
";

/// The fixture chain as `[leaf, intermediary, root]`.
pub(crate) fn certs() -> [X509; 3] {
    X509::stack_from_pem(CERTS.as_bytes())
        .unwrap()
        .try_into()
        .unwrap()
}
