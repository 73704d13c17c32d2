use std::str::FromStr;

use email_address::EmailAddress;

/// Parses `candidate` as an RFC 5322 mailbox address.
///
/// Folding whitespace around the address is not part of it and is trimmed
/// before parsing. RFC 5321 length limits (64-octet local part, 63-octet
/// labels) are enforced, and comments are not accepted.
pub fn parse_address(candidate: &str) -> Result<EmailAddress, email_address::Error> {
    EmailAddress::from_str(candidate.trim())
}

pub fn conforms_to_rfc5322(candidate: &str) -> bool {
    parse_address(candidate).is_ok()
}
