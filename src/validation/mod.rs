/// Checks an address against the RFC 5322 mailbox grammar.
///
/// # Examples
/// ```
/// use email_notary::validation::syntax::conforms_to_rfc5322;
///
/// assert!(conforms_to_rfc5322("user.name+tag@example.com"));
/// assert!(!conforms_to_rfc5322("jacob"));
/// ```
pub mod syntax;
