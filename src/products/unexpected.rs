use thiserror::Error;


#[derive(Debug, Clone, Error, PartialEq, Eq, Hash)]
/// Unexpected check result. Display strings are the causes printed on failure lines.
pub enum Unexpected {
    /// Name resolution failed or resolved no addresses
    #[error("DNS lookup failed")]
    DnsLookupFailed,

    /// Dial, handshake or chain verification failure (details)
    #[error("SSL connection failed or cert expired [{0}]")]
    TlsConnectionFailed(String),

    /// Peer presented an empty certificate list
    #[error("No certificates found")]
    NoCertificates,

    /// Leaf certificate is outside of its [notBefore, notAfter] window
    #[error("Certificate is not valid")]
    CertificateInvalid,
}
