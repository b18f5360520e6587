use std::fmt;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Expected check result worth reporting
pub enum Expected {
    /// Certificate is valid, and expires within the threshold (days remaining)
    CertificateExpiresIn(i64),
}


impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::CertificateExpiresIn(days) => {
                write!(f, "Certificate expires in {} days", days)
            }
        }
    }
}
