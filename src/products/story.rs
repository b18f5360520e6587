use crate::*;
use std::fmt;


#[derive(Debug, Clone, PartialEq, Eq)]
/// Story is the single status line produced for one domain
pub struct Story {
    /// Checked domain name
    pub domain: String,

    /// Story - success or failure
    pub result: Result<Expected, Unexpected>,
}


impl Story {
    /// New success-story
    pub fn success(domain: &str, success: Expected) -> Story {
        Story {
            domain: domain.to_string(),
            result: Ok(success),
        }
    }


    /// New error-story
    pub fn error(domain: &str, error: Unexpected) -> Story {
        Story {
            domain: domain.to_string(),
            result: Err(error),
        }
    }


    /// Decide what (if anything) gets reported for a finished check.
    ///
    /// A valid certificate is reported only when `days_remaining <= threshold`,
    /// otherwise the check passes silently. Every failure is reported.
    pub fn from_outcome(
        domain: &str,
        threshold: i64,
        outcome: Result<i64, Unexpected>,
    ) -> Option<Story> {
        match outcome {
            Ok(days_remaining) if days_remaining <= threshold => {
                Some(Story::success(
                    domain,
                    Expected::CertificateExpiresIn(days_remaining),
                ))
            }

            Ok(days_remaining) => {
                debug!(
                    "{}: certificate valid for {} more days (threshold: {}), nothing to report",
                    domain, days_remaining, threshold
                );
                None
            }

            Err(unexpected) => Some(Story::error(domain, unexpected)),
        }
    }


    /// True for failure stories
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}


/// Renders the status line, without the trailing newline
impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(success) => write!(f, "[✓] {} - {}", self.domain, success),
            Err(error) => write!(f, "[✗] {} - {}", self.domain, error),
        }
    }
}
