use crate::*;


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Domain check structure
pub struct Domain {
    /// Domain name
    pub name: String,

    /// Warning threshold in days, stored as written (even negative).
    /// Non-positive values are replaced with the default threshold at dispatch.
    pub threshold: i64,
}


/// Domains type
pub type Domains = Vec<Domain>;


impl Domain {
    /// New domain record
    pub fn new(name: &str, threshold: i64) -> Domain {
        Domain {
            name: name.to_string(),
            threshold,
        }
    }


    /// Threshold actually applied to this domain
    pub fn effective_threshold(&self, default_threshold: i64) -> i64 {
        if self.threshold > 0 {
            self.threshold
        } else {
            default_threshold
        }
    }


    /// Parse a `domain[,threshold]` entry. Fields after the threshold are ignored.
    ///
    /// Returns the domain and, when a threshold was given but isn't an integer,
    /// the rejected value. The default threshold is used in that case.
    pub fn parse_entry(entry: &str) -> Result<(Domain, Option<String>), ExpiryError> {
        let mut fields = entry.split(',').map(str::trim);
        let name = fields.next().unwrap_or_default();
        let threshold = fields.next();
        if name.is_empty() {
            return Err(ExpiryError::InvalidDomain(entry.to_string()));
        }
        match threshold {
            None => Ok((Domain::new(name, DEFAULT_THRESHOLD), None)),
            Some(value) => {
                match value.parse::<i64>() {
                    Ok(threshold) => Ok((Domain::new(name, threshold), None)),
                    Err(_) => {
                        Ok((
                            Domain::new(name, DEFAULT_THRESHOLD),
                            Some(value.to_string()),
                        ))
                    }
                }
            }
        }
    }
}
