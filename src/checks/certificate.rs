use chrono::{DateTime, TimeZone, Utc};
use openssl::{
    asn1::{Asn1Time, Asn1TimeRef},
    error::ErrorStack,
    x509::X509Ref,
};


const SECONDS_PER_DAY: i64 = 24 * 60 * 60;


/// Validity window of a certificate: [not_before, not_after]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CertificateWindow {
    /// Certificate is not valid before this moment
    pub not_before: DateTime<Utc>,

    /// Certificate is not valid after this moment
    pub not_after: DateTime<Utc>,
}


impl CertificateWindow {
    /// New window
    pub fn new(not_before: DateTime<Utc>, not_after: DateTime<Utc>) -> CertificateWindow {
        CertificateWindow {
            not_before,
            not_after,
        }
    }


    /// Extract window of an OpenSSL certificate
    pub fn from_x509(certificate: &X509Ref) -> Result<CertificateWindow, ErrorStack> {
        let epoch = Asn1Time::from_unix(0)?;
        Ok(CertificateWindow {
            not_before: asn1_time_to_utc(&epoch, certificate.not_before())?,
            not_after: asn1_time_to_utc(&epoch, certificate.not_after())?,
        })
    }


    /// Both ends of the window are inclusive
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.not_before && now <= self.not_after
    }


    /// Whole 24h periods left until not_after, or None when the certificate is not valid at `now`.
    ///
    /// Truncates, so 14 days and 23 hours gives 14.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        if self.is_valid_at(now) {
            Some((self.not_after - now).num_hours() / 24)
        } else {
            None
        }
    }
}


/// ASN.1 time as UTC, via its distance from the unix epoch
fn asn1_time_to_utc(epoch: &Asn1TimeRef, time: &Asn1TimeRef) -> Result<DateTime<Utc>, ErrorStack> {
    let diff = epoch.diff(time)?;
    let seconds = i64::from(diff.days) * SECONDS_PER_DAY + i64::from(diff.secs);
    Ok(Utc
        .timestamp_opt(seconds, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC))
}
