/// Domain records:
pub mod domain;

/// Certificate validity window:
pub mod certificate;

/// DNS and TLS capabilities:
pub mod network;


use crate::*;
use chrono::Utc;


/// Cheap pre-filter: domain resolves to at least one address
pub fn is_domain_reachable(network: &dyn Network, domain: &str) -> Result<(), Unexpected> {
    let addresses = network.resolve(domain)?;
    trace!("{}: resolved to {:?}", domain, addresses);
    if addresses.is_empty() {
        Err(Unexpected::DnsLookupFailed)
    } else {
        Ok(())
    }
}


/// Connect over TLS and pick the leaf (first) certificate presented by the peer
pub fn leaf_certificate(network: &dyn Network, domain: &str) -> Result<CertificateWindow, Unexpected> {
    network
        .tls_connect(domain)?
        .into_iter()
        .next()
        .ok_or(Unexpected::NoCertificates)
}


/// Days remaining for the domain certificate. Runs phases in order: DNS, TLS, validation.
pub fn check_certificate(network: &dyn Network, domain: &str) -> Result<i64, Unexpected> {
    is_domain_reachable(network, domain)?;
    let leaf = leaf_certificate(network, domain)?;
    debug!(
        "{}: leaf certificate valid from {} to {}",
        domain, leaf.not_before, leaf.not_after
    );
    leaf.days_remaining(Utc::now())
        .ok_or(Unexpected::CertificateInvalid)
}


/// Check a single domain, with its effective threshold already applied.
/// Returns the Story to report, if any.
#[instrument(skip(network))]
pub fn check_domain(network: &dyn Network, domain: &Domain) -> Option<Story> {
    let outcome = check_certificate(network, &domain.name);
    debug!("Outcome: {:?}", outcome);
    Story::from_outcome(&domain.name, domain.threshold, outcome)
}
