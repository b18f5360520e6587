use crate::{
    actors::{
        domain_checker::{CheckDomain, DomainChecker},
        reporter::{Flush, Reporter},
    },
    *,
};
use actix::prelude::*;
use std::sync::Arc;


//
// Public library API for expirybot checks functionality
//


/// Check all domains in parallel, at most `settings.max_concurrent_checks` at a time.
///
/// Each domain is checked exactly once. Non-positive thresholds are replaced with
/// `settings.default_threshold` before dispatch. Status lines go to the `reporter`,
/// and all of them are written when this returns.
pub async fn check_domains_parallel(
    domains: &[Domain],
    settings: Settings,
    network: Arc<dyn Network>,
    reporter: &Addr<Reporter>,
) {
    let threads = settings.max_concurrent_checks.max(1);
    info!(
        "Checking {} domains, {} at a time (default threshold: {} days)",
        domains.len(),
        threads,
        settings.default_threshold
    );
    let checker = SyncArbiter::start(threads, move || DomainChecker::new(network.clone()));

    let requests = domains
        .iter()
        .map(|domain| {
            let threshold = domain.effective_threshold(settings.default_threshold);
            checker.send(CheckDomain(
                Domain::new(&domain.name, threshold),
                reporter.clone(),
            ))
        })
        .collect::<Vec<_>>();

    for request in requests {
        if let Err(err) = request.await {
            error!("Domain check was lost: {}", err);
        }
    }
    // Last reference gone, checker threads stop:
    drop(checker);

    let written = reporter.send(Flush).await.unwrap_or_else(|err| {
        error!("Reporter unavailable: {}", err);
        0
    });
    info!("All {} domains checked, {} reported", domains.len(), written);
}
