use crate::{actors::reporter::*, *};
use actix::prelude::*;
use std::sync::Arc;


/// DomainChecker actor checks TLS certificate of one domain at a time.
/// Runs on a SyncArbiter, so the number of its threads bounds concurrent checks.
#[derive(Debug, Clone)]
pub struct DomainChecker {
    network: Arc<dyn Network>,
}


/// Check given domain and send the resulting Story (if any) to the Reporter
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct CheckDomain(pub Domain, pub Addr<Reporter>);


impl DomainChecker {
    /// New checker using given network
    pub fn new(network: Arc<dyn Network>) -> DomainChecker {
        DomainChecker { network }
    }
}


impl Handler<CheckDomain> for DomainChecker {
    type Result = ();

    fn handle(&mut self, check: CheckDomain, _ctx: &mut Self::Context) -> Self::Result {
        let CheckDomain(domain, reporter) = check;
        if let Some(story) = check_domain(self.network.as_ref(), &domain) {
            reporter.do_send(Report(story));
        }
    }
}


impl Actor for DomainChecker {
    type Context = SyncContext<Self>;
}
