use crate::*;
use openssl::ssl::{SslConnector, SslMethod};
use std::{
    fmt::Debug,
    net::{IpAddr, SocketAddr, TcpStream, ToSocketAddrs},
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc,
    },
    thread,
    time::{Duration, Instant},
};


/// Network capabilities needed by a domain check.
///
/// Implemented by SystemNetwork for real checks, and by fakes in tests.
pub trait Network: Debug + Send + Sync {
    /// Resolve domain name to addresses. Fails with DnsLookupFailed.
    fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, Unexpected>;


    /// Connect to the domain over TLS (with full chain verification) and
    /// return validity windows of the presented certificates, leaf first.
    /// Fails with TlsConnectionFailed.
    fn tls_connect(&self, domain: &str) -> Result<Vec<CertificateWindow>, Unexpected>;
}


/// Counted slot of a running lookup thread. Released on drop.
#[derive(Debug)]
pub struct LookupSlot(Arc<AtomicUsize>);


impl LookupSlot {
    /// Take a slot, unless `max` lookups are already running
    pub fn acquire(pending: &Arc<AtomicUsize>, max: usize) -> Option<LookupSlot> {
        pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |running| {
                if running < max {
                    Some(running + 1)
                } else {
                    None
                }
            })
            .ok()
            .map(|_| LookupSlot(pending.clone()))
    }
}


impl Drop for LookupSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}


/// OS resolver and OpenSSL backed network
#[derive(Debug, Clone)]
pub struct SystemNetwork {
    /// Timeout of the DNS lookup, and separately of the whole TLS dial + handshake
    pub timeout: Duration,

    /// TLS port
    pub port: u16,

    pending_lookups: Arc<AtomicUsize>,
}


impl SystemNetwork {
    /// New network with given timeout
    pub fn new(timeout: Duration) -> SystemNetwork {
        SystemNetwork {
            timeout,
            port: HTTPS_PORT,
            pending_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }


    /// Same network, connecting to another port
    pub fn with_port(self, port: u16) -> SystemNetwork {
        SystemNetwork { port, ..self }
    }


    /// Number of lookup threads still running (including abandoned ones)
    pub fn pending_lookups(&self) -> usize {
        self.pending_lookups.load(Ordering::SeqCst)
    }


    /// Resolve `domain:port` on a separate thread, waiting at most until `deadline`.
    ///
    /// The OS resolver can't be cancelled: a timed out lookup keeps its thread
    /// (and its slot) until the resolver returns. At most MAX_PENDING_LOOKUPS
    /// such threads exist, further lookups fail immediately.
    fn lookup(&self, domain: &str, port: u16, deadline: Instant) -> Result<Vec<SocketAddr>, String> {
        let slot = LookupSlot::acquire(&self.pending_lookups, MAX_PENDING_LOOKUPS)
            .ok_or_else(|| format!("lookup {}: too many pending lookups", domain))?;
        let (sender, receiver) = mpsc::channel();
        let host = domain.to_string();
        thread::Builder::new()
            .name(format!("resolve-{}", domain))
            .spawn(move || {
                let resolved = (host.as_str(), port)
                    .to_socket_addrs()
                    .map(|addresses| addresses.collect::<Vec<_>>());
                sender.send(resolved).unwrap_or_default();
                drop(slot);
            })
            .map_err(|err| format!("lookup {}: couldn't spawn resolver thread: {}", domain, err))?;

        let remaining = deadline.saturating_duration_since(Instant::now());
        match receiver.recv_timeout(remaining) {
            Ok(Ok(addresses)) if !addresses.is_empty() => Ok(addresses),
            Ok(Ok(_)) => Err(format!("lookup {}: no such host", domain)),
            Ok(Err(err)) => Err(format!("lookup {}: {}", domain, err)),
            Err(_) => Err(format!("lookup {}: i/o timeout", domain)),
        }
    }


    /// Dial the first address that accepts before `deadline`
    fn dial(&self, domain: &str, deadline: Instant) -> Result<TcpStream, String> {
        let addresses = self.lookup(domain, self.port, deadline)?;

        let mut last_error = format!("dial tcp {}: i/o timeout", domain);
        for address in addresses {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(format!("dial tcp {}: i/o timeout", address));
            }
            match TcpStream::connect_timeout(&address, remaining) {
                Ok(stream) => {
                    trace!("{}: connected to {}", domain, address);
                    return Ok(stream);
                }
                Err(err) => {
                    debug!("{}: dial {} failed: {}", domain, address, err);
                    last_error = format!("dial tcp {}: {}", address, err);
                }
            }
        }
        Err(last_error)
    }
}


impl Default for SystemNetwork {
    fn default() -> SystemNetwork {
        SystemNetwork::new(Duration::from_secs(CHECK_TIMEOUT))
    }
}


impl Network for SystemNetwork {
    fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, Unexpected> {
        self.lookup(domain, 0, Instant::now() + self.timeout)
            .map(|addresses| addresses.iter().map(SocketAddr::ip).collect())
            .map_err(|err| {
                debug!("{}: {}", domain, err);
                Unexpected::DnsLookupFailed
            })
    }


    fn tls_connect(&self, domain: &str) -> Result<Vec<CertificateWindow>, Unexpected> {
        // One deadline for lookup, dial and handshake:
        let deadline = Instant::now() + self.timeout;
        let stream = self.dial(domain, deadline).map_err(Unexpected::TlsConnectionFailed)?;
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(Unexpected::TlsConnectionFailed(format!(
                "{}: TLS handshake timeout",
                domain
            )));
        }
        stream
            .set_read_timeout(Some(remaining))
            .and_then(|_| stream.set_write_timeout(Some(remaining)))
            .map_err(|err| Unexpected::TlsConnectionFailed(err.to_string()))?;

        // Default verify paths, peer and hostname verification:
        let connector = SslConnector::builder(SslMethod::tls())
            .map_err(|err| Unexpected::TlsConnectionFailed(err.to_string()))?
            .build();
        let mut tls_stream = connector
            .connect(domain, stream)
            .map_err(|err| Unexpected::TlsConnectionFailed(err.to_string()))?;

        let windows = tls_stream
            .ssl()
            .peer_cert_chain()
            .map(|chain| {
                chain
                    .iter()
                    .map(CertificateWindow::from_x509)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
            .map_err(|err| Unexpected::TlsConnectionFailed(err.to_string()))?
            .unwrap_or_default();

        // Connection is closed when tls_stream is dropped:
        tls_stream.shutdown().map(|_| ()).unwrap_or_else(|err| {
            trace!("{}: TLS shutdown: {}", domain, err);
        });
        Ok(windows)
    }
}
