use crate::*;
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};


/// Result of adding a domain to the domain list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved {
    /// New domain appended
    Added(Domain),

    /// Existing domain got a new threshold
    Updated(Domain),
}


/// Parse domain list contents. Blank lines and `#` comments are skipped.
pub fn parse_domains(contents: &str) -> Domains {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            match Domain::parse_entry(line) {
                Ok((domain, None)) => Some(domain),
                Ok((domain, Some(invalid_threshold))) => {
                    debug!(
                        "Invalid threshold: '{}' for domain: {}, using default: {}",
                        invalid_threshold, domain.name, DEFAULT_THRESHOLD
                    );
                    Some(domain)
                }
                Err(err) => {
                    warn!("Skipping line: {}", err);
                    None
                }
            }
        })
        .collect()
}


/// Read domains from a file with "domain[,threshold]" lines
pub fn read_domains_from_file(path: &Path) -> Result<Domains, ExpiryError> {
    read_text_file(path)
        .map(|contents| parse_domains(&contents))
        .map_err(|err| ExpiryError::io(path, err))
}


/// Write domains to the file as "domain,threshold" lines, replacing its contents
pub fn write_domains_to_file(path: &Path, domains: &[Domain]) -> Result<(), ExpiryError> {
    let file = fs::File::create(path).map_err(|err| ExpiryError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    for domain in domains {
        writeln!(writer, "{},{}", domain.name, domain.threshold)
            .map_err(|err| ExpiryError::io(path, err))?;
    }
    writer.flush().map_err(|err| ExpiryError::io(path, err))
}


/// Add a domain (or update threshold of an existing one) in the domain list file.
/// The parent directory is created when missing.
pub fn add_domain(path: &Path, domain: Domain) -> Result<Saved, ExpiryError> {
    if let Some(config_dir) = path.parent() {
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            debug!("Creating config directory: {}", config_dir.display());
            fs::create_dir_all(config_dir).map_err(|err| ExpiryError::io(config_dir, err))?;
        }
    }

    let mut domains = if path.exists() {
        read_domains_from_file(path)?
    } else {
        Domains::new()
    };

    let saved = match domains.iter().position(|existing| existing.name == domain.name) {
        Some(index) => {
            domains[index].threshold = domain.threshold;
            Saved::Updated(domain)
        }
        None => {
            domains.push(domain.clone());
            Saved::Added(domain)
        }
    };
    write_domains_to_file(path, &domains)?;
    info!("Domain list saved: {}", path.display());
    Ok(saved)
}
