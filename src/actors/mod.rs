/// Actors module

/// sync TLS certificate check actor (bounded pool)
pub mod domain_checker;

/// single writer of status lines
pub mod reporter;
