//! Federated search across ordered archives.

pub mod federated;

pub use federated::FederatedSearcher;
