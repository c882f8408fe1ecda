//! Repository factory trait
//!
//! Repositories are built from a shared client so the concrete backend stays a
//! wiring decision of the binary rather than of the page crates.

/// A trait for database repository factories
///
/// Generic over the repository type and the configuration (usually a
/// [`DbClient`](crate::DbClient)) it is built from.
pub trait RepositoryFactory<R, C> {
    fn create_repository(&self, config: C) -> R;
}
