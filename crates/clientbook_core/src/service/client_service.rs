//! Client use-case service.
//!
//! # Responsibility
//! - Expose record CRUD plus lookup-by-id to controllers.
//! - Delegate persistence to a repository implementation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::client::{ClientId, ClientRecord, NewClient};
use crate::repo::client_repo::{ClientRepository, RepoResult};

/// Storage client handed explicitly to every controller.
pub struct ClientService<R: ClientRepository> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new client and returns its assigned id.
    pub fn create_client(&self, client: &NewClient) -> RepoResult<ClientId> {
        self.repo.create_client(client)
    }

    /// Returns every stored client.
    pub fn list_clients(&self) -> RepoResult<Vec<ClientRecord>> {
        self.repo.list_clients()
    }

    /// Finds one client by scanning the full listing.
    ///
    /// Returns `Ok(None)` when no record carries `id`.
    pub fn find_client(&self, id: ClientId) -> RepoResult<Option<ClientRecord>> {
        Ok(self
            .repo
            .list_clients()?
            .into_iter()
            .find(|record| record.id == id))
    }

    /// Replaces an existing client.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_client(&self, id: ClientId, client: &NewClient) -> RepoResult<()> {
        self.repo.update_client(id, client)
    }

    /// Deletes a client; absent ids are not an error.
    pub fn delete_client(&self, id: ClientId) -> RepoResult<()> {
        self.repo.delete_client(id)
    }
}
