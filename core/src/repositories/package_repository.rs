//! Package repository trait for tour package persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::package::TourPackage;
use crate::errors::DomainError;

/// Repository trait for tour package CRUD
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Persist a new package
    async fn create(&self, package: TourPackage) -> Result<TourPackage, DomainError>;

    /// Find a package by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TourPackage>, DomainError>;

    /// List all packages
    async fn find_all(&self) -> Result<Vec<TourPackage>, DomainError>;

    /// Update an existing package.
    ///
    /// Fails with `DomainError::NotFound` if the package does not exist.
    async fn update(&self, package: TourPackage) -> Result<TourPackage, DomainError>;

    /// Delete a package; returns whether one was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
