//! In-memory tour package repository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tb_core::domain::entities::package::TourPackage;
use tb_core::errors::DomainError;
use tb_core::repositories::PackageRepository;

/// In-process package store
#[derive(Default)]
pub struct InMemoryPackageRepository {
    packages: RwLock<HashMap<Uuid, TourPackage>>,
}

impl InMemoryPackageRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn create(&self, package: TourPackage) -> Result<TourPackage, DomainError> {
        let mut packages = self.packages.write().await;
        packages.insert(package.id, package.clone());
        Ok(package)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TourPackage>, DomainError> {
        let packages = self.packages.read().await;
        Ok(packages.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<TourPackage>, DomainError> {
        let packages = self.packages.read().await;
        let mut all: Vec<TourPackage> = packages.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, mut package: TourPackage) -> Result<TourPackage, DomainError> {
        let mut packages = self.packages.write().await;
        if !packages.contains_key(&package.id) {
            return Err(DomainError::NotFound {
                resource: "Package".to_string(),
            });
        }
        package.touch();
        packages.insert(package.id, package.clone());
        Ok(package)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut packages = self.packages.write().await;
        Ok(packages.remove(&id).is_some())
    }
}
