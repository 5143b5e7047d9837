use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProductStore, StoreError, UserStore};
use crate::models::{NewUser, Product, ProductChanges, User};

/// Process-local store. Data is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    products: RwLock<HashMap<Uuid, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_term(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle) || product.detail.to_lowercase().contains(needle)
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let created = User {
            id: users.len() as i32 + 1,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self, search: Option<&str>) -> Result<Vec<Product>, StoreError> {
        let needle = search.map(str::to_lowercase);
        let products = self.products.read().await;

        let mut found: Vec<Product> = products
            .values()
            .filter(|product| needle.as_deref().map_or(true, |n| contains_term(product, n)))
            .cloned()
            .collect();
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(found)
    }

    async fn insert(&self, product: &Product) -> Result<Product, StoreError> {
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProductChanges,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        Ok(products.get_mut(&id).map(|product| {
            product.apply(changes);
            product.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.products.write().await.remove(&id).is_some())
    }
}
