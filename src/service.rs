use crate::error::{AppError, AppResult};
use crate::store::DocumentStore;
use crate::types::{Fields, Product};
use std::sync::Arc;
use tracing::{debug, info};

/// Product operations, one document-store call each.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn DocumentStore>,
    collection: Arc<str>,
}

impl ProductService {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Store `product` exactly as given and return the generated id.
    pub async fn create(&self, product: Fields) -> AppResult<String> {
        let id = self.store.insert(&self.collection, product).await?;
        info!("Created product id={}", id);
        Ok(id)
    }

    pub async fn get_all(&self) -> AppResult<Vec<Product>> {
        let documents = self.store.list(&self.collection).await?;
        debug!("Loaded {} product documents", documents.len());
        Ok(documents.iter().map(Product::from).collect())
    }

    /// Raw fields of one product, or `None` when no such document exists.
    pub async fn get_one(&self, id: &str) -> AppResult<Option<Fields>> {
        if id.is_empty() {
            return Err(AppError::InvalidInput("No id".to_string()));
        }
        Ok(self.store.get(&self.collection, id).await?)
    }

    /// Merge the supplied fields into an existing product.
    pub async fn update_one(&self, id: &str, data: Option<Fields>) -> AppResult<()> {
        let data = match data {
            Some(data) if !id.is_empty() && !data.is_empty() => data,
            _ => return Err(AppError::InvalidInput("No id or data".to_string())),
        };
        self.store.update(&self.collection, id, data).await?;
        info!("Updated product id={}", id);
        Ok(())
    }

    pub async fn delete_one(&self, id: &str) -> AppResult<()> {
        if id.is_empty() {
            return Err(AppError::InvalidInput("No id".to_string()));
        }
        self.store.delete(&self.collection, id).await?;
        info!("Deleted product id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryDocumentStore, StoreError, StoreResult};
    use crate::types::Document;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryDocumentStore::new()), "products")
    }

    /// Store that fails every call, for checking that nothing reaches it.
    struct UnreachableStore;

    #[async_trait]
    impl DocumentStore for UnreachableStore {
        async fn insert(&self, _: &str, _: Fields) -> StoreResult<String> {
            Err(StoreError::Backend("unreachable".into()))
        }
        async fn list(&self, _: &str) -> StoreResult<Vec<Document>> {
            Err(StoreError::Backend("unreachable".into()))
        }
        async fn get(&self, _: &str, _: &str) -> StoreResult<Option<Fields>> {
            Err(StoreError::Backend("unreachable".into()))
        }
        async fn update(&self, _: &str, _: &str, _: Fields) -> StoreResult<()> {
            Err(StoreError::Backend("unreachable".into()))
        }
        async fn delete(&self, _: &str, _: &str) -> StoreResult<()> {
            Err(StoreError::Backend("unreachable".into()))
        }
    }

    #[tokio::test]
    async fn test_create_then_get_all_returns_projected_product() {
        let service = service();
        service
            .create(fields(json!({
                "name": "Desk",
                "price": 199.99,
                "retailer": "Office Co",
                "amountInStock": 4,
                "warehouse": "B7",
            })))
            .await
            .unwrap();

        let products = service.get_all().await.unwrap();

        assert_eq!(products.len(), 1);
        let product = &products[0];
        assert!(!product.id.is_empty());
        assert_eq!(product.name.as_deref(), Some("Desk"));
        assert_eq!(product.price, serde_json::Number::from_f64(199.99));
        assert_eq!(product.retailer.as_deref(), Some("Office Co"));
        assert_eq!(product.amount_in_stock, Some(serde_json::Number::from(4u64)));
    }

    #[tokio::test]
    async fn test_get_one_returns_raw_fields_including_extras() {
        let service = service();
        let id = service
            .create(fields(json!({"name": "Desk", "warehouse": "B7"})))
            .await
            .unwrap();

        let stored = service.get_one(&id).await.unwrap().unwrap();

        assert_eq!(stored, fields(json!({"name": "Desk", "warehouse": "B7"})));
    }

    #[tokio::test]
    async fn test_get_one_unknown_id_is_none() {
        let result = service().get_one("never-created").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_empty_id_never_reaches_store() {
        let service = ProductService::new(Arc::new(UnreachableStore), "products");

        let get = service.get_one("").await;
        let update = service.update_one("", Some(fields(json!({"price": 1})))).await;
        let delete = service.delete_one("").await;

        assert!(matches!(get, Err(AppError::InvalidInput(ref m)) if m == "No id"));
        assert!(matches!(update, Err(AppError::InvalidInput(ref m)) if m == "No id or data"));
        assert!(matches!(delete, Err(AppError::InvalidInput(ref m)) if m == "No id"));
    }

    #[tokio::test]
    async fn test_update_requires_data() {
        let service = ProductService::new(Arc::new(UnreachableStore), "products");

        let missing = service.update_one("abc", None).await;
        let empty = service.update_one("abc", Some(Fields::new())).await;

        assert!(matches!(missing, Err(AppError::InvalidInput(_))));
        assert!(matches!(empty, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_other_fields() {
        let service = service();
        let id = service
            .create(fields(json!({
                "name": "Chair",
                "price": 40,
                "retailer": "Office Co",
                "amountInStock": 9,
            })))
            .await
            .unwrap();

        service
            .update_one(&id, Some(fields(json!({"price": 10}))))
            .await
            .unwrap();

        let stored = service.get_one(&id).await.unwrap().unwrap();
        assert_eq!(stored["price"], json!(10));
        assert_eq!(stored["name"], json!("Chair"));
        assert_eq!(stored["retailer"], json!("Office Co"));
        assert_eq!(stored["amountInStock"], json!(9));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_store_failure() {
        let result = service()
            .update_one("ghost", Some(fields(json!({"price": 10}))))
            .await;

        assert!(matches!(result, Err(AppError::Store(StoreError::NotFound { .. }))));
    }

    #[tokio::test]
    async fn test_delete_then_get_one_is_none() {
        let service = service();
        let id = service.create(fields(json!({"name": "Shelf"}))).await.unwrap();

        service.delete_one(&id).await.unwrap();

        assert!(service.get_one(&id).await.unwrap().is_none());
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        assert!(service().delete_one("ghost").await.is_ok());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = ProductService::new(Arc::new(UnreachableStore), "products");

        let result = service.get_all().await;

        assert!(matches!(result, Err(AppError::Store(StoreError::Backend(_)))));
    }
}
