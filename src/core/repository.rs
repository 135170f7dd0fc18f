use async_trait::async_trait;
use crate::core::catalog::CatalogResult;

#[async_trait]
pub trait Repository<Entity, Candidate>: Sync + Send {
    // all records in insertion order
    async fn list(&self) -> CatalogResult<Vec<Entity>>;

    // get an entity by id
    async fn get(&self, id: i64) -> CatalogResult<Entity>;

    // insert a candidate, assigning the next id
    async fn insert(&self, candidate: &Candidate) -> CatalogResult<Entity>;

    // overwrite every field of an entity except its id
    async fn replace(&self, id: i64, candidate: &Candidate) -> CatalogResult<Entity>;

    // delete an entity, returning the removed record
    async fn remove(&self, id: i64) -> CatalogResult<Entity>;
}
