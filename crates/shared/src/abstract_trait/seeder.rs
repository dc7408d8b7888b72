use crate::{domain::responses::SeedReport, errors::ServiceError, service::SeedPlan};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSeederService = Arc<dyn SeederServiceTrait + Send + Sync>;

#[async_trait]
pub trait SeederServiceTrait {
    /// Wipes the catalogue, then writes every product and comment in `plan`.
    async fn run(&self, plan: SeedPlan) -> Result<SeedReport, ServiceError>;
}
