use crate::{
    abstract_trait::product::service::DynProductService, repository::product::ProductRepository,
    service::product::ProductService,
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: DynProductService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"ProductService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps { pool } = deps;

        let product_repository = Arc::new(ProductRepository::new(pool));

        let product_service =
            Arc::new(ProductService::new(product_repository)) as DynProductService;

        Self { product_service }
    }
}
