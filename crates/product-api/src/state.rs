use crate::{
    abstract_trait::auth::DynAuthPolicy,
    auth::MasterKeyPolicy,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use shared::config::{Config, ConnectionPool};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub auth_policy: DynAuthPolicy,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let auth_policy = Arc::new(MasterKeyPolicy::new(&config.master_key)) as DynAuthPolicy;

        let deps = DependenciesInjectDeps { pool };

        let di_container = DependenciesInject::new(deps);

        Self {
            di_container,
            auth_policy,
        }
    }
}
