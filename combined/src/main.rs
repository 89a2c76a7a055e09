//! Wiring demo - builds a store, injects it into the entity manager and
//! walks through the basic entity lifecycle.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppResult, ServiceConfig};
use domain::Record;
use entity_service::{EntityManager, EntityService, EntityServiceConfig};
use store::{InMemoryRepository, Repository};

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(service = %config.service_name, "Starting entity demo");

    if let Err(e) = run(&EntityServiceConfig::from_env()) {
        error!(code = e.code(), "Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &EntityServiceConfig) -> AppResult<()> {
    // The caller owns the concrete store; the manager only sees the contract.
    let store = Arc::new(InMemoryRepository::<Record>::new());
    let repo: Arc<dyn Repository<Record>> = store.clone();
    let manager = EntityManager::with_policy(repo, config.name_policy());

    let alice = manager.create_entity(Record::new("Alice"))?;
    let bob = manager.create_entity(Record::new("Bob"))?;
    info!(%alice, %bob, "Created entities");

    log_entities(&manager)?;

    manager.delete_entity(alice)?;
    info!(entity_id = %alice, "Deleted entity");

    match manager.get_entity(alice) {
        Err(e) if e.is_not_found() => info!(entity_id = %alice, "Lookup after delete: {}", e),
        Err(e) => return Err(e),
        Ok(_) => error!(entity_id = %alice, "Deleted entity is still readable"),
    }

    let renamed = manager.rename_entity(bob, "Robert".to_string())?;
    info!(entity_id = %bob, name = %renamed.name, "Renamed entity");

    log_entities(&manager)?;
    info!(?store, "Demo finished");
    Ok(())
}

fn log_entities(manager: &EntityManager<Record>) -> AppResult<()> {
    for record in manager.list_entities()? {
        if let Some(id) = record.id {
            info!(entity_id = %id, name = %record.name, "Listed entity");
        }
    }
    Ok(())
}
