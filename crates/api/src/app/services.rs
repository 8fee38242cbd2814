use anyhow::Context;

use orderflow_infra::{AppConfig, InMemoryServices, SeedData};

/// Services shared by all handlers.
pub type AppServices = InMemoryServices;

/// In-memory services, seeded from `config.seed_file` when set.
pub fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let services = InMemoryServices::new();

    match &config.seed_file {
        Some(path) => {
            let seed = SeedData::from_file(path)?;
            services
                .seed(&seed)
                .with_context(|| format!("failed to load seed file {}", path.display()))?;
        }
        None => tracing::warn!("no seed file configured; starting with empty stores"),
    }

    Ok(services)
}
