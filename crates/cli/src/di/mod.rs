mod repositories;
mod use_cases;

pub use repositories::Repositories;
pub use use_cases::UseCases;

use govpl_verifier_domain::Config;
use sqlx::SqlitePool;

/// Process-wide wiring: caches first, then the use cases over them.
pub struct VerifierContext {
    pub repos: Repositories,
    pub use_cases: UseCases,
}

impl VerifierContext {
    pub fn new(pool: SqlitePool, config: &Config) -> anyhow::Result<Self> {
        let repos = Repositories::new(pool, config)?;
        let use_cases = UseCases::new(&repos);
        Ok(Self { repos, use_cases })
    }
}
