use govpl_verifier_domain::Config;
use tracing_subscriber::EnvFilter;

const QUIET_TARGETS: [&str; 4] = ["sqlx", "reqwest", "hyper", "hyper_util"];

/// Installs the global subscriber. `RUST_LOG` wins over the configured level;
/// logs go to stderr so stdout only carries command output.
pub fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = config.logging.level.clone();

        for target in QUIET_TARGETS {
            if !filter.contains(target) {
                filter.push_str(&format!(",{}=warn", target));
            }
        }

        EnvFilter::new(filter)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
