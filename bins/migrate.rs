//! Upgrade a posts-only data file (top-level JSON array) to the
//! object-per-collection layout. Usage: `migrate [DATA_FILE]`.

use dotenvy::dotenv;
use tracing::{error, info};

use service::storage::legacy::{migrate_file, MigrationOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    // 配置错误直接退出；命令行参数优先于配置中的 data_file
    let cfg = configs::AppConfig::load_or_env()?;
    let path = std::env::args().nth(1).unwrap_or(cfg.storage.data_file);

    match migrate_file(&path, cfg.storage.pretty).await {
        Ok(MigrationOutcome::Migrated) => {
            info!(service = "migrate", event = "migrated", %path, "legacy posts array converted");
            println!("✅ Migrated {path} to object structure");
        }
        Ok(MigrationOutcome::AlreadyCurrent) => {
            info!(service = "migrate", event = "noop", %path, "already in object structure");
            println!("ℹ️  {path} is already in object structure");
        }
        Ok(MigrationOutcome::FileNotFound) => {
            error!(service = "migrate", event = "missing", %path, "data file not found");
            println!("❌ Database file not found: {path}");
        }
        Err(e) => {
            error!(service = "migrate", event = "failed", %path, error = %e, "migration failed");
            return Err(e.into());
        }
    }
    Ok(())
}
