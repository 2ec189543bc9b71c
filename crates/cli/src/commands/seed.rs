use atelier_core::config::ConfigOverrides;
use atelier_db::DesignerRoster;

use crate::commands::{build_runtime, load_config, open_migrated_pool, CommandResult, Failure};

pub fn run() -> CommandResult {
    let config = match load_config("seed", ConfigOverrides::default()) {
        Ok(config) => config,
        Err(result) => return result,
    };
    let runtime = match build_runtime("seed") {
        Ok(runtime) => runtime,
        Err(result) => return result,
    };

    let result = runtime.block_on(async {
        let pool = open_migrated_pool(&config).await?;

        let loaded = DesignerRoster::load(&pool)
            .await
            .map_err(|error| ("seed_execution", error.to_string(), 5u8))?;
        let verification = DesignerRoster::verify(&pool)
            .await
            .map_err(|error| ("seed_verification", error.to_string(), 6u8))?;

        pool.close().await;

        if !verification.all_present {
            return Err(("seed_verification", failed_checks_message(&verification.checks), 6u8));
        }
        Ok::<_, Failure>(loaded.designers_seeded)
    });

    match result {
        Ok(designers) => {
            let lines: Vec<String> = designers.iter().map(|id| format!("  - {id}")).collect();
            let message = format!(
                "designer roster ready ({} designers):\n{}",
                designers.len(),
                lines.join("\n")
            );
            CommandResult::success("seed", message)
        }
        Err(failure) => CommandResult::from_failure("seed", failure),
    }
}

fn failed_checks_message(checks: &[(&'static str, bool)]) -> String {
    let failed = checks
        .iter()
        .filter_map(|(check, passed)| (!passed).then_some(*check))
        .collect::<Vec<_>>();

    if failed.is_empty() {
        "designer roster failed to load".to_string()
    } else {
        format!("seed verification failed for designers: {}", failed.join(", "))
    }
}
