use atelier_core::config::{AppConfig, LoadOptions};
use atelier_core::knowledge::integrity_issues;
use atelier_db::{connect_with_config, ping};
use serde::Serialize;

use crate::commands::build_runtime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

impl DoctorCheck {
    fn pass(name: &'static str, details: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Pass, details: details.into() }
    }

    fn fail(name: &'static str, details: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Fail, details: details.into() }
    }

    fn skipped(name: &'static str, details: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Skipped, details: details.into() }
    }
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: &'static str,
    checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    /// Passes only when every check passed; a skipped check counts as a failure.
    fn from_checks(checks: Vec<DoctorCheck>) -> Self {
        if checks.iter().all(|check| check.status == CheckStatus::Pass) {
            Self {
                overall_status: CheckStatus::Pass,
                summary: "doctor: all readiness checks passed",
                checks,
            }
        } else {
            Self {
                overall_status: CheckStatus::Fail,
                summary: "doctor: one or more readiness checks failed",
                checks,
            }
        }
    }

    fn render_human(&self) -> String {
        let mut lines = vec![self.summary.to_string()];
        lines.extend(self.checks.iter().map(|check| {
            let marker = match check.status {
                CheckStatus::Pass => "ok",
                CheckStatus::Fail => "fail",
                CheckStatus::Skipped => "skip",
            };
            format!("- [{marker}] {}: {}", check.name, check.details)
        }));
        lines.join("\n")
    }
}

pub fn run(json_output: bool) -> String {
    let report = DoctorReport::from_checks(run_checks());

    if !json_output {
        return report.render_human();
    }
    serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
        serde_json::json!({
            "overall_status": "fail",
            "summary": "doctor serialization failed",
            "error": error.to_string(),
        })
        .to_string()
    })
}

fn run_checks() -> Vec<DoctorCheck> {
    let knowledge = check_knowledge_base();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => vec![
            DoctorCheck::pass("config_validation", "configuration loaded and validated"),
            knowledge,
            check_database_connectivity(&config),
        ],
        Err(error) => vec![
            DoctorCheck::fail("config_validation", error.to_string()),
            knowledge,
            DoctorCheck::skipped(
                "database_connectivity",
                "skipped because configuration did not load",
            ),
        ],
    }
}

fn check_knowledge_base() -> DoctorCheck {
    let issues = integrity_issues();
    if issues.is_empty() {
        DoctorCheck::pass("knowledge_base", "design tables are consistent")
    } else {
        DoctorCheck::fail("knowledge_base", issues.join("; "))
    }
}

fn check_database_connectivity(config: &AppConfig) -> DoctorCheck {
    let runtime = match build_runtime("doctor") {
        Ok(runtime) => runtime,
        Err(result) => return DoctorCheck::fail("database_connectivity", result.output),
    };

    let probe = runtime.block_on(async {
        let pool = match connect_with_config(&config.database).await {
            Ok(pool) => pool,
            Err(error) => return Err(format!("failed to connect to database: {error}")),
        };
        let answered =
            ping(&pool).await.map_err(|error| format!("database did not answer: {error}"));
        pool.close().await;
        answered
    });

    match probe {
        Ok(()) => DoctorCheck::pass(
            "database_connectivity",
            format!("connected using `{}`", config.database.url),
        ),
        Err(details) => DoctorCheck::fail("database_connectivity", details),
    }
}
