//! One-shot load → reconcile → aggregate pipeline.
//!
//! The pipeline runs as a single unit of work with exactly one suspension
//! point, the initial fetch. Outcomes are explicit result objects; the
//! caller holds state and re-renders on transition.

use crate::analyzers::aggregate::summarize;
use crate::analyzers::types::Summary;
use crate::fetch::{HttpClient, fetch_bytes};
use crate::parser::parse_table;
use crate::reconcile::canonicalize;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Lifecycle of one pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Result object for one pipeline invocation.
///
/// Only transport/access failures surface here; malformed rows and cells
/// degrade inside the pipeline instead. Superseded in full by the next
/// invocation.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub status: LoadStatus,
    pub summary: Option<Summary>,
    pub error: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

impl PipelineOutcome {
    pub fn idle() -> Self {
        PipelineOutcome {
            status: LoadStatus::Idle,
            summary: None,
            error: None,
            loaded_at: Utc::now(),
        }
    }

    fn ready(summary: Summary) -> Self {
        PipelineOutcome {
            status: LoadStatus::Ready,
            summary: Some(summary),
            error: None,
            loaded_at: Utc::now(),
        }
    }

    fn failed(message: String) -> Self {
        PipelineOutcome {
            status: LoadStatus::Failed,
            summary: None,
            error: Some(message),
            loaded_at: Utc::now(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Synchronous pipeline core: raw bytes → aggregated summary.
///
/// # Errors
///
/// Fails only when the input has no readable header row; per-row and
/// per-cell problems degrade per the reconciliation rules.
pub fn load_summary(bytes: &[u8]) -> Result<Summary> {
    let table = parse_table(bytes)?;
    let records = canonicalize(&table);
    Ok(summarize(&records))
}

/// Loads dataset bytes from a local file path or over HTTP.
pub async fn read_source<C: HttpClient>(client: &C, source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http") {
        fetch_bytes(client, source).await
    } else {
        std::fs::read(source).with_context(|| format!("reading {source}"))
    }
}

/// Runs the full fetch → parse → reconcile → aggregate pipeline.
///
/// Never panics and never returns `Err`: any terminal failure is folded
/// into a [`LoadStatus::Failed`] outcome with a human-readable message.
#[tracing::instrument(skip(client), fields(source = %source))]
pub async fn run<C: HttpClient>(client: &C, source: &str) -> PipelineOutcome {
    let bytes = match read_source(client, source).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "Dataset fetch failed");
            return PipelineOutcome::failed(format!("{e:#}"));
        }
    };

    match load_summary(&bytes) {
        Ok(summary) => {
            info!(
                records = summary.records.len(),
                diet_groups = summary.diet_groups.len(),
                "Dataset summarized"
            );
            PipelineOutcome::ready(summary)
        }
        Err(e) => {
            error!(error = %e, "Dataset parse failed");
            PipelineOutcome::failed(format!("{e:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::BasicClient;

    const SAMPLE: &[u8] = b"grouping,sex,age_group,mean_ghgs,mean_land\n\
vegan,female,20-29,2.5,1.0\n\
vegan,male,20-29,3.5,2.0\n\
meat100,male,50-59,10.0,8.0\n";

    #[test]
    fn test_load_summary_from_bytes() {
        let summary = load_summary(SAMPLE).unwrap();

        assert!(!summary.records.is_empty());
        assert_eq!(summary.diet_groups, vec!["vegan", "high_meat"]);

        let vegan = summary
            .records
            .iter()
            .find(|r| r.diet_group == "vegan" && r.gender == "All" && r.age_group == "All")
            .unwrap();
        assert_eq!(vegan.ghgs, 3.0);
    }

    #[test]
    fn test_outcome_starts_idle() {
        let outcome = PipelineOutcome::idle();
        assert_eq!(outcome.status, LoadStatus::Idle);
        assert!(outcome.summary.is_none());
        assert!(outcome.error_message().is_none());
    }

    #[tokio::test]
    async fn test_run_with_local_file() {
        let path = format!(
            "{}/diet_impacts_test_pipeline.csv",
            std::env::temp_dir().display()
        );
        std::fs::write(&path, SAMPLE).unwrap();

        let outcome = run(&BasicClient::new(), &path).await;

        assert_eq!(outcome.status, LoadStatus::Ready);
        assert!(outcome.error.is_none());
        assert!(outcome.summary.is_some());

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_run_missing_file_fails_with_message() {
        let outcome = run(&BasicClient::new(), "/nonexistent/survey.csv").await;

        assert_eq!(outcome.status, LoadStatus::Failed);
        assert!(outcome.summary.is_none());
        assert!(!outcome.error_message().unwrap().is_empty());
    }
}
