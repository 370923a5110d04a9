use coaching_eval::reports::{RepositoryError, ReportId, ReportRecord, ReportRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local report store; reports are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<ReportId, ReportRecord>>>,
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_for_representative(
        &self,
        representative: &str,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.submission.representative == representative)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use coaching_eval::evaluation::{RatingSet, ScoringEngine};
    use coaching_eval::reports::CoachingReportSubmission;

    fn record(id: &str, representative: &str) -> ReportRecord {
        let ratings = RatingSet::new();
        ReportRecord {
            id: ReportId(id.to_string()),
            outcome: ScoringEngine::default().evaluate(&ratings),
            submission: CoachingReportSubmission {
                representative: representative.to_string(),
                supervisor: "Khaled Samir".to_string(),
                visit_date: NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"),
                title: "Follow-up visit".to_string(),
                notes: String::new(),
                recommendation: String::new(),
                ratings,
            },
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let repository = InMemoryReportRepository::default();
        repository
            .insert(record("rpt-1", "Mona Adel"))
            .expect("first insert");

        assert!(matches!(
            repository.insert(record("rpt-1", "Mona Adel")),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn lists_only_matching_representative() {
        let repository = InMemoryReportRepository::default();
        repository
            .insert(record("rpt-1", "Mona Adel"))
            .expect("insert");
        repository
            .insert(record("rpt-2", "Omar Fathy"))
            .expect("insert");

        let records = repository
            .list_for_representative("Omar Fathy")
            .expect("list");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, ReportId("rpt-2".to_string()));
    }
}
