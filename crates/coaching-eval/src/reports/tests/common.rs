use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::ReportConfig;
use crate::evaluation::{catalog, RatingSet};
use crate::reports::domain::{CoachingReportSubmission, ReportId};
use crate::reports::repository::{RepositoryError, ReportRecord, ReportRepository};
use crate::reports::{coaching_router, CoachingReportService};

pub(super) fn report_config() -> ReportConfig {
    ReportConfig { max_text_len: 120 }
}

/// 88 points: every criterion at max except selling skills, which lose 12.
pub(super) fn strong_ratings() -> RatingSet {
    let mut ratings: RatingSet = catalog::catalog()
        .iter()
        .map(|criterion| (criterion.id, criterion.max_score as f32))
        .collect();
    ratings.rate("product_presentation", 4.5);
    ratings.rate("objection_handling", 2.5);
    ratings.rate("closing", 1.0);
    ratings
}

pub(super) fn submission() -> CoachingReportSubmission {
    CoachingReportSubmission {
        representative: "Mona Adel".to_string(),
        supervisor: "Khaled Samir".to_string(),
        visit_date: NaiveDate::from_ymd_opt(2025, 3, 12).expect("valid date"),
        title: "زيارة مرافقة - عيادات المعادي".to_string(),
        notes: "Strong opening, rushed the close.".to_string(),
        recommendation: "Role-play objection handling before next visit.".to_string(),
        ratings: strong_ratings(),
    }
}

pub(super) fn submission_on(representative: &str, visit_date: NaiveDate) -> CoachingReportSubmission {
    let mut submission = submission();
    submission.representative = representative.to_string();
    submission.visit_date = visit_date;
    submission
}

pub(super) fn out_of_range_submission() -> CoachingReportSubmission {
    let mut submission = submission();
    submission.ratings.rate("opening", 7.0);
    submission
}

pub(super) fn build_service() -> (CoachingReportService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = CoachingReportService::new(repository.clone(), report_config());
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<ReportId, ReportRecord>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("mutex").len()
    }
}

impl ReportRepository for MemoryRepository {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("mutex");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        Ok(self.records.lock().expect("mutex").get(id).cloned())
    }

    fn list_for_representative(
        &self,
        representative: &str,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("mutex")
            .values()
            .filter(|record| record.submission.representative == representative)
            .cloned()
            .collect())
    }
}

pub(super) struct ConflictRepository;

impl ReportRepository for ConflictRepository {
    fn insert(&self, _record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        Ok(None)
    }

    fn list_for_representative(
        &self,
        _representative: &str,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list_for_representative(
        &self,
        _representative: &str,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: CoachingReportService<MemoryRepository>) -> axum::Router {
    coaching_router(Arc::new(service))
}
