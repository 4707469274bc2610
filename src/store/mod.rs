//! In-memory report store
//!
//! The authoritative collection of reports for the list page. A single
//! async mutex guards every read and write: records are mutated in place
//! and id assignment reads shared state, so all operations must serialize.
//! Everything under the lock is a bounded linear scan; nothing awaits
//! while holding it.

pub mod export;

use tokio::sync::Mutex;

use crate::models::{NewReport, Page, PageRequest, Report, ReportPatch, DEFAULT_REG_DATE};

/// Number of synthetic records seeded at startup
pub const DEFAULT_SEED_COUNT: u32 = 23;

/// The in-memory report collection.
///
/// Data lives for the lifetime of the process and is reset on restart;
/// persistence is explicitly out of scope for this service.
#[derive(Debug)]
pub struct ReportStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    reports: Vec<Report>,
    /// Next id to assign. High-water mark: starts at max(existing) + 1 and
    /// only ever grows, so deleting the newest record never causes its id
    /// to be handed out again.
    next_id: u64,
}

/// Case-sensitive substring match against title or owner.
fn matches(report: &Report, search: &str) -> bool {
    report.title.contains(search) || report.owner.contains(search)
}

impl ReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                reports: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store seeded with `count` synthetic reports, ids `1..=count`.
    pub fn seeded(count: u32) -> Self {
        let reports: Vec<Report> = (1..=u64::from(count))
            .map(|i| Report {
                id: i,
                title: format!("Report {}", i),
                owner: "Hong Gildong".to_string(),
                reg_date: DEFAULT_REG_DATE.to_string(),
            })
            .collect();

        Self {
            inner: Mutex::new(Inner {
                next_id: u64::from(count) + 1,
                reports,
            }),
        }
    }

    /// List one page of reports, optionally filtered by `search`.
    ///
    /// Filtering happens before pagination; a page past the end of the
    /// filtered set yields empty content rather than an error.
    pub async fn list(&self, page: PageRequest, search: Option<&str>) -> Page<Report> {
        let inner = self.inner.lock().await;
        let filtered: Vec<&Report> = match search {
            Some(term) if !term.is_empty() => {
                inner.reports.iter().filter(|r| matches(r, term)).collect()
            }
            _ => inner.reports.iter().collect(),
        };

        let start = page.offset();
        let end = (start + page.size as usize).min(filtered.len());
        let content = filtered[start.min(end)..end]
            .iter()
            .map(|r| (*r).clone())
            .collect();

        Page {
            content,
            page: page.page,
            total_pages: Page::<Report>::total_pages_for(filtered.len(), page.size),
        }
    }

    /// Fetch a single report by id.
    pub async fn get(&self, id: u64) -> Option<Report> {
        let inner = self.inner.lock().await;
        inner.reports.iter().find(|r| r.id == id).cloned()
    }

    /// Append a new report and return its assigned id.
    pub async fn create(&self, new: NewReport) -> u64 {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        inner.reports.push(Report {
            id,
            title: new.title.into_string(),
            owner: new.owner.into_string(),
            reg_date: new.reg_date.into_string(),
        });

        id
    }

    /// Apply a partial update to the report with `id`.
    ///
    /// Only fields present in the patch are written; `id` and `reg_date`
    /// never change. Returns false (store untouched) when the id is unknown.
    pub async fn update(&self, id: u64, patch: ReportPatch) -> bool {
        let mut inner = self.inner.lock().await;
        match inner.reports.iter_mut().find(|r| r.id == id) {
            Some(report) => {
                if let Some(title) = patch.title {
                    report.title = title.into_string();
                }
                if let Some(owner) = patch.owner {
                    report.owner = owner.into_string();
                }
                true
            }
            None => false,
        }
    }

    /// Remove every report whose id appears in `ids`.
    ///
    /// Unknown ids are silently ignored. Returns the number of records
    /// actually removed.
    pub async fn delete_many(&self, ids: &[u64]) -> usize {
        let mut inner = self.inner.lock().await;
        let before = inner.reports.len();
        inner.reports.retain(|r| !ids.contains(&r.id));
        before - inner.reports.len()
    }

    /// Clone of the reports in insertion order, filtered like [`list`].
    ///
    /// [`list`]: Self::list
    pub async fn snapshot(&self, search: Option<&str>) -> Vec<Report> {
        let inner = self.inner.lock().await;
        match search {
            Some(term) if !term.is_empty() => inner
                .reports
                .iter()
                .filter(|r| matches(r, term))
                .cloned()
                .collect(),
            _ => inner.reports.clone(),
        }
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}
