use serde::{Deserialize, Serialize};

/// Mutable summary of one scrape run, cloned into every streamed event.
/// Lives only for the duration of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeProgress {
    pub total_urls: usize,
    pub processed_urls: usize,
    pub successful_extractions: usize,
    pub errors: usize,
    pub current_url: String,
    pub status: ScrapeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Idle,
    Running,
    Completed,
    Error,
    Paused,
}

impl ScrapeProgress {
    pub fn started(total_urls: usize) -> Self {
        ScrapeProgress {
            total_urls,
            processed_urls: 0,
            successful_extractions: 0,
            errors: 0,
            current_url: String::new(),
            status: ScrapeStatus::Running,
        }
    }
}
