use std::{sync::Arc, time::Duration};

use anyhow::bail;
use rand::Rng;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    configuration::ScraperSettings,
    domain::{
        company::CompanyData,
        progress::{ScrapeProgress, ScrapeStatus},
        scrape_request::{ScrapeRequest, ScrapeTarget},
    },
};

use super::{discover_urls_from_query, scrape_company_data, PageFetcher};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScrapeEvent {
    Progress {
        progress: ScrapeProgress,
    },
    Complete {
        results: Vec<CompanyData>,
        progress: ScrapeProgress,
    },
    Error {
        error: String,
    },
}

/// Drives one scrape request to completion, emitting events on the channel
/// as it goes. Event sends ignore a dropped receiver, a client that goes
/// away does not stop the loop.
pub async fn run_scrape(
    request: ScrapeRequest,
    settings: ScraperSettings,
    fetcher: Arc<dyn PageFetcher>,
    events: UnboundedSender<ScrapeEvent>,
) {
    if let Err(e) = try_run_scrape(request, settings, fetcher, &events).await {
        log::error!("Scrape run failed: {:?}", e);
        let _ = events.send(ScrapeEvent::Error {
            error: e.to_string(),
        });
    }
}

async fn try_run_scrape(
    request: ScrapeRequest,
    settings: ScraperSettings,
    fetcher: Arc<dyn PageFetcher>,
    events: &UnboundedSender<ScrapeEvent>,
) -> anyhow::Result<()> {
    let options = request.options;
    if !(1..=3).contains(&options.extraction_level) {
        bail!(
            "extraction level must be between 1 and 3, got {}",
            options.extraction_level
        );
    }

    let mut urls = match request.target {
        ScrapeTarget::Query { query } => {
            discover_urls_from_query(&query, Duration::from_millis(settings.discovery_delay_ms))
                .await
        }
        ScrapeTarget::Urls { urls } => urls,
    };
    urls.truncate(options.max_results);

    let mut progress = ScrapeProgress::started(urls.len());
    let _ = events.send(ScrapeEvent::Progress {
        progress: progress.clone(),
    });

    let timeout = Duration::from_millis(options.timeout);
    let mut results: Vec<CompanyData> = vec![];

    for (index, url) in urls.iter().enumerate() {
        progress.current_url = url.clone();
        progress.processed_urls = index + 1;
        let _ = events.send(ScrapeEvent::Progress {
            progress: progress.clone(),
        });

        // Pacing only, the demo reads better when urls do not fly past
        let delay =
            rand::thread_rng().gen_range(settings.min_request_delay_ms..=settings.max_request_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        match scrape_company_data(fetcher.as_ref(), url, options.extraction_level, timeout).await {
            Some(data) => {
                results.push(data);
                progress.successful_extractions += 1;
            }
            None => progress.errors += 1,
        }

        let _ = events.send(ScrapeEvent::Progress {
            progress: progress.clone(),
        });
    }

    progress.status = ScrapeStatus::Completed;
    progress.current_url = String::new();
    let _ = events.send(ScrapeEvent::Complete { results, progress });

    Ok(())
}
