use std::{sync::Arc, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use fake_user_agent::get_rua;

use crate::configuration::ScraperSettings;

use super::Droid;

/// Turns a url into page source. The seam between the sequential scrape
/// loop and the outside world.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> anyhow::Result<String>;
}

pub struct DriverFetcher {
    pub webdriver_url: String,
}

#[async_trait]
impl PageFetcher for DriverFetcher {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> anyhow::Result<String> {
        let droid = Droid::new(&self.webdriver_url)
            .await
            .context("Failed to start a webdriver session")?;

        let page_source = droid.fetch_page_source(url, timeout).await;

        if let Err(e) = droid.quit().await {
            log::error!("Failed to close webdriver session: {:?}", e);
        }

        Ok(page_source.context("Failed to load page in webdriver")?)
    }
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, get_rua())
            .timeout(timeout)
            .send()
            .await
            .context("No response from url")?;

        response.text().await.context("Failed to read response body")
    }
}

pub fn build_fetcher(settings: &ScraperSettings) -> Arc<dyn PageFetcher> {
    match settings.use_browser {
        true => Arc::new(DriverFetcher {
            webdriver_url: settings.webdriver_url.clone(),
        }),
        false => Arc::new(HttpFetcher::new()),
    }
}
