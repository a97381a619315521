use std::time::Duration;

use thirtyfour::{error::WebDriverResult, DesiredCapabilities, WebDriver};

/// One webdriver session. Created per page load and closed right after, the
/// browser never outlives a single extraction.
pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(server_url: &str) -> WebDriverResult<Self> {
        let caps = DesiredCapabilities::chrome();
        let driver = WebDriver::new(server_url, caps).await?;

        Ok(Droid { driver })
    }

    pub async fn fetch_page_source(&self, url: &str, timeout: Duration) -> WebDriverResult<String> {
        self.driver.set_page_load_timeout(timeout).await?;
        self.driver.goto(url).await?;
        self.driver.source().await
    }

    pub async fn quit(self) -> WebDriverResult<()> {
        self.driver.quit().await
    }
}
