pub mod company_scraper;
pub mod droid;
pub mod fetcher;
pub mod scrape_runner;
pub mod url_discovery;

pub use company_scraper::*;
pub use droid::*;
pub use fetcher::*;
pub use scrape_runner::*;
pub use url_discovery::*;
