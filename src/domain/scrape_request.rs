use serde::Deserialize;

/// One scrape invocation as posted by the form. Consumed once, never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    #[serde(flatten)]
    pub target: ScrapeTarget,
    #[serde(default)]
    pub options: ScrapeOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScrapeTarget {
    Query {
        #[serde(default)]
        query: String,
    },
    Urls {
        #[serde(default)]
        urls: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrapeOptions {
    pub max_results: usize,
    pub extraction_level: u8,
    /// Navigation timeout in milliseconds.
    pub timeout: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        ScrapeOptions {
            max_results: 10,
            extraction_level: 2,
            timeout: 30_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrapeRequest, ScrapeTarget};

    #[test]
    fn parses_query_request() {
        let body = r#"{
            "type": "query",
            "query": "cloud computing startups in Europe",
            "options": { "maxResults": 25, "extractionLevel": 3, "timeout": 30000 }
        }"#;
        let request: ScrapeRequest = serde_json::from_str(body).unwrap();

        match request.target {
            ScrapeTarget::Query { query } => {
                assert_eq!(query, "cloud computing startups in Europe")
            }
            ScrapeTarget::Urls { .. } => panic!("parsed a urls target from a query request"),
        }
        assert_eq!(request.options.max_results, 25);
        assert_eq!(request.options.extraction_level, 3);
        assert_eq!(request.options.timeout, 30_000);
    }

    #[test]
    fn parses_urls_request() {
        let body = r#"{
            "type": "urls",
            "urls": ["https://stripe.com", "https://figma.com"],
            "options": { "maxResults": 10, "extractionLevel": 1, "timeout": 30000 }
        }"#;
        let request: ScrapeRequest = serde_json::from_str(body).unwrap();

        match request.target {
            ScrapeTarget::Urls { urls } => {
                assert_eq!(urls, vec!["https://stripe.com", "https://figma.com"])
            }
            ScrapeTarget::Query { .. } => panic!("parsed a query target from a urls request"),
        }
        assert_eq!(request.options.extraction_level, 1);
    }

    #[test]
    fn missing_options_fall_back_to_defaults() {
        let body = r#"{ "type": "query", "query": "fintech" }"#;
        let request: ScrapeRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.options.max_results, 10);
        assert_eq!(request.options.extraction_level, 2);
        assert_eq!(request.options.timeout, 30_000);
    }
}
