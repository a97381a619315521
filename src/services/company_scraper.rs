use std::time::Duration;

use chrono::Utc;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;
use uuid::Uuid;

use crate::domain::company::{CompanyData, SocialMedia, EXTRACTION_CONFIDENCE};

use super::PageFetcher;

/// Static label until something real classifies industries.
const DEFAULT_INDUSTRY: &str = "Technology";

pub const TECH_KEYWORDS: [&str; 8] = [
    "React",
    "Node.js",
    "TypeScript",
    "GraphQL",
    "Python",
    "AWS",
    "PostgreSQL",
    "MongoDB",
];

/// Loads one page and pulls superficial company metadata out of it. Any
/// failure yields None, the caller counts it as an error and moves on. No
/// retries.
pub async fn scrape_company_data(
    fetcher: &dyn PageFetcher,
    url: &str,
    extraction_level: u8,
    timeout: Duration,
) -> Option<CompanyData> {
    match try_scrape(fetcher, url, extraction_level, timeout).await {
        Ok(data) => Some(data),
        Err(e) => {
            log::error!("Error scraping {}: {:?}", url, e);
            None
        }
    }
}

async fn try_scrape(
    fetcher: &dyn PageFetcher,
    url: &str,
    extraction_level: u8,
    timeout: Duration,
) -> anyhow::Result<CompanyData> {
    let parsed_url = Url::parse(url)?;
    let page_source = fetcher.fetch_page(url, timeout).await?;

    Ok(extract_company_data(
        url,
        &parsed_url,
        &page_source,
        extraction_level,
    ))
}

fn extract_company_data(
    url: &str,
    parsed_url: &Url,
    page_source: &str,
    extraction_level: u8,
) -> CompanyData {
    let document = Html::parse_document(page_source);
    let body_text = page_text(&document);

    let company_name = page_title(&document)
        .and_then(|title| title.split('|').next().map(|left| left.trim().to_string()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| parsed_url.host_str().unwrap_or_default().to_string());

    let mut data = CompanyData {
        id: format!("company-{}", Uuid::new_v4()),
        company_name,
        website_url: url.to_string(),
        email: None,
        phone: None,
        description: None,
        industry: None,
        location: None,
        founded_year: None,
        social_media: None,
        tech_stack: None,
        employee_size: None,
        extracted_at: Utc::now(),
        source_url: url.to_string(),
        confidence: EXTRACTION_CONFIDENCE,
    };

    if extraction_level >= 1 {
        data.email = Some(extract_email(&body_text));
        data.phone = Some(extract_phone(&body_text));
    }

    if extraction_level >= 2 {
        let description = meta_content(&document, r#"meta[name="description"]"#)
            .or_else(|| meta_content(&document, r#"meta[property="og:description"]"#))
            .unwrap_or_default();

        data.description = Some(description);
        data.industry = Some(DEFAULT_INDUSTRY.to_string());
        data.location = Some(String::new());
        data.founded_year = Some(String::new());
        data.employee_size = Some(String::new());
        data.social_media = Some(SocialMedia {
            linkedin: Some(first_link_containing(&document, "linkedin.com")),
            twitter: Some(first_link_containing(&document, "twitter.com")),
            facebook: None,
        });
    }

    if extraction_level >= 3 {
        data.tech_stack = Some(matching_tech_keywords(&body_text));
    }

    data
}

fn page_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();

    document
        .select(&title_selector)
        .next()
        .map(|tag| tag.text().collect::<String>())
}

fn page_text(document: &Html) -> String {
    let body_selector = Selector::parse("body").unwrap();

    match document.select(&body_selector).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let meta_selector = Selector::parse(selector).unwrap();

    document
        .select(&meta_selector)
        .next()
        .and_then(|tag| tag.value().attr("content"))
        .map(|content| content.to_string())
        .filter(|content| !content.is_empty())
}

fn first_link_containing(document: &Html, fragment: &str) -> String {
    let a_tag_selector = Selector::parse(&format!(r#"a[href*="{}"]"#, fragment)).unwrap();

    document
        .select(&a_tag_selector)
        .next()
        .and_then(|tag| tag.value().attr("href"))
        .unwrap_or("")
        .to_string()
}

fn extract_email(text: &str) -> String {
    let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-z]{2,}").unwrap();

    email_regex
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn extract_phone(text: &str) -> String {
    let phone_regex = Regex::new(r"(\+?\d{1,3})?[-.\s]?\(?\d+\)?[-.\s]?\d+[-.\s]?\d+").unwrap();

    phone_regex
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn matching_tech_keywords(text: &str) -> Vec<String> {
    TECH_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
