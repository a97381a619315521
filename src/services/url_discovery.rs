use std::time::Duration;

use rand::{seq::SliceRandom, Rng};

/// Stand-in for a real search engine or directory integration. The query
/// content is ignored, discovery always resolves to a shuffled slice of
/// well known company sites.
pub const DEMO_COMPANY_URLS: [&str; 10] = [
    "https://stripe.com",
    "https://shopify.com",
    "https://notion.so",
    "https://figma.com",
    "https://vercel.com",
    "https://supabase.com",
    "https://linear.app",
    "https://framer.com",
    "https://loom.com",
    "https://miro.com",
];

pub async fn discover_urls_from_query(query: &str, discovery_delay: Duration) -> Vec<String> {
    log::info!("Expanding query into candidate urls: {}", query);

    // Simulated discovery latency
    tokio::time::sleep(discovery_delay).await;

    let mut urls: Vec<String> = DEMO_COMPANY_URLS.iter().map(|u| u.to_string()).collect();
    urls.shuffle(&mut rand::thread_rng());

    let keep = rand::thread_rng().gen_range(5..10);
    urls.truncate(keep);

    urls
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, time::Duration};

    use super::{discover_urls_from_query, DEMO_COMPANY_URLS};

    #[tokio::test]
    async fn discovery_returns_between_five_and_nine_urls() {
        for _ in 0..20 {
            let urls = discover_urls_from_query("saas tools", Duration::ZERO).await;

            assert!(urls.len() >= 5, "got only {} urls", urls.len());
            assert!(urls.len() <= 9, "got {} urls", urls.len());
        }
    }

    #[tokio::test]
    async fn discovered_urls_come_from_the_fixed_list_without_duplicates() {
        let urls = discover_urls_from_query("fintech startups", Duration::ZERO).await;

        let unique: HashSet<&String> = urls.iter().collect();
        assert_eq!(unique.len(), urls.len());

        for url in &urls {
            assert!(DEMO_COMPANY_URLS.contains(&url.as_str()));
        }
    }
}
