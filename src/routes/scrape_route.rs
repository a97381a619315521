use actix_web::{post, web, HttpResponse};
use bytes::Bytes;
use tokio::sync::mpsc;

use crate::{
    configuration::Settings,
    domain::scrape_request::ScrapeRequest,
    services::{build_fetcher, run_scrape, ScrapeEvent},
};

fn sse_data(event: &ScrapeEvent) -> Option<Bytes> {
    match serde_json::to_string(event) {
        Ok(json) => Some(Bytes::from(format!("data: {}\n\n", json))),
        Err(e) => {
            log::error!("Failed to serialize stream event: {:?}", e);
            None
        }
    }
}

#[post("/scrape")]
async fn scrape(settings: web::Data<Settings>, body: web::Json<ScrapeRequest>) -> HttpResponse {
    /*
    1. Resolve the request to a bounded url list (pass-through or query stub)
    2. Walk the list sequentially with a randomized delay per url
    3. Emit a progress event around every extraction
    4. Close with a complete event carrying all results
    */
    let request = body.into_inner();
    let scraper_settings = settings.scraper.clone();
    let fetcher = build_fetcher(&scraper_settings);

    let (event_sender, mut event_receiver) = mpsc::unbounded_channel::<ScrapeEvent>();

    // Detached on purpose, a dropped response stream does not cancel the run
    actix_web::rt::spawn(run_scrape(request, scraper_settings, fetcher, event_sender));

    let stream = async_stream::stream! {
        while let Some(event) = event_receiver.recv().await {
            if let Some(chunk) = sse_data(&event) {
                yield Ok::<Bytes, actix_web::Error>(chunk);
            }
        }
    };

    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/event-stream"))
        .insert_header(("Cache-Control", "no-cache"))
        .insert_header(("Connection", "keep-alive"))
        .streaming(stream)
}
