use actix_web::{post, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct StopResponse {
    success: bool,
    message: String,
}

/// Accepts the stop signal from the UI. No cancellation token reaches the
/// scrape loop, an in-flight run finishes server side regardless.
#[post("/scrape/stop")]
async fn stop() -> HttpResponse {
    HttpResponse::Ok().json(StopResponse {
        success: true,
        message: "Scraping stopped".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::stop;

    #[actix_web::test]
    async fn stop_always_reports_success() {
        let app =
            test::init_service(App::new().service(web::scope("/api").service(stop))).await;

        for _ in 0..2 {
            let request = test::TestRequest::post()
                .uri("/api/scrape/stop")
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

            assert_eq!(body["success"], true);
            assert_eq!(body["message"], "Scraping stopped");
        }
    }
}
