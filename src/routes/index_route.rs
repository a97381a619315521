use actix_web::{get, HttpResponse};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    max_results_options: Vec<MaxResultsOption>,
    extraction_levels: Vec<ExtractionLevelOption>,
}

struct MaxResultsOption {
    value: u16,
    selected: bool,
}

struct ExtractionLevelOption {
    value: u8,
    label: &'static str,
    selected: bool,
}

#[get("/")]
async fn index() -> HttpResponse {
    let template = IndexTemplate {
        max_results_options: [5, 10, 25, 50, 100]
            .into_iter()
            .map(|value| MaxResultsOption {
                value,
                selected: value == 10,
            })
            .collect(),
        extraction_levels: vec![
            ExtractionLevelOption {
                value: 1,
                label: "Level 1 - Basic",
                selected: false,
            },
            ExtractionLevelOption {
                value: 2,
                label: "Level 2 - Enhanced",
                selected: true,
            },
            ExtractionLevelOption {
                value: 3,
                label: "Level 3 - Advanced",
                selected: false,
            },
        ],
    };

    match template.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("Failed to render index template: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
