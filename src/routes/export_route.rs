use actix_web::{post, web, HttpResponse};

use crate::domain::{
    company::CompanyData,
    export::{export_file_name, results_to_csv},
};

#[post("/export/csv")]
async fn export_csv(body: web::Json<Vec<CompanyData>>) -> HttpResponse {
    let csv = results_to_csv(&body);

    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/csv; charset=utf-8"))
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", export_file_name("csv")),
        ))
        .body(csv)
}

#[post("/export/json")]
async fn export_json(body: web::Json<Vec<CompanyData>>) -> HttpResponse {
    match serde_json::to_string_pretty(&body.into_inner()) {
        Ok(json) => HttpResponse::Ok()
            .insert_header(("Content-Type", "application/json"))
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", export_file_name("json")),
            ))
            .body(json),
        Err(e) => {
            log::error!("Failed to serialize results for export: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
