use std::net::TcpListener;

use actix_files::Files;
use actix_web::{
    dev::Server,
    middleware::Logger,
    web, App, HttpServer,
};

use crate::{
    configuration::Settings,
    routes::{export_route, index_route, scrape_route, stop_route},
};

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(index_route::index)
            .service(
                web::scope("/api")
                    .service(scrape_route::scrape)
                    .service(stop_route::stop)
                    .service(export_route::export_csv)
                    .service(export_route::export_json),
            )
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
