pub mod export_route;
pub mod index_route;
pub mod scrape_route;
pub mod stop_route;
