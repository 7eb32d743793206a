use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{default_route, scrape_route, search_route},
    services::ContentPipeline,
};

pub fn run(listener: TcpListener, pipeline: ContentPipeline) -> Result<Server, std::io::Error> {
    let pipeline = web::Data::new(pipeline);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::health)
            .service(scrape_route::scrape)
            .service(search_route::search)
            .app_data(pipeline.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
