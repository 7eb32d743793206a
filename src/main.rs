use std::{net::TcpListener, sync::Arc};

use env_logger::Env;
use sift::{
    configuration::get_configuration,
    services::{ContentPipeline, Droid, HttpFetcher},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let fetcher = HttpFetcher::new(&configuration.scraper).map_err(std::io::Error::other)?;
    let droid = Droid::new(&configuration.scraper);
    let pipeline = ContentPipeline::new(Arc::new(fetcher), Arc::new(droid), configuration.scraper);

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    log::info!("Listening on {}", address);
    let listener = TcpListener::bind(address)?;

    run(listener, pipeline)?.await
}
