use clap::Parser;
use tokio::net::TcpListener;

mod app_context;
mod cli;
mod game;
mod health;
mod http;
mod logging;
mod map;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    let divisions = map::init(&args);
    let app_context = app_context::init(&args, divisions);
    let router = http::router::new(&args, app_context);
    let listener = TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
