use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// NDJSON file with one `{"name": .., "centroid": {"lat": .., "lng": ..}}` per line.
    #[arg(long)]
    #[arg(default_value = "divisions.example.ndjson")]
    pub divisions: PathBuf,
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    #[arg(default_value_t = 5)]
    pub rounds_per_game: u64,
    #[arg(long, value_parser = parse_radius_km)]
    #[arg(default_value_t = 30.0)]
    pub sampling_radius_km: f64,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values_t = [
        String::from("http://localhost:3000"),
        String::from("http://127.0.0.1:3000"),
    ])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value = "info")]
    pub log_level: LevelFilter,
}

/// Accepts finite distances greater than zero.
fn parse_radius_km(value: &str) -> Result<f64, String> {
    let radius_km: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(format!("`{value}` is not a finite distance above zero"));
    }
    Ok(radius_km)
}
