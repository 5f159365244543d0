use crate::cli::Args;
use divisions::Divisions;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

pub mod consts;
pub mod divisions;
pub mod geodesy;
pub mod models;
pub mod sampler;

pub fn init(args: &Args) -> Arc<Divisions> {
    let divisions_file = File::open(&args.divisions).expect("Failed to open the divisions file.");
    let divisions = Divisions::from_ndjson(BufReader::new(divisions_file))
        .expect("Failed to load divisions from the divisions file.");
    tracing::info!(
        divisions_count = divisions.len(),
        "Loaded divisions from {}.",
        args.divisions.display()
    );
    Arc::new(divisions)
}
