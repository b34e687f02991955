use std::env;
use std::error::Error;
use std::time::Instant;

use log::{info, LevelFilter};

use ratsort::bench;
use ratsort::BenchConfig;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();
    let config = BenchConfig::from_args(args)?;
    info!("Config: {:?}", config);

    let start = Instant::now();
    let report = bench::run(&config);
    info!("Benchmark finished in {:?}", start.elapsed());

    print!("{}", report);
    Ok(())
}
