use clap::Parser;
use estate_luxe::cli::{Cli, Commands};
use estate_luxe::config::Config;
use estate_luxe::store::JsonFileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    estate_luxe::telemetry::init_telemetry(&config.telemetry)?;

    let mut store = JsonFileStore::open(&config.storage.path);

    match cli.command {
        Commands::Value(args) => {
            args.execute(&config, &mut store)?;
        }
        Commands::Predict(args) => {
            args.execute(&config, &store).await?;
        }
        Commands::Insights(args) => {
            args.execute(&store)?;
        }
        Commands::Calc(args) => {
            args.execute(&store)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Engine: {}/sqft, floor {}", config.engine.value_per_sqft, config.engine.value_floor);
            println!(
                "  Prediction: {} (timeout {}s)",
                config.prediction.base_url, config.prediction.timeout_secs
            );
            println!("  Storage: {}", config.storage.path.display());
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
