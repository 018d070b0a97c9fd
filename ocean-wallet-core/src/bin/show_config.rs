use ocean_wallet_core::core::transactions::OceanSettings;
use ocean_wallet_core::domain::entities::EnvironmentNetwork;
use ocean_wallet_core::infrastructure::WalletConfig;

fn main() {
    let config = match WalletConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let environment = &config.environment;
    let network = config
        .default_network
        .unwrap_or_else(|| environment.default_network());
    let settings = OceanSettings::for_environment(environment);
    let networks: Vec<&str> = environment.networks.iter().map(EnvironmentNetwork::as_str).collect();

    println!("Ocean Wallet Core Configuration:\n");
    println!("  Release Channel: {}", config.release_channel.as_deref().unwrap_or("(not set)"));
    println!("  Environment: {} (debug: {})", environment.name, environment.debug);
    println!("  Networks: {}", networks.join(", "));
    println!("  Default Network: {}", network);
    println!("  Ocean URL: {}", config.ocean_url_for(network));
    println!("  Storage Directory: {}", config.storage_dir.display());
    println!("  Wallet Address: {}", config.wallet_address.as_deref().unwrap_or("(not set)"));
    println!("  Initial Wait: {:?}", settings.initial_wait);
    println!("  Poll Interval: {:?}", settings.interval);
    println!("  Max Timeout: {:?}", settings.max_timeout);
    println!("  Stats Interval: {} ms", network.stats_interval_ms());
}
