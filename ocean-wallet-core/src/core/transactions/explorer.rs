use crate::domain::entities::EnvironmentNetwork;
use crate::shared::constants::DEFISCAN_URL;

/// DeFiScan link for a transaction.
///
/// Local playground transactions are not indexed by DeFiScan, so the raw
/// hex rides along.
pub fn transaction_url(network: EnvironmentNetwork, txid: &str, raw_tx: &str) -> String {
    let base = format!("{}/transactions/{}", DEFISCAN_URL, txid);
    match network {
        EnvironmentNetwork::MainNet => base,
        EnvironmentNetwork::LocalPlayground => format!(
            "{}?network={}&rawtx={}",
            base,
            network.identifier(),
            raw_tx
        ),
        _ => format!("{}?network={}", base, network.identifier()),
    }
}
