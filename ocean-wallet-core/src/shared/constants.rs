//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Broadcast and confirmation tracking
pub const MAX_AUTO_RETRY: u32 = 1;
pub const MAX_TIMEOUT_MS: u64 = 300_000;
pub const INTERVAL_TIME_MS: u64 = 5_000;
pub const INITIAL_WAIT_DEBUG_MS: u64 = 5_000;
pub const INITIAL_WAIT_MS: u64 = 30_000;
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
pub const NOTIFICATION_TIMEOUT_MS: u64 = 5_000;

// Stats polling
pub const STATS_INTERVAL_PLAYGROUND_MS: u64 = 3_000;
pub const STATS_INTERVAL_MS: u64 = 30_000;

// Storage keys
pub const MNEMONIC_SEED_KEY_SUFFIX: &str = "MNEMONIC_SEED";
pub const MNEMONIC_ENCRYPTED_KEY_SUFFIX: &str = "MNEMONIC_ENCRYPTED";
pub const NETWORK_KEY_SUFFIX: &str = "NETWORK";
pub const NOTIFICATION_PREFERENCE_KEY: &str = "WALLET_NOTIFICATION_PREFERENCE";
pub const STORAGE_DIR_NAME: &str = "ocean-wallet";

// Security constants
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
pub const KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;
pub const SALT_SIZE: usize = 16;
pub const HASH_SIZE: usize = 32;

// BIP39 seed derivation
pub const MNEMONIC_SALT: &str = "mnemonic";
pub const MNEMONIC_PBKDF2_ROUNDS: u32 = 2048;
pub const SEED_SIZE: usize = 64;

// Notifications
pub const DEFAULT_NOTIFICATION_CHANNEL: &str = "default";

// Explorer and remote API
pub const DEFISCAN_URL: &str = "https://defiscan.live";
pub const OCEAN_API_VERSION: &str = "v0";
pub const OCEAN_URL: &str = "https://ocean.defichain.com";
pub const REMOTE_PLAYGROUND_URL: &str = "https://playground.jellyfishsdk.com";
pub const LOCAL_PLAYGROUND_URL: &str = "http://localhost:19553";
pub const HTTP_TIMEOUT_SECS: u64 = 60;
pub const TOKEN_PAGE_SIZE: u32 = 200;
