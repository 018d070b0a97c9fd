use bip39::{Language, Mnemonic};
use pbkdf2::pbkdf2_hmac;
use rand_core::{OsRng, RngCore};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::shared::constants::{MNEMONIC_PBKDF2_ROUNDS, MNEMONIC_SALT, SEED_SIZE};
use crate::shared::error::WalletError;

/// Mnemonic word list, cleared on drop
#[derive(Clone)]
pub struct MnemonicWords {
    words: Vec<String>,
}

impl MnemonicWords {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(phrase.split_whitespace().map(|s| s.to_string()).collect())
    }

    pub fn as_words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Space separated phrase
    pub fn phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.words.join(" "))
    }
}

impl std::fmt::Debug for MnemonicWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MnemonicWords({} words)", self.words.len())
    }
}

impl Drop for MnemonicWords {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

/// BIP39 seed from mnemonic words with an empty passphrase.
///
/// The checksum is not enforced; any word list produces a seed.
pub fn mnemonic_to_seed(words: &[String]) -> Zeroizing<[u8; SEED_SIZE]> {
    let phrase = Zeroizing::new(words.join(" "));
    let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
    pbkdf2_hmac::<Sha512>(
        phrase.as_bytes(),
        MNEMONIC_SALT.as_bytes(),
        MNEMONIC_PBKDF2_ROUNDS,
        &mut seed[..],
    );
    seed
}

/// Generate a fresh English mnemonic of 12, 15, 18, 21 or 24 words
pub fn generate_mnemonic(word_count: usize) -> Result<MnemonicWords, WalletError> {
    let entropy_len = match word_count {
        12 => 16,
        15 => 20,
        18 => 24,
        21 => 28,
        24 => 32,
        _ => {
            return Err(WalletError::validation(format!(
                "Unsupported mnemonic length: {}",
                word_count
            )))
        }
    };

    let mut entropy = Zeroizing::new(vec![0u8; entropy_len]);
    OsRng.fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| WalletError::crypto(format!("Failed to generate mnemonic: {}", e)))?;
    Ok(MnemonicWords::new(mnemonic.words().map(|w| w.to_string()).collect()))
}

/// True if the words form a valid English BIP39 mnemonic (checksum included)
pub fn validate_mnemonic(words: &[String]) -> bool {
    Mnemonic::parse_in_normalized(Language::English, &words.join(" ")).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abandon_art() -> Vec<String> {
        let mut words = vec!["abandon".to_string(); 23];
        words.push("art".to_string());
        words
    }

    #[test]
    fn test_seed_from_abandon_art() {
        let seed = mnemonic_to_seed(&abandon_art());
        assert_eq!(
            hex::encode(&seed[..]),
            "408b285c123836004f4b8842c89324c1f01382450c0d439af345ba7fc49acf705489c6fc77dbd4e3dc1dd8cc6bc9f043db8ada1e243c4a0eafb290d399480840"
        );
    }

    #[test]
    fn test_seed_does_not_enforce_checksum() {
        let words = vec!["abandon".to_string(); 24];
        assert!(!validate_mnemonic(&words));
        assert_eq!(mnemonic_to_seed(&words).len(), SEED_SIZE);
    }

    #[test]
    fn test_generate_and_validate() {
        for count in [12, 15, 18, 21, 24] {
            let words = generate_mnemonic(count).expect("Failed to generate mnemonic");
            assert_eq!(words.len(), count);
            assert!(validate_mnemonic(words.as_words()));
        }
        assert!(validate_mnemonic(&abandon_art()));
    }

    #[test]
    fn test_generate_rejects_bad_length() {
        assert!(matches!(generate_mnemonic(13), Err(WalletError::Validation(_))));
    }

    #[test]
    fn test_debug_does_not_leak_words() {
        let words = MnemonicWords::from_phrase("abandon abandon art");
        let debug = format!("{:?}", words);
        assert!(!debug.contains("abandon"));
        assert_eq!(words.phrase().as_str(), "abandon abandon art");
    }
}
