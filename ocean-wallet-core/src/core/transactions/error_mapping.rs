const PENDING_TRANSACTION_MESSAGE: &str = "Wait for pending transaction to be completed";

/// Friendly message for known node rejections; anything else passes through
pub fn error_message_mapping(message: &str) -> String {
    if message.contains("txn-mempool-conflict") || message.contains("bad-txns-inputs-missingorspent") {
        return PENDING_TRANSACTION_MESSAGE.to_string();
    }
    message.to_string()
}
