//! Loan vault rules
//!
//! Borrowing headroom for a vault and whether vault operations are allowed
//! in its current state.

use rust_decimal::Decimal;

use crate::domain::entities::VaultState;
use crate::shared::error::WalletError;

/// Figures needed to size a new loan against a vault
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxLoanInput {
    /// Total collateral value in USD
    pub total_collateral_value: Decimal,
    /// Value of loans already taken in USD
    pub existing_loan_value: Decimal,
    /// Minimum collateralization ratio in percent, e.g. 150
    pub min_col_ratio: Decimal,
    /// Active price of the loan token in USD
    pub loan_active_price: Decimal,
    pub interest_per_block: Decimal,
}

/// Largest amount of the loan token the vault can still borrow.
///
/// `collateral / (ratio / 100) - existing`, converted to tokens at the
/// active price and discounted by one block of interest. The result is
/// negative when the vault is already over-borrowed.
pub fn max_loan_amount(input: &MaxLoanInput) -> Result<Decimal, WalletError> {
    let ratio = input.min_col_ratio / Decimal::ONE_HUNDRED;
    let headroom = input
        .total_collateral_value
        .checked_div(ratio)
        .ok_or_else(|| WalletError::validation("Collateralization ratio must not be zero"))?
        - input.existing_loan_value;

    headroom
        .checked_div(input.loan_active_price)
        .ok_or_else(|| WalletError::validation("Loan token price must not be zero"))?
        .checked_div(Decimal::ONE + input.interest_per_block)
        .ok_or_else(|| WalletError::validation("Interest per block must not be -1"))
}

/// Borrow, repay and collateral changes are blocked while a vault is being
/// liquidated or its state is unknown. No state means no vault is loaded.
pub fn can_perform_operations(state: Option<VaultState>) -> bool {
    match state {
        Some(VaultState::InLiquidation) | Some(VaultState::Unknown) | None => false,
        Some(_) => true,
    }
}
