//! The error type for all bank and account operations. Every variant is a
//! recoverable condition: nothing here should ever take the process down.
//!
//! The display text of the common failures matches the messages the bank has
//! always printed for them, so a caller can hand errors straight to the user.

use crate::models::account::{AccountID, AccountKind};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Account not found!")]
    AccountNotFound(AccountID),
    #[error("amount out of range for account {account_id}")]
    AmountOverflow {
        account_id: AccountID,
    },
    #[error("Minimum balance requirement not met for {kind} account.")]
    BelowMinimumBalance {
        kind: AccountKind,
        minimum: Decimal,
        balance: Decimal,
    },
    #[error("error building model: {0}")]
    BuilderFailed(String),
    #[error("Account number {0} is already in use.")]
    DuplicateAccount(AccountID),
    #[error("Insufficient balance! Transaction failed.")]
    InsufficientBalance {
        account_id: AccountID,
        balance: Decimal,
        requested: Decimal,
    },
    #[error("{day:02}.{month:02}.{year} is not a valid date")]
    InvalidDate {
        day: u32,
        month: u32,
        year: i32,
    },
    #[error("amount cannot be negative: {amount}")]
    NegativeAmount {
        account_id: AccountID,
        amount: Decimal,
    },
    #[error("Not enough special accounts for a lottery!")]
    NoEligibleAccounts,
}

pub type Result<T> = std::result::Result<T, Error>;
