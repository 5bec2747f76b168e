//! The data side of the bank: accounts, the registry that owns them, and the
//! receipts handed back when money moves.

#[macro_use]
mod lib;

pub mod account;
pub mod bank;

use crate::models::account::AccountID;
use getset::Getters;
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};

/// A balance-affecting operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "deposit")]
    Deposit,
    #[serde(rename = "withdraw")]
    Withdraw,
}

/// Confirmation of a completed deposit or withdrawal. Receipts are only ever
/// created for operations that went through.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Receipt {
    /// What was done
    op: Op,
    /// The account it was done to
    account_id: AccountID,
    /// The amount moved
    amount: Decimal,
    /// The account's balance after the operation
    balance: Decimal,
}

impl Receipt {
    pub(crate) fn new(op: Op, account_id: AccountID, amount: Decimal, balance: Decimal) -> Self {
        Self {
            op,
            account_id,
            amount,
            balance,
        }
    }

    /// Render the receipt as a one-line confirmation, eg
    /// `Deposited 1000 TL to the account. New balance: 3000 TL`
    pub fn describe(&self, currency: &str) -> String {
        match self.op {
            Op::Deposit => format!("Deposited {} {} to the account. New balance: {} {}", self.amount, currency, self.balance, currency),
            Op::Withdraw => format!("Withdrawn {} {} from the account. New balance: {} {}", self.amount, currency, self.balance, currency),
        }
    }
}
