//! Account reports: a snapshot of an account's balance next to the benefit it
//! has earned as of some date. Reports are built fresh from the account every
//! time one is asked for.

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::account::{Account, AccountID, AccountKind},
    util::number,
};
use getset::Getters;
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};

/// Separates one account's report from the next in text output.
pub const SEPARATOR: &str = "------------------------";

#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct AccountReport {
    /// The account reported on
    id: AccountID,
    /// The account's kind
    kind: AccountKind,
    /// Balance at the time of the report
    balance: Decimal,
    /// Benefit earned as of `as_of`
    benefit: Decimal,
    /// `balance + benefit`
    total: Decimal,
    /// The date the benefit was worked out for
    as_of: NaiveDate,
}

impl AccountReport {
    /// Fails with `AmountOverflow` if `balance + benefit` is out of range.
    pub(crate) fn new(account: &Account, benefit: Decimal, as_of: NaiveDate) -> Result<Self> {
        let balance = account.balance().clone();
        let total = number::sum(balance, benefit)
            .ok_or(Error::AmountOverflow { account_id: account.id().clone() })?;
        Ok(Self {
            id: account.id().clone(),
            kind: account.kind().clone(),
            balance,
            benefit,
            total,
            as_of,
        })
    }

    /// Render the report as text, one line per figure, ending with a separator
    /// line.
    pub fn describe(&self, currency: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("Account number: {}\n", self.id));
        out.push_str(&format!("Balance: {} {}\n", self.balance, currency));
        out.push_str(&format!("Benefit: {} {}\n", self.benefit, currency));
        out.push_str(&format!("Balance after interest: {} {}\n", self.total, currency));
        out.push_str(SEPARATOR);
        out
    }
}
