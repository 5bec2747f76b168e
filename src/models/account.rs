//! Accounts hold a balance and, depending on their kind, earn a benefit
//! (interest) on it. There are four kinds of account and the set is closed:
//! short term, long term, special, and current.
//!
//! The benefit is never stored. It's projected from the balance whenever it's
//! asked for, using the kind's annual rate and the number of days between the
//! bank's epoch and the date it's being asked about.

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{Op, Receipt},
    system::parameters::DayCount,
    util::{number, time},
};
use log::info;
use rust_decimal::prelude::*;
use serde::{Serialize, Deserialize};
use std::fmt;

/// The day count the annual rate is spread over.
pub const DAYS_PER_YEAR: i64 = 365;

/// The kinds of account the bank offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    #[serde(rename = "short_term")]
    ShortTerm,
    #[serde(rename = "long_term")]
    LongTerm,
    #[serde(rename = "special")]
    Special,
    #[serde(rename = "current")]
    Current,
}

impl AccountKind {
    /// The yearly benefit rate, as a fraction (0.17 == 17%).
    pub fn annual_rate(&self) -> Decimal {
        match self {
            AccountKind::ShortTerm => num!(0.17),
            AccountKind::LongTerm => num!(0.24),
            AccountKind::Special => num!(0.12),
            AccountKind::Current => Decimal::zero(),
        }
    }

    /// The smallest opening balance this kind of account accepts, if any.
    pub fn minimum_balance(&self) -> Option<Decimal> {
        match self {
            AccountKind::ShortTerm => Some(num!(1000)),
            AccountKind::LongTerm => Some(num!(1500)),
            AccountKind::Special | AccountKind::Current => None,
        }
    }

    /// Whether this kind of account earns anything at all.
    pub fn earns_benefit(&self) -> bool {
        match self {
            AccountKind::Current => false,
            _ => true,
        }
    }

    /// Human-readable name, capitalized for the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            AccountKind::ShortTerm => "Short term",
            AccountKind::LongTerm => "Long term",
            AccountKind::Special => "Special",
            AccountKind::Current => "Current",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountKind::ShortTerm => "short-term",
            AccountKind::LongTerm => "long-term",
            AccountKind::Special => "special",
            AccountKind::Current => "current",
        };
        f.write_str(name)
    }
}

bank_model! {
    /// A single bank account. Accounts are opened through
    /// [Bank](../bank/struct.Bank.html), which checks ids, opening balances and
    /// minimums; there's no public way to build one directly.
    pub struct Account {
        id: <<AccountID>>,
        /// What kind of account this is. Decides the benefit rate.
        kind: AccountKind,
        /// The account's balance. Only ever changed by deposits and
        /// withdrawals.
        #[getset(set = "pub(crate)")]
        balance: Decimal,
    }
    AccountBuilder
}

fn ensure_non_negative(account_id: &AccountID, amount: &Decimal) -> Result<()> {
    if amount < &Decimal::zero() {
        Err(Error::NegativeAmount { account_id: account_id.clone(), amount: amount.clone() })?;
    }
    Ok(())
}

impl Account {
    /// Open a new account. Fails if the opening balance is negative or below
    /// the kind's minimum, in which case nothing is created.
    pub(crate) fn open(id: AccountID, kind: AccountKind, balance: Decimal) -> Result<Self> {
        ensure_non_negative(&id, &balance)?;
        if let Some(minimum) = kind.minimum_balance() {
            if balance < minimum {
                Err(Error::BelowMinimumBalance { kind, minimum, balance })?;
            }
        }
        Self::builder()
            .id(id)
            .kind(kind)
            .balance(balance)
            .build()
            .map_err(Error::BuilderFailed)
    }

    /// Add money to the account. Negative amounts are rejected rather than
    /// quietly draining the balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Receipt> {
        ensure_non_negative(self.id(), &amount)?;
        let new_balance = self.balance().checked_add(amount)
            .ok_or(Error::AmountOverflow { account_id: self.id().clone() })?;
        self.set_balance(new_balance);
        info!("account {}: deposited {}, new balance {}", self.id(), amount, self.balance());
        Ok(Receipt::new(Op::Deposit, self.id().clone(), amount, new_balance))
    }

    /// Take money out of the account. If the balance doesn't cover the amount
    /// the account is left untouched and `InsufficientBalance` is returned.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Receipt> {
        ensure_non_negative(self.id(), &amount)?;
        if self.balance() < &amount {
            Err(Error::InsufficientBalance {
                account_id: self.id().clone(),
                balance: self.balance().clone(),
                requested: amount,
            })?;
        }
        let new_balance = self.balance().clone() - amount;
        self.set_balance(new_balance);
        info!("account {}: withdrew {}, new balance {}", self.id(), amount, self.balance());
        Ok(Receipt::new(Op::Withdraw, self.id().clone(), amount, new_balance))
    }

    /// The benefit this account has earned as of the given date, counted from
    /// the default epoch using day-of-year arithmetic.
    ///
    /// Note that day-of-year arithmetic is wrong across year boundaries (see
    /// [DayCount::DayOfYear]). Use [Account::calculate_benefit_with] with
    /// [DayCount::Elapsed] for a true day count.
    pub fn calculate_benefit(&self, as_of: &NaiveDate) -> Result<Decimal> {
        self.calculate_benefit_with(as_of, &time::epoch(), DayCount::DayOfYear)
    }

    /// The benefit this account has earned between `epoch` and `as_of`.
    ///
    /// The per-day benefit is `balance * rate / 365` rounded half-up to two
    /// places, and the result is that per-day figure times the number of days
    /// (not rounded again). Current accounts always get zero.
    ///
    /// Fails with `AmountOverflow` if the figure doesn't fit in a `Decimal`
    /// (huge balances over a huge number of days).
    pub fn calculate_benefit_with(&self, as_of: &NaiveDate, epoch: &NaiveDate, day_count: DayCount) -> Result<Decimal> {
        if !self.kind().earns_benefit() {
            return Ok(Decimal::zero());
        }
        let overflow = || Error::AmountOverflow { account_id: self.id().clone() };
        let days = day_count.days_between(epoch, as_of);
        let yearly = self.balance().checked_mul(self.kind().annual_rate()).ok_or_else(overflow)?;
        let daily = number::round_half_up(yearly / Decimal::from(DAYS_PER_YEAR));
        let mut benefit = daily.checked_mul(Decimal::from(days)).ok_or_else(overflow)?;
        benefit.rescale(number::CURRENCY_DP);
        Ok(benefit)
    }
}
