//! The bank is the registry that owns every account. All account creation and
//! every balance-affecting operation goes through it, and it's what reports
//! benefits as of its own notion of the current date.
//!
//! Accounts are kept in creation order and looked up by a linear scan; a bank
//! only ever holds a handful of them.

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{
        Receipt,
        account::{Account, AccountID, AccountKind},
    },
    report::AccountReport,
    system::{
        lottery,
        parameters::BankParameters,
    },
    util::time,
};
use getset::Getters;
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;

/// The bank registry. `R` is the random source used for the lottery.
#[derive(Debug, Getters)]
pub struct Bank<R = StdRng> {
    /// All accounts, in the order they were created
    #[getset(get = "pub")]
    accounts: Vec<Account>,
    /// The date benefits are reported as of
    #[getset(get = "pub")]
    current_date: NaiveDate,
    /// Bank-wide parameters
    #[getset(get = "pub")]
    parameters: BankParameters,
    rng: R,
}

impl Bank<StdRng> {
    /// Create an empty bank with default parameters and an entropy-seeded
    /// lottery.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Bank<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Bank<R> {
    /// Create an empty bank with default parameters, drawing lotteries with the
    /// given random source.
    pub fn with_rng(rng: R) -> Self {
        Self::with_parameters(BankParameters::default(), rng)
    }

    /// Create an empty bank. The current date starts at the parameters' epoch.
    pub fn with_parameters(parameters: BankParameters, rng: R) -> Self {
        Self {
            accounts: Vec::new(),
            current_date: parameters.epoch().clone(),
            parameters,
            rng,
        }
    }

    /// Set the date benefits are reported as of.
    pub fn set_current_date(&mut self, day: u32, month: u32, year: i32) -> Result<()> {
        self.current_date = time::date(day, month, year)?;
        debug!("bank: current date set to {}", self.current_date);
        Ok(())
    }

    /// Open a short term account. Needs at least 1000 to open.
    pub fn create_short_term(&mut self, id: AccountID, balance: Decimal) -> Result<AccountID> {
        self.create(AccountKind::ShortTerm, id, balance)
    }

    /// Open a long term account. Needs at least 1500 to open.
    pub fn create_long_term(&mut self, id: AccountID, balance: Decimal) -> Result<AccountID> {
        self.create(AccountKind::LongTerm, id, balance)
    }

    /// Open a special account, which takes part in the lottery.
    pub fn create_special(&mut self, id: AccountID, balance: Decimal) -> Result<AccountID> {
        self.create(AccountKind::Special, id, balance)
    }

    /// Open a current account, which earns nothing.
    pub fn create_current(&mut self, id: AccountID, balance: Decimal) -> Result<AccountID> {
        self.create(AccountKind::Current, id, balance)
    }

    /// Open an account of any kind. The id must not already be in use, the
    /// balance can't be negative, and the kind's minimum balance applies.
    pub fn create(&mut self, kind: AccountKind, id: AccountID, balance: Decimal) -> Result<AccountID> {
        if self.find(&id).is_some() {
            Err(Error::DuplicateAccount(id))?;
        }
        let account = Account::open(id, kind, balance)?;
        self.accounts.push(account);
        info!("bank: {} account created. Account number: {}", kind.title(), id);
        Ok(id)
    }

    /// Deposit into the account with the given id.
    pub fn deposit(&mut self, id: AccountID, amount: Decimal) -> Result<Receipt> {
        self.account_mut(id)?.deposit(amount)
    }

    /// Withdraw from the account with the given id.
    pub fn withdraw(&mut self, id: AccountID, amount: Decimal) -> Result<Receipt> {
        self.account_mut(id)?.withdraw(amount)
    }

    /// Look up an account.
    pub fn account(&self, id: AccountID) -> Result<&Account> {
        self.find(&id).ok_or(Error::AccountNotFound(id))
    }

    /// The benefit an account has earned as of the bank's current date.
    pub fn benefit(&self, account: &Account) -> Result<Decimal> {
        account.calculate_benefit_with(&self.current_date, self.parameters.epoch(), self.parameters.day_count().clone())
    }

    /// Report on one account's balance and benefit as of the current date.
    pub fn show_account(&self, id: AccountID) -> Result<AccountReport> {
        let account = self.account(id)?;
        self.report(account)
    }

    /// Report on every account, in creation order. Fails if any one account's
    /// figures are out of range.
    pub fn get_all_accounts(&self) -> Result<Vec<AccountReport>> {
        self.accounts.iter()
            .map(|account| self.report(account))
            .collect()
    }

    /// Every account id, in creation order.
    pub fn list_account_ids(&self) -> Vec<AccountID> {
        self.accounts.iter()
            .map(|account| account.id().clone())
            .collect()
    }

    /// Draw a lottery winner among the special accounts.
    pub fn sortition(&mut self) -> Result<AccountID> {
        lottery::draw(&self.accounts, &mut self.rng)
    }

    fn report(&self, account: &Account) -> Result<AccountReport> {
        AccountReport::new(account, self.benefit(account)?, self.current_date.clone())
    }

    fn find(&self, id: &AccountID) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    fn account_mut(&mut self, id: AccountID) -> Result<&mut Account> {
        self.accounts.iter_mut()
            .find(|account| account.id() == &id)
            .ok_or(Error::AccountNotFound(id))
    }
}
