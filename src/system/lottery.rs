//! The sortition: a draw held among the bank's special accounts, where one
//! account is picked uniformly at random as the winner.
//!
//! The random source is always passed in, so a seeded or mock generator gives
//! a reproducible winner.

use crate::{
    error::{Error, Result},
    models::account::{Account, AccountID, AccountKind},
};
use log::{debug, info};
use rand::Rng;

/// Whether an account gets a ticket in the draw.
pub fn is_eligible(account: &Account) -> bool {
    account.kind() == &AccountKind::Special
}

/// Pick a winner among the special accounts in `accounts`. Fails with
/// `NoEligibleAccounts` if there aren't any.
pub fn draw<'a, I, R>(accounts: I, rng: &mut R) -> Result<AccountID>
    where I: IntoIterator<Item = &'a Account>,
          R: Rng,
{
    let eligible = accounts.into_iter()
        .filter(|account| is_eligible(account))
        .collect::<Vec<_>>();
    if eligible.is_empty() {
        Err(Error::NoEligibleAccounts)?;
    }
    debug!("lottery: drawing among {} special accounts", eligible.len());
    let winner = eligible[rng.gen_range(0..eligible.len())].id().clone();
    info!("lottery: winning account number is {}", winner);
    Ok(winner)
}
