use crate::models::{
    account::{Account, AccountID, AccountKind},
    bank::Bank,
};
use rand::{SeedableRng, rngs::StdRng};
use rust_decimal::prelude::*;

pub fn id(id: u32) -> AccountID {
    AccountID::new(id)
}

pub fn make_account<D: Into<Decimal>>(id: u32, kind: AccountKind, balance: D) -> Account {
    Account::builder()
        .id(id)
        .kind(kind)
        .balance(balance.into())
        .build().unwrap()
}

/// An empty bank whose lottery draws are fixed by `seed`.
pub fn seeded_bank(seed: u64) -> Bank<StdRng> {
    Bank::with_rng(StdRng::seed_from_u64(seed))
}

/// A seeded bank holding one of each kind of account: short term #1 (2000),
/// long term #2 (3000), special #3 (4000), and current #4 (5000).
pub fn demo_bank(seed: u64) -> Bank<StdRng> {
    let mut bank = seeded_bank(seed);
    bank.create_short_term(id(1), num!(2000)).unwrap();
    bank.create_long_term(id(2), num!(3000)).unwrap();
    bank.create_special(id(3), num!(4000)).unwrap();
    bank.create_current(id(4), num!(5000)).unwrap();
    bank
}
