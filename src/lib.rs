//! A small bank: four kinds of interest-bearing account, a registry that owns
//! them, and a lottery among the special accounts.
//!
//! Everything goes through [Bank]:
//!
//! ```
//! use interest_bank::{AccountID, Bank, num};
//!
//! let mut bank = Bank::new();
//! let id = bank.create_short_term(AccountID::new(1), num!(2000)).unwrap();
//! bank.deposit(id, num!(1000)).unwrap();
//! bank.set_current_date(15, 5, 2023).unwrap();
//! let report = bank.show_account(id).unwrap();
//! assert_eq!(report.balance(), &num!(3000));
//! assert_eq!(report.benefit(), &num!(14.00));
//! ```
//!
//! All money is `rust_decimal::Decimal`. Benefits are never stored; they are
//! worked out from the balance each time a report is made.

pub mod error;
#[macro_use]
pub mod util;
pub mod models;
pub mod report;
pub mod system;

pub use crate::{
    error::{Error, Result},
    models::{
        Op,
        Receipt,
        account::{Account, AccountID, AccountKind},
        bank::Bank,
    },
    report::AccountReport,
    system::parameters::{BankParameters, DayCount},
};
