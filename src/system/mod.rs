//! Bank-wide behavior that isn't tied to one account: the parameters the bank
//! runs under and the lottery it holds among its special accounts.

pub mod lottery;
pub mod parameters;
