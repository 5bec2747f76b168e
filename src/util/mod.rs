//! A set of utility structs and functions used when operating the bank.

#[macro_use]
pub mod number;
pub mod time;

#[cfg(test)]
#[macro_use]
pub(crate) mod test;
