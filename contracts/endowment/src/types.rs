// contracts/endowment/src/types.rs
//
// Records owned by the ledger store.
//
// A `Donation` is written once under DataKey::Donation(sequence_index) and is
// never mutated or removed afterwards. Per-donor aggregates (total, display
// name) live under their own keys so a record stays a fixed size no matter
// how many times the donor gives.

use soroban_sdk::{contracttype, Address};

/// A single accepted donation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    /// Amount moved into the endowment, in the token's smallest unit.
    pub amount: i128,
    /// Address that authorized the donation.
    pub donor: Address,
    /// Position in arrival order, starting at 0.
    pub sequence_index: u64,
}

/// Contract configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Address that initialized the endowment.
    pub admin: Address,
    /// SAC token address donations are settled in.
    pub token: Address,
}
