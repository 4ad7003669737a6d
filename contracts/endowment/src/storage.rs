// contracts/endowment/src/storage.rs
//
// Ledger store for the Endowment contract.
//
// Layout:
//   instance   DataKey::Config                → Config
//              DataKey::Funds                 → i128   (sum of every donation)
//              DataKey::DonationCount         → u64    (next sequence index)
//   persistent DataKey::Donation(index)       → Donation
//              DataKey::DonorTotal(address)   → i128   (sum of that donor's donations)
//              DataKey::DonorName(address)    → String (last supplied display name)
//
// `record_donation` is the only mutating primitive. It computes every new
// value before the first write, so a failed call leaves storage untouched.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::{
    types::{Config, Donation},
    Error,
};

const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_BUMP_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Funds,
    DonationCount,
    Donation(u64),
    DonorTotal(Address),
    DonorName(Address),
}

// ─────────────────────────────────────────────────────────
// TTL
// ─────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Load the contract configuration. Fails with `Error::NotInitialized` before `init`.
pub fn load_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

// ─────────────────────────────────────────────────────────
// Read accessors
// ─────────────────────────────────────────────────────────

/// Aggregate of every accepted donation. 0 on an empty ledger.
pub fn get_funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Funds)
        .unwrap_or(0)
}

/// Number of donation records ever appended; also the next sequence index.
pub fn get_donation_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::DonationCount)
        .unwrap_or(0)
}

/// Load the donation record at `index`. Fails with `Error::OutOfRange` if
/// that index was never assigned.
pub fn get_donation(env: &Env, index: u64) -> Result<Donation, Error> {
    let key = DataKey::Donation(index);
    let donation: Donation = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::OutOfRange)?;
    bump_persistent(env, &key);
    Ok(donation)
}

/// Sum of `donor`'s accepted donations. Returns 0 for an address that never donated.
pub fn get_donor_total(env: &Env, donor: &Address) -> i128 {
    let key = DataKey::DonorTotal(donor.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(total) => {
            bump_persistent(env, &key);
            total
        }
        None => 0,
    }
}

/// Last display name supplied by `donor`, if any.
pub fn get_donor_name(env: &Env, donor: &Address) -> Option<String> {
    let key = DataKey::DonorName(donor.clone());
    let name: Option<String> = env.storage().persistent().get(&key);
    if name.is_some() {
        bump_persistent(env, &key);
    }
    name
}

// ─────────────────────────────────────────────────────────
// Mutation
// ─────────────────────────────────────────────────────────

/// Aggregates after adding `amount` for `donor`: (funds, donor total).
/// Fails with `Error::Overflow` if either would exceed `i128::MAX`. Reads only.
pub fn checked_totals(env: &Env, donor: &Address, amount: i128) -> Result<(i128, i128), Error> {
    let funds = get_funds(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let donor_total = get_donor_total(env, donor)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    Ok((funds, donor_total))
}

/// Append a donation record and fold `amount` into the aggregates.
///
/// Effects, all or nothing:
///   1. `Donation { amount, donor, sequence_index }` stored at the next index
///   2. funds += amount
///   3. donor total += amount (entry created if absent)
///   4. donor name overwritten when `display_name` is `Some`
///
/// Returns the assigned sequence index. Any addition that would overflow
/// fails with `Error::Overflow` and nothing is written.
pub fn record_donation(
    env: &Env,
    donor: &Address,
    amount: i128,
    display_name: Option<&String>,
) -> Result<u64, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let sequence_index = get_donation_count(env);
    let next_count = sequence_index.checked_add(1).ok_or(Error::Overflow)?;
    let (funds, donor_total) = checked_totals(env, donor, amount)?;

    let donation_key = DataKey::Donation(sequence_index);
    let donation = Donation {
        amount,
        donor: donor.clone(),
        sequence_index,
    };
    let persistent = env.storage().persistent();
    persistent.set(&donation_key, &donation);
    bump_persistent(env, &donation_key);

    let total_key = DataKey::DonorTotal(donor.clone());
    persistent.set(&total_key, &donor_total);
    bump_persistent(env, &total_key);

    if let Some(name) = display_name {
        let name_key = DataKey::DonorName(donor.clone());
        persistent.set(&name_key, name);
        bump_persistent(env, &name_key);
    }

    let instance = env.storage().instance();
    instance.set(&DataKey::Funds, &funds);
    instance.set(&DataKey::DonationCount, &next_count);
    bump_instance(env);

    Ok(sequence_index)
}
