#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env, String};

mod donation;
mod events;
mod storage;
mod types;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test_events;

pub use events::{DonationAccepted, Initialized};
pub use types::{Config, Donation};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    ValueMismatch = 4,
    Overflow = 5,
    OutOfRange = 6,
}

#[contract]
pub struct Endowment;

#[contractimpl]
impl Endowment {
    /// Configure the endowment.
    ///
    /// - `admin` must authorize the call.
    /// - `token` is the SAC token donations are settled in.
    ///
    /// Fails with `AlreadyInitialized` on a second call.
    pub fn init(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::save_config(
            &env,
            &Config {
                admin: admin.clone(),
                token: token.clone(),
            },
        );
        storage::bump_instance(&env);

        log!(&env, "endowment initialized", admin, token);
        events::emit_initialized(&env, admin, token);
        Ok(())
    }

    /// Donate `amount` of the configured token.
    ///
    /// - `donor` must authorize the call; the tokens move from `donor` to this contract.
    /// - `display_name`, when supplied, replaces the donor's stored name.
    ///   Passing `None` keeps whatever name was set before.
    ///
    /// The value credited is checked against what actually arrived in the
    /// contract's balance. Any error fails the whole invocation, including
    /// the token transfer.
    pub fn donate(
        env: Env,
        donor: Address,
        amount: i128,
        display_name: Option<String>,
    ) -> Result<DonationAccepted, Error> {
        let config = storage::load_config(&env)?;
        donor.require_auth();

        // Reject bad requests before moving any value.
        donation::validate(amount, amount)?;
        storage::checked_totals(&env, &donor, amount)?;

        let token_client = token::Client::new(&env, &config.token);
        let custody = env.current_contract_address();
        let before = token_client.balance(&custody);
        token_client.transfer(&donor, &custody, &amount);
        let after = token_client.balance(&custody);
        // A shrinking custody balance surfaces as a mismatch in `process`.
        let transferred_value = after.checked_sub(before).ok_or(Error::ValueMismatch)?;

        donation::process(&env, &donor, amount, transferred_value, display_name)
    }

    /// Sum of every accepted donation.
    pub fn get_funds(env: Env) -> i128 {
        storage::get_funds(&env)
    }

    /// Donation record at `index`. Fails with `OutOfRange` for an unassigned index.
    pub fn get_donation(env: Env, index: u64) -> Result<Donation, Error> {
        storage::get_donation(&env, index)
    }

    /// Number of donations recorded so far.
    pub fn donation_count(env: Env) -> u64 {
        storage::get_donation_count(&env)
    }

    /// Sum of `donor`'s donations; 0 if they never donated.
    pub fn get_donor_total(env: Env, donor: Address) -> i128 {
        storage::get_donor_total(&env, &donor)
    }

    pub fn get_donor_name(env: Env, donor: Address) -> Option<String> {
        storage::get_donor_name(&env, &donor)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::load_config(&env)
    }
}
