// contracts/endowment/src/donation.rs
//
// Donation processor: validates a donation request, applies it to the
// ledger store and publishes the resulting `DonationAccepted` event.
//
// Calls are not idempotent. Two identical requests move value twice and are
// recorded as two donations.

use soroban_sdk::{log, Address, Env, String};

use crate::{
    events::{emit_donation_accepted, DonationAccepted},
    storage, Error,
};

/// Check a donation request without touching storage.
///
/// Order matters: a non-positive amount is reported as `InvalidAmount` even
/// when the transferred value also disagrees.
pub fn validate(amount: i128, transferred_value: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if transferred_value != amount {
        return Err(Error::ValueMismatch);
    }
    Ok(())
}

/// Validate and record one donation.
///
/// `transferred_value` is what the settlement layer actually moved into the
/// endowment during this invocation. On error nothing is recorded and no
/// event is published.
pub fn process(
    env: &Env,
    donor: &Address,
    amount: i128,
    transferred_value: i128,
    display_name: Option<String>,
) -> Result<DonationAccepted, Error> {
    validate(amount, transferred_value)?;

    let sequence_index = storage::record_donation(env, donor, amount, display_name.as_ref())?;
    let funds_after = storage::get_funds(env);

    let accepted = DonationAccepted {
        donor: donor.clone(),
        amount,
        display_name,
        sequence_index,
        funds_after,
    };
    emit_donation_accepted(env, &accepted);

    log!(env, "donation accepted", sequence_index, amount, funds_after);

    Ok(accepted)
}
