use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub admin: Address,
    pub token: Address,
}

/// Published once per committed donation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationAccepted {
    pub donor: Address,
    pub amount: i128,
    pub display_name: Option<String>,
    pub sequence_index: u64,
    pub funds_after: i128,
}

pub fn emit_initialized(env: &Env, admin: Address, token: Address) {
    let topics = (symbol_short!("init"),);
    let data = Initialized { admin, token };
    env.events().publish(topics, data);
}

pub fn emit_donation_accepted(env: &Env, accepted: &DonationAccepted) {
    let topics = (symbol_short!("donation"), accepted.donor.clone());
    env.events().publish(topics, accepted.clone());
}
