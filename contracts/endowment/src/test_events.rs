use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal, Val, Vec,
};

use crate::events::{DonationAccepted, Initialized};
use crate::{Endowment, EndowmentClient, Error};

fn setup() -> (Env, EndowmentClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Endowment, ());
    let client = EndowmentClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    client.init(&admin, &token);

    (env, client, admin, token)
}

/// Events published by the endowment itself, ignoring the token contract's.
fn endowment_events(env: &Env, contract: &Address) -> std::vec::Vec<(Vec<Val>, Val)> {
    env.events()
        .all()
        .iter()
        .filter(|(addr, _, _)| addr == contract)
        .map(|(_, topics, data)| (topics, data))
        .collect()
}

fn donation_events(env: &Env, contract: &Address) -> usize {
    let topic: Val = symbol_short!("donation").into_val(env);
    endowment_events(env, contract)
        .iter()
        .filter(|(topics, _)| {
            topics
                .first()
                .map(|t| t.shallow_eq(&topic))
                .unwrap_or(false)
        })
        .count()
}

#[test]
fn test_initialized_event() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Endowment, ());
    let client = EndowmentClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();

    client.init(&admin, &token);

    let events = endowment_events(&env, &client.address);
    let (topics, data) = events.last().expect("No events found").clone();
    assert_eq!(topics, vec![&env, symbol_short!("init").into_val(&env)]);

    let event_data: Initialized = data.try_into_val(&env).unwrap();
    assert_eq!(event_data, Initialized { admin, token });
}

#[test]
fn test_donation_accepted_event() {
    let (env, client, _, token) = setup();
    let donor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&donor, &100);
    let display_name = Some(String::from_str(&env, "Alice"));

    let accepted = client.donate(&donor, &40, &display_name);

    let events = endowment_events(&env, &client.address);
    let (topics, data) = events.last().expect("No events found").clone();

    // Topic: (symbol_short!("donation"), donor)
    let expected_topics = vec![
        &env,
        symbol_short!("donation").into_val(&env),
        donor.into_val(&env),
    ];
    assert_eq!(topics, expected_topics);

    // Data: DonationAccepted struct, identical to the returned value
    let event_data: DonationAccepted = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationAccepted {
            donor: donor.clone(),
            amount: 40,
            display_name,
            sequence_index: 0,
            funds_after: 40,
        }
    );
    assert_eq!(event_data, accepted);
    assert_eq!(donation_events(&env, &client.address), 1);
}

#[test]
fn test_anonymous_donation_event_has_no_name() {
    let (env, client, _, token) = setup();
    let donor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&donor, &100);

    client.donate(&donor, &10, &None);

    let events = endowment_events(&env, &client.address);
    let (_, data) = events.last().expect("No events found").clone();
    let event_data: DonationAccepted = data.try_into_val(&env).unwrap();
    assert_eq!(event_data.display_name, None);
    assert_eq!(event_data.amount, 10);
}

#[test]
fn test_rejected_donation_emits_nothing() {
    let (env, client, _, token) = setup();
    let donor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&donor, &100);

    assert_eq!(
        client.try_donate(&donor, &0, &None),
        Err(Ok(Error::InvalidAmount))
    );

    assert_eq!(donation_events(&env, &client.address), 0);
}
