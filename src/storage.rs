use soroban_sdk::Env;

use crate::error::EscrowError;
use crate::types::{DataKey, EscrowConfig, Listing};

const DAY_IN_LEDGERS: u32 = 17_280;

// Entries are topped up whenever less than a day short of the target.
pub(crate) const LISTING_TTL_EXTEND_TO: u32 = 2_000_000;
const LISTING_TTL_THRESHOLD: u32 = LISTING_TTL_EXTEND_TO - DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_EXTEND_TO: u32 = 2_000_000;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_EXTEND_TO - DAY_IN_LEDGERS;

/// Keeps the configuration alive as long as the escrow is in use.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<EscrowConfig, EscrowError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(EscrowError::NotInitialized)
}

pub fn write_config(env: &Env, config: &EscrowConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn has_listing(env: &Env, title_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Listing(title_id))
}

pub fn read_listing(env: &Env, title_id: u64) -> Result<Listing, EscrowError> {
    env.storage()
        .persistent()
        .get(&DataKey::Listing(title_id))
        .ok_or(EscrowError::NotFound)
}

pub fn write_listing(env: &Env, listing: &Listing) {
    let key = DataKey::Listing(listing.title_id);
    env.storage().persistent().set(&key, listing);
    env.storage()
        .persistent()
        .extend_ttl(&key, LISTING_TTL_THRESHOLD, LISTING_TTL_EXTEND_TO);
    extend_instance(env);
}
