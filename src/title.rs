//! Client side of the external title registry.

use soroban_sdk::{contractclient, Address, Env};

use crate::error::EscrowError;

/// Ownership primitives the ledger expects from a title registry.
#[contractclient(name = "TitleRegistryClient")]
pub trait TitleRegistryInterface {
    fn owner_of(env: Env, id: u64) -> Address;
    fn approve(env: Env, owner: Address, spender: Address, id: u64);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: u64);
}

/// Moves title `id` from `from` to `to` with the ledger acting as spender,
/// then confirms the registry reports `to` as the new owner.
pub fn move_title(
    env: &Env,
    registry: &Address,
    from: &Address,
    to: &Address,
    id: u64,
) -> Result<(), EscrowError> {
    let client = TitleRegistryClient::new(env, registry);
    let spender = env.current_contract_address();

    match client.try_transfer_from(&spender, from, to, &id) {
        Ok(Ok(())) => {}
        _ => return Err(EscrowError::TitleTransferFailed),
    }

    match client.try_owner_of(&id) {
        Ok(Ok(owner)) if owner == *to => Ok(()),
        _ => Err(EscrowError::TitleTransferFailed),
    }
}
