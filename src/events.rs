use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::EscrowConfig;

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const LISTED: Symbol = symbol_short!("listed");
pub const EARNEST: Symbol = symbol_short!("earnest");
pub const FUNDED: Symbol = symbol_short!("funded");
pub const INSPECTED: Symbol = symbol_short!("inspect");
pub const APPROVED: Symbol = symbol_short!("approved");
pub const FINALIZED: Symbol = symbol_short!("final");
pub const CANCELLED: Symbol = symbol_short!("cancel");

pub fn initialized(env: &Env, config: &EscrowConfig) {
    env.events().publish(
        (INITIALIZED,),
        (
            config.title_registry.clone(),
            config.payment_token.clone(),
            config.seller.clone(),
            config.inspector.clone(),
            config.lender.clone(),
            config.cancel_policy,
        ),
    );
}

pub fn listed(env: &Env, id: u64, buyer: &Address, price: i128, escrow_amount: i128) {
    env.events()
        .publish((LISTED, id), (buyer.clone(), price, escrow_amount));
}

pub fn earnest_deposited(env: &Env, id: u64, buyer: &Address, amount: i128) {
    env.events().publish((EARNEST, id), (buyer.clone(), amount));
}

pub fn purchase_funded(env: &Env, id: u64, lender: &Address, amount: i128) {
    env.events().publish((FUNDED, id), (lender.clone(), amount));
}

pub fn inspection_updated(env: &Env, id: u64, passed: bool) {
    env.events().publish((INSPECTED, id), (passed,));
}

pub fn sale_approved(env: &Env, id: u64, party: &Address) {
    env.events().publish((APPROVED, id), (party.clone(),));
}

pub fn sale_finalized(env: &Env, id: u64, buyer: &Address, price: i128) {
    env.events()
        .publish((FINALIZED, id), (buyer.clone(), price));
}

pub fn sale_cancelled(env: &Env, id: u64, recipient: &Address, earnest: i128, financed: i128) {
    env.events()
        .publish((CANCELLED, id), (recipient.clone(), earnest, financed));
}
