//! Title Escrow Contract
//!
//! Multi-party escrow for the sale of tokenized real-estate titles. The
//! ledger takes custody of a title record from the seller, collects the
//! buyer's earnest deposit and the lender's financing, and settles only once
//! the inspector has passed the property and buyer, seller and lender have
//! all approved. Cancellation returns or forfeits the held funds according
//! to the configured policy.

#![no_std]

mod error;
mod events;
mod policy;
mod storage;
mod title;
mod types;

pub use error::EscrowError;
pub use policy::{cancel_beneficiary, Beneficiary};
pub use title::{TitleRegistryClient, TitleRegistryInterface};
pub use types::{CancelPolicy, DataKey, EscrowConfig, Listing, ListingStatus, SaleReadiness};

use soroban_sdk::{contract, contractimpl, token, Address, Env};

#[contract]
pub struct TitleEscrow;

#[contractimpl]
impl TitleEscrow {
    /// Fix the registry, payment asset and parties for the life of the
    /// contract.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the configuration was already written
    pub fn initialize(
        env: Env,
        title_registry: Address,
        payment_token: Address,
        seller: Address,
        inspector: Address,
        lender: Address,
        cancel_policy: CancelPolicy,
    ) -> Result<(), EscrowError> {
        if storage::has_config(&env) {
            return Err(EscrowError::AlreadyInitialized);
        }

        let config = EscrowConfig {
            title_registry,
            payment_token,
            seller,
            inspector,
            lender,
            cancel_policy,
        };
        storage::write_config(&env, &config);

        events::initialized(&env, &config);

        Ok(())
    }

    /// List title `id` for sale to `buyer`.
    ///
    /// The seller must have approved this contract on the title registry
    /// beforehand; the title is moved into escrow custody.
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the configured seller
    /// * `InvalidAmount` - If `price <= 0` or `escrow_amount` is outside `0..=price`
    /// * `ListingExists` - If `id` was listed before
    /// * `TitleTransferFailed` - If the registry refuses the transfer
    pub fn list(
        env: Env,
        caller: Address,
        id: u64,
        price: i128,
        escrow_amount: i128,
        buyer: Address,
    ) -> Result<(), EscrowError> {
        caller.require_auth();
        let config = storage::read_config(&env)?;

        if caller != config.seller {
            return Err(EscrowError::Unauthorized);
        }
        if price <= 0 || escrow_amount < 0 || escrow_amount > price {
            return Err(EscrowError::InvalidAmount);
        }
        if storage::has_listing(&env, id) {
            return Err(EscrowError::ListingExists);
        }

        title::move_title(
            &env,
            &config.title_registry,
            &caller,
            &env.current_contract_address(),
            id,
        )?;

        let listing = Listing::new(&env, id, price, escrow_amount, buyer);
        storage::write_listing(&env, &listing);

        events::listed(&env, id, &listing.buyer, price, escrow_amount);

        Ok(())
    }

    /// Deposit the buyer's earnest money for listing `id`.
    ///
    /// # Errors
    /// * `NotFound` - If `id` was never listed
    /// * `Unauthorized` - If `caller` is not the listing's buyer
    /// * `ListingClosed` - If the listing was finalized or cancelled
    /// * `InsufficientDeposit` - If `amount` is below the escrow amount
    pub fn deposit_earnest(
        env: Env,
        caller: Address,
        id: u64,
        amount: i128,
    ) -> Result<(), EscrowError> {
        caller.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::read_listing(&env, id)?;

        if caller != listing.buyer {
            return Err(EscrowError::Unauthorized);
        }
        if !listing.is_listed() {
            return Err(EscrowError::ListingClosed);
        }
        if amount < listing.escrow_amount {
            return Err(EscrowError::InsufficientDeposit);
        }

        listing.earnest = listing
            .earnest
            .checked_add(amount)
            .ok_or(EscrowError::InvalidAmount)?;

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&caller, &env.current_contract_address(), &amount);

        storage::write_listing(&env, &listing);

        events::earnest_deposited(&env, id, &caller, amount);

        Ok(())
    }

    /// Lender pays financing for listing `id` into escrow.
    ///
    /// # Errors
    /// * `NotFound` - If `id` was never listed
    /// * `Unauthorized` - If `caller` is not the configured lender
    /// * `ListingClosed` - If the listing was finalized or cancelled
    /// * `InvalidAmount` - If `amount <= 0` or it exceeds the unfunded part of the price
    pub fn fund_purchase(
        env: Env,
        caller: Address,
        id: u64,
        amount: i128,
    ) -> Result<(), EscrowError> {
        caller.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::read_listing(&env, id)?;

        if caller != config.lender {
            return Err(EscrowError::Unauthorized);
        }
        if !listing.is_listed() {
            return Err(EscrowError::ListingClosed);
        }
        // financing never pushes the listing above its price
        let shortfall = listing.purchase_price - listing.held();
        if amount <= 0 || amount > shortfall {
            return Err(EscrowError::InvalidAmount);
        }

        listing.financed += amount;

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&caller, &env.current_contract_address(), &amount);

        storage::write_listing(&env, &listing);

        events::purchase_funded(&env, id, &caller, amount);

        Ok(())
    }

    /// Record the inspection outcome. Later calls overwrite earlier ones.
    ///
    /// # Errors
    /// * `NotFound` - If `id` was never listed
    /// * `Unauthorized` - If `caller` is not the configured inspector
    /// * `ListingClosed` - If the listing was finalized or cancelled
    pub fn update_inspection_status(
        env: Env,
        caller: Address,
        id: u64,
        passed: bool,
    ) -> Result<(), EscrowError> {
        caller.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::read_listing(&env, id)?;

        if caller != config.inspector {
            return Err(EscrowError::Unauthorized);
        }
        if !listing.is_listed() {
            return Err(EscrowError::ListingClosed);
        }

        listing.inspection_passed = passed;
        storage::write_listing(&env, &listing);

        events::inspection_updated(&env, id, passed);

        Ok(())
    }

    /// Sign off on the sale as buyer, seller or lender.
    ///
    /// # Errors
    /// * `NotFound` - If `id` was never listed
    /// * `Unauthorized` - If `caller` is none of the three parties
    /// * `ListingClosed` - If the listing was finalized or cancelled
    pub fn approve_sale(env: Env, caller: Address, id: u64) -> Result<(), EscrowError> {
        caller.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::read_listing(&env, id)?;

        if caller != listing.buyer && caller != config.seller && caller != config.lender {
            return Err(EscrowError::Unauthorized);
        }
        if !listing.is_listed() {
            return Err(EscrowError::ListingClosed);
        }

        listing.approvals.set(caller.clone(), true);
        storage::write_listing(&env, &listing);

        events::sale_approved(&env, id, &caller);

        Ok(())
    }

    /// Settle listing `id`: title to the buyer, purchase price to the seller.
    /// Financing is capped at the price, so any surplus is the buyer's own
    /// earnest and goes back to the buyer.
    ///
    /// # Errors
    /// * `NotFound` - If `id` was never listed
    /// * `SaleNotReady` - If any precondition reported by `sale_readiness` is unmet
    /// * `TitleTransferFailed` - If the registry refuses the transfer
    pub fn finalize_sale(env: Env, id: u64) -> Result<(), EscrowError> {
        let config = storage::read_config(&env)?;
        let mut listing = storage::read_listing(&env, id)?;

        let token_client = token::Client::new(&env, &config.payment_token);
        let ledger = env.current_contract_address();
        let balance = token_client.balance(&ledger);

        if policy::readiness(&listing, &config.seller, &config.lender, balance)
            != SaleReadiness::Ready
        {
            return Err(EscrowError::SaleNotReady);
        }

        let surplus = listing.held() - listing.purchase_price;

        title::move_title(&env, &config.title_registry, &ledger, &listing.buyer, id)?;

        token_client.transfer(&ledger, &config.seller, &listing.purchase_price);
        if surplus > 0 {
            token_client.transfer(&ledger, &listing.buyer, &surplus);
        }

        listing.earnest = 0;
        listing.financed = 0;
        listing.status = ListingStatus::Finalized;
        listing.closed_at = env.ledger().timestamp();
        storage::write_listing(&env, &listing);

        events::sale_finalized(&env, id, &listing.buyer, listing.purchase_price);

        Ok(())
    }

    /// Abort listing `id`. The buyer's earnest goes to the party chosen by
    /// the cancel policy and lender financing goes back to the lender. The
    /// title stays in escrow custody.
    ///
    /// # Errors
    /// * `NotFound` - If `id` was never listed
    /// * `Unauthorized` - If `caller` is neither seller nor buyer
    /// * `ListingClosed` - If the listing was finalized or cancelled
    pub fn cancel_sale(env: Env, caller: Address, id: u64) -> Result<(), EscrowError> {
        caller.require_auth();
        let config = storage::read_config(&env)?;
        let mut listing = storage::read_listing(&env, id)?;

        if caller != config.seller && caller != listing.buyer {
            return Err(EscrowError::Unauthorized);
        }
        if !listing.is_listed() {
            return Err(EscrowError::ListingClosed);
        }

        let recipient = match cancel_beneficiary(config.cancel_policy, listing.inspection_passed)
        {
            Beneficiary::Buyer => listing.buyer.clone(),
            Beneficiary::Seller => config.seller.clone(),
        };
        let earnest = listing.earnest;
        let financed = listing.financed;

        let token_client = token::Client::new(&env, &config.payment_token);
        let ledger = env.current_contract_address();
        if earnest > 0 {
            token_client.transfer(&ledger, &recipient, &earnest);
        }
        if financed > 0 {
            token_client.transfer(&ledger, &config.lender, &financed);
        }

        listing.earnest = 0;
        listing.financed = 0;
        listing.status = ListingStatus::Cancelled;
        listing.closed_at = env.ledger().timestamp();
        storage::write_listing(&env, &listing);

        events::sale_cancelled(&env, id, &recipient, earnest, financed);

        Ok(())
    }

    // -- Read-only accessors ------------------------------------------------

    pub fn is_listed(env: Env, id: u64) -> Result<bool, EscrowError> {
        Ok(storage::read_listing(&env, id)?.is_listed())
    }

    pub fn purchase_price(env: Env, id: u64) -> Result<i128, EscrowError> {
        Ok(storage::read_listing(&env, id)?.purchase_price)
    }

    pub fn escrow_amount(env: Env, id: u64) -> Result<i128, EscrowError> {
        Ok(storage::read_listing(&env, id)?.escrow_amount)
    }

    pub fn buyer(env: Env, id: u64) -> Result<Address, EscrowError> {
        Ok(storage::read_listing(&env, id)?.buyer)
    }

    pub fn inspection_passed(env: Env, id: u64) -> Result<bool, EscrowError> {
        Ok(storage::read_listing(&env, id)?.inspection_passed)
    }

    pub fn approval(env: Env, id: u64, party: Address) -> Result<bool, EscrowError> {
        Ok(storage::read_listing(&env, id)?.approved_by(&party))
    }

    /// Value credited to listing `id` and not yet paid out.
    pub fn held_balance(env: Env, id: u64) -> Result<i128, EscrowError> {
        Ok(storage::read_listing(&env, id)?.held())
    }

    pub fn listing_status(env: Env, id: u64) -> Result<ListingStatus, EscrowError> {
        Ok(storage::read_listing(&env, id)?.status)
    }

    pub fn get_listing(env: Env, id: u64) -> Result<Listing, EscrowError> {
        storage::read_listing(&env, id)
    }

    /// First condition blocking `finalize_sale`, or `Ready`.
    pub fn sale_readiness(env: Env, id: u64) -> Result<SaleReadiness, EscrowError> {
        let config = storage::read_config(&env)?;
        let listing = storage::read_listing(&env, id)?;
        let balance = Self::get_balance(env)?;
        Ok(policy::readiness(
            &listing,
            &config.seller,
            &config.lender,
            balance,
        ))
    }

    /// Total payment-token balance held by the escrow across all listings.
    pub fn get_balance(env: Env) -> Result<i128, EscrowError> {
        let config = storage::read_config(&env)?;
        let token_client = token::Client::new(&env, &config.payment_token);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    pub fn config(env: Env) -> Result<EscrowConfig, EscrowError> {
        storage::read_config(&env)
    }

    pub fn title_registry(env: Env) -> Result<Address, EscrowError> {
        Ok(storage::read_config(&env)?.title_registry)
    }

    pub fn payment_token(env: Env) -> Result<Address, EscrowError> {
        Ok(storage::read_config(&env)?.payment_token)
    }

    pub fn seller(env: Env) -> Result<Address, EscrowError> {
        Ok(storage::read_config(&env)?.seller)
    }

    pub fn inspector(env: Env) -> Result<Address, EscrowError> {
        Ok(storage::read_config(&env)?.inspector)
    }

    pub fn lender(env: Env) -> Result<Address, EscrowError> {
        Ok(storage::read_config(&env)?.lender)
    }
}
