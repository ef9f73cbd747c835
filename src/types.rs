use soroban_sdk::{contracttype, Address, Env, Map};

/// Who receives a listing's held balance when the sale is cancelled.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CancelPolicy {
    /// Refund the buyer unless the property passed inspection, in which
    /// case the deposit is forfeited to the seller.
    InspectionGated = 0,
    RefundBuyer = 1,
    ForfeitToSeller = 2,
}

/// Process-wide configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub title_registry: Address,
    pub payment_token: Address,
    pub seller: Address,
    pub inspector: Address,
    pub lender: Address,
    pub cancel_policy: CancelPolicy,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListingStatus {
    Listed = 0,
    Finalized = 1,
    Cancelled = 2,
}

/// One escrow-tracked sale offer for a single title record.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Listing {
    pub title_id: u64,
    pub status: ListingStatus,
    pub purchase_price: i128,
    pub escrow_amount: i128,
    pub buyer: Address,
    pub inspection_passed: bool,
    /// Per-party sign-off. A missing entry reads as `false`.
    pub approvals: Map<Address, bool>,
    /// Buyer deposits credited to this listing and not yet paid out.
    pub earnest: i128,
    /// Lender financing credited to this listing and not yet paid out.
    pub financed: i128,
    pub listed_at: u64,
    pub closed_at: u64,
}

impl Listing {
    pub fn new(
        env: &Env,
        title_id: u64,
        purchase_price: i128,
        escrow_amount: i128,
        buyer: Address,
    ) -> Self {
        Self {
            title_id,
            status: ListingStatus::Listed,
            purchase_price,
            escrow_amount,
            buyer,
            inspection_passed: false,
            approvals: Map::new(env),
            earnest: 0,
            financed: 0,
            listed_at: env.ledger().timestamp(),
            closed_at: 0,
        }
    }

    pub fn is_listed(&self) -> bool {
        self.status == ListingStatus::Listed
    }

    /// Value credited to this listing and not yet paid out.
    pub fn held(&self) -> i128 {
        self.earnest + self.financed
    }

    pub fn approved_by(&self, party: &Address) -> bool {
        self.approvals.get(party.clone()).unwrap_or(false)
    }
}

/// First unmet condition standing between a listing and settlement.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleReadiness {
    Ready = 0,
    NotListed = 1,
    InspectionPending = 2,
    BuyerApprovalMissing = 3,
    SellerApprovalMissing = 4,
    LenderApprovalMissing = 5,
    Underfunded = 6,
}

/// Storage keys for contract data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Escrow configuration, instance storage
    Config,
    /// Listing keyed by title-record id, persistent storage
    Listing(u64),
}
