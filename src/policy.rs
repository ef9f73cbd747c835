//! Settlement rules that do not touch storage.

use crate::types::{CancelPolicy, Listing, SaleReadiness};
use soroban_sdk::Address;

/// Party that receives the held balance on cancellation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Beneficiary {
    Buyer,
    Seller,
}

pub fn cancel_beneficiary(policy: CancelPolicy, inspection_passed: bool) -> Beneficiary {
    match policy {
        CancelPolicy::InspectionGated if inspection_passed => Beneficiary::Seller,
        CancelPolicy::InspectionGated => Beneficiary::Buyer,
        CancelPolicy::RefundBuyer => Beneficiary::Buyer,
        CancelPolicy::ForfeitToSeller => Beneficiary::Seller,
    }
}

/// Evaluates finalize preconditions in a fixed order and reports the first
/// one that fails. `ledger_balance` is the escrow's total token balance.
pub fn readiness(
    listing: &Listing,
    seller: &Address,
    lender: &Address,
    ledger_balance: i128,
) -> SaleReadiness {
    if !listing.is_listed() {
        return SaleReadiness::NotListed;
    }
    if !listing.inspection_passed {
        return SaleReadiness::InspectionPending;
    }
    if !listing.approved_by(&listing.buyer) {
        return SaleReadiness::BuyerApprovalMissing;
    }
    if !listing.approved_by(seller) {
        return SaleReadiness::SellerApprovalMissing;
    }
    if !listing.approved_by(lender) {
        return SaleReadiness::LenderApprovalMissing;
    }
    if listing.held() < listing.purchase_price || ledger_balance < listing.purchase_price {
        return SaleReadiness::Underfunded;
    }
    SaleReadiness::Ready
}
