//! Endpoint wrappers, one module per API domain.
//!
//! Each module adds an `impl` block to [`TorusClient`](crate::api::TorusClient),
//! so every endpoint is a method on the one client.

pub mod bank;
pub mod beneficiary;
pub mod card;
pub mod currency_swap;
pub mod customer;
pub mod deposit;
pub mod kyc;
pub mod payment_card;
pub mod payout;
pub mod transaction;
pub mod transfer;
pub mod wallet;
pub mod yield_offering;
pub mod withdrawal;
