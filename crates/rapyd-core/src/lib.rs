//! # rapyd-core
//!
//! Typed data model and endpoint definitions for the Rapyd REST API.
//!
//! This crate provides:
//! - `Endpoint` trait: the uniform contract every API operation conforms to
//! - `Amount`: the mixed integer/decimal-string monetary codec
//! - `Response` envelope with the status block every response carries
//! - The schema catalog: checkout pages, payments, wallets, payouts, webhooks
//! - `RapydError` for typed error handling
//!
//! No I/O happens here; everything is a pure transformation from params to
//! path, input value to serialized body, or response body to typed value.
//! The HTTP transport and request signing live in `rapyd-client`.
//!
//! ## Example
//!
//! ```rust
//! use rapyd_core::{Amount, CheckoutPage, CreateCheckoutPage, Endpoint, Empty, Method};
//!
//! let page = CheckoutPage::new(Amount::new(100.0), "US", "USD")
//!     .with_ewallet("ewallet_16a7d52901c805bc41284d0fcf0caa61");
//!
//! assert_eq!(CreateCheckoutPage::path(&Empty).unwrap(), "checkout");
//! assert_eq!(CreateCheckoutPage::METHOD, Method::Post);
//! let body = serde_json::to_string(&page).unwrap();
//! ```

pub mod amount;
pub mod collect;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod payout;
pub mod wallet;
pub mod webhook;

// Re-exports for convenience
pub use amount::Amount;
pub use collect::{
    CartItem, CheckoutPage, Country, CountryCurrencyParams, CreateCheckoutPage, GetCheckoutPage,
    GetCountries, GetCurrencyCapabilities, GetPaymentMethods, PageStatus, Payment,
    PaymentMethod, PaymentMethodData,
};
pub use endpoint::{Empty, Endpoint, Method, QueryString};
pub use envelope::{Response, Status, StatusKind};
pub use error::{RapydError, RapydResult};
pub use payout::{
    AmountRange, BankAccountType, CreatePayout, CreatePayoutRequest, EntityType,
    GetPayoutMethodTypes, GetPayoutRequiredFields, PayoutBeneficiary, PayoutCategory,
    PayoutMethod, PayoutMethodType, PayoutMethodTypesParams, PayoutSender, RequiredFieldsParams,
};
pub use wallet::{
    BankAccount, GetWallet, GetWalletTransactions, ListVirtualAccounts, Transaction,
    TransactionType, VirtualAccounts, Wallet, WalletAccount, WalletId,
};
pub use webhook::Webhook;
