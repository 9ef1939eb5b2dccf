//! # Wallet Schema & Operations
//!
//! Ewallets, their currency accounts and transactions, and the virtual bank
//! accounts issued against them.

use crate::endpoint::{Empty, Endpoint, Method, QueryString};
use crate::error::RapydError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wallet token, string starting with `ewallet_`
pub type WalletId = String;

/// A currency account inside a wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletAccount {
    pub id: Option<String>,
    pub currency: Option<String>,
    pub alias: Option<String>,
    pub balance: Option<f64>,
}

/// A stored-value wallet on the platform.
///
/// `status` and `verification_status` are deliberately open strings; Rapyd
/// does not document a stable vocabulary for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub accounts: Vec<WalletAccount>,
    pub verification_status: Option<String>,
    #[serde(rename = "type")]
    pub wallet_type: Option<String>,
    pub category: Option<String>,
}

/// Closed vocabulary of wallet transaction types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    AddFunds,
    PayoutFundsOut,
    BankIssuingIn,
    PayoutFundsIn,
}

impl TransactionType {
    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::AddFunds => "Deposit",
            TransactionType::PayoutFundsOut => "Disbursement",
            TransactionType::BankIssuingIn => "Transfer from Bank",
            TransactionType::PayoutFundsIn => "Cancelled Payout",
        }
    }

    /// True when the transaction increases the wallet balance
    pub fn is_credit(&self) -> bool {
        match self {
            TransactionType::AddFunds
            | TransactionType::BankIssuingIn
            | TransactionType::PayoutFundsIn => true,
            TransactionType::PayoutFundsOut => false,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single wallet ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub currency: String,
    pub amount: Option<f64>,
    pub ewallet_id: WalletId,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub balance_type: Option<String>,
    pub balance: Option<f64>,
    pub created_at: i64,
    pub status: Option<String>,
    pub reason: Option<String>,
}

impl Transaction {
    /// Creation time as a UTC timestamp, `None` if out of chrono's range
    pub fn created(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

/// A virtual bank account issued against a wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_id: String,
    pub account_id_type: String,
    pub currency: String,
    pub country_iso: String,
    pub issuing_id: String,
}

/// Payload of `ListVirtualAccounts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualAccounts {
    pub ewallet: WalletId,
    pub bank_accounts: Vec<BankAccount>,
}

/// GET `user/{id}`
pub struct GetWallet;

impl Endpoint for GetWallet {
    type Input = Empty;
    type Output = Wallet;
    type Params = WalletId;
    const METHOD: Method = Method::Get;

    fn path(params: &WalletId) -> Result<String, RapydError> {
        Ok(format!("user/{params}"))
    }
}

/// GET `user/{id}/transactions`
pub struct GetWalletTransactions;

impl Endpoint for GetWalletTransactions {
    type Input = Empty;
    type Output = Vec<Transaction>;
    type Params = WalletId;
    const METHOD: Method = Method::Get;

    fn path(params: &WalletId) -> Result<String, RapydError> {
        Ok(format!("user/{params}/transactions"))
    }
}

/// GET `issuing/bankaccounts/list`
pub struct ListVirtualAccounts;

impl Endpoint for ListVirtualAccounts {
    type Input = Empty;
    type Output = VirtualAccounts;
    type Params = WalletId;
    const METHOD: Method = Method::Get;

    fn path(params: &WalletId) -> Result<String, RapydError> {
        let mut qs = QueryString::new();
        qs.push("ewallet", params);
        Ok(format!("issuing/bankaccounts/list?{}", qs.finish()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wallet_paths() {
        let id: WalletId = "ewallet_df9f3d6b00d13bf35cf8dc8a844d3e52".into();
        assert_eq!(
            GetWallet::path(&id).unwrap(),
            "user/ewallet_df9f3d6b00d13bf35cf8dc8a844d3e52"
        );
        assert_eq!(
            GetWalletTransactions::path(&id).unwrap(),
            "user/ewallet_df9f3d6b00d13bf35cf8dc8a844d3e52/transactions"
        );
        assert_eq!(
            ListVirtualAccounts::path(&id).unwrap(),
            "issuing/bankaccounts/list?ewallet=ewallet_df9f3d6b00d13bf35cf8dc8a844d3e52"
        );
    }

    #[test]
    fn test_wallet_decodes_with_nulled_fields() {
        let body = json!({
            "id": "ewallet_df9f3d6b00d13bf35cf8dc8a844d3e52",
            "phone_number": "+523093269044",
            "email": "romonowski@mail.com",
            "first_name": null,
            "last_name": "Romonowski",
            "status": "ACT",
            "accounts": [
                { "id": "254965b6-9aac-48ac-b828-5b982ad449a1", "currency": "EUR", "alias": "EUR", "balance": 50 }
            ],
            "verification_status": "not verified",
            "type": "person",
            "category": null
        });

        let wallet: Wallet = serde_json::from_value(body).unwrap();
        assert_eq!(wallet.status.as_deref(), Some("ACT"));
        assert_eq!(wallet.accounts.len(), 1);
        assert_eq!(wallet.accounts[0].balance, Some(50.0));
        assert!(wallet.first_name.is_none());
    }

    #[test]
    fn test_transaction_type_vocabulary() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "wt_694be3b82d88fa1a234c3a0112d38a3b",
            "currency": "EUR",
            "amount": 50,
            "ewallet_id": "ewallet_df9f3d6b00d13bf35cf8dc8a844d3e52",
            "type": "add_funds",
            "balance_type": "available_balance",
            "balance": 50,
            "created_at": 1656613817,
            "status": "CLOSED",
            "reason": ""
        }))
        .unwrap();

        assert_eq!(tx.transaction_type, TransactionType::AddFunds);
        assert!(tx.transaction_type.is_credit());
        assert_eq!(tx.transaction_type.to_string(), "Deposit");
        assert_eq!(tx.created().unwrap().timestamp(), 1656613817);

        // unknown types surface as decode errors rather than defaulting
        assert!(serde_json::from_value::<TransactionType>(json!("fee_out")).is_err());
    }

    #[test]
    fn test_payout_direction() {
        assert!(!TransactionType::PayoutFundsOut.is_credit());
        assert_eq!(TransactionType::PayoutFundsOut.display_name(), "Disbursement");
    }
}
