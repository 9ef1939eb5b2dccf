//! # Payout Schema & Operations
//!
//! Outbound transfers from the platform to a beneficiary: discovering payout
//! method types, looking up their required fields, and creating payouts.

use crate::endpoint::{Empty, Endpoint, Method, QueryString};
use crate::error::RapydError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bank account type of a beneficiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankAccountType {
    Checking,
    Saving,
}

/// Payout category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutCategory {
    Bank,
    Card,
    Cash,
    RapydEwallet,
    Ewallet,
}

impl PayoutCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutCategory::Bank => "bank",
            PayoutCategory::Card => "card",
            PayoutCategory::Cash => "cash",
            PayoutCategory::RapydEwallet => "rapyd_ewallet",
            PayoutCategory::Ewallet => "ewallet",
        }
    }
}

impl fmt::Display for PayoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal entity type of a sender or beneficiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Individual,
    Company,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Individual => "individual",
            EntityType::Company => "company",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed vocabulary of supported payout method types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethodType {
    UsAchnonusBank,
    UsAchBank,
    UsGeneralBank,
    UsSamedayAchBank,
    UsStandardAchBank,
    UsWiresBank,
    XxSwiftBank,
}

impl PayoutMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutMethodType::UsAchnonusBank => "us_achnonus_bank",
            PayoutMethodType::UsAchBank => "us_ach_bank",
            PayoutMethodType::UsGeneralBank => "us_general_bank",
            PayoutMethodType::UsSamedayAchBank => "us_sameday_ach_bank",
            PayoutMethodType::UsStandardAchBank => "us_standard_ach_bank",
            PayoutMethodType::UsWiresBank => "us_wires_bank",
            PayoutMethodType::XxSwiftBank => "xx_swift_bank",
        }
    }
}

impl fmt::Display for PayoutMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The party receiving the payout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutBeneficiary {
    pub company_name: String,
    pub bank_account_type: BankAccountType,
    pub account_number: i64,
    pub aba: i64,
}

/// The party funding the payout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutSender {
    pub company_name: String,
}

/// Minimum/maximum payout amounts for a currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountRange {
    pub maximum_amount: Option<i64>,
    pub minimum_amount: Option<i64>,
    pub payout_currency: String,
}

/// A payout method supported for a corridor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutMethod {
    pub payout_method_type: PayoutMethodType,
    pub name: String,
    pub is_cancelable: i32,
    pub is_expirable: i32,
    pub is_location_specific: i32,
    pub status: i32,
    pub image: String,
    pub category: PayoutCategory,
    pub beneficiary_country: String,
    pub sender_country: String,
    pub payout_currencies: Vec<String>,
    pub sender_entity_types: Vec<EntityType>,
    pub beneficiary_entity_types: Vec<EntityType>,
    pub amount_range_per_currency: Vec<AmountRange>,
    pub minimum_expiration_seconds: Option<i64>,
    pub maximum_expiration_seconds: Option<i64>,
    pub sender_currencies: Vec<String>,
}

/// Filters for `GetPayoutMethodTypes`. Only set fields appear in the query
/// string, in field-declaration order.
#[derive(Debug, Clone, Default)]
pub struct PayoutMethodTypesParams {
    pub beneficiary_country: Option<String>,
    pub beneficiary_entity_type: Option<EntityType>,
    pub category: Option<PayoutCategory>,
    pub ending_before: Option<String>,
    pub is_cancelable: Option<bool>,
    pub is_expirable: Option<String>,
    pub is_location_specific: Option<String>,
    pub limit: Option<String>,
    pub payout_currency: Option<String>,
    pub sender_country: Option<String>,
    pub sender_currency: Option<String>,
    pub sender_entity_type: Option<EntityType>,
    pub starting_after: Option<String>,
}

impl PayoutMethodTypesParams {
    fn query_string(&self) -> String {
        let mut qs = QueryString::new();
        qs.push_opt("beneficiary_country", self.beneficiary_country.as_ref());
        qs.push_opt(
            "beneficiary_entity_type",
            self.beneficiary_entity_type.as_ref(),
        );
        qs.push_opt("category", self.category.as_ref());
        qs.push_opt("ending_before", self.ending_before.as_ref());
        qs.push_opt("is_cancelable", self.is_cancelable.as_ref());
        qs.push_opt("is_expirable", self.is_expirable.as_ref());
        qs.push_opt("is_location_specific", self.is_location_specific.as_ref());
        qs.push_opt("limit", self.limit.as_ref());
        qs.push_opt("payout_currency", self.payout_currency.as_ref());
        qs.push_opt("sender_country", self.sender_country.as_ref());
        qs.push_opt("sender_currency", self.sender_currency.as_ref());
        qs.push_opt("sender_entity_type", self.sender_entity_type.as_ref());
        qs.push_opt("starting_after", self.starting_after.as_ref());
        qs.finish()
    }
}

/// Required parameters for `GetPayoutRequiredFields`
#[derive(Debug, Clone)]
pub struct RequiredFieldsParams {
    pub payout_method_type: PayoutMethodType,
    pub beneficiary_country: String,
    pub beneficiary_entity_type: EntityType,
    pub payout_amount: f64,
    pub payout_currency: String,
    pub sender_country: String,
    pub sender_currency: String,
    pub sender_entity_type: EntityType,
}

/// Request body for `CreatePayout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayoutRequest {
    pub beneficiary: PayoutBeneficiary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_country: Option<String>,
    pub beneficiary_entity_type: EntityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_automatically: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ewallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Decimal string, e.g. `"110.00"`
    pub payout_amount: String,
    pub payout_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_fees: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_method_type: Option<PayoutMethodType>,
    pub sender: PayoutSender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_amount: Option<f64>,
    pub sender_country: String,
    pub sender_currency: String,
    pub sender_entity_type: EntityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

/// GET `payouts/supported_types`
pub struct GetPayoutMethodTypes;

impl Endpoint for GetPayoutMethodTypes {
    type Input = Empty;
    type Output = Vec<PayoutMethod>;
    type Params = PayoutMethodTypesParams;
    const METHOD: Method = Method::Get;

    fn path(params: &PayoutMethodTypesParams) -> Result<String, RapydError> {
        Ok(format!(
            "payouts/supported_types?{}",
            params.query_string()
        ))
    }
}

/// GET `payouts/{type}/details`
///
/// Returns a method-specific field schema; kept untyped because every payout
/// method type describes a different set of fields.
pub struct GetPayoutRequiredFields;

impl Endpoint for GetPayoutRequiredFields {
    type Input = Empty;
    type Output = serde_json::Value;
    type Params = RequiredFieldsParams;
    const METHOD: Method = Method::Get;

    fn path(params: &RequiredFieldsParams) -> Result<String, RapydError> {
        let mut qs = QueryString::new();
        qs.push("beneficiary_country", &params.beneficiary_country);
        qs.push("beneficiary_entity_type", params.beneficiary_entity_type);
        qs.push("payout_amount", params.payout_amount);
        qs.push("payout_currency", &params.payout_currency);
        qs.push("sender_country", &params.sender_country);
        qs.push("sender_currency", &params.sender_currency);
        qs.push("sender_entity_type", params.sender_entity_type);
        Ok(format!(
            "payouts/{}/details?{}",
            params.payout_method_type,
            qs.finish()
        ))
    }
}

/// POST `payouts`
pub struct CreatePayout;

impl Endpoint for CreatePayout {
    type Input = CreatePayoutRequest;
    type Output = serde_json::Value;
    type Params = Empty;

    fn path(_params: &Empty) -> Result<String, RapydError> {
        Ok("payouts".into())
    }
}
