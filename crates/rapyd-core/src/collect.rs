//! # Collect Schema & Operations
//!
//! Hosted checkout pages, payments, and payment-method discovery.
//! Structural mirrors of the Rapyd Collect JSON shapes; fields are optional
//! wherever the remote API omits or nulls them depending on lifecycle stage.

use crate::amount::Amount;
use crate::endpoint::{Empty, Endpoint, Method, QueryString};
use crate::error::RapydError;
use serde::{Deserialize, Serialize};

/// A cart item displayed on the checkout page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// The name of the item. Required.
    pub name: String,

    /// Item price in the page currency, as the API's decimal string
    pub amount: String,

    /// The quantity of the item. Required.
    pub quantity: u32,

    /// Image shown on the checkout page for this item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartItem {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            quantity,
            image: None,
        }
    }
}

/// Payment method details attached to a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodData {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub method_type: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub bic_swift: Option<String>,
    pub next_action: Option<String>,
    pub webhook_url: Option<String>,
    pub account_type: Option<String>,
    pub account_last4: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub proof_of_authorization: Option<bool>,
    pub supporting_documentation: Option<String>,
}

/// A payment, as embedded in checkout pages and webhook events.
/// Nearly every field is response-only and lifecycle-dependent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Option<String>,
    pub paid: Option<bool>,
    pub amount: Option<Amount>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub ewallet_id: Option<String>,
    pub captured: Option<bool>,
    pub created_at: Option<i64>,
    pub expiration: Option<i64>,
    pub currency_code: Option<String>,
    pub customer_token: Option<String>,
    pub payment_method: Option<String>,
    pub receipt_number: Option<String>,
    pub transaction_id: Option<String>,
    pub failure_message: Option<String>,
    pub initiation_type: Option<String>,
    pub original_amount: Option<Amount>,
    pub refunded_amount: Option<Amount>,
    pub error_payment_url: Option<String>,
    pub payment_method_data: Option<PaymentMethodData>,
    pub payment_method_type: Option<String>,
    pub complete_payment_url: Option<String>,
    pub statement_descriptor: Option<String>,
    pub merchant_reference_id: Option<String>,
    pub payment_method_type_category: Option<String>,
}

/// Status of a hosted checkout page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageStatus {
    /// The hosted page was created
    #[serde(rename = "NEW")]
    New,
    /// Done, the payment was completed
    #[serde(rename = "DON")]
    Done,
    /// The hosted page expired
    #[serde(rename = "EXP")]
    Expired,
    /// Creation of the payment is still in progress
    #[serde(rename = "INP")]
    InProgress,
    /// Rapyd Protect blocked the payment
    #[serde(rename = "DEC")]
    Declined,
}

/// A hosted checkout page.
///
/// Only `amount`, `country`, and `currency` are required to create one; the
/// rest is either optional request configuration or response-only state
/// (`merchant_*`, `redirect_url`, `payment`, `status`, `timestamp`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutPage {
    /// Payment amount in units of `currency`
    pub amount: Amount,

    /// Two-letter ISO 3166-1 country code, uppercase
    pub country: String,

    /// Three-letter ISO 4217 currency code, uppercase
    pub currency: String,

    /// ID of the checkout page, string starting with `checkout_`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Redirect target after a successful checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_checkout_url: Option<String>,

    /// Redirect target when the customer backs out of the hosted page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_checkout_url: Option<String>,

    /// ID of a stored customer, string starting with `cus_`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// Capture immediately (true, default) or authorize for later capture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_items: Option<Vec<CartItem>>,

    /// Redirect target after third-party payment instructions complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_payment_url: Option<String>,

    /// Page customizations shown to the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_elements: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Redirect target after an error on the third-party site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_payment_url: Option<String>,

    /// Hold the payment in escrow for later release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escrow: Option<bool>,

    /// Days after payment creation that escrowed funds release, range 1-90
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escrow_release_days: Option<i32>,

    /// Wallet the money is paid into, string starting with `ewallet_`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ewallet: Option<String>,

    /// Multiple collection wallets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ewallets: Option<Vec<String>>,

    /// Unix time when the payment expires if not completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,

    /// FX fixed side: `buy` (default) or `sell`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_side: Option<String>,

    /// Default language of the hosted page; browser language when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Response only, configured in the client portal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_alias: Option<String>,

    /// Response only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_color: Option<String>,

    /// Response only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_customer_support: Option<serde_json::Value>,

    /// Response only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_logo: Option<String>,

    /// Response only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_main_button: Option<String>,

    /// Response only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_privacy_policy: Option<String>,

    /// Merchant-defined transaction identifier, usable for reconciliation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference_id: Option<String>,

    /// Response only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_terms: Option<String>,

    /// Response only, fallback redirect when the checkout URLs are unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_website: Option<String>,

    /// Merchant-defined JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Unix time when the hosted page stops being usable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_expiration: Option<i64>,

    /// Response only, the payment resulting from the hosted page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,

    /// Seconds allowed for the payment to complete after creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_expiration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_fees: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<serde_json::Value>,

    /// Payment method type, e.g. `it_visa_card`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types_exclude: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types_include: Option<Vec<String>>,

    /// Response only, URL of the hosted page shown to the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    /// FX counter-currency, three-letter ISO 4217
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_currency: Option<String>,

    /// Response only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PageStatus>,

    /// Response only, Unix creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl CheckoutPage {
    /// A minimal page request; everything else is optional configuration.
    pub fn new(amount: Amount, country: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount,
            country: country.into(),
            currency: currency.into(),
            id: None,
            complete_checkout_url: None,
            cancel_checkout_url: None,
            customer: None,
            capture: None,
            cart_items: None,
            complete_payment_url: None,
            custom_elements: None,
            description: None,
            error_payment_url: None,
            escrow: None,
            escrow_release_days: None,
            ewallet: None,
            ewallets: None,
            expiration: None,
            fixed_side: None,
            language: None,
            merchant_alias: None,
            merchant_color: None,
            merchant_customer_support: None,
            merchant_logo: None,
            merchant_main_button: None,
            merchant_privacy_policy: None,
            merchant_reference_id: None,
            merchant_terms: None,
            merchant_website: None,
            metadata: None,
            page_expiration: None,
            payment: None,
            payment_expiration: None,
            payment_fees: None,
            payment_method: None,
            payment_method_type: None,
            payment_method_types_exclude: None,
            payment_method_types_include: None,
            redirect_url: None,
            requested_currency: None,
            status: None,
            timestamp: None,
        }
    }

    /// Builder: set the wallet the money is collected into
    pub fn with_ewallet(mut self, ewallet: impl Into<String>) -> Self {
        self.ewallet = Some(ewallet.into());
        self
    }

    /// Builder: set both checkout redirect URLs
    pub fn with_redirects(
        mut self,
        complete_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        self.complete_checkout_url = Some(complete_url.into());
        self.cancel_checkout_url = Some(cancel_url.into());
        self
    }

    /// Builder: set the displayed cart items
    pub fn with_cart_items(mut self, items: Vec<CartItem>) -> Self {
        self.cart_items = Some(items);
        self
    }

    /// Builder: set the merchant reference ID
    pub fn with_merchant_reference(mut self, reference: impl Into<String>) -> Self {
        self.merchant_reference_id = Some(reference.into());
        self
    }
}

/// A payment method available in a country
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub country: String,
    pub payment_flow_type: String,
    pub currencies: Vec<String>,
    pub status: i32,
}

/// A country supported by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub iso_alpha2: String,
    pub iso_alpha3: String,
    pub currency_code: String,
    pub currency_name: Option<String>,
    pub currency_sign: Option<String>,
    pub phone_code: Option<String>,
}

/// Country/currency pair for capability and payment-method lookups
#[derive(Debug, Clone)]
pub struct CountryCurrencyParams {
    pub country: String,
    pub currency: String,
}

impl CountryCurrencyParams {
    pub fn new(country: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            currency: currency.into(),
        }
    }
}

/// GET `data/countries`
pub struct GetCountries;

impl Endpoint for GetCountries {
    type Input = Empty;
    type Output = Vec<Country>;
    type Params = Empty;
    const METHOD: Method = Method::Get;

    fn path(_params: &Empty) -> Result<String, RapydError> {
        Ok("data/countries".into())
    }
}

/// GET `issuing/bankaccounts/capabilities`
///
/// The capabilities shape is undocumented and fluid, so the output stays an
/// untyped JSON value.
pub struct GetCurrencyCapabilities;

impl Endpoint for GetCurrencyCapabilities {
    type Input = Empty;
    type Output = serde_json::Value;
    type Params = CountryCurrencyParams;
    const METHOD: Method = Method::Get;

    fn path(params: &CountryCurrencyParams) -> Result<String, RapydError> {
        let mut qs = QueryString::new();
        qs.push("country", &params.country);
        qs.push("currency", &params.currency);
        Ok(format!("issuing/bankaccounts/capabilities?{}", qs.finish()))
    }
}

/// GET `payment_methods/country`
pub struct GetPaymentMethods;

impl Endpoint for GetPaymentMethods {
    type Input = Empty;
    type Output = Vec<PaymentMethod>;
    type Params = CountryCurrencyParams;
    const METHOD: Method = Method::Get;

    fn path(params: &CountryCurrencyParams) -> Result<String, RapydError> {
        let mut qs = QueryString::new();
        qs.push("country", &params.country);
        qs.push("currency", &params.currency);
        Ok(format!("payment_methods/country?{}", qs.finish()))
    }
}

/// GET `checkout/{id}`
pub struct GetCheckoutPage;

impl Endpoint for GetCheckoutPage {
    type Input = Empty;
    type Output = CheckoutPage;
    type Params = String;
    const METHOD: Method = Method::Get;

    fn path(params: &String) -> Result<String, RapydError> {
        Ok(format!("checkout/{params}"))
    }
}

/// POST `checkout`
pub struct CreateCheckoutPage;

impl Endpoint for CreateCheckoutPage {
    type Input = CheckoutPage;
    type Output = CheckoutPage;
    type Params = Empty;

    fn path(_params: &Empty) -> Result<String, RapydError> {
        Ok("checkout".into())
    }
}
