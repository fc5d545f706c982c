use serde::{Deserialize, Serialize};

/// One line item of a payment. Every field is optional on the wire and
/// omitted when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_ea_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_product_url: Option<String>,
}

impl PaymentItem {
    pub fn new(title: impl Into<String>, amount_cents: i64) -> Self {
        Self {
            title: Some(title.into()),
            amount_cents: Some(amount_cents),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32, price_ea_cents: i64) -> Self {
        self.quantity = Some(quantity);
        self.price_ea_cents = Some(price_ea_cents);
        self
    }
}
