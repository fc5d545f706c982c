use {
    super::error::ApruveError,
    super::id::{PaymentId, PaymentRequestId},
    super::money::Currency,
    super::payment_item::PaymentItem,
    super::validation::{self, Rule},
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize, de::Error as _},
    std::fmt,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Captured,
    Canceled,
    Failed,
    /// Status the client doesn't know about yet, kept verbatim.
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Captured => "captured",
            Self::Canceled => "canceled",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "captured" => Self::Captured,
            "canceled" => Self::Canceled,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Client-side view of a payment resource.
///
/// Built locally with [`Payment::new`] and created on the server with
/// `save`, or loaded wholesale with `find`. Server-assigned fields (`id`,
/// `status`, URLs, timestamps) have getters only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payment {
    id: Option<PaymentId>,
    payment_request_id: Option<PaymentRequestId>,
    status: Option<PaymentStatus>,
    amount_cents: Option<i64>,
    currency: Currency,
    merchant_notes: Option<String>,
    payment_items: Vec<PaymentItem>,
    api_url: Option<String>,
    view_url: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

const PAYMENT_RULES: &[Rule<Payment>] = &[
    Rule::new(has_payment_request_id, "payment_request_id must be set"),
    Rule::new(has_amount_cents, "amount_cents must be set"),
];

fn has_payment_request_id(p: &Payment) -> bool {
    p.payment_request_id.as_ref().is_some_and(|id| !id.is_blank())
}

fn has_amount_cents(p: &Payment) -> bool {
    p.amount_cents.is_some()
}

impl Payment {
    pub fn new(payment_request_id: impl Into<PaymentRequestId>, amount_cents: i64) -> Self {
        Self {
            payment_request_id: Some(payment_request_id.into()),
            amount_cents: Some(amount_cents),
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_merchant_notes(mut self, notes: impl Into<String>) -> Self {
        self.merchant_notes = Some(notes.into());
        self
    }

    pub fn with_item(mut self, item: PaymentItem) -> Self {
        self.payment_items.push(item);
        self
    }

    pub fn id(&self) -> Option<&PaymentId> {
        self.id.as_ref()
    }

    pub fn payment_request_id(&self) -> Option<&PaymentRequestId> {
        self.payment_request_id.as_ref()
    }

    pub fn status(&self) -> Option<&PaymentStatus> {
        self.status.as_ref()
    }

    pub fn amount_cents(&self) -> Option<i64> {
        self.amount_cents
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn merchant_notes(&self) -> Option<&str> {
        self.merchant_notes.as_deref()
    }

    pub fn payment_items(&self) -> &[PaymentItem] {
        &self.payment_items
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn view_url(&self) -> Option<&str> {
        self.view_url.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// True once the server has assigned an id.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_payment_request_id(&mut self, id: Option<PaymentRequestId>) {
        self.payment_request_id = id;
    }

    pub fn set_amount_cents(&mut self, amount_cents: Option<i64>) {
        self.amount_cents = amount_cents;
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn set_merchant_notes(&mut self, notes: Option<String>) {
        self.merchant_notes = notes;
    }

    pub fn set_payment_items(&mut self, items: Vec<PaymentItem>) {
        self.payment_items = items;
    }

    pub fn push_item(&mut self, item: PaymentItem) {
        self.payment_items.push(item);
    }

    // ── Validation ─────────────────────────────────────────────────────────

    pub fn errors(&self) -> Vec<String> {
        validation::evaluate(PAYMENT_RULES, self)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn validate(&self) -> Result<(), ApruveError> {
        validation::check(PAYMENT_RULES, self)?;
        Ok(())
    }

    // ── Wire format ────────────────────────────────────────────────────────

    /// Outbound representation: only the fields a client may send.
    pub fn to_wire(&self) -> Result<serde_json::Value, ApruveError> {
        Ok(serde_json::to_value(self.outbound())?)
    }

    pub fn to_json(&self) -> Result<String, ApruveError> {
        Ok(serde_json::to_string(&self.outbound())?)
    }

    /// Build a payment from a server response body. An empty body counts
    /// as `{}`.
    pub fn from_wire(body: &str) -> Result<Self, ApruveError> {
        let mut payment = Self::default();
        payment.apply_wire(body)?;
        Ok(payment)
    }

    /// Assign every field present in `body`; absent or null fields keep
    /// their current value.
    pub fn apply_wire(&mut self, body: &str) -> Result<(), ApruveError> {
        let inbound = InboundPayment::parse(body)?;
        self.payment_request_id = inbound.payment_request_id.or(self.payment_request_id.take());
        self.amount_cents = inbound.amount_cents.or(self.amount_cents);
        self.merchant_notes = inbound.merchant_notes.or(self.merchant_notes.take());
        if let Some(items) = inbound.payment_items {
            self.payment_items = items;
        }
        self.absorb_server_fields(inbound.server);
        Ok(())
    }

    /// Patch only server-owned fields from a create response, leaving the
    /// caller's amounts and items alone.
    pub(crate) fn apply_saved(&mut self, body: &str) -> Result<(), ApruveError> {
        let inbound = InboundPayment::parse(body)?;
        self.absorb_server_fields(inbound.server);
        Ok(())
    }

    fn absorb_server_fields(&mut self, server: ServerFields) {
        self.id = server.id.or(self.id.take());
        self.status = server.status.or(self.status.take());
        self.api_url = server.api_url.or(self.api_url.take());
        self.view_url = server.view_url.or(self.view_url.take());
        self.created_at = server.created_at.or(self.created_at);
        self.updated_at = server.updated_at.or(self.updated_at);
        if let Some(currency) = server.currency {
            self.currency = currency;
        }
    }

    fn outbound(&self) -> OutboundPayment<'_> {
        OutboundPayment {
            payment_request_id: self.payment_request_id.as_ref(),
            amount_cents: self.amount_cents,
            payment_items: &self.payment_items,
            currency: &self.currency,
            merchant_notes: self.merchant_notes.as_deref(),
        }
    }
}

// Field order here is the order on the wire.
#[derive(Serialize)]
struct OutboundPayment<'a> {
    payment_request_id: Option<&'a PaymentRequestId>,
    amount_cents: Option<i64>,
    payment_items: &'a [PaymentItem],
    currency: &'a Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    merchant_notes: Option<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InboundPayment {
    payment_request_id: Option<PaymentRequestId>,
    amount_cents: Option<i64>,
    merchant_notes: Option<String>,
    payment_items: Option<Vec<PaymentItem>>,
    #[serde(flatten)]
    server: ServerFields,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServerFields {
    id: Option<PaymentId>,
    status: Option<PaymentStatus>,
    currency: Option<Currency>,
    api_url: Option<String>,
    view_url: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl InboundPayment {
    fn parse(body: &str) -> Result<Self, ApruveError> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("payment body must be a JSON object").into());
        }
        Ok(serde_json::from_value(value)?)
    }
}
