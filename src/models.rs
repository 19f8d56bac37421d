use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Marketplace-global taxonomy node every record is filed under.
pub const GLOBAL_CATEGORY_ID: u32 = 127;
/// Commission percent for the marketplace chat sales channel.
pub const CHATTING_PERCENT: u32 = 4;
/// Pickup point coordinates stamped onto every record.
pub const STORE_LATITUDE: f64 = 55.7711953;
pub const STORE_LONGITUDE: f64 = 49.10211794999999;

/// Unit-of-measure code in the catalog's external enum ("piece").
pub const DEFAULT_UNIT: u32 = 116;
/// Catalog taxonomy id used until the user (or autofill) picks one.
pub const DEFAULT_CATEGORY: u32 = 2477;
pub const DEFAULT_CASHBACK_TYPE: &str = "lcard_cashback";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Product,
    Service,
}

/// In-memory form state for one product entry. Field names follow the
/// catalog wire format so the draft serializes straight into the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductKind,
    pub description_short: String,
    pub description_long: String,
    pub seo_title: String,
    pub seo_description: String,
    pub seo_keywords: Vec<String>,
    /// Catalog SKU.
    pub code: String,
    pub unit: u32,
    pub category: u32,
    pub cashback_type: String,
    pub marketplace_price: f64,
    pub address: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ProductKind::Product,
            description_short: String::new(),
            description_long: String::new(),
            seo_title: String::new(),
            seo_description: String::new(),
            seo_keywords: Vec::new(),
            code: String::new(),
            unit: DEFAULT_UNIT,
            category: DEFAULT_CATEGORY,
            cashback_type: DEFAULT_CASHBACK_TYPE.to_string(),
            marketplace_price: 0.0,
            address: String::new(),
        }
    }
}

/// Full outbound record: the validated draft plus the fixed fields the
/// catalog expects on every nomenclature entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPayload {
    #[serde(flatten)]
    pub draft: ProductDraft,
    pub global_category_id: u32,
    pub chatting_percent: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl ProductPayload {
    pub fn from_draft(draft: ProductDraft) -> Self {
        Self {
            draft,
            global_category_id: GLOBAL_CATEGORY_ID,
            chatting_percent: CHATTING_PERCENT,
            latitude: STORE_LATITUDE,
            longitude: STORE_LONGITUDE,
        }
    }
}

/// Copy generated by the LLM for one product name. Every key is optional —
/// the model may omit any of them — and unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AutofillResult {
    pub description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Vec<String>,
    pub category: Option<CategoryHint>,
}

/// The model sometimes returns the category id as a JSON string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CategoryHint {
    Id(u32),
    Text(String),
}

impl CategoryHint {
    pub fn as_id(&self) -> Option<u32> {
        match self {
            CategoryHint::Id(id) => Some(*id),
            CategoryHint::Text(text) => text.trim().parse().ok(),
        }
    }
}
