//! Client-side form lifecycle: field validation, autofill merge, submit
//! payload construction. Holds no network code; the caller wires the
//! outcome of each request back in via [`ProductForm::apply_autofill`] /
//! [`ProductForm::cancel_autofill`] and [`ProductForm::submit_succeeded`].

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::models::{AutofillResult, ProductDraft, ProductPayload};

/// Per-field validation messages, keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&'static str> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Field rules shared by the form and the create-product boundary.
pub fn validate(draft: &ProductDraft) -> Result<(), ValidationErrors> {
    let mut errors = BTreeMap::new();
    if draft.name.chars().count() < 2 {
        errors.insert("name", "Name is too short");
    }
    if draft.code.is_empty() {
        errors.insert("code", "Code is required");
    }
    if draft.marketplace_price < 0.0 {
        errors.insert("marketplace_price", "Price must not be negative");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Name is required")]
    NameRequired,

    #[error("an autofill request is already in flight")]
    AutofillInFlight,
}

/// One editing session. Created with defaults, discarded after a successful
/// submit; kept intact on failure so the user can retry.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    draft: ProductDraft,
    autofill_in_flight: bool,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub fn autofill_in_flight(&self) -> bool {
        self.autofill_in_flight
    }

    /// Gate for the autofill action. Returns the name to generate for, or an
    /// error when the name is empty or a request is already outstanding —
    /// in both cases no network call must be made.
    pub fn try_begin_autofill(&mut self) -> Result<String, FormError> {
        if self.draft.name.is_empty() {
            return Err(FormError::NameRequired);
        }
        if self.autofill_in_flight {
            return Err(FormError::AutofillInFlight);
        }
        self.autofill_in_flight = true;
        Ok(self.draft.name.clone())
    }

    /// Merge generated copy into the draft. The single description populates
    /// both description fields; the category is coerced to a number and left
    /// unchanged when the model returned something unparseable.
    pub fn apply_autofill(&mut self, fill: AutofillResult) {
        self.autofill_in_flight = false;
        if let Some(description) = fill.description {
            self.draft.description_short = description.clone();
            self.draft.description_long = description;
        }
        if let Some(title) = fill.seo_title {
            self.draft.seo_title = title;
        }
        if let Some(description) = fill.seo_description {
            self.draft.seo_description = description;
        }
        self.draft.seo_keywords = fill.seo_keywords;
        if let Some(id) = fill.category.as_ref().and_then(|hint| hint.as_id()) {
            self.draft.category = id;
        }
    }

    /// Failed autofill: clear the busy flag, leave every field as typed.
    pub fn cancel_autofill(&mut self) {
        self.autofill_in_flight = false;
    }

    /// Validate and build the outbound record. A validation failure never
    /// produces a payload, so nothing invalid can reach the network.
    pub fn payload(&self) -> Result<ProductPayload, ValidationErrors> {
        validate(&self.draft)?;
        Ok(ProductPayload::from_draft(self.draft.clone()))
    }

    /// A successful submit resets the form to defaults. On failure the
    /// caller simply keeps the form as-is for retry.
    pub fn submit_succeeded(&mut self) {
        self.draft = ProductDraft::default();
    }
}
