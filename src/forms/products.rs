use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a product description.
const DESCRIPTION_MAX_LEN: usize = 4096;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = DESCRIPTION_MAX_LEN as u64;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The price is below zero.
    #[error("price cannot be negative")]
    NegativePrice,
    /// The price exceeds the supported range.
    #[error("price is out of range")]
    PriceOutOfRange,
}

/// JSON payload accepted when creating or fully replacing a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductPayload {
    /// Name entered by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional longer description.
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    pub description: Option<String>,
    /// Unit price as a decimal number.
    pub price: Decimal,
    /// Optional reference to an uploaded image.
    pub image_id: Option<i32>,
}

impl ProductPayload {
    /// Validates the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> Result<NewProduct, ProductFormError> {
        self.validate()?;
        check_price(self.price)?;

        let mut new_product = NewProduct::new(self.name, self.price);
        if let Some(description) = self.description.filter(|value| !value.trim().is_empty()) {
            new_product = new_product.with_description(description);
        }
        if let Some(image_id) = self.image_id {
            new_product = new_product.with_image(image_id);
        }

        Ok(new_product)
    }

    /// Validates the payload into a full-replace domain patch.
    pub fn into_update_product(self) -> Result<UpdateProduct, ProductFormError> {
        self.validate()?;
        check_price(self.price)?;

        Ok(UpdateProduct::new(self.name, self.price)
            .description(self.description.filter(|value| !value.trim().is_empty()))
            .image_id(self.image_id))
    }
}

fn check_price(price: Decimal) -> Result<(), ProductFormError> {
    if price < Decimal::ZERO {
        return Err(ProductFormError::NegativePrice);
    }
    // Cent storage is i64; anything near that bound is a client error.
    if price > Decimal::from(1_000_000_000i64) {
        return Err(ProductFormError::PriceOutOfRange);
    }
    Ok(())
}
