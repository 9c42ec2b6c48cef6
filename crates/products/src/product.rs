use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Product identifier, assigned by the registry.
pub type ProductId = i64;

/// A product record as stored and as returned on the wire.
///
/// JSON keys keep the names clients already use (`nome`, `preco`, `estoque`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "estoque", default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    /// Expects a patch that passed validation; a `null` stock clears it.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(Some(name)) = patch.name {
            self.name = name;
        }
        if let Some(Some(price)) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

/// Create payload. `nome` and `preco` are required; they are `Option` here so a
/// missing field surfaces as a validation error instead of a decode failure.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "preco", default)]
    pub price: Option<f64>,
    #[serde(rename = "estoque", default)]
    pub stock: Option<i64>,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            stock: None,
        }
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Turn the payload into a record carrying `id`.
    pub(crate) fn into_product(self, id: ProductId) -> RegistryResult<Product> {
        let name = self
            .name
            .ok_or_else(|| RegistryError::validation("missing field `nome`"))?;
        let price = self
            .price
            .ok_or_else(|| RegistryError::validation("missing field `preco`"))?;

        Ok(Product {
            id,
            name,
            price,
            stock: self.stock,
        })
    }
}

/// Update payload: every field optional, merged over the stored record.
///
/// Each field is doubly optional so a key sent as `null` (`Some(None)`) is told
/// apart from a missing key (`None`). `id` is decoded only so it can be refused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Option<ProductId>>,
    #[serde(
        rename = "nome",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        rename = "preco",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Option<f64>>,
    #[serde(
        rename = "estoque",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock: Option<Option<i64>>,
}

// Only called when the key exists, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(Some(price));
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(Some(stock));
        self
    }

    pub fn clear_stock(mut self) -> Self {
        self.stock = Some(None);
        self
    }

    /// No known key was sent.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }

    pub(crate) fn validate(&self) -> RegistryResult<()> {
        if self.is_empty() {
            return Err(RegistryError::validation("update payload has no known field"));
        }
        if self.id.is_some() {
            return Err(RegistryError::validation("`id` cannot be changed"));
        }
        if matches!(self.name, Some(None)) {
            return Err(RegistryError::validation("`nome` cannot be null"));
        }
        if matches!(self.price, Some(None)) {
            return Err(RegistryError::validation("`preco` cannot be null"));
        }
        Ok(())
    }
}
