use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use utoipa::ToSchema;

/// Raw field map of a single document, exactly as the store holds it.
pub type Fields = Map<String, Value>;

/// A document read back from the store together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

/// Typed view of a product document.
///
/// Only the four product fields survive the projection; anything else the
/// caller stored on create is dropped. A field that is missing, or holds a
/// value of the wrong JSON type, is left out of the serialized output.
/// Numbers are carried through untouched, so an integer stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: String,
    /// Product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    /// Retailer selling the product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
    /// Units currently in stock
    #[serde(
        rename = "amountInStock",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub amount_in_stock: Option<Number>,
}

impl From<&Document> for Product {
    fn from(doc: &Document) -> Self {
        let text = |key: &str| doc.fields.get(key).and_then(Value::as_str).map(str::to_owned);
        let number = |key: &str| doc.fields.get(key).and_then(Value::as_number).cloned();

        Product {
            id: doc.id.clone(),
            name: text("name"),
            price: number("price"),
            retailer: text("retailer"),
            amount_in_stock: number("amountInStock"),
        }
    }
}
