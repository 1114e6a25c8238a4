use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::cupcake::{self, DEFAULT_IMAGE};

/// Maximum length, in characters, of `flavor` and `size`.
pub const MAX_TEXT_LENGTH: usize = 50;

/// Body of a create or update request.
///
/// Every field is optional at the wire level so that validation can report
/// all missing fields at once rather than failing on the first.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CupcakePayload {
    #[schema(example = "Chocolate Mint")]
    pub flavor: Option<String>,
    #[schema(example = "Large")]
    pub size: Option<String>,
    /// A number, or a string holding one.
    #[schema(value_type = Option<f64>, example = 4.5)]
    pub rating: Option<RatingInput>,
    /// Image URL. Blank or absent falls back to a placeholder image.
    #[schema(example = "https://example.com/cupcake.png")]
    pub image: Option<String>,
}

/// Browsers post every form value as text; JSON clients send numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Number(f64),
    Text(String),
}

/// Fields that passed validation and are ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CupcakeFields {
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CupcakeResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Chocolate Mint")]
    pub flavor: String,
    #[schema(example = "Large")]
    pub size: String,
    #[schema(example = 4.5)]
    pub rating: f64,
    #[schema(example = "https://example.com/cupcake.png")]
    pub image: String,
}

/// `{"cupcake": {...}}`
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CupcakeEnvelope {
    pub cupcake: CupcakeResponse,
}

/// `{"cupcakes": [...]}`
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CupcakeListResponse {
    pub cupcakes: Vec<CupcakeResponse>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "deleted")]
    pub message: String,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self {
            message: "deleted".into(),
        }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Substring to look for in the flavor, case-insensitive. Empty matches all.
    pub term: Option<String>,
}

impl From<cupcake::Model> for CupcakeResponse {
    fn from(m: cupcake::Model) -> Self {
        Self {
            id: m.id,
            flavor: m.flavor,
            size: m.size,
            rating: m.rating,
            image: m.image,
        }
    }
}

impl From<cupcake::Model> for CupcakeEnvelope {
    fn from(m: cupcake::Model) -> Self {
        Self { cupcake: m.into() }
    }
}

impl From<Vec<cupcake::Model>> for CupcakeListResponse {
    fn from(models: Vec<cupcake::Model>) -> Self {
        Self {
            cupcakes: models.into_iter().map(CupcakeResponse::from).collect(),
        }
    }
}

/// Check a create/update payload and normalize it into storable fields.
pub fn validate_cupcake(payload: CupcakePayload) -> Result<CupcakeFields, ValidationErrors> {
    let flavor = validate_text("flavor", payload.flavor);
    let size = validate_text("size", payload.size);
    let rating = validate_rating(payload.rating);

    match (flavor, size, rating) {
        (Ok(flavor), Ok(size), Ok(rating)) => Ok(CupcakeFields {
            flavor,
            size,
            rating,
            image: image_or_default(payload.image),
        }),
        (flavor, size, rating) => Err(ValidationErrors(
            [flavor.err(), size.err(), rating.err()]
                .into_iter()
                .flatten()
                .collect(),
        )),
    }
}

fn validate_text(field: &'static str, value: Option<String>) -> Result<String, FieldError> {
    let value = value.as_deref().map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(FieldError::new(field, format!("{field} is required")));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(FieldError::new(
            field,
            format!("{field} must be at most {MAX_TEXT_LENGTH} characters"),
        ));
    }
    Ok(value.to_string())
}

fn validate_rating(value: Option<RatingInput>) -> Result<f64, FieldError> {
    let rating = match value {
        None => return Err(FieldError::new("rating", "rating is required")),
        Some(RatingInput::Number(n)) => n,
        Some(RatingInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(FieldError::new("rating", "rating is required"));
            }
            text.parse::<f64>()
                .map_err(|_| FieldError::new("rating", "rating must be a number"))?
        }
    };
    if !rating.is_finite() {
        return Err(FieldError::new("rating", "rating must be a number"));
    }
    Ok(rating)
}

fn image_or_default(image: Option<String>) -> String {
    match image.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_IMAGE.to_string(),
    }
}
