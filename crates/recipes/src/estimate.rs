//! Recipe Estimator: aggregate resolved ingredients into cost and price.

use serde::{Deserialize, Serialize};
use tracing::{Instrument, info, info_span};

use streetfood_catalog::CatalogLookup;
use streetfood_core::{DomainError, DomainResult, ValueObject};

use crate::error::EstimateError;
use crate::ingredient::{IngredientRequest, ResolvedIngredient};
use crate::pricing::{PricingBreakdown, suggested_price};
use crate::resolver::resolve;

/// Everything needed to estimate one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub recipe_name: String,
    #[serde(default)]
    pub localized_name: String,
    pub servings: u32,
    pub ingredients: Vec<IngredientRequest>,
    pub profit_margin_percent: f64,
}

impl EstimateRequest {
    pub fn new(recipe_name: impl Into<String>, servings: u32, profit_margin_percent: f64) -> Self {
        Self {
            recipe_name: recipe_name.into(),
            localized_name: String::new(),
            servings,
            ingredients: Vec::new(),
            profit_margin_percent,
        }
    }

    pub fn localized(mut self, localized_name: impl Into<String>) -> Self {
        self.localized_name = localized_name.into();
        self
    }

    pub fn ingredient(mut self, request: IngredientRequest) -> Self {
        self.ingredients.push(request);
        self
    }

    /// Structural checks. Any failure rejects the whole request.
    pub fn validate(&self) -> DomainResult<()> {
        if self.recipe_name.trim().is_empty() {
            return Err(DomainError::validation("recipe name cannot be empty"));
        }
        if self.servings == 0 {
            return Err(DomainError::validation("servings must be at least 1"));
        }
        if !self.profit_margin_percent.is_finite() || self.profit_margin_percent < 0.0 {
            return Err(DomainError::validation(
                "profit margin must be a non-negative percentage",
            ));
        }
        for ingredient in &self.ingredients {
            ingredient.validate()?;
        }
        Ok(())
    }
}

/// Immutable snapshot of one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeEstimate {
    pub recipe_name: String,
    pub localized_name: String,
    pub servings: u32,
    /// Same order as the request's ingredients.
    pub ingredients: Vec<ResolvedIngredient>,
    pub total_cost: f64,
    pub all_fulfillable: bool,
    pub profit_margin_percent: f64,
    pub suggested_price: f64,
}

impl RecipeEstimate {
    /// Aggregate already-resolved ingredients. Pure.
    pub fn from_resolved(request: &EstimateRequest, ingredients: Vec<ResolvedIngredient>) -> Self {
        let total_cost = ingredients
            .iter()
            .filter(|i| i.is_matched())
            .map(|i| i.line_cost)
            .sum::<f64>();
        let all_fulfillable = ingredients.iter().all(|i| i.fulfillable);

        Self {
            recipe_name: request.recipe_name.clone(),
            localized_name: request.localized_name.clone(),
            servings: request.servings,
            ingredients,
            total_cost,
            all_fulfillable,
            profit_margin_percent: request.profit_margin_percent,
            suggested_price: suggested_price(total_cost, request.profit_margin_percent),
        }
    }

    pub fn per_serving_suggested_price(&self) -> f64 {
        self.suggested_price / f64::from(self.servings)
    }

    pub fn pricing(&self) -> PricingBreakdown {
        PricingBreakdown::new(self.total_cost, self.suggested_price, self.servings)
    }

    /// Ingredients that block a full order (unmatched or under-stocked).
    pub fn unresolved(&self) -> impl Iterator<Item = &ResolvedIngredient> {
        self.ingredients.iter().filter(|i| !i.fulfillable)
    }
}

impl ValueObject for RecipeEstimate {}

/// Validate, resolve every ingredient against `catalog`, and aggregate.
///
/// Ingredients are resolved one after another in request order. A catalog
/// failure aborts the estimate; nothing partial is returned.
pub async fn estimate<L>(request: &EstimateRequest, catalog: &L) -> Result<RecipeEstimate, EstimateError>
where
    L: CatalogLookup + ?Sized,
{
    request.validate()?;

    let span = info_span!(
        "estimate_recipe",
        recipe = %request.recipe_name,
        servings = request.servings
    );

    async move {
        let mut resolved = Vec::with_capacity(request.ingredients.len());
        for ingredient in &request.ingredients {
            resolved.push(resolve(ingredient, catalog).await?);
        }

        let estimate = RecipeEstimate::from_resolved(request, resolved);
        info!(
            total_cost = estimate.total_cost,
            suggested_price = estimate.suggested_price,
            all_fulfillable = estimate.all_fulfillable,
            "recipe estimated"
        );
        Ok::<_, EstimateError>(estimate)
    }
    .instrument(span)
    .await
}
