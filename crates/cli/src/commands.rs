use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use serde_json::{Value, json};

use streetfood_core::VendorId;
use streetfood_infra::{AppConfig, InMemoryCatalog, InMemoryOrderBook, seed};
use streetfood_ordering::{VendorRef, place_recipe_order, split};
use streetfood_recipes::{EstimateRequest, IngredientRequest, find_template, templates as recipe_templates};

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Built-in recipe slug or name (see `templates`)
    #[arg(long, short = 't', conflicts_with = "name")]
    template: Option<String>,

    /// Custom recipe name (use with --ingredient)
    #[arg(long, requires = "ingredients")]
    name: Option<String>,

    /// Localized recipe name for a custom recipe
    #[arg(long)]
    localized_name: Option<String>,

    /// Ingredient as NAME:QUANTITY[:UNIT], repeatable
    #[arg(long = "ingredient", short = 'i', value_parser = parse_ingredient)]
    ingredients: Vec<IngredientRequest>,

    /// Number of servings
    #[arg(long, short = 's', default_value_t = 10)]
    servings: u32,

    /// Profit margin in percent (defaults to STREETFOOD_DEFAULT_MARGIN_PERCENT)
    #[arg(long, short = 'm')]
    margin: Option<f64>,

    /// Place one order per supplier when every ingredient is available
    #[arg(long)]
    order: bool,

    /// Vendor placing the order
    #[arg(long, default_value_t = 4)]
    vendor_id: u64,

    /// Vendor display name; required for vendors outside the built-in list
    #[arg(long)]
    vendor_name: Option<String>,
}

/// `NAME:QUANTITY[:UNIT]`; unit defaults to kg.
pub fn parse_ingredient(raw: &str) -> Result<IngredientRequest, String> {
    let mut parts = raw.split(':').map(str::trim);
    let name = parts.next().filter(|n| !n.is_empty()).ok_or("missing ingredient name")?;
    let quantity = parts
        .next()
        .ok_or("missing quantity")?
        .parse::<f64>()
        .map_err(|e| format!("bad quantity: {e}"))?;
    let unit = parts.next().filter(|u| !u.is_empty()).unwrap_or("kg");
    if parts.next().is_some() {
        return Err("expected NAME:QUANTITY[:UNIT]".to_string());
    }
    Ok(IngredientRequest::new(name, "", quantity, unit))
}

fn load_catalog(config: &AppConfig) -> InMemoryCatalog {
    if config.catalog.seed {
        InMemoryCatalog::seeded()
    } else {
        InMemoryCatalog::new()
    }
}

pub fn templates() -> Result<Value> {
    Ok(serde_json::to_value(recipe_templates())?)
}

pub fn search(config: &AppConfig, term: &str) -> Result<Value> {
    let items = load_catalog(config).search(term)?;
    Ok(serde_json::to_value(items)?)
}

fn build_request(config: &AppConfig, args: &EstimateArgs) -> Result<EstimateRequest> {
    let margin = args.margin.unwrap_or(config.pricing.default_margin_percent);

    if let Some(key) = &args.template {
        let template = find_template(key).ok_or_else(|| anyhow!("unknown recipe template '{key}'"))?;
        let mut request = template.to_request(args.servings, margin);
        request.ingredients.extend(args.ingredients.iter().cloned());
        return Ok(request);
    }

    let Some(name) = &args.name else {
        bail!("pass either --template or --name with --ingredient");
    };
    Ok(EstimateRequest {
        recipe_name: name.clone(),
        localized_name: args.localized_name.clone().unwrap_or_default(),
        servings: args.servings,
        ingredients: args.ingredients.clone(),
        profit_margin_percent: margin,
    })
}

fn vendor(args: &EstimateArgs) -> Result<VendorRef> {
    let vendor_id = VendorId::new(args.vendor_id);
    if let Some(name) = &args.vendor_name {
        return Ok(VendorRef::new(vendor_id, name.clone()));
    }
    seed::vendors()
        .into_iter()
        .find(|v| v.id == vendor_id)
        .ok_or_else(|| anyhow!("unknown vendor {vendor_id}; pass --vendor-name"))
}

pub async fn estimate(config: &AppConfig, args: EstimateArgs) -> Result<Value> {
    let request = build_request(config, &args)?;
    let catalog = Arc::new(load_catalog(config));

    let estimate = streetfood_recipes::estimate(&request, catalog.as_ref())
        .await
        .context("estimate failed")?;

    let shortfalls: Vec<Value> = estimate
        .ingredients
        .iter()
        .filter_map(|i| i.shortfall().map(|s| json!({ "ingredient": i.request.name, "shortfall": s })))
        .collect();

    let mut output = json!({
        "estimate": estimate,
        "pricing": estimate.pricing(),
        "shortfalls": shortfalls,
        "drafts": split(&estimate),
    });

    if args.order {
        let vendor = vendor(&args)?;
        let book = InMemoryOrderBook::new(catalog, config.ordering.clone());

        output["placement"] = match place_recipe_order(&book, &vendor, &estimate).await {
            Ok(report) => serde_json::to_value(&report)?,
            Err(err) => json!({ "refused": err.to_string() }),
        };
    }

    Ok(output)
}
