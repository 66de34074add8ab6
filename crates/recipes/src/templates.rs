//! Built-in recipe templates for common street-food dishes.

use serde::Serialize;

use crate::estimate::EstimateRequest;
use crate::ingredient::IngredientRequest;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemplateIngredient {
    pub name: &'static str,
    pub localized_name: &'static str,
    pub quantity: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeTemplate {
    pub slug: &'static str,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub description: &'static str,
    pub ingredients: &'static [TemplateIngredient],
}

impl RecipeTemplate {
    pub fn requests(&self) -> Vec<IngredientRequest> {
        self.ingredients
            .iter()
            .map(|i| IngredientRequest::new(i.name, i.localized_name, i.quantity, i.unit))
            .collect()
    }

    /// An estimate request for this recipe with the given servings and margin.
    pub fn to_request(&self, servings: u32, profit_margin_percent: f64) -> EstimateRequest {
        EstimateRequest {
            recipe_name: self.name.to_string(),
            localized_name: self.localized_name.to_string(),
            servings,
            ingredients: self.requests(),
            profit_margin_percent,
        }
    }
}

const fn ing(
    name: &'static str,
    localized_name: &'static str,
    quantity: f64,
    unit: &'static str,
) -> TemplateIngredient {
    TemplateIngredient {
        name,
        localized_name,
        quantity,
        unit,
    }
}

const TEMPLATES: &[RecipeTemplate] = &[
    RecipeTemplate {
        slug: "pav-bhaji",
        name: "Pav Bhaji",
        localized_name: "पाव भाजी",
        description: "Mumbai's iconic mixed vegetable curry with bread",
        ingredients: &[
            ing("Onions", "प्याज", 2.0, "kg"),
            ing("Tomatoes", "टमाटर", 1.5, "kg"),
            ing("Potatoes", "आलू", 1.0, "kg"),
            ing("Cooking Oil", "खाना पकाने का तेल", 0.5, "liters"),
            ing("Bread", "ब्रेड", 2.0, "packets"),
        ],
    },
    RecipeTemplate {
        slug: "vada-pav",
        name: "Vada Pav",
        localized_name: "वड़ा पाव",
        description: "Mumbai's favorite potato fritter sandwich",
        ingredients: &[
            ing("Potatoes", "आलू", 2.0, "kg"),
            ing("Onions", "प्याज", 0.5, "kg"),
            ing("Cooking Oil", "खाना पकाने का तेल", 1.0, "liters"),
            ing("Bread", "ब्रेड", 2.0, "packets"),
            ing("Green Chilies", "हरी मिर्च", 0.2, "kg"),
        ],
    },
    RecipeTemplate {
        slug: "biryani",
        name: "Biryani",
        localized_name: "बिरयानी",
        description: "Aromatic rice dish with spices and vegetables",
        ingredients: &[
            ing("Basmati Rice", "बासमती चावल", 2.0, "kg"),
            ing("Onions", "प्याज", 1.0, "kg"),
            ing("Cooking Oil", "खाना पकाने का तेल", 0.5, "liters"),
            ing("Turmeric Powder", "हल्दी पाउडर", 0.1, "kg"),
            ing("Ginger", "अदरक", 0.2, "kg"),
            ing("Garlic", "लहसुन", 0.2, "kg"),
        ],
    },
];

pub fn templates() -> &'static [RecipeTemplate] {
    TEMPLATES
}

/// Look a template up by slug or display name, ignoring case.
pub fn find_template(key: &str) -> Option<&'static RecipeTemplate> {
    let key = key.trim();
    TEMPLATES
        .iter()
        .find(|t| t.slug.eq_ignore_ascii_case(key) || t.name.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_slug_or_name() {
        assert_eq!(find_template("vada-pav").map(|t| t.name), Some("Vada Pav"));
        assert_eq!(find_template("PAV BHAJI").map(|t| t.slug), Some("pav-bhaji"));
        assert!(find_template("dosa").is_none());
    }

    #[test]
    fn every_template_builds_a_valid_request() {
        for template in templates() {
            let request = template.to_request(10, 50.0);
            assert!(request.validate().is_ok(), "{} is invalid", template.slug);
            assert_eq!(request.ingredients.len(), template.ingredients.len());
        }
    }
}
