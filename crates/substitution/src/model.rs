use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Macro values for one serving
///
/// `serving` names the serving the values refer to ("1 tbsp", "1 cup") when the
/// catalog author recorded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving: Option<String>,
}

impl Nutrition {
    /// All macros must be finite and non-negative
    pub fn validate(&self, ingredient: &str) -> CatalogResult<()> {
        let fields = [
            ("calories", self.calories),
            ("fat", self.fat),
            ("carbs", self.carbs),
            ("protein", self.protein),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidNutrition {
                    ingredient: ingredient.to_string(),
                    reason: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }

        Ok(())
    }
}

/// Signed difference between a substitute and the original (substitute minus original)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionDelta {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

/// Before/after macro comparison for a substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionComparison {
    pub original: Nutrition,
    pub substitute: Nutrition,
}

impl NutritionComparison {
    pub fn delta(&self) -> NutritionDelta {
        NutritionDelta {
            calories: self.substitute.calories - self.original.calories,
            fat: self.substitute.fat - self.original.fat,
            carbs: self.substitute.carbs - self.original.carbs,
            protein: self.substitute.protein - self.original.protein,
        }
    }
}

/// One candidate replacement for an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionItem {
    /// Display name, not necessarily a canonical key
    pub substitute_ingredient: String,
    /// Free-text conversion ratio, display only
    pub ratio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionComparison>,
}

impl SubstitutionItem {
    pub fn new(substitute_ingredient: impl Into<String>, ratio: impl Into<String>) -> Self {
        Self {
            substitute_ingredient: substitute_ingredient.into(),
            ratio: ratio.into(),
            category: None,
            notes: None,
            nutrition: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_nutrition(mut self, original: Nutrition, substitute: Nutrition) -> Self {
        self.nutrition = Some(NutritionComparison {
            original,
            substitute,
        });
        self
    }

    pub(crate) fn validate(&self, owner: &str) -> CatalogResult<()> {
        if let Some(comparison) = &self.nutrition {
            comparison.original.validate(owner)?;
            comparison.substitute.validate(&self.substitute_ingredient)?;
        }
        Ok(())
    }
}

/// A primary catalog record for one original ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub original_ingredient: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Best substitute first
    pub substitutions: Vec<SubstitutionItem>,
}

/// Treat an explicit `null` list the same as a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Result shape for a free-text suggestion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    /// The caller's query, trimmed but otherwise untouched
    pub query: String,
    pub substitutions: Vec<SubstitutionItem>,
}
