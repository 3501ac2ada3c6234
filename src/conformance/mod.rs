//! The flattened token stream used by conformance fixtures: each step as a
//! sequence of text runs interleaved with annotations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepToken {
    Text {
        value: String,
    },
    Ingredient {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<TokenQuantity>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        units: Option<String>,
    },
    Cookware {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<TokenQuantity>,
    },
    Timer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<TokenQuantity>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        units: Option<String>,
    },
}

/// Quantities appear in fixtures as either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenQuantity {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl From<Quantity<'_>> for Option<TokenQuantity> {
    fn from(quantity: Quantity<'_>) -> Self {
        match quantity {
            Quantity::Unset => None,
            Quantity::Integer(number) => Some(TokenQuantity::Integer(number)),
            Quantity::Decimal(decimal) => Some(TokenQuantity::Decimal(decimal.to_f64())),
            Quantity::Fraction {
                numerator,
                denominator,
            } => Some(TokenQuantity::Decimal(
                numerator as f64 / denominator as f64,
            )),
            Quantity::Raw(text) => Some(TokenQuantity::Text(text.to_string())),
        }
    }
}

impl From<&Annotation<'_>> for StepToken {
    fn from(annotation: &Annotation<'_>) -> Self {
        match annotation {
            Annotation::Ingredient(ingredient) => StepToken::Ingredient {
                name: ingredient
                    .name
                    .to_string(),
                quantity: ingredient
                    .amount
                    .quantity
                    .into(),
                units: ingredient
                    .amount
                    .unit
                    .map(str::to_string),
            },
            Annotation::Cookware(cookware) => StepToken::Cookware {
                name: cookware
                    .name
                    .to_string(),
                quantity: cookware
                    .quantity
                    .into(),
            },
            Annotation::Timer(timer) => StepToken::Timer {
                name: timer
                    .name
                    .map(str::to_string),
                quantity: timer
                    .duration
                    .into(),
                units: timer
                    .unit
                    .map(str::to_string),
            },
        }
    }
}

/// The expected outcome of parsing one fixture source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expected {
    pub steps: Vec<Vec<StepToken>>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub source: String,
    pub result: Expected,
}

/// A versioned collection of named test cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub version: u32,
    pub tests: BTreeMap<String, TestCase>,
}

impl Fixture {
    pub fn from_json(content: &str) -> Result<Fixture, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Flatten a step into text runs and annotations in offset order. Empty
/// text runs are omitted, so a step with no directions at all yields no
/// tokens.
pub fn tokens(step: &Step<'_>) -> Vec<StepToken> {
    let directions = &step.directions;
    let mut result = Vec::new();
    let mut cursor = 0;

    for annotation in step.annotations() {
        let idx = annotation.idx();
        if idx > cursor {
            result.push(StepToken::Text {
                value: directions[cursor..idx].to_string(),
            });
        }
        result.push(StepToken::from(&annotation));
        cursor = idx
            + annotation
                .name()
                .len();
    }

    if cursor < directions.len() {
        result.push(StepToken::Text {
            value: directions[cursor..].to_string(),
        });
    }

    result
}

/// Convert a whole recipe into the fixture result shape.
pub fn render(recipe: &Recipe<'_>) -> Expected {
    Expected {
        steps: recipe
            .steps
            .iter()
            .map(tokens)
            .collect(),
        metadata: recipe
            .metadata
            .clone(),
    }
}
