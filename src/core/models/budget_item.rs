use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A quantity or price exactly as the user entered it.
///
/// Older budget files may hold plain JSON numbers here, so both strings and
/// numbers are accepted on load. It is always written back as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Figure(String);

impl Figure {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err("Figure cannot be empty");
        }
        Ok(Figure(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Figure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawFigure {
            Text(String),
            Number(serde_json::Number),
        }

        match RawFigure::deserialize(deserializer)? {
            RawFigure::Text(text) => Figure::new(text).map_err(D::Error::custom),
            RawFigure::Number(number) => Ok(Figure(number.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    title: String,
    quantity: Figure,
    price: Figure,
    created_at: DateTime<Utc>,
    last_updated_at: DateTime<Utc>,
}

impl BudgetItem {
    pub fn new(title: String, quantity: Figure, price: Figure) -> Self {
        let now = Utc::now();
        Self {
            title,
            quantity,
            price,
            created_at: now,
            last_updated_at: now,
        }
    }

    // Getter methods
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quantity(&self) -> &Figure {
        &self.quantity
    }

    pub fn price(&self) -> &Figure {
        &self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title == title
    }

    // Setter methods
    pub fn set_quantity(&mut self, quantity: Figure) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: Figure) {
        self.price = price;
    }

    pub fn touch(&mut self) {
        self.last_updated_at = Utc::now();
    }
}
