//! Ordered item list carried by the player

use crate::core::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Ordered list of item names. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of the list
    pub fn add(&mut self, item: &str) -> Result<()> {
        if item.is_empty() {
            return Err(GameError::InvalidArgument(
                "Item name must not be empty".into(),
            ));
        }
        self.items.push(item.to_string());
        Ok(())
    }

    /// Remove the first item with this exact name
    pub fn remove(&mut self, item: &str) -> Result<()> {
        let pos = self
            .items
            .iter()
            .position(|i| i == item)
            .ok_or_else(|| GameError::ItemNotFound(item.to_string()))?;
        self.items.remove(pos);
        Ok(())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item count followed by each item, space separated: `2 Sword Shield`
    pub fn to_payload(&self) -> String {
        let mut payload = self.items.len().to_string();
        for item in &self.items {
            payload.push(' ');
            payload.push_str(item);
        }
        payload
    }

    /// Parse a payload written by [`Inventory::to_payload`]
    ///
    /// Items are whitespace-separated tokens and at most `count` of them are
    /// read, so an item name containing a space does not survive a round trip.
    /// A payload with fewer tokens than its count yields what is present.
    pub fn from_payload(payload: &str) -> Result<Self> {
        let mut tokens = payload.split_whitespace();
        let count: usize = tokens
            .next()
            .ok_or_else(|| GameError::MalformedRecord("inventory payload is empty".into()))?
            .parse()
            .map_err(|e| GameError::MalformedRecord(format!("inventory count: {}", e)))?;

        let items = tokens.take(count).map(str::to_string).collect();
        Ok(Self { items })
    }
}
