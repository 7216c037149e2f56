//! Fixed category → color mapping.
//!
//! Behaves like an ordinal scale with an implicit domain: the first time a
//! category is seen it takes the next palette entry (cycling), and from then
//! on it keeps that color. Display position never enters into it.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorAssignment {
    palette: Vec<String>,
    colors: HashMap<String, usize>,
}

impl ColorAssignment {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            colors: HashMap::new(),
        }
    }

    /// Assign colors to `categories` in iteration order.
    pub fn from_categories<'a>(
        palette: Vec<String>,
        categories: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut assignment = Self::new(palette);
        for category in categories {
            assignment.assign(category);
        }
        assignment
    }

    /// Color of `category`, assigning the next palette slot if it is new.
    pub fn assign(&mut self, category: &str) -> &str {
        let next = self.colors.len();
        let slot = *self.colors.entry(category.to_string()).or_insert(next);
        self.slot_color(slot)
    }

    /// Color of an already assigned category.
    pub fn get(&self, category: &str) -> Option<&str> {
        self.colors.get(category).map(|&slot| self.slot_color(slot))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    fn slot_color(&self, slot: usize) -> &str {
        if self.palette.is_empty() {
            return "#000000";
        }
        &self.palette[slot % self.palette.len()]
    }
}
