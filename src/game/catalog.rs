//! file: catalog.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:31:27 Saturday
//! brief: quiz entries and the validated catalog

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs into `0xRRGGBB`, the form `gpui::rgb` takes.
    pub fn to_hex(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub description: String,
    pub color: Rgb,
}

impl ServiceEntry {
    pub fn new(name: &str, description: &str, color: Rgb) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            color,
        }
    }
}

pub fn default_entries() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry::new("S3", "Stores your pictures and videos", Rgb::new(244, 153, 66)),
        ServiceEntry::new("EC2", "Runs your computer games", Rgb::new(237, 130, 14)),
        ServiceEntry::new(
            "Lambda",
            "Does magic when you click buttons",
            Rgb::new(254, 153, 0),
        ),
        ServiceEntry::new("DynamoDB", "Remembers your high scores", Rgb::new(79, 104, 189)),
        ServiceEntry::new("CloudWatch", "Watches over your games", Rgb::new(66, 133, 244)),
        ServiceEntry::new("IAM", "Keeps your games safe", Rgb::new(214, 91, 48)),
    ]
}

/// Entries with pairwise distinct descriptions, at least two of them.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<ServiceEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<ServiceEntry>) -> Result<Self> {
        if entries.len() < 2 {
            return Err(GameError::InsufficientCatalog { len: entries.len() });
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.description.as_str()) {
                return Err(GameError::DuplicateDescription {
                    description: entry.description.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: default_entries(),
        }
    }
}
