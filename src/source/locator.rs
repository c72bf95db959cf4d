// Fri Oct 16 2026 - Alex

use crate::source::Position;
use crate::utils::hash::HashComputer;

/// Maps declaration positions to stable identifiers and output locations.
pub trait Locator: Send + Sync {
    fn id(&self, position: &Position) -> String;
    fn location(&self, position: &Position) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct HashLocator;

impl HashLocator {
    pub fn new() -> Self {
        Self
    }
}

impl Locator for HashLocator {
    fn id(&self, position: &Position) -> String {
        HashComputer::fnv1a_64_hex(position.to_string().as_bytes())
    }

    fn location(&self, position: &Position) -> String {
        position.unit.clone()
    }
}
