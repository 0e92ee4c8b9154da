// Galois
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Lattice configuration

use serde::{Deserialize, Serialize};

/// Configuration of a [`CompleteLattice`](crate::lattice::CompleteLattice)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// Color tag written on every vertex the lattice creates
    pub color: u32,
    /// Audit the covering-graph invariants after every insertion
    pub verify_invariants: bool,
}

impl LatticeConfig {
    pub fn new(color: u32, verify_invariants: bool) -> Self {
        Self { color, verify_invariants }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self::new(0, cfg!(debug_assertions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LatticeConfig::default();
        assert_eq!(config.color, 0);
        assert_eq!(config.verify_invariants, cfg!(debug_assertions));
    }

    #[test]
    fn test_builder() {
        let config = LatticeConfig::default().with_color(3).with_verification(false);
        assert_eq!(config, LatticeConfig::new(3, false));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: LatticeConfig = serde_json::from_str(r#"{"color": 7}"#).unwrap();
        assert_eq!(config.color, 7);
        assert_eq!(config.verify_invariants, cfg!(debug_assertions));
    }
}
