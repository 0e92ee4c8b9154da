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

//! Error types shared by every lattice component

/// Represents an error raised by a lattice operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LatticeError {
    /// A malformed element was handed to a public entry point
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs at least one inserted element
    #[error("Lattice is empty")]
    EmptyLattice,

    /// A measure ratio has a zero denominator
    #[error("Domain error: {0}")]
    DomainError(String),

    /// The covering graph no longer satisfies one of its structural invariants
    #[error("Invariant {invariant} violated: {detail}")]
    InvariantViolation { invariant: &'static str, detail: String },
}

impl LatticeError {
    /// Shorthand for building an invariant violation
    pub fn invariant(invariant: &'static str, detail: impl Into<String>) -> Self {
        LatticeError::InvariantViolation { invariant, detail: detail.into() }
    }
}

/// Result type for lattice operations
pub type LatticeResult<T> = Result<T, LatticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(LatticeError::InvalidArgument("negative measure".to_string()).to_string(), "Invalid argument: negative measure");
        assert_eq!(LatticeError::EmptyLattice.to_string(), "Lattice is empty");
        assert_eq!(LatticeError::DomainError("zero denominator".to_string()).to_string(), "Domain error: zero denominator");
        assert_eq!(LatticeError::invariant("cover", "edge 1-2 is a shortcut").to_string(), "Invariant cover violated: edge 1-2 is a shortcut");
    }
}
