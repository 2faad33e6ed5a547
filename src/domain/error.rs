//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the tree structure itself.
/// Building trees and heaps never fails; these only surface when an
/// index is looked up against a tree it does not belong to.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found in tree: {0:?}")]
    NodeNotFound(Index),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
