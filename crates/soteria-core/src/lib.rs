//! soteria core library.
//!
//! Shared domain types for the soteria identity provider.
//!
//! # Modules
//!
//! - [`claim`] - Claim type and value-type markers
//! - [`subject`] - Subject (authenticated principal)
//! - [`directory`] - Subject directory trait and in-memory implementation
//!
//! # Example
//!
//! ```
//! use soteria_core::{Claim, InMemorySubjectDirectory, Subject};
//!
//! let directory: InMemorySubjectDirectory = [Subject::new(
//!     "u1",
//!     vec![Claim::new("email", "alice@example.com")],
//! )]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(directory.len(), 1);
//! ```

pub mod claim;
pub mod directory;
pub mod subject;

// Re-export main types for convenient access
pub use claim::{claim_value_types, Claim};
pub use directory::{InMemorySubjectDirectory, SubjectDirectory};
pub use subject::Subject;
