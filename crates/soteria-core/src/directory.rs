//! Subject directory abstraction.
//!
//! The directory is the system of record for subjects. The claims layer
//! consumes it through the [`SubjectDirectory`] trait so that backing stores
//! can be swapped (in-memory for tests and mock deployments, database-backed
//! in production) without touching the core logic.

use crate::subject::Subject;
use async_trait::async_trait;
use std::collections::HashMap;

/// Read-only lookup of subjects by their opaque subject id.
#[async_trait]
pub trait SubjectDirectory: Send + Sync {
    /// Find a subject by its subject id. Returns `None` for unknown ids.
    async fn find_by_subject_id(&self, subject_id: &str) -> Option<Subject>;
}

/// In-memory subject directory.
///
/// Populated up front and immutable afterwards, so it is safe to share
/// behind an `Arc` across concurrent requests.
#[derive(Debug, Default, Clone)]
pub struct InMemorySubjectDirectory {
    subjects: HashMap<String, Subject>,
}

impl InMemorySubjectDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subject, replacing any existing entry with the same id.
    pub fn insert(&mut self, subject: Subject) {
        self.subjects.insert(subject.subject_id.clone(), subject);
    }

    /// Number of subjects in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl FromIterator<Subject> for InMemorySubjectDirectory {
    fn from_iter<I: IntoIterator<Item = Subject>>(iter: I) -> Self {
        let mut directory = Self::new();
        for subject in iter {
            directory.insert(subject);
        }
        directory
    }
}

#[async_trait]
impl SubjectDirectory for InMemorySubjectDirectory {
    async fn find_by_subject_id(&self, subject_id: &str) -> Option<Subject> {
        self.subjects.get(subject_id).cloned()
    }
}
