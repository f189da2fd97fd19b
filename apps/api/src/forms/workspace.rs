use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{Document, DocumentKind};

/// A document open in the editor, with bookkeeping timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct StoredDocument {
    pub id: Uuid,
    pub document: Document,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub id: Uuid,
    pub kind: DocumentKind,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

/// In-memory set of documents being edited. Nothing here outlives the process;
/// saving means exporting.
#[derive(Debug, Default)]
pub struct Workspace {
    documents: HashMap<Uuid, StoredDocument>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, kind: DocumentKind, demo: bool) -> &StoredDocument {
        let document = if demo {
            Document::demo(kind)
        } else {
            Document::blank(kind)
        };
        self.insert(document)
    }

    pub fn insert(&mut self, document: Document) -> &StoredDocument {
        let now = Utc::now();
        let id = Uuid::new_v4();
        info!("Opened {:?} document {id}", document.kind());
        self.documents.entry(id).or_insert(StoredDocument {
            id,
            document,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get(&self, id: Uuid) -> Option<&StoredDocument> {
        self.documents.get(&id)
    }

    /// Runs `f` against the document and bumps `updated_at` when it succeeds.
    pub fn update<T, E>(
        &mut self,
        id: Uuid,
        f: impl FnOnce(&mut Document) -> Result<T, E>,
    ) -> Option<Result<T, E>> {
        let stored = self.documents.get_mut(&id)?;
        let result = f(&mut stored.document);
        if result.is_ok() {
            stored.updated_at = Utc::now();
        }
        Some(result)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<StoredDocument> {
        let removed = self.documents.remove(&id);
        if removed.is_some() {
            info!("Closed document {id}");
        }
        removed
    }

    /// Most recently edited first.
    pub fn summaries(&self) -> Vec<DocumentSummary> {
        let mut rows: Vec<_> = self
            .documents
            .values()
            .map(|stored| DocumentSummary {
                id: stored.id,
                kind: stored.document.kind(),
                title: stored.document.display_title(),
                updated_at: stored.updated_at,
            })
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        rows
    }

    pub fn count(&self, kind: DocumentKind) -> usize {
        self.documents
            .values()
            .filter(|stored| stored.document.kind() == kind)
            .count()
    }
}
