//! Form state holder: field-level reads and writes on typed documents.
//!
//! Fields are addressed with dotted paths (`personalInfo.email`, `experience.1.title`).
//! Writes go through the document's serde representation and are deserialized back into
//! the typed record, so every mutation is validated at the boundary: a value must have the
//! same JSON kind as the slot it replaces, and whole-list writes must deserialize into the
//! list's entry type.
//!
//! Removing a list entry by an out-of-range index is a no-op reported as `removed = false`.

pub mod path;
pub mod workspace;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::forms::path::{FieldPath, Segment};
use crate::models::cover_letter::{CoverLetterDocument, Tone};
use crate::models::portfolio::{slugify, PortfolioDocument};
use crate::models::resume::ResumeDocument;
use crate::models::Document;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid field path '{0}'")]
    InvalidPath(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("index {index} out of range for '{field}' (length {len})")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    #[error("'{0}' is not a list field")]
    NotAList(String),

    #[error("invalid value for '{field}': {reason}")]
    InvalidEntry { field: String, reason: String },
}

/// List fields a document exposes to `append` / `remove_at`.
pub trait ListFields {
    const LIST_FIELDS: &'static [&'static str];
}

impl ListFields for ResumeDocument {
    const LIST_FIELDS: &'static [&'static str] =
        &["experience", "education", "projects", "certifications"];
}

impl ListFields for PortfolioDocument {
    const LIST_FIELDS: &'static [&'static str] = &["projects", "experience"];
}

impl ListFields for CoverLetterDocument {
    const LIST_FIELDS: &'static [&'static str] = &[];
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a record",
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn resolve<'v>(root: &'v Value, path: &FieldPath) -> Result<&'v Value, FormError> {
    let mut current = root;
    for segment in path.segments() {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map
                .get(key)
                .ok_or_else(|| FormError::UnknownField(path.to_string()))?,
            (Segment::Index(index), Value::Array(items)) => {
                items.get(*index).ok_or(FormError::IndexOutOfRange {
                    field: path.to_string(),
                    index: *index,
                    len: items.len(),
                })?
            }
            _ => return Err(FormError::UnknownField(path.to_string())),
        };
    }
    Ok(current)
}

fn resolve_mut<'v>(root: &'v mut Value, path: &FieldPath) -> Result<&'v mut Value, FormError> {
    let mut current = root;
    for segment in path.segments() {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map
                .get_mut(key)
                .ok_or_else(|| FormError::UnknownField(path.to_string()))?,
            (Segment::Index(index), Value::Array(items)) => {
                let len = items.len();
                items.get_mut(*index).ok_or(FormError::IndexOutOfRange {
                    field: path.to_string(),
                    index: *index,
                    len,
                })?
            }
            _ => return Err(FormError::UnknownField(path.to_string())),
        };
    }
    Ok(current)
}

/// Reads the value at `path` in its form (JSON) representation.
pub fn get_field<D: Serialize>(doc: &D, path: &FieldPath) -> Result<Value, FormError> {
    let root = serde_json::to_value(doc).map_err(|e| FormError::InvalidEntry {
        field: path.to_string(),
        reason: e.to_string(),
    })?;
    resolve(&root, path).cloned()
}

/// Replaces the value at `path`. The new value must match the slot's kind and the whole
/// document must still deserialize afterwards.
pub fn set_field<D: Serialize + DeserializeOwned>(
    doc: &mut D,
    path: &FieldPath,
    value: Value,
) -> Result<(), FormError> {
    let invalid = |e: serde_json::Error| FormError::InvalidEntry {
        field: path.to_string(),
        reason: e.to_string(),
    };

    let mut root = serde_json::to_value(&*doc).map_err(invalid)?;
    let slot = resolve_mut(&mut root, path)?;
    if !same_kind(slot, &value) {
        return Err(FormError::TypeMismatch {
            field: path.to_string(),
            expected: kind_name(slot),
            actual: kind_name(&value),
        });
    }
    *slot = value;

    *doc = serde_json::from_value(root).map_err(invalid)?;
    Ok(())
}

/// Appends `entry` (or a blank entry) and returns its position in the list.
pub fn append_entry<T: DeserializeOwned + Default>(
    list: &mut Vec<T>,
    field: &str,
    entry: Option<Value>,
) -> Result<usize, FormError> {
    let entry = match entry {
        None | Some(Value::Null) => T::default(),
        Some(value @ Value::Object(_)) => {
            serde_json::from_value(value).map_err(|e| FormError::InvalidEntry {
                field: field.to_string(),
                reason: e.to_string(),
            })?
        }
        Some(other) => {
            return Err(FormError::TypeMismatch {
                field: field.to_string(),
                expected: "a record",
                actual: kind_name(&other),
            })
        }
    };
    list.push(entry);
    Ok(list.len() - 1)
}

/// Removes the entry at `index`, keeping the order of the rest. Out of range is a no-op.
pub fn remove_entry<T>(list: &mut Vec<T>, field: &str, index: usize) -> bool {
    if index >= list.len() {
        warn!(
            "Ignoring removal of {field}.{index}: list has {} entries",
            list.len()
        );
        return false;
    }
    list.remove(index);
    true
}

impl ResumeDocument {
    fn append(&mut self, list: &str, entry: Option<Value>) -> Result<usize, FormError> {
        match list {
            "experience" => append_entry(&mut self.experience, list, entry),
            "education" => append_entry(&mut self.education, list, entry),
            "projects" => append_entry(&mut self.projects, list, entry),
            "certifications" => append_entry(&mut self.certifications, list, entry),
            other => Err(not_a_list(other)),
        }
    }

    fn remove_at(&mut self, list: &str, index: usize) -> Result<bool, FormError> {
        Ok(match list {
            "experience" => remove_entry(&mut self.experience, list, index),
            "education" => remove_entry(&mut self.education, list, index),
            "projects" => remove_entry(&mut self.projects, list, index),
            "certifications" => remove_entry(&mut self.certifications, list, index),
            other => return Err(not_a_list(other)),
        })
    }
}

impl PortfolioDocument {
    fn append(&mut self, list: &str, entry: Option<Value>) -> Result<usize, FormError> {
        match list {
            "projects" => append_entry(&mut self.projects, list, entry),
            "experience" => append_entry(&mut self.experience, list, entry),
            other => Err(not_a_list(other)),
        }
    }

    fn remove_at(&mut self, list: &str, index: usize) -> Result<bool, FormError> {
        Ok(match list {
            "projects" => remove_entry(&mut self.projects, list, index),
            "experience" => remove_entry(&mut self.experience, list, index),
            other => return Err(not_a_list(other)),
        })
    }
}

fn not_a_list(field: &str) -> FormError {
    FormError::NotAList(field.to_string())
}

impl Document {
    pub fn list_fields(&self) -> &'static [&'static str] {
        match self {
            Document::Resume(_) => ResumeDocument::LIST_FIELDS,
            Document::CoverLetter(_) => CoverLetterDocument::LIST_FIELDS,
            Document::Portfolio(_) => PortfolioDocument::LIST_FIELDS,
        }
    }

    pub fn get(&self, path: &FieldPath) -> Result<Value, FormError> {
        match self {
            Document::Resume(doc) => get_field(doc, path),
            Document::CoverLetter(doc) => get_field(doc, path),
            Document::Portfolio(doc) => get_field(doc, path),
        }
    }

    pub fn set(&mut self, path: &FieldPath, value: Value) -> Result<(), FormError> {
        debug!("Setting field {path} on {:?}", self.kind());
        match self {
            Document::Resume(doc) => set_field(doc, path, value),
            Document::CoverLetter(doc) => {
                // Tones are validated leniently: anything unrecognised means formal.
                if path.is_root("tone") {
                    let raw = value.as_str().ok_or(FormError::TypeMismatch {
                        field: path.to_string(),
                        expected: "a string",
                        actual: kind_name(&value),
                    })?;
                    doc.tone = Tone::parse_lenient(raw);
                    return Ok(());
                }
                set_field(doc, path, value)
            }
            Document::Portfolio(doc) => {
                set_field(doc, path, value)?;
                if path.is_root("title") {
                    doc.slug = slugify(&doc.title);
                }
                Ok(())
            }
        }
    }

    /// Appends an entry to `list` and returns its index; `entry` defaults to a blank record.
    pub fn append(&mut self, list: &str, entry: Option<Value>) -> Result<usize, FormError> {
        debug!("Appending to {list} on {:?}", self.kind());
        match self {
            Document::Resume(doc) => doc.append(list, entry),
            Document::Portfolio(doc) => doc.append(list, entry),
            Document::CoverLetter(_) => Err(FormError::NotAList(list.to_string())),
        }
    }

    /// Removes `list[index]`; returns whether anything was removed.
    pub fn remove_at(&mut self, list: &str, index: usize) -> Result<bool, FormError> {
        match self {
            Document::Resume(doc) => doc.remove_at(list, index),
            Document::Portfolio(doc) => doc.remove_at(list, index),
            Document::CoverLetter(_) => Err(FormError::NotAList(list.to_string())),
        }
    }
}
