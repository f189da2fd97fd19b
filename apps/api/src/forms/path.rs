use std::fmt;
use std::str::FromStr;

use crate::forms::FormError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Dotted address of a form field: `summary`, `personalInfo.email`, `experience.1.title`.
///
/// Purely numeric segments address list positions; everything else is a field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Top-level field name (`experience` for `experience.1.title`).
    pub fn root(&self) -> &str {
        match self.segments.first() {
            Some(Segment::Key(k)) => k,
            _ => "",
        }
    }

    pub fn is_root(&self, name: &str) -> bool {
        self.segments.len() == 1 && self.root() == name
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FormError::InvalidPath(raw.to_string()));
        }

        let mut segments = Vec::new();
        for part in raw.split('.') {
            if part.is_empty() {
                return Err(FormError::InvalidPath(raw.to_string()));
            }
            let segment = if part.bytes().all(|b| b.is_ascii_digit()) {
                let index = part
                    .parse::<usize>()
                    .map_err(|_| FormError::InvalidPath(raw.to_string()))?;
                Segment::Index(index)
            } else {
                Segment::Key(part.to_string())
            };
            segments.push(segment);
        }

        if !matches!(segments.first(), Some(Segment::Key(_))) {
            return Err(FormError::InvalidPath(raw.to_string()));
        }

        Ok(FieldPath { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                Segment::Key(k) => f.write_str(k)?,
                Segment::Index(n) => write!(f, "{n}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_nested_list_path() {
        let path: FieldPath = "experience.1.title".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("experience".to_string()),
                Segment::Index(1),
                Segment::Key("title".to_string()),
            ]
        );
        assert_eq!(path.root(), "experience");
        assert_eq!(path.to_string(), "experience.1.title");
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!("".parse::<FieldPath>().is_err());
        assert!("personalInfo..email".parse::<FieldPath>().is_err());
        assert!("summary.".parse::<FieldPath>().is_err());
    }

    #[test]
    fn test_rejects_leading_index() {
        assert!("0.title".parse::<FieldPath>().is_err());
    }

    #[test]
    fn test_is_root() {
        let path: FieldPath = "title".parse().unwrap();
        assert!(path.is_root("title"));
        let nested: FieldPath = "contact.email".parse().unwrap();
        assert!(!nested.is_root("contact"));
    }
}
