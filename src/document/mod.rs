// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Value;
use crate::error::ScryError;
use crate::json;
use crate::tree::{self, TreeNode};

mod access;
mod conversion;

/// A loaded JSON document plus the raw text it was parsed from.
///
/// The raw text is kept so error offsets can be mapped back to
/// line/column for display with [`crate::locate::locate`].
#[derive(Debug)]
pub struct ScryDocument {
    raw: String,
    root: Value,
}

impl ScryDocument {
    /// Parse a document from a string.
    ///
    /// # Example
    /// ```
    /// use scry_json::ScryDocument;
    ///
    /// let doc = ScryDocument::from_str(r#"{"name": "scry"}"#)?;
    /// let name: String = doc.get("$.name")?;
    /// assert_eq!(name, "scry");
    /// # Ok::<(), scry_json::ScryError>(())
    /// ```
    pub fn from_str(text: &str) -> Result<Self, ScryError> {
        let root = json::parse(text)?;
        Ok(Self {
            raw: text.to_string(),
            root,
        })
    }

    /// Load a document from a file. A leading `~` expands to the home
    /// directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScryError> {
        let resolved = resolve_path(path.as_ref())?;

        let text = fs::read_to_string(&resolved).map_err(|e| ScryError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Self::from_str(&text)
    }

    /// Check a string for well-formedness without keeping the document.
    pub fn validate(text: &str) -> Result<(), ScryError> {
        json::parse(text).map(|_| ())
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The original text the document was parsed from.
    pub fn text(&self) -> &str {
        &self.raw
    }

    /// Re-serialize the document with `indent` spaces per level.
    pub fn format(&self, indent: usize) -> String {
        json::to_string_pretty(&self.root, indent)
    }

    /// Re-serialize the document without any whitespace.
    pub fn minify(&self) -> String {
        json::to_string(&self.root)
    }

    /// Project the whole document as a tree, fully expanded.
    pub fn tree(&self) -> TreeNode {
        tree::project(&self.root, None)
    }

    /// Project the whole document, keeping collapse state from `prior`.
    pub fn tree_with_prior(&self, prior: &TreeNode) -> TreeNode {
        tree::project(&self.root, Some(prior))
    }
}

/// Expand a leading "~" against the home directory.
fn resolve_path(raw: &Path) -> Result<PathBuf, ScryError> {
    match raw.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| ScryError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: raw.to_string_lossy().to_string(),
                hint: Some("Set HOME or use an absolute path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(raw.to_path_buf()),
    }
}

#[cfg(test)]
mod tests;
