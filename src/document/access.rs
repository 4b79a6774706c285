use super::*;

use crate::path;

impl ScryDocument {
    /// Run a path query, returning every match in document order.
    ///
    /// # Examples
    /// ```
    /// # use scry_json::ScryDocument;
    /// let doc = ScryDocument::from_str(r#"{"users": [{"name": "Al"}, {"name": "Bo"}]}"#)?;
    /// let names = doc.query("$.users[*].name")?;
    /// assert_eq!(names.len(), 2);
    /// # Ok::<(), scry_json::ScryError>(())
    /// ```
    ///
    /// # Errors
    /// Fails only when the path itself is malformed. A well-formed path
    /// that matches nothing returns an empty vec.
    pub fn query(&self, path: &str) -> Result<Vec<&Value>, ScryError> {
        let expr = path::parse(path)?;
        Ok(path::evaluate(&self.root, &expr))
    }

    /// Query with the single-vs-many presentation rule applied: exactly
    /// one match comes back as the bare value, zero or several come back
    /// wrapped in an array.
    pub fn query_value(&self, path: &str) -> Result<Value, ScryError> {
        let mut matches = self.query(path)?;
        if matches.len() == 1 {
            return Ok(matches.remove(0).clone());
        }
        Ok(Value::Array(matches.into_iter().cloned().collect()))
    }

    /// Query and re-serialize the result. `None` minifies, `Some(n)`
    /// pretty-prints with an n-space indent.
    pub fn query_text(&self, path: &str, indent: Option<usize>) -> Result<String, ScryError> {
        let value = self.query_value(path)?;
        Ok(match indent {
            Some(width) => json::to_string_pretty(&value, width),
            None => json::to_string(&value),
        })
    }

    /// Query and project the result as a tree, keeping collapse state
    /// from `prior` when given.
    pub fn query_tree(&self, path: &str, prior: Option<&TreeNode>) -> Result<TreeNode, ScryError> {
        let value = self.query_value(path)?;
        Ok(tree::project(&value, prior))
    }

    /// Get a typed value at a path that matches exactly once.
    ///
    /// # Examples
    /// ```
    /// # use scry_json::ScryDocument;
    /// let doc = ScryDocument::from_str(r#"{"server": {"host": "localhost", "port": 8080}}"#)?;
    /// let host: String = doc.get("$.server.host")?;
    /// let port: u16 = doc.get("$.server.port")?;
    /// assert_eq!((host.as_str(), port), ("localhost", 8080));
    /// # Ok::<(), scry_json::ScryError>(())
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path is malformed, matches nothing,
    /// matches more than once, or the value can't convert to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, ScryError>
    where
        T: TryFrom<Value, Error = ScryError>,
    {
        T::try_from(self.single_match(path)?)
    }

    /// Get an optional typed value. A path that matches nothing is `None`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, ScryError>
    where
        T: TryFrom<Value, Error = ScryError>,
    {
        match self.single_match(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(ScryError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a typed value with a fallback default.
    ///
    /// # Examples
    /// ```
    /// # use scry_json::ScryDocument;
    /// # let doc = ScryDocument::from_str(r#"{"a": 1}"#).unwrap();
    /// let timeout = doc.get_or("$.timeout", 30u64);
    /// assert_eq!(timeout, 30);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = ScryError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Check whether a path matches at least once. Malformed paths
    /// count as not matching.
    pub fn has(&self, path: &str) -> bool {
        self.query(path).map(|matches| !matches.is_empty()).unwrap_or(false)
    }

    /// Keys of the object at a path that matches exactly once, in
    /// document order.
    pub fn keys(&self, path: &str) -> Result<Vec<String>, ScryError> {
        match self.single_match(path)? {
            Value::Object(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(ScryError::TypeError {
                message: format!("Path '{}' is not an object, got {}", path, other.type_name()),
                hint: Some("Only objects have keys".into()),
                code: Some(306),
            }),
        }
    }

    fn single_match(&self, path: &str) -> Result<Value, ScryError> {
        let mut matches = self.query(path)?;
        match matches.len() {
            0 => Err(ScryError::NotFound {
                path: path.to_string(),
                hint: Some("Check that the path exists in your document".into()),
                code: Some(304),
            }),
            1 => Ok(matches.remove(0).clone()),
            n => Err(ScryError::TypeError {
                message: format!("Path '{}' matched {} values, expected exactly one", path, n),
                hint: Some("Use query() for paths that can match more than once".into()),
                code: Some(412),
            }),
        }
    }
}
