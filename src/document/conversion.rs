// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{ScryError, Value};

impl TryFrom<Value> for String {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ScryError::TypeError {
                message: format!("Expected string, got {}", other.type_name()),
                hint: Some("Quote the value to make it a string".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as f32),
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i32),
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i64),
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u8 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u8::MAX as f64 {
                    Ok(n as u8)
                } else {
                    Err(ScryError::TypeError {
                        message: format!("Number {} out of range for u8", n),
                        hint: Some("Use a number between 0 and 255".into()),
                        code: Some(407),
                    })
                }
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u16::MAX as f64 {
                    Ok(n as u16)
                } else {
                    Err(ScryError::TypeError {
                        message: format!("Number {} out of range for u16", n),
                        hint: Some("Use a number between 0 and 65535".into()),
                        code: Some(403),
                    })
                }
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u32::MAX as f64 {
                    Ok(n as u32)
                } else {
                    Err(ScryError::TypeError {
                        message: format!("Number {} out of range for u32", n),
                        hint: Some("Use a number between 0 and 4294967295".into()),
                        code: Some(408),
                    })
                }
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u64::MAX as f64 {
                    Ok(n as u64)
                } else {
                    Err(ScryError::TypeError {
                        message: format!("Number {} out of range for u64", n),
                        hint: Some("Use a positive number within u64 range".into()),
                        code: Some(406),
                    })
                }
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n.is_finite() {
                    Ok(n as usize)
                } else {
                    Err(ScryError::TypeError {
                        message: format!("Number {} out of range for usize", n),
                        hint: Some("Use a positive integer".into()),
                        code: Some(409),
                    })
                }
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected number, got {}", other.type_name()),
                hint: Some("Use a number value".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(s)
                if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") =>
            {
                Err(ScryError::TypeError {
                    message: format!("Expected boolean, got the string \"{}\"", s),
                    hint: Some("Drop the quotes to make this a boolean".into()),
                    code: Some(404),
                })
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected boolean, got {}", other.type_name()),
                hint: None,
                code: Some(404),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = ScryError>,
{
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(elements) => {
                let mut result = Vec::new();
                for element in elements {
                    result.push(T::try_from(element)?);
                }
                Ok(result)
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected array, got {}", other.type_name()),
                hint: Some("Use an array [...] value".into()),
                code: Some(405),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = ScryError>,
{
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Ok(entries),
            other => Err(ScryError::TypeError {
                message: format!("Expected object, got {}", other.type_name()),
                hint: Some("Use an object value".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Ok(entries.into_iter().collect()),
            other => Err(ScryError::TypeError {
                message: format!("Expected object, got {}", other.type_name()),
                hint: Some("Use an object value".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => {
                let mut map = HashMap::new();
                for (key, val) in entries {
                    map.insert(key, String::try_from(val)?);
                }
                Ok(map)
            }
            other => Err(ScryError::TypeError {
                message: format!("Expected object, got {}", other.type_name()),
                hint: Some("Use an object with string values".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for (String, String) {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(elements) if elements.len() == 2 => {
                let first = String::try_from(elements[0].clone())?;
                let second = String::try_from(elements[1].clone())?;
                Ok((first, second))
            }
            _ => Err(ScryError::TypeError {
                message: "Expected array with exactly 2 string elements".into(),
                hint: Some("Use [\"key\", \"value\"] format".into()),
                code: Some(411),
            }),
        }
    }
}

impl TryFrom<Value> for (String, Value) {
    type Error = ScryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(elements) if elements.len() == 2 => {
                let key = String::try_from(elements[0].clone())?;
                let val = elements[1].clone();
                Ok((key, val))
            }
            _ => Err(ScryError::TypeError {
                message: "Expected array with exactly 2 elements (key and value)".into(),
                hint: Some("Use [\"key\", value] format".into()),
                code: Some(411),
            }),
        }
    }
}
