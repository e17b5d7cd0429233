use serde_json::{Map, Number, Value};

use crate::error::ParseError;

/// Columns of leading whitespace per nesting level.
const INDENT_WIDTH: usize = 2;

/// Parse `input` into a JSON object.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut root = Map::new();
    // open[n] is the key path of the mapping that receives lines at level n.
    let mut open: Vec<Vec<String>> = vec![Vec::new()];

    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((raw_key, raw_value)) = trimmed.split_once(':') else {
            log::debug!("yaml line {}: ignoring unsupported line `{trimmed}`", idx + 1);
            continue;
        };
        let key = unquote(raw_key.trim()).to_string();
        if key.is_empty() {
            log::debug!("yaml line {}: ignoring entry with empty key", idx + 1);
            continue;
        }
        let value = raw_value.trim();

        let indent = line.len() - line.trim_start().len();
        let level = (indent / INDENT_WIDTH).min(open.len() - 1);
        open.truncate(level + 1);

        let parent_path = open[level].clone();
        let parent = mapping_at(&mut root, &parent_path).ok_or_else(|| ParseError::Yaml {
            line: idx + 1,
            message: format!("`{}` is not a mapping", parent_path.join(".")),
        })?;

        match value {
            "" | "{}" => {
                parent.insert(key.clone(), Value::Object(Map::new()));
                let mut path = parent_path;
                path.push(key);
                open.push(path);
            }
            "[]" => {
                parent.insert(key, Value::Array(Vec::new()));
            }
            _ => {
                parent.insert(key, scalar(value));
            }
        }
    }

    Ok(Value::Object(root))
}

fn mapping_at<'a>(
    root: &'a mut Map<String, Value>,
    path: &[String],
) -> Option<&'a mut Map<String, Value>> {
    let mut current = root;
    for key in path {
        current = current.get_mut(key)?.as_object_mut()?;
    }
    Some(current)
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn scalar(value: &str) -> Value {
    let unquoted = unquote(value);
    if unquoted.len() != value.len() {
        return Value::String(unquoted.to_string());
    }

    match value {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = value.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Some(n) = value.parse::<f64>().ok().filter(|n| n.is_finite()) {
        // `1e3` reads as the integer 1000.
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            return Value::Number((n as i64).into());
        }
        if let Some(n) = Number::from_f64(n) {
            return Value::Number(n);
        }
    }

    Value::String(value.to_string())
}
