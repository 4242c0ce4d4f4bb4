use crate::LocalizedMessages;
use crate::error::LoadError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load messages from a single JSON file
///
/// Nested objects are flattened into dotted keys, so both layouts below
/// produce the key `ordinalize_spatial.n_1`:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "ordinalize_spatial": { "n_1": "first" }
/// }
/// ```
/// ```json
/// { "ordinalize_spatial.n_1": "first" }
/// ```
///
/// # Errors
/// - File read errors
/// - Invalid JSON, or a root that is not an object
pub fn load_messages_from_file(path: &Path) -> Result<LocalizedMessages, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let messages = parse_messages(&content, path)?;
    debug!(
        "Loaded {} messages from {}",
        messages.get_messages().len(),
        path.display()
    );
    Ok(messages)
}

/// Parse the JSON text of one locale file. `origin` is only used in errors.
pub fn parse_messages(content: &str, origin: &Path) -> Result<LocalizedMessages, LoadError> {
    let json: Value = serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: origin.to_path_buf(),
        source,
    })?;

    let obj = json.as_object().ok_or_else(|| LoadError::InvalidRoot {
        path: origin.to_path_buf(),
    })?;

    let mut messages = LocalizedMessages::new();
    flatten_into(&mut messages, None, obj);
    Ok(messages)
}

fn flatten_into(messages: &mut LocalizedMessages, prefix: Option<&str>, obj: &Map<String, Value>) {
    for (key, value) in obj {
        // Skip metadata
        if key.starts_with('@') {
            continue;
        }

        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };

        match value {
            Value::String(message) => {
                messages.with_message(&full_key, message);
            }
            Value::Object(nested) => flatten_into(messages, Some(&full_key), nested),
            _ => warn!("Message '{}' is not a string, skipping", full_key),
        }
    }
}

/// Load all messages from a directory of JSON files
///
/// The filename (without extension) is used as the locale code:
/// `fr.json` -> locale `"fr"`, `fr-CA.json` -> locale `"fr-ca"`.
///
/// # Errors
/// - Path missing or not a directory
/// - File read/parse errors
pub fn load_all_messages_from_dir(
    dir: &Path,
) -> Result<HashMap<String, LocalizedMessages>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut all_messages = HashMap::new();

    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let locale = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| LoadError::InvalidFileName { path: path.clone() })?
            .to_lowercase();

        let messages = load_messages_from_file(&path)?;
        all_messages.insert(locale, messages);
    }

    if all_messages.is_empty() {
        warn!("No JSON files found in directory {}", dir.display());
    }

    Ok(all_messages)
}
