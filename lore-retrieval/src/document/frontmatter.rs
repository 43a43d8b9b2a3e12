use std::collections::BTreeMap;

/// A document split into its metadata block and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub body: String,
}

impl ParsedDocument {
    pub fn title(&self) -> Option<String> {
        metadata_text(&self.metadata, "title")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("metadata block is not closed")]
    Unterminated,

    #[error("metadata block is not a string-keyed map: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

const DELIMITER: &str = "---";

/// Split a document into its leading `---` metadata block and body.
///
/// Documents without a leading block parse as empty metadata plus the
/// whole text as body.
pub fn parse_document(text: &str) -> Result<ParsedDocument, FrontmatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        _ => {
            return Ok(ParsedDocument {
                metadata: BTreeMap::new(),
                body: text.to_string(),
            })
        }
    }

    let mut block = String::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == DELIMITER {
            closed = true;
            break;
        }
        block.push_str(line);
    }
    if !closed {
        return Err(FrontmatterError::Unterminated);
    }

    let metadata = if block.trim().is_empty() {
        BTreeMap::new()
    } else {
        serde_yaml::from_str::<BTreeMap<String, serde_json::Value>>(&block)?
    };
    let body: String = lines.collect();

    Ok(ParsedDocument {
        metadata,
        body: body.trim_start_matches(&['\r', '\n'][..]).to_string(),
    })
}

/// String values under `key`: a list of scalars, or one comma-separated string.
pub fn metadata_strings(metadata: &BTreeMap<String, serde_json::Value>, key: &str) -> Vec<String> {
    match metadata.get(key) {
        Some(serde_json::Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(serde_json::Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Single scalar under `key` rendered as text.
pub fn metadata_text(metadata: &BTreeMap<String, serde_json::Value>, key: &str) -> Option<String> {
    metadata.get(key).and_then(scalar_text)
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
