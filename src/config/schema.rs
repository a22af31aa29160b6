//! Schema files for the `fixturegen` binary.
//!
//! A schema file is a YAML or JSON list of field descriptors:
//!
//! ```yaml
//! - name: id
//!   kind: uuid
//! - name: email
//!   kind: string
//!   fake_query: "{firstname}.{lastname}@example.com"
//! - name: addresses
//!   kind: object_list
//!   int_range: [1, 2]
//!   children:
//!     - name: city
//!       fake_query: "{city}"
//! ```

use crate::domain::field::FieldDef;
use anyhow::{bail, Context};
use std::path::Path;

/// A schema loaded from a file, named after the file stem.
#[derive(Debug, Clone)]
pub struct NamedSchema {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// Load one schema file; the format follows the extension.
pub fn load_schema(path: &Path) -> Result<Vec<FieldDef>, anyhow::Error> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))?;

    let fields = match ext {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON schema in {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML schema in {}", path.display()))?,
        other => bail!(
            "Unsupported schema file extension '{}' for {}",
            other,
            path.display()
        ),
    };

    Ok(fields)
}

/// Load every `.json`, `.yaml` and `.yml` file in `dir`, sorted by name.
pub fn load_schemas_from_dir(dir: &Path) -> Result<Vec<NamedSchema>, anyhow::Error> {
    let pattern = format!("{}/*", dir.display());
    let mut schemas = Vec::new();

    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
                if !matches!(ext, "json" | "yaml" | "yml") {
                    continue;
                }
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string();
                let fields = load_schema(&path)?;
                schemas.push(NamedSchema { name, fields });
            }
            Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
        }
    }

    schemas.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(schemas)
}
