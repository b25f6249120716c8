//! Language symbol tables
//!
//! Per-language punctuation and spacing rules consulted by validators. Tables
//! are embedded TOML resources deserialized into a runtime lookup structure,
//! selected once per language at engine startup and shared read-only by
//! reference across all validators in a run.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::ConfigurationError;

/// Root symbol file structure (matches TOML).
#[derive(Debug, Clone, Deserialize)]
struct SymbolFile {
    table: TableMeta,
    symbols: Vec<SymbolDef>,
}

#[derive(Debug, Clone, Deserialize)]
struct TableMeta {
    language: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SymbolDef {
    name: String,
    value: String,
    #[serde(default)]
    before_space: bool,
    #[serde(default)]
    after_space: bool,
    #[serde(default)]
    invalid: Vec<String>,
}

/// A configured punctuation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub value: String,
    pub needs_before_space: bool,
    pub needs_after_space: bool,
    pub invalid_symbols: Vec<String>,
}

/// Language-specific symbol set, read-only during validation.
///
/// Symbols are kept in a sorted map so that validators iterating the table
/// report findings in a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    pub language: String,
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    /// Look up a symbol by name (e.g. `"COMMA"`).
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Iterate all symbols in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Parse the embedded table for a language.
    fn load(language: &str) -> Result<Self, ConfigurationError> {
        let embedded = match language {
            "en" => include_str!("../resources/symbols/en.toml"),
            "ja" => include_str!("../resources/symbols/ja.toml"),
            other => return Err(ConfigurationError::UnknownLanguage(other.to_string())),
        };
        let file: SymbolFile =
            toml::from_str(embedded).map_err(|e| ConfigurationError::BadResource {
                resource: format!("symbols/{language}.toml"),
                reason: e.to_string(),
            })?;
        Ok(Self::from(file))
    }
}

impl From<SymbolFile> for SymbolTable {
    fn from(file: SymbolFile) -> Self {
        let symbols = file
            .symbols
            .into_iter()
            .map(|def| {
                (
                    def.name.clone(),
                    Symbol {
                        name: def.name,
                        value: def.value,
                        needs_before_space: def.before_space,
                        needs_after_space: def.after_space,
                        invalid_symbols: def.invalid,
                    },
                )
            })
            .collect();
        Self {
            language: file.table.language,
            symbols,
        }
    }
}

static TABLE_CACHE: Lazy<Mutex<HashMap<String, Arc<SymbolTable>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Fetch the shared table for a language, constructing it at most once per
/// key. The lock is held across construction so concurrent first use cannot
/// build the same table twice.
pub fn table_for(language: &str) -> Result<Arc<SymbolTable>, ConfigurationError> {
    let mut cache = TABLE_CACHE.lock().unwrap();
    if let Some(table) = cache.get(language) {
        return Ok(Arc::clone(table));
    }
    let table = Arc::new(SymbolTable::load(language)?);
    cache.insert(language.to_string(), Arc::clone(&table));
    Ok(table)
}
