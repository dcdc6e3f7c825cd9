//! Shared loaders for wire contract tests.

use std::path::PathBuf;

use jsonschema::JSONSchema;
use serde_json::Value;

/// Absolute path of a file under the workspace `contracts/` directory.
pub fn contract_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../contracts")
        .join(relative)
}

/// Raw bytes of a contract file.
///
/// # Panics
/// Panics when the file is missing; contract files are part of the checkout.
pub fn read_contract(relative: &str) -> Vec<u8> {
    std::fs::read(contract_path(relative)).expect("contract file should be readable")
}

/// Parsed JSON of a contract file.
///
/// # Panics
/// Panics when the file is not valid JSON.
pub fn load_json(relative: &str) -> Value {
    serde_json::from_slice(&read_contract(relative)).expect("contract file should be valid json")
}

/// Compiles one schema under `contracts/`.
///
/// # Panics
/// Panics when the schema does not compile.
pub fn compile_validator(relative: &str) -> JSONSchema {
    let schema = load_json(relative);
    JSONSchema::compile(&schema).expect("schema should compile")
}
