//! Chain registries bundled with the lib

use std::collections::HashMap;

use eyre::Context;
use once_cell::sync::OnceCell;

use crate::ChainRegistry;

// built-in registry objects
static TEST_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/configs/test.json"));
static TESTNET_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/configs/testnet.json"));
static MAINNET_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/configs/mainnet.json"));
static BUILTINS: OnceCell<HashMap<&'static str, OnceCell<ChainRegistry>>> = OnceCell::new();

fn deser(name: &str, json: &str) -> eyre::Result<ChainRegistry> {
    serde_json::from_str::<ChainRegistry>(json)
        .wrap_err_with(|| format!("Registry {}.json is malformed", name))?
        .chained_validate()
        .wrap_err_with(|| format!("Registry {}.json is invalid", name))
}

/// Names of the built-in registries
pub fn builtin_names() -> &'static [&'static str] {
    &["test", "testnet", "mainnet"]
}

/// Get a built-in chain registry. Returns `Ok(None)` for unknown names
pub fn get_builtin(name: &str) -> eyre::Result<Option<&'static ChainRegistry>> {
    let builtins = BUILTINS.get_or_init(|| {
        builtin_names()
            .iter()
            .map(|name| (*name, OnceCell::new()))
            .collect()
    });

    let cell = match builtins.get(name) {
        Some(cell) => cell,
        None => return Ok(None),
    };

    cell.get_or_try_init(|| match name {
        "test" => deser("test", TEST_JSON),
        "testnet" => deser("testnet", TESTNET_JSON),
        "mainnet" => deser("mainnet", MAINNET_JSON),
        _ => eyre::bail!("unknown builtin {}", name),
    })
    .map(Some)
}
