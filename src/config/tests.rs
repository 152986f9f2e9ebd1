//! Tests for config module.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Parse config from YAML string (for testing).
fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

fn minimal_valid_yaml() -> String {
    r#"
tokens:
  - symbol: zrx
    name: 0x Protocol Token
    decimals: 18
    display_decimals: 2
  - symbol: weth
    name: Wrapped Ether
    decimals: 18
    display_decimals: 2

markets:
  - base: zrx
    quote: weth
    price_precision: 8
"#
    .to_string()
}

// ==================== Loading tests ====================

#[test]
fn test_load_token_fields() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();

    assert_eq!(cfg.tokens.len(), 2);
    assert_eq!(cfg.tokens[0].symbol, "zrx");
    assert_eq!(cfg.tokens[0].name, "0x Protocol Token");
    assert_eq!(cfg.tokens[0].decimals, 18);
    assert_eq!(cfg.tokens[0].display_decimals, 2);
}

#[test]
fn test_load_market_fields() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();

    assert_eq!(cfg.markets.len(), 1);
    assert_eq!(cfg.markets[0].base, "zrx");
    assert_eq!(cfg.markets[0].quote, "weth");
    assert_eq!(cfg.markets[0].price_precision, 8);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(minimal_valid_yaml().as_bytes()).unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.tokens.len(), 2);
}

#[test]
fn test_load_missing_file_fails() {
    let result = Config::load("/nonexistent/config.yaml");
    assert!(matches!(result, Err(ConfigError::ReadFile(_))));
}

#[test]
fn test_load_invalid_yaml_fails() {
    let result = from_yaml("tokens: [not, a, token]");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// ==================== Validation tests ====================

#[test]
fn test_validate_requires_tokens() {
    let result = from_yaml("tokens: []\nmarkets: []");
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_duplicate_symbols() {
    let yaml = r#"
tokens:
  - symbol: zrx
    name: a
    decimals: 18
    display_decimals: 2
  - symbol: ZRX
    name: b
    decimals: 18
    display_decimals: 2

markets: []
"#;
    let err = from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate token symbol"));
}

#[test]
fn test_validate_rejects_excessive_decimals() {
    let yaml = r#"
tokens:
  - symbol: zrx
    name: a
    decimals: 30
    display_decimals: 2

markets: []
"#;
    let err = from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("decimals"));
}

#[test]
fn test_validate_rejects_unknown_market_token() {
    let yaml = r#"
tokens:
  - symbol: zrx
    name: a
    decimals: 18
    display_decimals: 2

markets:
  - base: zrx
    quote: weth
    price_precision: 8
"#;
    let err = from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("weth"));
}

// ==================== Materialization tests ====================

#[test]
fn test_known_tokens_registry_from_config() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    let registry = cfg.known_tokens().unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get_token_by_symbol("WETH").unwrap().decimals, 18);
}

#[test]
fn test_currency_pairs_from_config() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();
    let pairs = cfg.currency_pairs();

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].base, "zrx");
    assert_eq!(pairs[0].quote, "weth");
    assert_eq!(pairs[0].config.price_precision, 8);
}
