use crypto_rest::{ConfigError, Rest, RestError};
use std::path::PathBuf;

/// Writes a config whose `restlog` points into the temp dir, so tests never
/// leave a log file in the working directory.
fn temp_config(tag: &str, body: &str) -> PathBuf {
    let dir = std::env::temp_dir();
    let log = dir.join(format!("crypto-rest-{}-{}.log", tag, std::process::id()));
    let path = dir.join(format!("crypto-rest-{}-{}.yaml", tag, std::process::id()));
    let contents = format!(
        "restlog:\n  filename: {}\n  level: WARNING\n{}",
        log.display(),
        body
    );
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn resolves_kraken_fully_mapped() {
    let path = temp_config("kraken", "");
    let rest = Rest::new(path.to_str(), false).unwrap();

    let kraken = rest.get("Kraken").unwrap();
    assert_eq!(kraken.id(), "KRAKEN");
    assert!(kraken.is_mapped());
    assert!(!kraken.is_sandbox());
    assert_eq!(kraken.native_pair("SPOT-BTC-USD").unwrap(), "XBTUSD");

    let again = &rest["KRAKEN"];
    assert_eq!(again.id(), "KRAKEN");
}

#[test]
fn unknown_exchange_leaves_registry_unchanged() {
    let path = temp_config("unknown", "");
    let rest = Rest::new(path.to_str(), false).unwrap();
    let before = rest.names().len();

    let err = rest.get("nosuchexchange").err().unwrap();
    assert!(matches!(err, RestError::UnknownExchange(_)));
    assert_eq!(rest.names().len(), before);
    assert!(!rest.contains("nosuchexchange"));
}

#[test]
fn sandbox_and_credentials_come_from_construction() {
    let path = temp_config(
        "sandbox",
        "gemini:\n  key_id: gem\n  key_secret: secret\nbitmex:\n  key_id: mex\n",
    );
    let rest = Rest::new(path.to_str(), true).unwrap();

    let gemini = rest.get("gemini").unwrap();
    assert!(gemini.is_sandbox());
    assert_eq!(gemini.base_url(), "https://api.sandbox.gemini.com");
    assert!(gemini.has_credentials());

    let bitmex = rest.get("bitmex").unwrap();
    assert!(!bitmex.is_sandbox());
    assert!(!bitmex.has_credentials());
    assert_eq!(bitmex.native_pair("PERP-BTC-USD").unwrap(), "XBTUSD");

    let ftx = rest.get("ftx").unwrap();
    assert_eq!(ftx.canonical_pair("ETH-PERP").unwrap(), "PERP-ETH-USD");
    assert!(matches!(
        ftx.native_pair("SPOT-NOPE-USD"),
        Err(RestError::UnknownPair { .. })
    ));
}

#[test]
fn missing_config_aborts_construction() {
    let err = Rest::new(Some("/definitely/not/here/rest.yaml"), false)
        .err()
        .unwrap();
    assert!(matches!(err, RestError::Config(ConfigError::Read { .. })));
}

#[test]
fn undecodable_credentials_abort_construction() {
    let path = temp_config("numeric", "coinbase:\n  key_id: 12345\n  key_secret: abc\n");
    let err = Rest::new(path.to_str(), false).err().unwrap();
    assert!(matches!(err, RestError::Config(ConfigError::Parse { .. })));
}
