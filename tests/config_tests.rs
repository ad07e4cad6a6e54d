use chatterstats::config::Config;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.sample_range, 10);
    assert_eq!(config.hitrate, 9);
    assert!(config.hitrate <= config.sample_range);
}

#[test]
fn test_load_from_toml() {
    let toml_content = r#"
sample_range = 20
hitrate = 15
statefile = "/tmp/chatterstats-test.json"
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(toml_content.as_bytes()).unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.sample_range, 20);
    assert_eq!(config.hitrate, 15);
    assert_eq!(config.statefile, PathBuf::from("/tmp/chatterstats-test.json"));
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"sample_range = 5\n").unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.sample_range, 5);
    assert_eq!(config.hitrate, 9);
}

#[test]
fn test_save_config_roundtrip() {
    let mut config = Config::default();
    config.sample_range = 30;
    config.hitrate = 25;
    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();
    let loaded = Config::load(file.path()).unwrap();
    assert_eq!(loaded.sample_range, 30);
    assert_eq!(loaded.hitrate, 25);
    assert_eq!(loaded.statefile, config.statefile);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"sample_range = \"lots\"\n").unwrap();
    assert!(Config::load(file.path()).is_err());
}
