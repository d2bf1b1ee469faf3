use std::fs;

use loopserial::config::{load_config, validate_config};
use loopserial::prelude::*;
use tempfile::tempdir;

#[test]
fn test_strict_port_from_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loopserial.toml");
    fs::write(
        &path,
        r#"
[port]
strict_mode = true
receive_pin = 2
transmit_pin = 3
inverse_logic = true
baud_rate = 9600

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_config(Some(&path), None).unwrap();
    validate_config(&config).unwrap();

    let gate = ListenGate::new();
    let port = LoopbackSerial::with_settings(&config.port.settings(), Some(&gate)).unwrap();
    assert!(port.is_strict());
    assert_eq!(port.write(1), Err(LoopbackError::NotListening));
    assert!(port.listen());
    port.write(1).unwrap();
    assert_eq!(port.read(), Ok(1));
}

#[test]
fn test_inert_fields_do_not_change_behavior() {
    let dir = tempdir().unwrap();
    let quiet = dir.path().join("quiet.toml");
    let loud = dir.path().join("loud.toml");
    fs::write(&quiet, "[port]\nbaud_rate = 300\n").unwrap();
    fs::write(
        &loud,
        "[port]\nbaud_rate = 921600\nreceive_pin = 200\ntransmit_pin = 201\ninverse_logic = true\n",
    )
    .unwrap();

    for path in [&quiet, &loud] {
        let config = load_config(Some(path), None).unwrap();
        let port = LoopbackSerial::with_settings(&config.port.settings(), None).unwrap();
        assert!(port.is_listening());
        assert_eq!(port.write_bytes(&[7; 100]), 63);
        assert!(port.overflow());
    }
}

#[test]
fn test_strict_config_without_gate_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("strict.toml");
    fs::write(&path, "[port]\nstrict_mode = true\n").unwrap();

    let config = load_config(Some(&path), None).unwrap();
    let err = LoopbackSerial::with_settings(&config.port.settings(), None).unwrap_err();
    assert_eq!(err, LoopbackError::MissingGate);
}

#[test]
fn test_zero_baud_rate_is_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero_baud.toml");
    fs::write(&path, "[port]\nbaud_rate = 0\n").unwrap();

    let config = load_config(Some(&path), None).unwrap();
    assert_eq!(config.port.baud_rate, 0);
    validate_config(&config).unwrap();

    let port = LoopbackSerial::with_settings(&config.port.settings(), None).unwrap();
    port.begin_with_baud(config.port.baud_rate);
    port.write(b'z').unwrap();
    assert_eq!(port.read(), Ok(b'z'));
}
