use std::io::{BufRead, BufReader, Read, Write};

use loopserial::prelude::*;

/// Echo helper written against the slice-level serial contract only
fn roundtrip<S: SerialIO>(serial: &mut S, data: &[u8]) -> Result<Vec<u8>, S::Error> {
    let written = serial.write(data)?;
    let mut buf = vec![0u8; written];
    let read = serial.read(&mut buf)?;
    buf.truncate(read);
    Ok(buf)
}

/// Sketch-style loop using sentinel returns
fn drain_sentinel<S: SentinelStream>(stream: &mut S) -> Vec<u8> {
    let mut out = Vec::new();
    while stream.available() > 0 {
        let value = stream.read();
        assert!(value >= 0);
        out.push(value as u8);
    }
    out
}

#[test]
fn test_serial_io_generic_roundtrip() {
    let mut port = LoopbackSerial::new();
    assert_eq!(roundtrip(&mut port, b"AT+OK"), Ok(b"AT+OK".to_vec()));
}

#[test]
fn test_serial_io_reports_not_listening() {
    let gate = ListenGate::new();
    let mut port = LoopbackSerial::strict(&gate);
    assert_eq!(roundtrip(&mut port, b"x"), Err(LoopbackError::NotListening));
}

#[test]
fn test_sentinel_drain() {
    let mut port = LoopbackSerial::new();
    for b in b"sketch" {
        assert_eq!(SentinelStream::write(&mut port, *b), 1);
    }
    assert_eq!(drain_sentinel(&mut port), b"sketch");
    assert_eq!(SentinelStream::peek(&mut port), NO_DATA);
    assert!(SentinelStream::is_valid(&port));
}

#[test]
fn test_std_io_line_reader() {
    let mut port = LoopbackSerial::new();
    port.write_all(b"first\nsecond\n").unwrap();

    // BufReader stops on WouldBlock, so read exactly what is buffered
    let pending = port.available();
    let mut bytes = vec![0u8; pending];
    port.read_exact(&mut bytes).unwrap();

    let lines: Vec<String> = BufReader::new(bytes.as_slice())
        .lines()
        .map(|l| l.unwrap())
        .collect();
    assert_eq!(lines, vec!["first", "second"]);
}

#[test]
fn test_std_io_write_truncates_at_capacity() {
    let mut port = LoopbackSerial::<8>::with_arbitration(Arbitration::free());
    let written = Write::write(&mut port, b"0123456789").unwrap();
    assert_eq!(written, 7);
    assert!(port.overflow());

    let err = port.write_all(b"z").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::WouldBlock);
}
