use loopserial::prelude::*;

#[test]
fn test_only_one_strict_port_listens() {
    let gate = ListenGate::new();
    let a = LoopbackSerial::strict(&gate);
    let b = LoopbackSerial::strict(&gate);

    assert!(!a.is_listening());
    assert!(!b.is_listening());

    assert!(a.listen());
    assert!(a.is_listening() && !b.is_listening());

    assert!(b.listen());
    assert!(!a.is_listening() && b.is_listening());
    assert_eq!(gate.holder(), b.id());
}

#[test]
fn test_displaced_port_behaves_as_not_listening() {
    let gate = ListenGate::new();
    let a = LoopbackSerial::strict(&gate);
    let b = LoopbackSerial::strict(&gate);

    a.listen();
    a.write_bytes(b"queued");
    b.listen();

    assert_eq!(a.available(), 0);
    assert_eq!(a.read(), Err(LoopbackError::NotListening));
    assert_eq!(a.peek(), Err(LoopbackError::NotListening));
    assert_eq!(a.write(b'!'), Err(LoopbackError::NotListening));
    assert_eq!(b.available(), 0);
}

#[test]
fn test_listen_resets_new_holder_buffer() {
    let gate = ListenGate::new();
    let a = LoopbackSerial::strict(&gate);
    let b = LoopbackSerial::strict(&gate);

    b.listen();
    b.write_bytes(b"stale");
    a.listen();
    b.listen();

    assert_eq!(b.available(), 0);
    assert_eq!(b.read(), Err(LoopbackError::Empty));
}

#[test]
fn test_strict_write_before_listen_stores_nothing() {
    let gate = ListenGate::new();
    let port = LoopbackSerial::strict(&gate);

    assert_eq!(port.write(42), Err(LoopbackError::NotListening));
    assert_eq!(SentinelStream::write(&mut LoopbackSerial::strict(&gate), 42), 0);

    port.listen();
    assert_eq!(port.available(), 0);
}

#[test]
fn test_free_port_ignores_gate() {
    let gate = ListenGate::new();
    let strict = LoopbackSerial::strict(&gate);
    let free = LoopbackSerial::new();

    strict.listen();
    assert!(free.is_listening());

    free.write(9).unwrap();
    assert!(free.listen());
    assert_eq!(free.available(), 1);
    assert_eq!(free.read(), Ok(9));
    assert!(strict.is_listening());
}

#[test]
fn test_end_and_drop_vacate_gate() {
    let gate = ListenGate::new();
    let a = LoopbackSerial::strict(&gate);
    a.listen();
    a.end();
    assert!(gate.is_vacant());

    {
        let b = LoopbackSerial::strict(&gate);
        b.listen();
        assert!(!gate.is_vacant());
    }
    assert!(gate.is_vacant());
    assert!(!a.is_listening());
}

#[test]
fn test_separate_gates_do_not_interfere() {
    let gate_one = ListenGate::new();
    let gate_two = ListenGate::new();
    let a = LoopbackSerial::strict(&gate_one);
    let b = LoopbackSerial::strict(&gate_two);

    a.listen();
    b.listen();
    assert!(a.is_listening());
    assert!(b.is_listening());
}

#[test]
fn test_pin_constructor_matches_strict_behavior() {
    let gate = ListenGate::new();
    let port = LoopbackSerial::with_pins(&gate, 8, 9, true);
    port.begin_with_baud(4800);

    assert_eq!(port.write(1), Err(LoopbackError::NotListening));
    assert!(port.listen());
    port.write(1).unwrap();
    assert_eq!(port.read(), Ok(1));
}
