//! # Rendezvous Port Tests
//!
//! Blocking, FIFO order, close semantics and the last-sent record.

use std::thread;
use std::time::Duration;

use intcode_vm::port::{InputPort, OutputPort, Port, PortClosed};

#[test]
fn test_fifo_across_threads() {
    let port = Port::new(0, 1);
    let producer = port.clone();
    let handle = thread::spawn(move || {
        for value in 0..100 {
            producer.send(value).unwrap();
        }
        producer.close();
    });
    let received: Vec<i64> = std::iter::from_fn(|| port.recv()).collect();
    handle.join().unwrap();
    assert_eq!(received, (0..100).collect::<Vec<_>>());
    assert_eq!(port.last_sent(), Some(99));
}

#[test]
fn test_send_blocks_until_slot_frees() {
    let port = Port::new(3, 1);
    port.send(1).unwrap();
    let sender = port.clone();
    let handle = thread::spawn(move || sender.send(2));
    thread::sleep(Duration::from_millis(20));
    assert_eq!(port.len(), 1);
    assert_eq!(port.recv(), Some(1));
    assert_eq!(handle.join().unwrap(), Ok(()));
    assert_eq!(port.recv(), Some(2));
}

#[test]
fn test_close_wakes_blocked_sender() {
    let port = Port::new(0, 1);
    port.send(1).unwrap();
    let sender = port.clone();
    let handle = thread::spawn(move || sender.send(2));
    thread::sleep(Duration::from_millis(20));
    port.close();
    assert_eq!(handle.join().unwrap(), Err(PortClosed));
    assert!(port.is_closed());
}

#[test]
fn test_abandon_wakes_blocked_sender() {
    let port = Port::new(0, 1);
    port.send(1).unwrap();
    let sender = port.clone();
    let handle = thread::spawn(move || sender.send(2));
    thread::sleep(Duration::from_millis(20));
    port.abandon();
    assert_eq!(handle.join().unwrap(), Ok(()));
    assert_eq!(port.last_sent(), Some(2));
    assert!(port.is_empty());
}

#[test]
fn test_close_wins_over_abandon() {
    let port = Port::new(0, 1);
    port.abandon();
    port.close();
    assert_eq!(port.send(4), Err(PortClosed));
}

#[test]
fn test_close_is_idempotent() {
    let port = Port::new(0, 1);
    port.close();
    port.close();
    assert_eq!(port.recv(), None);
}

#[test]
fn test_capacity_zero_behaves_as_one() {
    let port = Port::new(0, 0);
    port.send(5).unwrap();
    assert_eq!(port.len(), 1);
    assert_eq!(port.recv(), Some(5));
}

#[test]
fn test_larger_capacity_buffers_without_blocking() {
    let port = Port::new(0, 3);
    for value in [1, 2, 3] {
        port.send(value).unwrap();
    }
    assert_eq!(port.len(), 3);
    assert_eq!(port.last_sent(), Some(3));
}

#[test]
fn test_port_traits() {
    let mut port = Port::new(7, 2);
    assert_eq!(port.id(), 7);
    port.push_value(11).unwrap();
    assert_eq!(port.next_value(), Some(11));
    assert!(port.is_empty());
}
