use rworklog::core::ticker::{TickFlow, Ticker};
use rworklog::errors::AppError;
use std::thread;
use std::time::Duration;

#[test]
fn stops_after_max_ticks() {
    let ticker = Ticker::new(Duration::from_millis(5)).with_max_ticks(3);
    let mut seen = Vec::new();
    let n = ticker
        .run(|i| {
            seen.push(i);
            Ok(TickFlow::Continue)
        })
        .unwrap();
    assert_eq!(n, 3);
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn callback_can_stop_the_loop() {
    let ticker = Ticker::new(Duration::from_millis(5));
    let n = ticker
        .run(|i| Ok(if i == 2 { TickFlow::Stop } else { TickFlow::Continue }))
        .unwrap();
    assert_eq!(n, 2);
}

#[test]
fn stop_handle_works_from_another_thread() {
    let ticker = Ticker::new(Duration::from_millis(20));
    let handle = ticker.stop_handle();

    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        handle.stop();
    });

    let n = ticker.run(|_| Ok(TickFlow::Continue)).unwrap();
    stopper.join().unwrap();
    assert!(n >= 1);
}

#[test]
fn callback_errors_propagate() {
    let ticker = Ticker::new(Duration::from_millis(5));
    let err = ticker
        .run(|_| Err(AppError::Other("boom".into())))
        .unwrap_err();
    assert_eq!(err.to_string(), "Internal error: boom");
}
