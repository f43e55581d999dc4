// Example: serialized notifications driven by an adapter timer.
use scrollsync::{NotificationChange, NotificationOptions, NotificationQueue, OverlapPolicy};

fn log(now_ms: u64, c: NotificationChange<'_>) {
    println!("t={now_ms:>5}ms #{} {:?} {:?}", c.id, c.phase, c.message);
}

fn main() {
    let mut queue = NotificationQueue::new(NotificationOptions {
        policy: OverlapPolicy::Serialize,
        ..NotificationOptions::default()
    });

    queue.show("Email copied to clipboard!", 0, |c| log(0, c));
    queue.show("Saved", 500, |c| log(500, c));

    // Sleep until the next deadline, as a real adapter would with a timer.
    while let Some(deadline) = queue.next_deadline() {
        queue.tick(deadline, |c| log(deadline, c));
    }
}
