// SPDX-License-Identifier: MPL-2.0
use iced_toast::toast::{Coordinator, PresentationId, Presented, Settings, Toast};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep, sleep_until, Instant};

const SETTLE: Duration = Duration::from_millis(200);

/// Paused-clock deadlines land on millisecond ticks.
fn assert_near(actual: Duration, expected: Duration) {
    let tolerance = Duration::from_millis(5);
    assert!(
        actual >= expected.saturating_sub(tolerance) && actual <= expected + tolerance,
        "expected ~{expected:?}, got {actual:?}"
    );
}

fn current_id(coordinator: &Coordinator) -> Option<PresentationId> {
    coordinator.current().map(|presented| presented.id())
}

async fn wait_shown(rx: &mut watch::Receiver<Option<Presented>>, id: PresentationId) {
    rx.wait_for(|current| current.as_ref().map(Presented::id) == Some(id))
        .await
        .expect("coordinator running");
}

async fn wait_empty(rx: &mut watch::Receiver<Option<Presented>>) {
    rx.wait_for(Option::is_none)
        .await
        .expect("coordinator running");
}

fn sticky(title: &str) -> Toast {
    Toast::new(title).with_duration(Duration::ZERO)
}

#[tokio::test(start_paused = true)]
async fn enqueue_on_empty_coordinator_shows_synchronously() {
    let coordinator = Coordinator::spawn(Settings::default());

    let id = coordinator.enqueue(Toast::info("hello"));
    assert_eq!(current_id(&coordinator), Some(id));
    assert_eq!(
        coordinator.current().map(|p| p.toast().title().to_owned()),
        Some("hello".to_owned())
    );

    coordinator.dismiss_current();
    assert!(coordinator.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn oversized_durations_keep_coordinator_running() {
    let coordinator = Coordinator::spawn(Settings::default());

    let max = coordinator.enqueue(Toast::new("long").with_duration(Duration::MAX));
    sleep(Duration::from_secs(365 * 24 * 60 * 60)).await;
    assert!(coordinator.is_running());
    assert_eq!(current_id(&coordinator), Some(max));

    coordinator.dismiss_current();
    let huge = coordinator.enqueue(Toast::new("longer").with_duration_secs(1.8e19));
    sleep(Duration::from_secs(365 * 24 * 60 * 60)).await;
    assert!(coordinator.is_running());
    assert_eq!(current_id(&coordinator), Some(huge));
}

#[tokio::test(start_paused = true)]
async fn oversized_settle_delay_keeps_coordinator_running() {
    let coordinator = Coordinator::spawn(Settings {
        settle_delay: Duration::MAX,
    });

    let a = coordinator.enqueue(sticky("A"));
    coordinator.enqueue(sticky("B"));
    assert_eq!(current_id(&coordinator), Some(a));

    coordinator.dismiss_current();
    sleep(Duration::from_secs(24 * 60 * 60)).await;
    assert!(coordinator.is_running());
    assert!(coordinator.current().is_none());
    assert!(coordinator.has_toasts());

    // A cleared queue accepts and shows new toasts again.
    coordinator.clear();
    let c = coordinator.enqueue(sticky("C"));
    assert_eq!(current_id(&coordinator), Some(c));
}

#[tokio::test(start_paused = true)]
async fn toasts_are_shown_in_fifo_order() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();

    let a = coordinator.enqueue(sticky("A"));
    let b = coordinator.enqueue(sticky("B"));
    let c = coordinator.enqueue(sticky("C"));

    wait_shown(&mut rx, a).await;

    let dismissed_at = Instant::now();
    coordinator.dismiss_current();
    wait_empty(&mut rx).await;
    wait_shown(&mut rx, b).await;
    assert_near(dismissed_at.elapsed(), SETTLE);

    let dismissed_at = Instant::now();
    coordinator.dismiss_current();
    wait_empty(&mut rx).await;
    wait_shown(&mut rx, c).await;
    assert_near(dismissed_at.elapsed(), SETTLE);
}

#[tokio::test(start_paused = true)]
async fn zero_duration_toast_never_auto_dismisses() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();

    let id = coordinator.enqueue(sticky("stays"));
    wait_shown(&mut rx, id).await;

    sleep(Duration::from_secs(24 * 60 * 60)).await;

    assert_eq!(current_id(&coordinator), Some(id));
}

#[tokio::test(start_paused = true)]
async fn toast_auto_dismisses_after_its_duration() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();
    let start = Instant::now();

    let id = coordinator.enqueue(Toast::new("brief").with_duration_secs(1.5));
    wait_shown(&mut rx, id).await;
    wait_empty(&mut rx).await;

    assert_near(start.elapsed(), Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn stale_timer_does_not_dismiss_replacement() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();
    let start = Instant::now();

    let a = coordinator.enqueue(Toast::new("A").with_duration_secs(3.0));
    wait_shown(&mut rx, a).await;

    sleep(Duration::from_secs(1)).await;
    coordinator.dismiss_current();
    let b = coordinator.enqueue(Toast::new("B").with_duration_secs(3.0));
    wait_shown(&mut rx, b).await;

    // A's deadline passes without effect.
    sleep_until(start + Duration::from_millis(3500)).await;
    assert_eq!(current_id(&coordinator), Some(b));

    // B leaves at its own deadline, three seconds after it was shown.
    wait_empty(&mut rx).await;
    assert_near(start.elapsed(), Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn backlog_drains_completely_in_order() {
    const QUEUED: usize = 5;
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();

    let first = coordinator.enqueue(Toast::new("first").with_duration_secs(1.0));
    wait_shown(&mut rx, first).await;

    let mut expected = vec![first];
    for i in 0..QUEUED {
        expected.push(coordinator.enqueue(Toast::new(format!("queued-{i}")).with_duration_secs(1.0)));
    }

    let mut seen = Vec::new();
    // The first toast was already observed by `wait_shown`.
    seen.push(first);
    while seen.len() < expected.len() {
        rx.changed().await.expect("coordinator running");
        let snapshot = rx.borrow_and_update().clone();
        if let Some(presented) = snapshot {
            seen.push(presented.id());
        }
    }
    wait_empty(&mut rx).await;

    assert_eq!(seen, expected);

    // Nothing left to promote.
    sleep(Duration::from_secs(60)).await;
    assert!(coordinator.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn drain_timing_includes_settle_delay() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();
    let start = Instant::now();

    let a = coordinator.enqueue(Toast::new("A").with_duration_secs(1.0));
    let b = coordinator.enqueue(Toast::new("B").with_duration_secs(1.0));
    let c = coordinator.enqueue(Toast::new("C").with_duration_secs(1.0));

    wait_shown(&mut rx, a).await;
    wait_shown(&mut rx, b).await;
    assert_near(start.elapsed(), Duration::from_millis(1200));
    wait_shown(&mut rx, c).await;
    assert_near(start.elapsed(), Duration::from_millis(2400));
    wait_empty(&mut rx).await;
    assert_near(start.elapsed(), Duration::from_millis(3400));
}

#[tokio::test(start_paused = true)]
async fn dismiss_when_empty_is_a_no_op() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();

    coordinator.dismiss_current();
    coordinator.dismiss_current();
    sleep(Duration::from_secs(1)).await;
    assert!(coordinator.current().is_none());

    let a = coordinator.enqueue(sticky("A"));
    let b = coordinator.enqueue(sticky("B"));
    wait_shown(&mut rx, a).await;

    coordinator.dismiss_current();
    wait_empty(&mut rx).await;
    // Inside the settle window: nothing shown, B waiting.
    coordinator.dismiss_current();

    wait_shown(&mut rx, b).await;
    sleep(Duration::from_secs(1)).await;
    assert_eq!(current_id(&coordinator), Some(b));
}

#[tokio::test(start_paused = true)]
async fn enqueue_during_settle_window_keeps_fifo_order() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();

    let a = coordinator.enqueue(sticky("A"));
    let b = coordinator.enqueue(sticky("B"));
    wait_shown(&mut rx, a).await;

    coordinator.dismiss_current();
    wait_empty(&mut rx).await;
    let c = coordinator.enqueue(sticky("C"));

    wait_shown(&mut rx, b).await;
    coordinator.dismiss_current();
    wait_empty(&mut rx).await;
    wait_shown(&mut rx, c).await;
}

#[tokio::test(start_paused = true)]
async fn at_most_one_toast_is_ever_current() {
    let coordinator = Coordinator::spawn(Settings::default());
    let mut rx = coordinator.subscribe();

    let ids: Vec<_> = (0..4)
        .map(|i| coordinator.enqueue(Toast::new(format!("t{i}")).with_duration_secs(0.5)))
        .collect();

    // Every observed transition goes through an empty slot between toasts.
    let mut previous: Option<PresentationId> = None;
    let mut shown = 0;
    while shown < ids.len() {
        rx.changed().await.expect("coordinator running");
        let now = rx.borrow_and_update().as_ref().map(Presented::id);
        if let Some(id) = now {
            assert!(previous.is_none(), "{id} replaced {previous:?} without a dismissal");
            shown += 1;
        }
        previous = now;
    }
}
