use std::time::Duration;

use regression::RawPoint;
use tokio::{
    runtime::Handle,
    time::{self, Instant},
};
use visualizer::{
    Session,
    configs::VisualizationConfig,
    playback::{PlaybackState, Scheduler, Tick, TimerHandle, TokioScheduler},
};

fn session() -> Session {
    let config = VisualizationConfig::default();
    Session::new(&config, Handle::current()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn ticker_fires_after_a_full_interval() {
    let (mut scheduler, mut ticks) = TokioScheduler::new(Handle::current());
    let start = Instant::now();

    let handle = scheduler.schedule_every(Duration::from_millis(10), 7);

    assert_eq!(ticks.recv().await, Some(Tick { generation: 7 }));
    assert!(start.elapsed() >= Duration::from_millis(10));

    handle.cancel();
    time::sleep(Duration::from_millis(100)).await;
    assert!(ticks.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_ticker() {
    let (mut scheduler, mut ticks) = TokioScheduler::new(Handle::current());

    let handle = scheduler.schedule_every(Duration::from_millis(5), 1);
    assert!(!handle.is_cancelled());
    drop(handle);

    time::sleep(Duration::from_millis(50)).await;
    assert!(ticks.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn playing_runs_to_the_end_and_pauses() {
    let mut session = session();
    let last = session.scene().trajectory().last_index();

    session.play();
    let mut steps = 0;
    while let Some(state) = session.next_tick().await {
        steps += 1;
        assert_eq!(state.step_index, steps);
    }

    assert_eq!(steps, last);
    assert_eq!(
        session.playback(),
        PlaybackState {
            step_index: last,
            is_playing: false
        }
    );
    assert_eq!(session.visible().len(), last + 1);
}

#[tokio::test(start_paused = true)]
async fn no_tick_lands_after_pause() {
    let mut session = session();

    session.play();
    session.next_tick().await;
    session.next_tick().await;
    session.pause();

    time::sleep(Duration::from_secs(1)).await;
    assert!(!session.drain_ticks());
    assert_eq!(session.playback().step_index, 2);
    assert_eq!(session.next_tick().await, None);
}

#[tokio::test(start_paused = true)]
async fn scrubbing_while_playing_pauses() {
    let mut session = session();

    session.play();
    session.next_tick().await;
    session.scrub(-5);
    assert_eq!(session.playback(), PlaybackState::default());

    session.scrub(10_000);
    assert_eq!(
        session.playback().step_index,
        session.scene().trajectory().last_index()
    );

    time::sleep(Duration::from_secs(1)).await;
    assert!(!session.drain_ticks());
}

#[tokio::test(start_paused = true)]
async fn changing_the_learning_rate_resets_playback() {
    let mut session = session();

    session.play();
    session.next_tick().await;
    session.next_tick().await;

    assert!(session.set_learning_rate(0.1).unwrap());
    assert_eq!(session.playback(), PlaybackState::default());
    assert_eq!(session.recomputations(), 2);
    assert_eq!(session.scene().key().learning_rate(), 0.1);

    time::sleep(Duration::from_secs(1)).await;
    assert!(!session.drain_ticks());
    assert_eq!(session.playback().step_index, 0);
}

#[tokio::test(start_paused = true)]
async fn changing_the_loop_count_recomputes_and_resets() {
    let mut session = session();

    session.play();
    session.next_tick().await;
    session.next_tick().await;
    session.next_tick().await;

    assert!(session.set_hyperparams(0.2, 25).unwrap());
    assert_eq!(session.playback(), PlaybackState::default());
    assert_eq!(session.scene().trajectory().len(), 26);
    assert_eq!(session.config().hyperparams.max_loops, 25);
    assert_eq!(session.recomputations(), 2);

    session.scrub(i64::MAX);
    assert!(session.is_at_end());
    assert_eq!(session.playback().step_index, 25);

    time::sleep(Duration::from_secs(1)).await;
    assert!(!session.drain_ticks());
}

#[tokio::test(start_paused = true)]
async fn replacing_the_points_recomputes_and_resets() {
    let mut session = session();

    session.play();
    session.next_tick().await;
    session.next_tick().await;

    let points = vec![
        RawPoint::new(50.0, 150_000.0),
        RawPoint::new(100.0, 300_000.0),
        RawPoint::new(150.0, 450_000.0),
    ];
    assert!(session.set_points(points).unwrap());

    assert_eq!(session.playback(), PlaybackState::default());
    assert_eq!(session.scene().dataset().len(), 3);
    assert_eq!(
        session.scene().trajectory().len(),
        session.config().hyperparams.max_loops + 1
    );
    assert_eq!(session.config().points.len(), 3);
    assert_eq!(session.recomputations(), 2);

    // The points lie on price = 3000 * size, so the fit is exact.
    let optimum = session.scene().optimum();
    assert!(optimum.theta0.abs() < 1e-9);
    assert!((optimum.theta1 - 300.0).abs() < 1e-9);

    time::sleep(Duration::from_secs(1)).await;
    assert!(!session.drain_ticks());
    assert_eq!(session.playback().step_index, 0);
}

#[tokio::test(start_paused = true)]
async fn unchanged_parameters_keep_the_scene() {
    let mut session = session();
    session.scrub(12);

    let lr = session.config().hyperparams.learning_rate;
    assert!(!session.set_learning_rate(lr).unwrap());
    assert_eq!(session.playback().step_index, 12);
    assert_eq!(session.recomputations(), 1);
}

#[tokio::test(start_paused = true)]
async fn rejected_changes_leave_the_session_untouched() {
    let mut session = session();
    session.scrub(3);

    assert!(session.set_learning_rate(-1.0).is_err());
    assert!(session.set_points(Vec::new()).is_err());

    assert_eq!(session.playback().step_index, 3);
    assert_eq!(session.config(), &VisualizationConfig::default());
    assert_eq!(session.recomputations(), 1);
}
