use spaceship_shooter::best_time::STORAGE_KEY;
use spaceship_shooter::platform::{FileStorage, InputEvent, MemoryStorage, Storage};
use spaceship_shooter::sim::{GameEvent, GamePhase, Playfield};
use spaceship_shooter::{Game, Settings, round_centis};

/// 60 Hz display refresh
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Two simulated minutes
const MAX_FRAMES: u32 = 60 * 120;

fn autopilot_settings() -> Settings {
    Settings {
        autopilot: true,
        ..Default::default()
    }
}

/// Step frames until `pred` matches an event; returns the frame index and
/// that frame's events
fn run_until<S: Storage>(
    game: &mut Game<S>,
    start: u32,
    pred: impl Fn(&GameEvent) -> bool,
) -> (u32, Vec<GameEvent>) {
    let mut n = start;
    loop {
        n += 1;
        let events = game.frame(n as f64 * FRAME_MS);
        if events.iter().any(&pred) {
            return (n, events);
        }
        assert!(n < start + MAX_FRAMES, "event never happened");
    }
}

fn won_run_time(events: &[GameEvent]) -> f64 {
    events
        .iter()
        .find_map(|e| match e {
            GameEvent::Won { run_time } => Some(*run_time),
            _ => None,
        })
        .expect("no win event")
}

#[test]
fn test_autopilot_wins_and_records_best_time() {
    let mut game = Game::new(
        autopilot_settings(),
        Playfield::default(),
        MemoryStorage::new(),
        42,
        0.0,
    );

    let (n, events) = run_until(&mut game, 0, |e| matches!(e, GameEvent::Won { .. }));
    let run_time = won_run_time(&events);
    assert!(run_time > 0.0);
    assert_eq!(game.state().score(), 5);

    let stored = game.best_times().storage().get_item(STORAGE_KEY).unwrap();
    assert_eq!(stored, Some(format!("{:.2}", round_centis(run_time))));

    let panel = game.view().win_panel.expect("win panel shown");
    assert_eq!(panel.best_time, Some(round_centis(run_time)));
    assert_eq!(panel.countdown, 5);

    // Countdown runs out and the round restarts, keeping the record
    let (_, events) = run_until(&mut game, n, |e| *e == GameEvent::RestartRequested);
    assert!(events.contains(&GameEvent::CountdownTick { remaining: 0 }));
    assert_eq!(game.rounds(), 2);
    assert_eq!(game.state().score(), 0);
    assert_eq!(game.state().phase, GamePhase::Playing);
    assert_eq!(game.state().run_time, 0.0);
    assert_eq!(
        game.best_times().storage().get_item(STORAGE_KEY).unwrap(),
        stored
    );
}

#[test]
fn test_win_panel_click_restarts_immediately() {
    let mut game = Game::new(
        autopilot_settings(),
        Playfield::default(),
        MemoryStorage::new(),
        7,
        0.0,
    );
    let (n, _) = run_until(&mut game, 0, |e| matches!(e, GameEvent::Won { .. }));

    assert!(game.handle_input(&InputEvent::WinPanelClick));
    let events = game.frame((n + 1) as f64 * FRAME_MS);
    assert_eq!(events, vec![GameEvent::RestartRequested]);
    assert_eq!(game.rounds(), 2);
    assert!(game.view().win_panel.is_none());
    assert!(game.best_times().best().is_some());
}

#[test]
fn test_slower_second_win_keeps_record() {
    let mut store = MemoryStorage::new();
    store.set_item(STORAGE_KEY, "0.01").unwrap();

    let mut game = Game::new(autopilot_settings(), Playfield::default(), store, 3, 0.0);
    run_until(&mut game, 0, |e| matches!(e, GameEvent::Won { .. }));

    assert_eq!(
        game.best_times().storage().get_item(STORAGE_KEY).unwrap().as_deref(),
        Some("0.01")
    );
    let panel = game.view().win_panel.unwrap();
    assert_eq!(panel.best_time, Some(0.01));
    assert!(panel.run_time > 0.01);
}

#[test]
fn test_repeated_fire_requests_launch_one_projectile() {
    let mut game = Game::new(
        Settings::default(),
        Playfield::default(),
        MemoryStorage::new(),
        11,
        0.0,
    );

    assert!(game.handle_input(&InputEvent::PointerDown));
    assert!(game.handle_input(&InputEvent::TouchStart));
    assert!(game.handle_input(&InputEvent::Key("Space".into())));
    let events = game.frame(FRAME_MS);
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::Fired).count(),
        1
    );

    // Spamming while in flight never launches another
    let mut n = 1;
    while game.state().in_flight() {
        n += 1;
        game.handle_input(&InputEvent::PointerDown);
        let events = game.frame(n as f64 * FRAME_MS);
        assert!(!events.contains(&GameEvent::Fired));
        assert!(n < MAX_FRAMES);
    }

    // Once resolved, the next request is accepted
    game.handle_input(&InputEvent::PointerDown);
    let events = game.frame((n + 1) as f64 * FRAME_MS);
    assert!(events.contains(&GameEvent::Fired));
}

#[test]
fn test_unbound_key_is_not_consumed() {
    let mut game = Game::new(
        Settings::default(),
        Playfield::default(),
        MemoryStorage::new(),
        1,
        0.0,
    );
    assert!(!game.handle_input(&InputEvent::Key("KeyZ".into())));
    assert!(game.frame(FRAME_MS).is_empty());
}

#[test]
fn test_autopilot_toggle_key() {
    let mut game = Game::new(
        Settings::default(),
        Playfield::default(),
        MemoryStorage::new(),
        1,
        0.0,
    );
    assert!(!game.autopilot());
    assert!(game.handle_input(&InputEvent::Key("KeyA".into())));
    assert!(game.autopilot());
    game.frame(FRAME_MS);
    // Survives the per-frame input reset
    assert!(game.autopilot());
}

#[test]
fn test_degenerate_playfield_stays_finite() {
    let mut game = Game::new(
        autopilot_settings(),
        Playfield::new(0.0, 0.0),
        MemoryStorage::new(),
        5,
        0.0,
    );
    for n in 1..600 {
        game.frame(n as f64 * FRAME_MS);
        let view = game.view();
        assert!(view.target.left.is_finite());
        assert!(view.target.left >= 0.0);
        assert!(view.target.right() <= view.playfield.width);
    }
}

#[test]
fn test_best_time_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");

    let recorded = {
        let mut game = Game::new(
            autopilot_settings(),
            Playfield::default(),
            FileStorage::new(&path),
            21,
            0.0,
        );
        run_until(&mut game, 0, |e| matches!(e, GameEvent::Won { .. }));
        game.best_times().best().expect("record written")
    };

    let game = Game::new(
        Settings::default(),
        Playfield::default(),
        FileStorage::new(&path),
        22,
        0.0,
    );
    assert_eq!(game.best_times().best(), Some(recorded));
    assert_eq!(game.state().score(), 0);
}

#[test]
fn test_target_stays_hittable_after_window_shrinks() {
    let mut game = Game::new(
        Settings::default(),
        Playfield::new(600.0, 1200.0),
        MemoryStorage::new(),
        42,
        0.0,
    );
    game.frame(0.0);

    let small = Playfield::new(600.0, 200.0);
    game.set_playfield(small);
    game.frame(FRAME_MS);

    let target = game.view().target;
    assert!(target.top >= 200.0 * 0.08 - 1e-3);
    assert!(target.top <= 200.0 * 0.36 + 1e-3);
    assert!(target.center_y() < small.muzzle(16.0).y);

    // Keep shooting; the target sweeps across the firing line
    let mut n = 1;
    let hit = loop {
        n += 1;
        game.handle_input(&InputEvent::PointerDown);
        let events = game.frame(n as f64 * FRAME_MS);
        if events.iter().any(|e| matches!(e, GameEvent::Hit { .. })) {
            break true;
        }
        if n > MAX_FRAMES {
            break false;
        }
    };
    assert!(hit, "no hit after resizing");
    assert_eq!(game.state().score(), 1);
}
