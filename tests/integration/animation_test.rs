//! Animation loop tests driven through a fake terminal

use std::time::Duration;

use crossterm::event::KeyCode;
use earthspin::animation::AnimationSettings;
use earthspin::config::GlobeConfig;
use earthspin::{Animation, Config, Globe, RotationState, StopReason, Viewport};

use crate::helpers::SpyTerminal;

fn settings() -> AnimationSettings {
    AnimationSettings {
        frame_interval: Duration::from_millis(1),
        ..AnimationSettings::default()
    }
}

fn animation() -> Animation {
    let config = Config::default();
    Animation::new(config.globe(), config.renderer(), settings())
}

#[test]
fn none_none_q_renders_three_frames_and_shuts_down_once() {
    let mut terminal = SpyTerminal::with_keys(
        Viewport::new(80, 40),
        vec![None, None, Some(KeyCode::Char('q'))],
    );

    let summary = animation().run(&mut terminal).unwrap();

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.reason, StopReason::QuitKey);
    assert_eq!(terminal.frames.len(), 3);
    assert_eq!(terminal.shutdowns, 1);
}

#[test]
fn rendered_frames_change_as_the_globe_rotates() {
    let mut terminal = SpyTerminal::with_keys(
        Viewport::new(80, 40),
        vec![None, None, None, Some(KeyCode::Char('q'))],
    );

    animation()
        .with_start(RotationState::new(0.4, 1.1))
        .run(&mut terminal)
        .unwrap();

    assert_eq!(terminal.frames.len(), 4);
    assert_ne!(terminal.frames[0], terminal.frames[3]);
}

#[test]
fn every_frame_shows_sphere_and_markers() {
    let mut terminal =
        SpyTerminal::with_keys(Viewport::new(80, 40), vec![None, Some(KeyCode::Char('q'))]);

    animation().run(&mut terminal).unwrap();

    for frame in &terminal.frames {
        assert!(frame.count('o') > 0);
        assert!(frame.count('x') > 0);
    }
}

#[test]
fn writes_stay_inside_viewport_when_globe_overflows() {
    let mut config = Config::default();
    config.view.fov = 120.0;
    let viewport = config.viewport();
    let animation = Animation::new(config.globe(), config.renderer(), settings());
    let mut terminal = SpyTerminal::with_keys(viewport, vec![Some(KeyCode::Char('q'))]);

    animation.run(&mut terminal).unwrap();

    assert!(!terminal.writes.is_empty());
    for &(row, col, _) in &terminal.writes {
        assert!(row < viewport.height && col < viewport.width, "({}, {})", row, col);
    }
}

#[test]
fn empty_globe_still_runs() {
    let config = Config {
        globe: GlobeConfig {
            sphere_points: 0,
            overlay_capacity: 0,
            markers: Vec::new(),
        },
        ..Config::default()
    };
    let globe = Globe::generate(&config.globe);
    let animation = Animation::new(globe, config.renderer(), settings());
    let mut terminal = SpyTerminal::with_keys(config.viewport(), vec![Some(KeyCode::Char('q'))]);

    let summary = animation.run(&mut terminal).unwrap();

    assert_eq!(summary.frames, 1);
    assert!(terminal.writes.is_empty());
    assert_eq!(terminal.shutdowns, 1);
}
