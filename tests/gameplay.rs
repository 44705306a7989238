//! End-to-end rounds driven through the public `Game` facade.

use std::collections::HashSet;

use catch_rush::sim::{GamePhase, ModeId};
use catch_rush::{Game, GameConfig, GameListener};

#[derive(Default)]
struct Counter {
    caught: u32,
    missed: u32,
    game_overs: u32,
    menus: u32,
}

impl GameListener for Counter {
    fn on_caught(&mut self, _score: u32) {
        self.caught += 1;
    }
    fn on_missed(&mut self, _lives: u32) {
        self.missed += 1;
    }
    fn on_game_over(&mut self, _score: u32) {
        self.game_overs += 1;
    }
    fn on_returned_to_menu(&mut self) {
        self.menus += 1;
    }
}

fn game(seed: u64) -> Game<Counter> {
    let config = GameConfig {
        seed,
        ..Default::default()
    };
    Game::new(&config, Counter::default())
}

#[test]
fn hard_mode_two_misses_then_back_to_menu() {
    let mut game = game(1);
    // A zero-width catcher can't catch anything
    game.set_catcher_size(0.0, 0.0);
    assert!(game.start("hard"));
    assert_eq!(game.lives(), 2);

    let mut frames = 0;
    while game.phase() == GamePhase::Playing {
        game.on_frame(1.0 / 60.0);
        frames += 1;
        assert!(frames < 60 * 10, "round never ended");
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.lives(), 0);
    assert_eq!(game.listener().missed, 2);
    assert_eq!(game.listener().game_overs, 1);
    // Objects stay on screen during the dwell
    let during_dwell = game.snapshot();
    assert!(during_dwell.catcher_lost);

    let mut dwell = 0.0;
    while game.phase() == GamePhase::GameOver {
        game.on_frame(0.1);
        dwell += 0.1;
    }
    assert!(dwell >= 1.2 - 1e-3);
    assert_eq!(game.phase(), GamePhase::Menu);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), 2);
    assert!(game.snapshot().objects.is_empty());
    assert_eq!(game.listener().menus, 1);
}

#[test]
fn wide_catcher_scores_each_object_once() {
    let mut game = game(42);
    game.set_catcher_size(420.0, 14.0);
    game.start("normal");

    let mut seen = HashSet::new();
    for _ in 0..(240 * 3) {
        game.on_frame(1.0 / 240.0);
        for obj in &game.session().objects {
            seen.insert(obj.id);
        }
    }

    let remaining = game.session().objects.len() as u32;
    let caught = game.listener().caught;
    assert!(caught > 0);
    assert_eq!(game.listener().missed, 0);
    assert_eq!(game.lives(), 3);
    assert_eq!(caught + remaining, seen.len() as u32);
    assert_eq!(game.score(), caught * 10);
}

#[test]
fn easy_idle_scenario_stays_bounded() {
    let mut game = game(7);
    game.start("easy");

    let mut max_objects = 0;
    for _ in 0..100 {
        game.on_frame(0.1);
        max_objects = max_objects.max(game.snapshot().objects.len());
        assert!(game.lives() <= 5);
    }
    assert!(max_objects <= 10, "objects piled up: {max_objects}");
}

#[test]
fn select_mode_twice_equals_once() {
    let mut once = game(3);
    let mut twice = game(3);
    once.select_mode("normal");
    twice.select_mode("normal");
    twice.select_mode("normal");
    assert_eq!(once.snapshot(), twice.snapshot());
    assert_eq!(once.session().selected_mode, twice.session().selected_mode);
}

#[test]
fn unknown_mode_is_ignored() {
    let mut game = game(3);
    assert!(!game.select_mode("nightmare"));
    assert!(!game.start("nightmare"));
    assert_eq!(game.phase(), GamePhase::Menu);
    assert_eq!(game.session().selected_mode, ModeId::Normal);
}

#[test]
fn return_to_menu_abandons_round() {
    let mut game = game(9);
    game.start("easy");
    game.on_frame(0.5);
    assert!(!game.snapshot().objects.is_empty());

    assert!(game.return_to_menu());
    assert_eq!(game.phase(), GamePhase::Menu);
    assert!(game.snapshot().objects.is_empty());
    assert_eq!(game.lives(), 5);
    assert!(!game.return_to_menu());
}

#[test]
fn restart_after_game_over_resets_round() {
    let mut game = game(11);
    game.set_catcher_size(0.0, 0.0);
    game.start("hard");
    while game.phase() != GamePhase::Menu {
        game.on_frame(0.05);
    }

    game.set_catcher_size(120.0, 14.0);
    assert!(game.start("easy"));
    assert_eq!(game.lives(), 5);
    assert_eq!(game.score(), 0);
    assert!(game.snapshot().objects.is_empty());
    assert_eq!(game.snapshot().catcher.center.x, 210.0);
}
