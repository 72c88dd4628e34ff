#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::info;

use crate::board::{Board, Rules};
use crate::components::{GameState, Input};
use crate::config::Config;

pub struct App {
    pub world: World,
    pub should_quit: bool,
    rules: Rules,
    // Every new board draws its own generator from this one
    rng: fastrand::Rng,
}

impl App {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_rules(config.rules(), config.rng())
    }

    #[must_use]
    pub fn with_rules(rules: Rules, mut rng: fastrand::Rng) -> Self {
        let mut world = World::new();
        world.insert_resource(Input::default());
        world.insert_resource(GameState::default());
        world.insert_resource(Board::new(rules, rng.fork()));

        Self {
            world,
            should_quit: false,
            rules,
            rng,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.world.resource::<Board>()
    }

    #[must_use]
    pub fn game_state(&self) -> &GameState {
        self.world.resource::<GameState>()
    }

    /// Starts a new session: fresh board, zero score, cleared statistics and input.
    /// The keyboard cursor stays where it was.
    pub fn reset(&mut self) {
        let cursor = self.world.resource::<Input>().cursor;

        self.world
            .insert_resource(Board::new(self.rules, self.rng.fork()));
        self.world.resource_mut::<GameState>().reset();
        self.world.insert_resource(Input {
            cursor,
            ..Input::default()
        });

        info!("Game restarted");
    }

    /// Restarts the game if a restart was requested since the last tick.
    pub fn on_tick(&mut self) {
        if self.world.resource::<Input>().restart {
            self.reset();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
