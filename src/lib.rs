pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod game;
pub mod presenter;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;
