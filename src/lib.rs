//! # Board Games
//!
//! Two small board games for the terminal: Connect Four against a tiered
//! heuristic computer opponent, and two-player Tic-Tac-Toe. Built with
//! Ratatui.
//!
//! ## Modules
//!
//! - [`connect_four`] — Core game logic: gravity board, line-scan win
//!   detection, game state machine
//! - [`ai`] — Agent trait, the tiered move evaluator, a random baseline
//! - [`tictactoe`] — 3x3 board, fixed-triple win lookup, turn state machine
//! - [`ui`] — Terminal UI: app loop, one view per game
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod connect_four;
pub mod error;
pub mod tictactoe;
pub mod ui;
