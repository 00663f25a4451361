//! Terminal UI: one screen per game, switched with Tab.

mod app;
mod game_view;
mod ttt_view;

pub use app::App;
