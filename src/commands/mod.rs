//! CLI commands for graphwalk

pub mod demo;
pub mod dispatch;
pub mod distances;
pub mod load;
pub mod path;
pub mod show;
pub mod traverse;
