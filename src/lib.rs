//! SoundWave phone preview
//!
//! An animated mockup of the SoundWave music app that cycles through its
//! screens on a timer and plays out a scripted interaction on each one,
//! until the viewer takes over.

pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod random;
pub mod view;
