//! FrameStudio — client-side controller for the marketing-video wizard.

pub mod backend;
pub mod brand;
pub mod concept;
pub mod config;
pub mod error;
pub mod script;
pub mod storyboard;
pub mod view;
pub mod wizard;
