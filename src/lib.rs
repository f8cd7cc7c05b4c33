//! Reading-style panel: pick font and layout options in a draft, then
//! apply them to (or reset) the committed style owned by the consumer.

pub mod config;
pub mod logging;
pub mod panel;
pub mod style;
pub mod ui;
