//! Style data model: the closed field set, option domains and the
//! per-field style record shared by the draft and committed states.

pub mod domain;
mod field;
mod option;
mod state;

pub use domain::OptionDomain;
pub use field::StyleField;
pub use option::StyleOption;
pub use state::StyleState;
