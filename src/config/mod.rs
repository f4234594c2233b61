//! Configuration for the cafe operations engine.
//!
//! Role rate tables and policy knobs (bonus rules, advance cap,
//! per-role credential requirements) are data, loaded from YAML files,
//! so deployment variants differ in configuration rather than code.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdvancePolicy, BonusPolicy, CafeConfig, CredentialPolicy, PolicyConfig, RoleRate, RolesConfig,
};
