//! Menus offered by `--interactive`
//!
//! Each enum derives `inquiry::Choice`, which builds an `inquire` select
//! prompt whose entries are the variants' doc comments.

pub use self::run::*;

pub(crate) mod run;
