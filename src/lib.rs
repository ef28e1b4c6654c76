#![allow(dead_code)]

pub mod agent;
pub mod carom_chess;
pub mod editor;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{Context, Error, anyhow};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::carom_chess::prelude::*;
    pub use super::editor::*;
    pub use super::utils::prelude::*;
}
