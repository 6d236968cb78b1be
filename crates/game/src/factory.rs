//! Name-keyed algorithm registry.
//!
//! A configuration record is a JSON object whose `AlgoName` field selects the
//! constructor; the whole record is handed to that constructor, which picks out
//! its own options.

use std::collections::BTreeMap;

use bounded_engine::AlgoDumbo;
use chess_core::{Board, ConfigError, MoveSelector};
use linear_engine::{AlgoLinearDepthOne, AlgoLinearDepthTwoExt};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cli_algo::StdioCliAlgo;

pub const ALGO_NAME_FIELD: &str = "AlgoName";

/// Builds a selector from its configuration record.
pub type AlgoMachine<B> = fn(&Value) -> Result<Box<dyn MoveSelector<B>>, ConfigError>;

pub struct AlgoFactory<B: Board> {
    machines: BTreeMap<String, AlgoMachine<B>>,
}

impl<B: Board> Default for AlgoFactory<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> AlgoFactory<B> {
    pub fn new() -> Self {
        Self {
            machines: BTreeMap::new(),
        }
    }

    /// Registers `machine` under `name`. The first registration of a name wins;
    /// returns `false` if `name` was already taken.
    pub fn register(&mut self, name: impl Into<String>, machine: AlgoMachine<B>) -> bool {
        let name = name.into();
        if self.machines.contains_key(&name) {
            warn!(algo = %name, "ignoring duplicate algorithm registration");
            return false;
        }
        debug!(algo = %name, "registered algorithm");
        self.machines.insert(name, machine);
        true
    }

    pub fn try_create(&self, config: &Value) -> Result<Box<dyn MoveSelector<B>>, ConfigError> {
        let name = config
            .get(ALGO_NAME_FIELD)
            .and_then(Value::as_str)
            .ok_or(ConfigError::MissingAlgoName)?;
        let machine = self
            .machines
            .get(name)
            .ok_or_else(|| ConfigError::UnknownAlgo(name.to_string()))?;
        machine(config)
    }

    /// Registered names in sorted order.
    pub fn algo_names(&self) -> Vec<String> {
        self.machines.keys().cloned().collect()
    }
}

impl<B: Board + 'static> AlgoFactory<B> {
    /// Registers every selector shipped with the workspace.
    pub fn register_defaults(&mut self) {
        self.register(AlgoLinearDepthOne::NAME, AlgoLinearDepthOne::create_from_config::<B>);
        self.register(
            AlgoLinearDepthTwoExt::NAME,
            AlgoLinearDepthTwoExt::create_from_config::<B>,
        );
        self.register(AlgoDumbo::NAME, AlgoDumbo::create_from_config::<B>);
        self.register(StdioCliAlgo::NAME, StdioCliAlgo::create_from_config::<B>);
    }

    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        factory.register_defaults();
        factory
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod factory_tests;
