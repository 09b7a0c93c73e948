//! Simulator: a CPU together with the run settings from its configuration.
//!
//! Hosts that only want "load an image, run it, inspect the result" drive this
//! type; everything it does is also available directly on [`Cpu`].

use crate::common::SimError;
use crate::config::Config;
use crate::core::{Cpu, RunOutcome, Status};
use crate::sim::loader;

/// Top-level simulator: CPU architectural state + run budget.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, flags, memory, stats).
    pub cpu: Cpu,
    /// Cycle budget applied by [`Simulator::run`].
    pub max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::with_config(config),
            max_cycles: config.general.max_cycles,
        })
    }

    /// Creates a simulator from JSON configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text does not parse or validate.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config = Config::from_json(json)?;
        Self::new(&config)
    }

    /// Resets the machine and loads `image` at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image exceeds memory capacity.
    pub fn load(&mut self, image: &[u8]) -> Result<(), SimError> {
        self.cpu.reset();
        loader::load_image(&mut self.cpu, image)
    }

    /// Advances the simulator by one instruction cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Fault`] if the cycle faulted.
    pub fn tick(&mut self) -> Result<Status, SimError> {
        Ok(self.cpu.step()?)
    }

    /// Runs until halt, fault, or the configured cycle budget.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Fault`] with the first fault encountered.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        Ok(self.cpu.run(self.max_cycles)?)
    }

    /// Loads `image` and runs it; shorthand for [`Simulator::load`] then [`Simulator::run`].
    ///
    /// # Errors
    ///
    /// Any error from loading or running.
    pub fn run_image(&mut self, image: &[u8]) -> Result<RunOutcome, SimError> {
        self.load(image)?;
        self.run()
    }
}
