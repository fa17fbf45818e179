//! Registry of named drawing routines and decorators.
//!
//! Figure documents refer to shapes and modifiers by name. A [`Library`]
//! resolves those names to the [`Routine`]s and [`Decorator`]s that draw them.
//!
//! # Overview
//!
//! - [`shapes`] - Stock shapes: `ellipse`, `triangle`, `rectangle`, `diamond`,
//!   `trapezoid` and `tee`.
//! - [`modifiers`] - Stock modifiers: `scale`, `rotation`, `shading` and
//!   `numerosity`.
//!
//! # Examples
//!
//! ```
//! # use raven::library::Library;
//! let library = Library::stock();
//! assert_eq!(library.routine("tee").unwrap().name(), "tee");
//! assert!(library.decorator("blur").is_err());
//! ```

pub mod modifiers;
pub mod shapes;

use indexmap::IndexMap;
use log::debug;

use raven_core::draw::{Decorator, Routine};

use crate::RavenError;

/// Name-indexed routines and decorators.
#[derive(Debug, Clone)]
pub struct Library {
    routines: IndexMap<&'static str, Routine>,
    decorators: IndexMap<&'static str, Decorator>,
}

impl Library {
    /// Creates a library with nothing registered.
    pub fn empty() -> Self {
        Self {
            routines: IndexMap::new(),
            decorators: IndexMap::new(),
        }
    }

    /// Creates a library holding every stock shape and modifier.
    pub fn stock() -> Self {
        shapes::STOCK
            .into_iter()
            .fold(Self::empty(), Self::with_routine)
            .with_decorators(modifiers::STOCK)
    }

    /// Registers `routine` under its name, replacing any routine of the same name.
    pub fn with_routine(mut self, routine: Routine) -> Self {
        self.register_routine(routine);
        self
    }

    /// Registers every decorator in `decorators`.
    pub fn with_decorators(mut self, decorators: impl IntoIterator<Item = Decorator>) -> Self {
        for decorator in decorators {
            self.register_decorator(decorator);
        }
        self
    }

    /// Registers `routine`, returning the routine it displaced, if any.
    pub fn register_routine(&mut self, routine: Routine) -> Option<Routine> {
        let previous = self.routines.insert(routine.name(), routine);
        if previous.is_some() {
            debug!(name = routine.name(); "Routine re-registered");
        }
        previous
    }

    /// Registers `decorator`, returning the decorator it displaced, if any.
    pub fn register_decorator(&mut self, decorator: Decorator) -> Option<Decorator> {
        let previous = self.decorators.insert(decorator.name(), decorator);
        if previous.is_some() {
            debug!(name = decorator.name(); "Decorator re-registered");
        }
        previous
    }

    /// Looks up a routine by name.
    ///
    /// # Errors
    ///
    /// Returns [`RavenError::UnknownRoutine`] if nothing is registered under `name`.
    pub fn routine(&self, name: &str) -> Result<Routine, RavenError> {
        self.routines
            .get(name)
            .copied()
            .ok_or_else(|| RavenError::UnknownRoutine(name.to_string()))
    }

    /// Looks up a decorator by name.
    ///
    /// # Errors
    ///
    /// Returns [`RavenError::UnknownDecorator`] if nothing is registered under `name`.
    pub fn decorator(&self, name: &str) -> Result<Decorator, RavenError> {
        self.decorators
            .get(name)
            .copied()
            .ok_or_else(|| RavenError::UnknownDecorator(name.to_string()))
    }

    pub fn routines(&self) -> impl Iterator<Item = Routine> + '_ {
        self.routines.values().copied()
    }

    pub fn decorators(&self) -> impl Iterator<Item = Decorator> + '_ {
        self.decorators.values().copied()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::stock()
    }
}
