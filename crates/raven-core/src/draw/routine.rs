//! Named drawing routines and decorators.
//!
//! Both are plain function pointers paired with a name. The name is the
//! identity of the routine: two routines are equal iff their names are
//! equal, which gives elements value-based equality and lets figure
//! documents refer to routines by name.

use std::fmt;

use crate::{
    draw::{DrawError, Params, Surface},
    geometry::CellStructure,
};

/// A drawing closure ready to be invoked on a surface.
///
/// This is the shape decorators consume and produce.
pub type Draw<'a> = Box<dyn Fn(&mut dyn Surface, &CellStructure) -> Result<(), DrawError> + 'a>;

/// Signature of a drawing routine.
pub type RoutineFn = fn(&mut dyn Surface, &CellStructure, &Params) -> Result<(), DrawError>;

/// Signature of a decorator: wraps a drawing closure into a new one.
pub type DecoratorFn = for<'a> fn(Draw<'a>, &'a Params) -> Draw<'a>;

/// A named drawing routine for an unanalyzed figure.
#[derive(Clone, Copy)]
pub struct Routine {
    name: &'static str,
    draw: RoutineFn,
}

impl Routine {
    pub const fn new(name: &'static str, draw: RoutineFn) -> Self {
        Self { name, draw }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the routine.
    pub fn call(
        &self,
        surface: &mut dyn Surface,
        cell: &CellStructure,
        params: &Params,
    ) -> Result<(), DrawError> {
        (self.draw)(surface, cell, params)
    }
}

impl PartialEq for Routine {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Routine").field(&self.name).finish()
    }
}

/// A named decorator altering how a drawing closure behaves.
#[derive(Clone, Copy)]
pub struct Decorator {
    name: &'static str,
    decorate: DecoratorFn,
}

impl Decorator {
    pub const fn new(name: &'static str, decorate: DecoratorFn) -> Self {
        Self { name, decorate }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Wraps `inner`, returning the decorated drawing closure.
    pub fn decorate<'a>(&self, inner: Draw<'a>, params: &'a Params) -> Draw<'a> {
        (self.decorate)(inner, params)
    }
}

impl PartialEq for Decorator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Decorator").field(&self.name).finish()
    }
}
