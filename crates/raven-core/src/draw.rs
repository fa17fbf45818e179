//! Drawing interfaces for figure elements.
//!
//! The element model never renders anything itself. Drawing is delegated to
//! two narrow interfaces supplied from outside the core:
//!
//! - [`Routine`]: a named drawing routine taking a [`Surface`], the
//!   [`CellStructure`](crate::geometry::CellStructure) and its [`Params`].
//! - [`Decorator`]: a named higher-order function wrapping a [`Draw`] closure
//!   into a new one, used by element modifiers.
//!
//! [`RecordingSurface`] implements [`Surface`] by recording every call, which
//! keeps element drawing observable without a rendering backend.

mod params;
mod recording;
mod routine;
mod surface;

pub use params::{ParamValue, Params};
pub use recording::{DrawCommand, RecordingSurface};
pub use routine::{Decorator, DecoratorFn, Draw, Routine, RoutineFn};
pub use surface::Surface;

use thiserror::Error;

/// Errors raised while drawing a figure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("parameter `{name}` must be {expected}, got `{found}`")]
    InvalidParam {
        name: String,
        expected: &'static str,
        found: String,
    },

    #[error("parameter `{name}` of `{routine}` is out of range: {value} (requires {constraint})")]
    OutOfRange {
        routine: &'static str,
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}
