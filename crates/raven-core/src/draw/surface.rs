//! The drawing surface interface.

use crate::color::Color;

/// A path-based drawing surface.
///
/// Routines build paths with [`move_to`](Surface::move_to),
/// [`line_to`](Surface::line_to) and [`arc`](Surface::arc) under a current
/// transformation that decorators adjust with [`translate`](Surface::translate),
/// [`scale`](Surface::scale) and [`rotate`](Surface::rotate). Transformation
/// state is scoped with [`save`](Surface::save) / [`restore`](Surface::restore).
///
/// The concurrency discipline of a surface is the caller's responsibility.
pub trait Surface {
    /// Pushes the current transformation and source onto the state stack.
    fn save(&mut self);

    /// Pops the state stack, restoring the last saved state.
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    fn scale(&mut self, sx: f64, sy: f64);

    /// Rotates the user space by `angle` radians.
    fn rotate(&mut self, angle: f64);

    /// Begins a new sub-path without a current point.
    fn new_sub_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a circular arc centered at `(xc, yc)` from `angle1` to `angle2` radians.
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);

    /// Sets the source color used by fill operations.
    fn set_source(&mut self, color: Color);

    /// Fills the current path, keeping the path for further operations.
    fn fill_preserve(&mut self);
}
