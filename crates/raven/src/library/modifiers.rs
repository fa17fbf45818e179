//! Stock modifiers.
//!
//! Each decorator reads its parameters when the wrapped drawing runs, so a
//! badly typed or out-of-range value surfaces as a [`DrawError`] at draw time.

use std::f64::consts::FRAC_PI_2;

use raven_core::{
    color::Color,
    draw::{Decorator, Draw, DrawError, Params, Surface},
    geometry::CellStructure,
};

pub const SCALE: Decorator = Decorator::new("scale", scale);
pub const ROTATION: Decorator = Decorator::new("rotation", rotation);
pub const SHADING: Decorator = Decorator::new("shading", shading);
pub const NUMEROSITY: Decorator = Decorator::new("numerosity", numerosity);

/// All stock modifiers, in registration order.
pub const STOCK: [Decorator; 4] = [SCALE, ROTATION, SHADING, NUMEROSITY];

/// Copies are laid out on a 3x3 grid.
const GRID: i64 = 3;

/// Shrinks the figure by `factor` (default 0.5).
fn scale<'a>(inner: Draw<'a>, params: &'a Params) -> Draw<'a> {
    Box::new(move |surface: &mut dyn Surface, cell: &CellStructure| {
        let factor = params.float_or("factor", 0.5)?;
        if factor <= 0.0 {
            return Err(DrawError::OutOfRange {
                routine: "scale",
                name: "factor",
                value: factor,
                constraint: "> 0",
            });
        }

        surface.save();
        surface.scale(factor, factor);
        surface.translate(cell.width() / 2.0, cell.height() / 2.0);
        inner(surface, cell)?;
        surface.restore();
        Ok(())
    })
}

/// Rotates the figure about the cell center by `angle` radians (default π/2).
fn rotation<'a>(inner: Draw<'a>, params: &'a Params) -> Draw<'a> {
    Box::new(move |surface: &mut dyn Surface, cell: &CellStructure| {
        let angle = params.float_or("angle", FRAC_PI_2)?;
        let (cx, cy) = (cell.width() / 2.0, cell.height() / 2.0);

        surface.save();
        surface.translate(cx, cy);
        surface.rotate(angle);
        surface.translate(-cx, -cy);
        inner(surface, cell)?;
        surface.restore();
        Ok(())
    })
}

/// Fills the figure's path with a gray of the given `lightness` (default 0.5).
fn shading<'a>(inner: Draw<'a>, params: &'a Params) -> Draw<'a> {
    Box::new(move |surface: &mut dyn Surface, cell: &CellStructure| {
        let lightness = params.float_or("lightness", 0.5)?;
        if !(0.0..=1.0).contains(&lightness) {
            return Err(DrawError::OutOfRange {
                routine: "shading",
                name: "lightness",
                value: lightness,
                constraint: "between 0 and 1",
            });
        }

        inner(surface, cell)?;
        surface.save();
        surface.set_source(Color::gray(lightness as f32));
        surface.fill_preserve();
        surface.restore();
        Ok(())
    })
}

/// Draws `number` (default 5) third-size copies, row by row on a 3x3 grid.
fn numerosity<'a>(inner: Draw<'a>, params: &'a Params) -> Draw<'a> {
    Box::new(move |surface: &mut dyn Surface, cell: &CellStructure| {
        let number = params.int_or("number", 5)?;
        if !(1..=GRID * GRID).contains(&number) {
            return Err(DrawError::OutOfRange {
                routine: "numerosity",
                name: "number",
                value: number as f64,
                constraint: "between 1 and 9",
            });
        }

        let third = 1.0 / GRID as f64;
        for i in 0..number {
            let x = (i % GRID) as f64 * cell.width() * third;
            let y = (i / GRID) as f64 * cell.height() * third;

            surface.save();
            surface.translate(x, y);
            surface.scale(third, third);
            inner(surface, cell)?;
            surface.restore();
        }
        Ok(())
    })
}
