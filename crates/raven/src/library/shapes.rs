//! Stock shapes.
//!
//! Every shape is drawn as a closed path centered in the cell and shrunk by
//! `slack` (default 0.9) so it clears the cell border. Aspect ratios are set
//! through `tallness` and `wideness`. Fills, line styles and placement are
//! left to modifiers.

use std::f64::consts::PI;

use raven_core::{
    draw::{DrawError, Params, Routine, Surface},
    geometry::CellStructure,
};

pub const ELLIPSE: Routine = Routine::new("ellipse", ellipse);
pub const TRIANGLE: Routine = Routine::new("triangle", triangle);
pub const RECTANGLE: Routine = Routine::new("rectangle", rectangle);
pub const DIAMOND: Routine = Routine::new("diamond", diamond);
pub const TRAPEZOID: Routine = Routine::new("trapezoid", trapezoid);
pub const TEE: Routine = Routine::new("tee", tee);

/// All stock shapes, in registration order.
pub const STOCK: [Routine; 6] = [ELLIPSE, TRIANGLE, RECTANGLE, DIAMOND, TRAPEZOID, TEE];

const DEFAULT_SLACK: f64 = 0.9;

#[derive(Debug, Clone, Copy)]
enum Bound {
    AtLeastOne,
    AboveOne,
}

impl Bound {
    fn holds(self, value: f64) -> bool {
        match self {
            Self::AtLeastOne => value >= 1.0,
            Self::AboveOne => value > 1.0,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::AtLeastOne => ">= 1",
            Self::AboveOne => "> 1",
        }
    }
}

fn bounded(
    params: &Params,
    routine: &'static str,
    name: &'static str,
    default: f64,
    bound: Bound,
) -> Result<f64, DrawError> {
    let value = params.float_or(name, default)?;
    if bound.holds(value) {
        Ok(value)
    } else {
        Err(DrawError::OutOfRange {
            routine,
            name,
            value,
            constraint: bound.describe(),
        })
    }
}

/// Drawable extent of the cell once slack is taken off.
fn extent(cell: &CellStructure, params: &Params) -> Result<(f64, f64), DrawError> {
    let slack = params.float_or("slack", DEFAULT_SLACK)?;
    Ok((cell.width() * slack, cell.height() * slack))
}

/// Draws `points` as a closed polygon around the cell center, scaled by `(sx, sy)`.
fn centered_polygon(
    surface: &mut dyn Surface,
    cell: &CellStructure,
    (sx, sy): (f64, f64),
    points: &[(f64, f64)],
) {
    surface.save();
    surface.translate(cell.width() / 2.0, cell.height() / 2.0);
    surface.scale(sx, sy);
    surface.new_sub_path();
    if let Some(&(x, y)) = points.first() {
        surface.move_to(x, y);
        for &(x, y) in &points[1..] {
            surface.line_to(x, y);
        }
        surface.line_to(x, y);
    }
    surface.restore();
}

fn aspect(wideness: f64, tallness: f64) -> (f64, f64) {
    let div = wideness.max(tallness);
    (wideness / div, tallness / div)
}

fn ellipse(surface: &mut dyn Surface, cell: &CellStructure, params: &Params) -> Result<(), DrawError> {
    let tallness = bounded(params, "ellipse", "tallness", 2.0, Bound::AboveOne)?;
    let (width, height) = extent(cell, params)?;

    surface.save();
    surface.translate(cell.width() / 2.0, cell.height() / 2.0);
    surface.scale(width / (2.0 * tallness), height / 2.0);
    surface.new_sub_path();
    surface.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
    surface.restore();
    Ok(())
}

fn triangle(surface: &mut dyn Surface, cell: &CellStructure, params: &Params) -> Result<(), DrawError> {
    let wideness = bounded(params, "triangle", "wideness", 1.0, Bound::AtLeastOne)?;
    let tallness = bounded(params, "triangle", "tallness", 1.0, Bound::AtLeastOne)?;
    let (w, h) = extent(cell, params)?;

    centered_polygon(
        surface,
        cell,
        aspect(wideness, tallness),
        &[(-w / 2.0, h / 2.0), (w / 2.0, h / 2.0), (0.0, -h / 2.0)],
    );
    Ok(())
}

fn rectangle(surface: &mut dyn Surface, cell: &CellStructure, params: &Params) -> Result<(), DrawError> {
    let tallness = bounded(params, "rectangle", "tallness", 2.0, Bound::AboveOne)?;
    let (w, h) = extent(cell, params)?;

    centered_polygon(
        surface,
        cell,
        (1.0 / tallness, 1.0),
        &[
            (-w / 2.0, h / 2.0),
            (w / 2.0, h / 2.0),
            (w / 2.0, -h / 2.0),
            (-w / 2.0, -h / 2.0),
        ],
    );
    Ok(())
}

fn diamond(surface: &mut dyn Surface, cell: &CellStructure, params: &Params) -> Result<(), DrawError> {
    let tallness = bounded(params, "diamond", "tallness", 1.0, Bound::AtLeastOne)?;
    let (w, h) = extent(cell, params)?;

    centered_polygon(
        surface,
        cell,
        (1.0 / tallness, 1.0),
        &[
            (0.0, h / 2.0),
            (w / 2.0, -h / 4.0),
            (0.0, -h / 2.0),
            (-w / 2.0, -h / 4.0),
        ],
    );
    Ok(())
}

fn trapezoid(surface: &mut dyn Surface, cell: &CellStructure, params: &Params) -> Result<(), DrawError> {
    let wideness = bounded(params, "trapezoid", "wideness", 2.0, Bound::AtLeastOne)?;
    let tallness = bounded(params, "trapezoid", "tallness", 1.0, Bound::AtLeastOne)?;
    let (w, h) = extent(cell, params)?;

    centered_polygon(
        surface,
        cell,
        aspect(wideness, tallness),
        &[
            (-w / 2.0, h / 2.0),
            (w / 2.0, h / 2.0),
            (w / 4.0, -h / 2.0),
            (-w / 4.0, -h / 2.0),
        ],
    );
    Ok(())
}

fn tee(surface: &mut dyn Surface, cell: &CellStructure, params: &Params) -> Result<(), DrawError> {
    let wideness = bounded(params, "tee", "wideness", 1.0, Bound::AtLeastOne)?;
    let tallness = bounded(params, "tee", "tallness", 1.0, Bound::AtLeastOne)?;
    let (w, h) = extent(cell, params)?;

    centered_polygon(
        surface,
        cell,
        aspect(wideness, tallness),
        &[
            (-w / 6.0, h / 2.0),
            (w / 6.0, h / 2.0),
            (w / 6.0, -h / 4.0),
            (w / 2.0, -h / 4.0),
            (w / 2.0, -h / 2.0),
            (-w / 2.0, -h / 2.0),
            (-w / 2.0, -h / 4.0),
            (-w / 6.0, -h / 4.0),
        ],
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use raven_core::draw::{DrawCommand, RecordingSurface};

    use super::*;

    fn record(routine: Routine, params: &Params) -> Result<RecordingSurface, DrawError> {
        let mut surface = RecordingSurface::new();
        routine.call(&mut surface, &CellStructure::new("c", 100.0, 100.0), params)?;
        Ok(surface)
    }

    fn scale_of(surface: &RecordingSurface) -> (f64, f64) {
        surface
            .commands()
            .iter()
            .find_map(|command| match command {
                DrawCommand::Scale { sx, sy } => Some((*sx, *sy)),
                _ => None,
            })
            .expect("shape should scale")
    }

    fn vertices(surface: &RecordingSurface) -> Vec<(f64, f64)> {
        surface
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_stock_shape_draws_one_balanced_path() {
        for routine in STOCK {
            let surface = record(routine, &Params::new()).unwrap();
            assert!(surface.is_balanced(), "{} left state on the stack", routine.name());
            assert_eq!(surface.sub_paths(), 1, "{}", routine.name());
        }
    }

    #[test]
    fn test_polygons_are_closed() {
        for routine in [TRIANGLE, RECTANGLE, DIAMOND, TRAPEZOID, TEE] {
            let points = vertices(&record(routine, &Params::new()).unwrap());
            assert_eq!(points.first(), points.last(), "{} is open", routine.name());
        }
    }

    #[test]
    fn test_ellipse_scales_by_tallness() {
        let surface = record(ELLIPSE, &Params::new().with("tallness", 4)).unwrap();

        let (sx, sy) = scale_of(&surface);
        assert_approx_eq!(f64, sx, 90.0 / 8.0);
        assert_approx_eq!(f64, sy, 45.0);
        assert!(
            surface
                .commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::Arc { radius, .. } if *radius == 1.0))
        );
    }

    #[test]
    fn test_slack_shrinks_the_path() {
        let points = vertices(&record(RECTANGLE, &Params::new().with("slack", 0.5)).unwrap());

        assert_approx_eq!(f64, points[0].0, -25.0);
        assert_approx_eq!(f64, points[0].1, 25.0);
    }

    #[test]
    fn test_aspect_normalizes_by_larger_dimension() {
        let surface = record(TEE, &Params::new().with("wideness", 4).with("tallness", 2)).unwrap();

        let (sx, sy) = scale_of(&surface);
        assert_approx_eq!(f64, sx, 1.0);
        assert_approx_eq!(f64, sy, 0.5);
    }

    #[test]
    fn test_trapezoid_top_is_half_the_base() {
        let points = vertices(&record(TRAPEZOID, &Params::new()).unwrap());

        let base = points[1].0 - points[0].0;
        let top = points[2].0 - points[3].0;
        assert_approx_eq!(f64, top * 2.0, base);
    }

    #[test]
    fn test_out_of_range_tallness_is_rejected() {
        let err = record(ELLIPSE, &Params::new().with("tallness", 1)).unwrap_err();

        assert_eq!(
            err,
            DrawError::OutOfRange {
                routine: "ellipse",
                name: "tallness",
                value: 1.0,
                constraint: "> 1",
            }
        );
        assert!(record(DIAMOND, &Params::new().with("tallness", 0.5)).is_err());
        assert!(record(TRIANGLE, &Params::new().with("wideness", 0.25)).is_err());
    }

    #[test]
    fn test_wrongly_typed_param_is_rejected() {
        let err = record(TEE, &Params::new().with("tallness", "tall")).unwrap_err();

        assert!(matches!(err, DrawError::InvalidParam { .. }));
    }
}
