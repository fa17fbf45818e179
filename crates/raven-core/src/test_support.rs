//! Shared fixtures for unit tests.
//!
//! Routines and decorators here record simple, recognizable commands so tests
//! can tell elements apart on a [`RecordingSurface`](crate::draw::RecordingSurface).

use proptest::prelude::*;

use crate::{
    draw::{Decorator, Draw, DrawError, Params, Routine, Surface},
    element::{BasicElement, CompositeElement, Element, ElementModifier, ModifiedElement},
    geometry::CellStructure,
};

pub(crate) const SHAPES: [&str; 4] = ["ellipse", "triangle", "rect", "circle"];
pub(crate) const DECORATORS: [&str; 3] = ["scale", "rotation", "shading"];

pub(crate) fn cell() -> CellStructure {
    CellStructure::new("test", 10.0, 10.0)
}

/// Draws a horizontal stroke as wide as the cell times the `size` param.
fn stroke(surface: &mut dyn Surface, cell: &CellStructure, params: &Params) -> Result<(), DrawError> {
    let size = params.float_or("size", 1.0)?;
    surface.new_sub_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(size * cell.width(), 0.0);
    Ok(())
}

/// Translates by the `dx` param inside a saved state.
fn offset<'a>(inner: Draw<'a>, params: &'a Params) -> Draw<'a> {
    Box::new(move |surface: &mut dyn Surface, cell: &CellStructure| {
        let dx = params.float_or("dx", 0.0)?;
        surface.save();
        surface.translate(dx, 0.0);
        inner(surface, cell)?;
        surface.restore();
        Ok(())
    })
}

pub(crate) fn basic(name: &'static str) -> Element {
    BasicElement::new(Routine::new(name, stroke), Params::new()).into()
}

pub(crate) fn basic_sized(name: &'static str, size: f64) -> Element {
    BasicElement::new(Routine::new(name, stroke), Params::new().with("size", size)).into()
}

pub(crate) fn modifier(name: &'static str) -> ElementModifier {
    ElementModifier::new(Decorator::new(name, offset), Params::new())
}

pub(crate) fn offset_modifier(name: &'static str, dx: f64) -> ElementModifier {
    ElementModifier::new(Decorator::new(name, offset), Params::new().with("dx", dx))
}

/// Returns `true` if the structural minimums hold everywhere below the root.
pub(crate) fn is_well_formed(element: &Element) -> bool {
    match element {
        Element::Basic(_) | Element::Empty => true,
        Element::Modified(modified) => {
            !modified.modifiers().is_empty()
                && !modified.element().is_empty()
                && is_well_formed(modified.element())
        }
        Element::Composite(composite) => {
            composite.elements().len() >= 2
                && composite
                    .elements()
                    .iter()
                    .all(|child| !child.is_empty() && is_well_formed(child))
        }
    }
}

pub(crate) fn modifier_strategy() -> impl Strategy<Value = ElementModifier> {
    (0..DECORATORS.len(), 0u8..3)
        .prop_map(|(i, dx)| offset_modifier(DECORATORS[i], f64::from(dx)))
}

/// Random element trees built only from real (non-empty) elements.
pub(crate) fn element_strategy() -> impl Strategy<Value = Element> {
    let leaf = (0..SHAPES.len(), 1u8..3).prop_map(|(i, size)| basic_sized(SHAPES[i], f64::from(size)));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::collection::vec(modifier_strategy(), 1..3)
            )
                .prop_map(|(base, modifiers)| {
                    ModifiedElement::try_new(base, modifiers)
                        .expect("strategy yields at least one modifier")
                        .into()
                }),
            prop::collection::vec(inner, 2..4).prop_map(|elements| {
                CompositeElement::try_new(elements)
                    .expect("strategy yields at least two elements")
                    .into()
            }),
        ]
    })
}
