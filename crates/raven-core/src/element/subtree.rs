//! Enumeration of the unique nodes reachable from an element.

use crate::element::{Element, NodeRef};

/// Returns every unique node reachable from `element`, `element` included.
///
/// Nodes are unfolded through the base and modifiers of modified elements and
/// the children of composite elements; basic elements, empty elements and
/// modifiers are leaves. The traversal is breadth-first from the root, and a
/// node structurally equal to one already collected is skipped, so the first
/// occurrence wins.
///
/// # Examples
///
/// ```
/// # use raven_core::draw::{DrawError, Params, Routine, Surface};
/// # use raven_core::element::{BasicElement, CompositeElement, Element, NodeRef, subtrees};
/// # use raven_core::geometry::CellStructure;
/// fn blank(_: &mut dyn Surface, _: &CellStructure, _: &Params) -> Result<(), DrawError> {
///     Ok(())
/// }
///
/// let dot: Element = BasicElement::new(Routine::new("dot", blank), Params::new()).into();
/// let pair: Element = CompositeElement::new(dot.clone(), dot.clone(), []).into();
///
/// let nodes = subtrees(&pair);
/// assert_eq!(nodes, vec![NodeRef::Element(&pair), NodeRef::Element(&dot)]);
/// ```
pub fn subtrees(element: &Element) -> Vec<NodeRef<'_>> {
    let mut output = vec![NodeRef::Element(element)];
    let mut cursor = 0;

    while let Some(&node) = output.get(cursor) {
        cursor += 1;
        let NodeRef::Element(element) = node else {
            continue;
        };
        match element {
            Element::Basic(_) | Element::Empty => {}
            Element::Modified(modified) => {
                push_unique(&mut output, NodeRef::Element(modified.element()));
                for modifier in modified.modifiers() {
                    push_unique(&mut output, NodeRef::Modifier(modifier));
                }
            }
            Element::Composite(composite) => {
                for child in composite.elements() {
                    push_unique(&mut output, NodeRef::Element(child));
                }
            }
        }
    }

    output
}

fn push_unique<'a>(output: &mut Vec<NodeRef<'a>>, node: NodeRef<'a>) {
    if !output.contains(&node) {
        output.push(node);
    }
}
