//! Primitive structural edits: add, remove and replace.

use crate::{
    element::{
        Capability, CompositeElement, Element, ElementModifier, ModifiedElement, Node, NodeKind,
    },
    transformation::TransformError,
};

/// A structural edit applied to a matched node.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Incorporate the given node into the matched node.
    Add(Node),
    /// Delete the matched node.
    Remove,
    /// Substitute the given node for the matched node.
    Replace(Node),
}

impl Operation {
    pub fn add(addition: impl Into<Node>) -> Self {
        Self::Add(addition.into())
    }

    pub fn replace(replacement: impl Into<Node>) -> Self {
        Self::Replace(replacement.into())
    }

    pub(crate) fn apply_to_element(&self, element: Element) -> Result<Element, TransformError> {
        match self {
            Self::Add(addition) => add_to_element(element, addition.clone()),
            Self::Remove => Ok(Element::Empty),
            Self::Replace(Node::Element(replacement)) => Ok(replacement.clone()),
            Self::Replace(Node::Modifier(_)) => Err(TransformError::CapabilityMismatch {
                expected: Capability::Element,
                found: Capability::Modifier,
            }),
        }
    }

    /// Returns `None` when the modifier is removed.
    pub(crate) fn apply_to_modifier(
        &self,
        _modifier: ElementModifier,
    ) -> Result<Option<ElementModifier>, TransformError> {
        match self {
            Self::Add(addition) => Err(TransformError::UnsupportedAddition {
                receiver: NodeKind::Modifier,
                addition: addition.kind(),
            }),
            Self::Remove => Ok(None),
            Self::Replace(Node::Modifier(replacement)) => Ok(Some(replacement.clone())),
            Self::Replace(Node::Element(_)) => Err(TransformError::CapabilityMismatch {
                expected: Capability::Modifier,
                found: Capability::Element,
            }),
        }
    }
}

fn add_to_element(element: Element, addition: Node) -> Result<Element, TransformError> {
    let unsupported = |receiver: NodeKind, addition: NodeKind| TransformError::UnsupportedAddition {
        receiver,
        addition,
    };

    match (element, addition) {
        (element, Node::Element(Element::Empty)) => {
            Err(unsupported(element.kind(), NodeKind::Empty))
        }
        (Element::Empty, addition) => Err(unsupported(NodeKind::Empty, addition.kind())),
        (Element::Composite(mut composite), Node::Element(addition)) => {
            composite.elements.push(addition);
            Ok(Element::Composite(composite))
        }
        (Element::Modified(mut modified), Node::Modifier(addition)) => {
            modified.modifiers.push(addition);
            Ok(Element::Modified(modified))
        }
        (element @ (Element::Basic(_) | Element::Modified(_)), Node::Element(addition)) => {
            Ok(CompositeElement::new(element, addition, []).into())
        }
        (element @ (Element::Basic(_) | Element::Composite(_)), Node::Modifier(addition)) => {
            Ok(ModifiedElement::new(element, addition, []).into())
        }
    }
}

/// Adds `addition` to a copy of `node` and returns the result.
///
/// | receiver            | addition | result                          |
/// |---------------------|----------|---------------------------------|
/// | basic or modified   | element  | new composite of both           |
/// | composite           | element  | addition appended as a child    |
/// | basic or composite  | modifier | new modified element            |
/// | modified            | modifier | addition appended to modifiers  |
///
/// # Errors
///
/// Every other combination, including additions to modifiers, to empty
/// elements and of empty elements, fails with
/// [`TransformError::UnsupportedAddition`].
pub fn add(node: &Node, addition: Node) -> Result<Node, TransformError> {
    match node {
        Node::Element(element) => add_to_element(element.clone(), addition).map(Node::Element),
        Node::Modifier(_) => Err(TransformError::UnsupportedAddition {
            receiver: NodeKind::Modifier,
            addition: addition.kind(),
        }),
    }
}

/// Removes `node`, yielding the empty element whatever the input.
pub fn remove(_node: &Node) -> Node {
    Node::Element(Element::Empty)
}

/// Replaces `node` with `replacement`.
///
/// # Errors
///
/// Returns [`TransformError::CapabilityMismatch`] if an element would be
/// replaced by a modifier or a modifier by an element.
pub fn replace(node: &Node, replacement: Node) -> Result<Node, TransformError> {
    let expected = node.kind().capability();
    let found = replacement.kind().capability();
    if expected != found {
        return Err(TransformError::CapabilityMismatch { expected, found });
    }
    Ok(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{basic, modifier};

    #[test]
    fn test_add_element_to_basic_makes_composite() {
        let rect: Node = basic("rect").into();

        let result = add(&rect, basic("circle").into()).unwrap();

        let expected: Node = CompositeElement::new(basic("rect"), basic("circle"), []).into();
        assert_eq!(result, expected);
        assert_eq!(rect, Node::from(basic("rect")));
    }

    #[test]
    fn test_add_element_to_modified_makes_composite() {
        let modified: Element = ModifiedElement::new(basic("rect"), modifier("scale"), []).into();

        let result = add(&modified.clone().into(), basic("circle").into()).unwrap();

        let expected: Node = CompositeElement::new(modified, basic("circle"), []).into();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_add_element_to_composite_appends() {
        let composite: Node = CompositeElement::new(basic("a"), basic("b"), []).into();

        let result = add(&composite, basic("c").into()).unwrap();

        let expected: Node = CompositeElement::new(basic("a"), basic("b"), [basic("c")]).into();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_add_modifier_wraps_basic_and_composite() {
        let composite: Element = CompositeElement::new(basic("a"), basic("b"), []).into();

        let wrapped = add(&composite.clone().into(), modifier("scale").into()).unwrap();
        let expected: Node = ModifiedElement::new(composite, modifier("scale"), []).into();
        assert_eq!(wrapped, expected);

        let wrapped = add(&basic("a").into(), modifier("scale").into()).unwrap();
        let expected: Node = ModifiedElement::new(basic("a"), modifier("scale"), []).into();
        assert_eq!(wrapped, expected);
    }

    #[test]
    fn test_add_modifier_to_modified_appends() {
        let modified: Node = ModifiedElement::new(basic("a"), modifier("scale"), []).into();

        let result = add(&modified, modifier("rotation").into()).unwrap();

        let expected: Node =
            ModifiedElement::new(basic("a"), modifier("scale"), [modifier("rotation")]).into();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_add_to_modifier_is_unsupported() {
        let err = add(&modifier("scale").into(), basic("a").into()).unwrap_err();

        assert_eq!(
            err,
            TransformError::UnsupportedAddition {
                receiver: NodeKind::Modifier,
                addition: NodeKind::Basic,
            }
        );
    }

    #[test]
    fn test_add_empty_is_unsupported() {
        let err = add(&basic("a").into(), Element::Empty.into()).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedAddition { addition: NodeKind::Empty, .. }));

        let err = add(&Element::Empty.into(), basic("a").into()).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedAddition { receiver: NodeKind::Empty, .. }));
    }

    #[test]
    fn test_remove_is_total() {
        assert_eq!(remove(&basic("a").into()), Node::Element(Element::Empty));
        assert_eq!(remove(&modifier("scale").into()), Node::Element(Element::Empty));
    }

    #[test]
    fn test_replace_checks_capability() {
        let replaced = replace(&basic("a").into(), basic("b").into()).unwrap();
        assert_eq!(replaced, Node::from(basic("b")));

        let err = replace(&basic("a").into(), modifier("scale").into()).unwrap_err();
        assert_eq!(
            err,
            TransformError::CapabilityMismatch {
                expected: Capability::Element,
                found: Capability::Modifier,
            }
        );
        assert_eq!(err.to_string(), "expected Element, got ElementModifier");

        let err = replace(&modifier("scale").into(), basic("a").into()).unwrap_err();
        assert_eq!(
            err,
            TransformError::CapabilityMismatch {
                expected: Capability::Modifier,
                found: Capability::Element,
            }
        );
    }

    #[test]
    fn test_operation_on_modifier() {
        let op = Operation::replace(modifier("rotation"));

        let result = op.apply_to_modifier(modifier("scale")).unwrap();

        assert_eq!(result, Some(modifier("rotation")));
        assert_eq!(Operation::Remove.apply_to_modifier(modifier("scale")).unwrap(), None);
    }
}
