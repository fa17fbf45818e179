//! The recursive figure structure of matrix cells.
//!
//! A matrix figure is a structured collection of *elements*: identifiable
//! figural segments. The figure in a cell is fully specified by its highest
//! level element. Elements are recursively defined:
//!
//! ```text
//! element           ::= basic_element | modified_element | composite_element
//! modified_element  ::= element modifier_sequence
//! composite_element ::= element element {element}
//! modifier_sequence ::= element_modifier {element_modifier}
//! ```
//!
//! - A [`BasicElement`] is an unanalyzed visual pattern drawn by a [`Routine`].
//! - A [`ModifiedElement`] is a base element subject to a non-empty sequence
//!   of [`ElementModifier`]s.
//! - A [`CompositeElement`] is a sequence of at least two overlaid elements.
//!
//! [`Element::Empty`] additionally marks "no figure here". It only appears as
//! the result of removing a node during a transformation.
//!
//! # Equality
//!
//! Every node compares structurally: two nodes are equal iff they are the same
//! variant and all of their fields are pairwise equal. Routines and decorators
//! compare by name, parameters by value.

mod subtree;
mod target;

pub use subtree::subtrees;
pub use target::{SlotMut, Step, Target, TargetError, targets};

use std::fmt;

use thiserror::Error;

use crate::{
    draw::{Decorator, Draw, DrawError, Params, Routine, Surface},
    geometry::CellStructure,
};

/// Errors raised when constructing a node that violates its structural minimum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("a modified element requires at least one modifier, got {found}")]
    TooFewModifiers { found: usize },

    #[error("a composite element requires at least two elements, got {found}")]
    TooFewElements { found: usize },

    #[error("the base of a modified element cannot be empty")]
    EmptyBase,

    #[error("element {index} of a composite element is empty")]
    EmptyElement { index: usize },

    #[error("the empty element cannot be given as a figure")]
    EmptyFigure,
}

/// The variant tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Basic,
    Empty,
    Modified,
    Composite,
    Modifier,
}

impl NodeKind {
    /// Returns a human-readable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic element",
            Self::Empty => "empty element",
            Self::Modified => "modified element",
            Self::Composite => "composite element",
            Self::Modifier => "modifier",
        }
    }

    /// Returns the capability of nodes of this kind.
    pub fn capability(self) -> Capability {
        match self {
            Self::Modifier => Capability::Modifier,
            Self::Basic | Self::Empty | Self::Modified | Self::Composite => Capability::Element,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a node can be used as: a drawable element or a modifier of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Element,
    Modifier,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element => f.write_str("Element"),
            Self::Modifier => f.write_str("ElementModifier"),
        }
    }
}

/// Any node of the element structure syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Modifier(ElementModifier),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(element) => element.kind(),
            Self::Modifier(_) => NodeKind::Modifier,
        }
    }

    /// Borrows this node as a [`NodeRef`].
    pub fn as_ref(&self) -> NodeRef<'_> {
        match self {
            Self::Element(element) => NodeRef::Element(element),
            Self::Modifier(modifier) => NodeRef::Modifier(modifier),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<BasicElement> for Node {
    fn from(element: BasicElement) -> Self {
        Self::Element(element.into())
    }
}

impl From<ModifiedElement> for Node {
    fn from(element: ModifiedElement) -> Self {
        Self::Element(element.into())
    }
}

impl From<CompositeElement> for Node {
    fn from(element: CompositeElement) -> Self {
        Self::Element(element.into())
    }
}

impl From<ElementModifier> for Node {
    fn from(modifier: ElementModifier) -> Self {
        Self::Modifier(modifier)
    }
}

/// A borrowed node, as produced by traversals.
///
/// Equality compares the referenced nodes structurally, never by address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Element(&'a Element),
    Modifier(&'a ElementModifier),
}

impl NodeRef<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(element) => element.kind(),
            Self::Modifier(_) => NodeKind::Modifier,
        }
    }

    /// Clones the referenced node.
    pub fn to_node(&self) -> Node {
        match self {
            Self::Element(element) => Node::Element((*element).clone()),
            Self::Modifier(modifier) => Node::Modifier((*modifier).clone()),
        }
    }
}

/// An identifiable figure segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Basic(BasicElement),
    Empty,
    Modified(ModifiedElement),
    Composite(CompositeElement),
}

impl Element {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Basic(_) => NodeKind::Basic,
            Self::Empty => NodeKind::Empty,
            Self::Modified(_) => NodeKind::Modified,
            Self::Composite(_) => NodeKind::Composite,
        }
    }

    /// Returns `true` for the empty sentinel. Every other element is "real".
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Draws this element onto `surface` within `cell`.
    ///
    /// - Basic elements invoke their routine once.
    /// - Empty elements draw nothing.
    /// - Modified elements wrap the base element's drawing in each modifier in
    ///   sequence order (the first modifier wraps first, the last one is
    ///   outermost) and invoke the composed closure once.
    /// - Composite elements draw their children in order, later children
    ///   painted over earlier ones.
    ///
    /// # Errors
    ///
    /// Propagates the first [`DrawError`] raised by a routine or decorator.
    pub fn draw(&self, surface: &mut dyn Surface, cell: &CellStructure) -> Result<(), DrawError> {
        match self {
            Self::Basic(basic) => basic.routine.call(surface, cell, &basic.params),
            Self::Empty => Ok(()),
            Self::Modified(modified) => {
                let base = modified.element.as_ref();
                let mut routine: Draw<'_> =
                    Box::new(move |surface: &mut dyn Surface, cell: &CellStructure| {
                        base.draw(surface, cell)
                    });
                for modifier in &modified.modifiers {
                    routine = modifier.apply(routine);
                }
                routine(surface, cell)
            }
            Self::Composite(composite) => composite
                .elements
                .iter()
                .try_for_each(|element| element.draw(surface, cell)),
        }
    }

    /// Rebuilds a modified element from rewritten parts, restoring the
    /// structural minimums.
    ///
    /// An empty base collapses the whole node to [`Element::Empty`]; no
    /// modifiers leaves the bare base.
    pub(crate) fn modified_or_collapse(base: Element, modifiers: Vec<ElementModifier>) -> Element {
        if base.is_empty() {
            Element::Empty
        } else if modifiers.is_empty() {
            base
        } else {
            Element::Modified(ModifiedElement {
                element: Box::new(base),
                modifiers,
            })
        }
    }

    /// Rebuilds a composite element from rewritten children, restoring the
    /// structural minimums.
    ///
    /// Empty children are dropped; a single survivor replaces the composite
    /// and no survivors yield [`Element::Empty`].
    pub(crate) fn composite_or_collapse(elements: Vec<Element>) -> Element {
        let mut elements: Vec<Element> = elements
            .into_iter()
            .filter(|element| !element.is_empty())
            .collect();
        match elements.len() {
            0 => Element::Empty,
            1 => elements.pop().unwrap_or(Element::Empty),
            _ => Element::Composite(CompositeElement { elements }),
        }
    }

    /// Re-establishes the structural minimums throughout the tree.
    pub(crate) fn normalize(self) -> Element {
        match self {
            Self::Basic(_) | Self::Empty => self,
            Self::Modified(ModifiedElement { element, modifiers }) => {
                Self::modified_or_collapse(element.normalize(), modifiers)
            }
            Self::Composite(CompositeElement { elements }) => {
                Self::composite_or_collapse(elements.into_iter().map(Element::normalize).collect())
            }
        }
    }
}

impl From<BasicElement> for Element {
    fn from(element: BasicElement) -> Self {
        Self::Basic(element)
    }
}

impl From<ModifiedElement> for Element {
    fn from(element: ModifiedElement) -> Self {
        Self::Modified(element)
    }
}

impl From<CompositeElement> for Element {
    fn from(element: CompositeElement) -> Self {
        Self::Composite(element)
    }
}

/// An unanalyzed figural unit.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicElement {
    routine: Routine,
    params: Params,
}

impl BasicElement {
    pub fn new(routine: Routine, params: Params) -> Self {
        Self { routine, params }
    }

    /// Drawing routine bound to this element.
    pub fn routine(&self) -> Routine {
        self.routine
    }

    /// Params for the routine.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Replaces the parameters (builder style).
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

/// An element altered by a sequence of modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedElement {
    pub(crate) element: Box<Element>,
    pub(crate) modifiers: Vec<ElementModifier>,
}

impl ModifiedElement {
    /// Creates a modified element from a base, a first modifier and any
    /// further modifiers. The signature guarantees the modifier minimum.
    ///
    /// `element` must not be [`Element::Empty`]; use [`ModifiedElement::try_new`]
    /// for unchecked input.
    pub fn new(
        element: Element,
        modifier: ElementModifier,
        modifiers: impl IntoIterator<Item = ElementModifier>,
    ) -> Self {
        let mut sequence = vec![modifier];
        sequence.extend(modifiers);
        Self {
            element: Box::new(element),
            modifiers: sequence,
        }
    }

    /// Creates a modified element from a base and a modifier sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::TooFewModifiers`] if `modifiers` is empty and
    /// [`StructureError::EmptyBase`] if `element` is [`Element::Empty`].
    pub fn try_new(element: Element, modifiers: Vec<ElementModifier>) -> Result<Self, StructureError> {
        if modifiers.is_empty() {
            return Err(StructureError::TooFewModifiers { found: 0 });
        }
        if element.is_empty() {
            return Err(StructureError::EmptyBase);
        }
        Ok(Self {
            element: Box::new(element),
            modifiers,
        })
    }

    /// The base element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The modifiers in application order.
    pub fn modifiers(&self) -> &[ElementModifier] {
        &self.modifiers
    }
}

/// A sequence of overlaid elements.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeElement {
    pub(crate) elements: Vec<Element>,
}

impl CompositeElement {
    /// Creates a composite from two elements and any further elements. The
    /// signature guarantees the element minimum.
    ///
    /// None of the elements may be [`Element::Empty`]; use
    /// [`CompositeElement::try_new`] for unchecked input.
    pub fn new(first: Element, second: Element, elements: impl IntoIterator<Item = Element>) -> Self {
        let mut sequence = vec![first, second];
        sequence.extend(elements);
        Self { elements: sequence }
    }

    /// Creates a composite from a sequence of elements.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::TooFewElements`] if fewer than two elements are
    /// given and [`StructureError::EmptyElement`] for the first empty one.
    pub fn try_new(elements: Vec<Element>) -> Result<Self, StructureError> {
        if elements.len() < 2 {
            return Err(StructureError::TooFewElements {
                found: elements.len(),
            });
        }
        if let Some(index) = elements.iter().position(Element::is_empty) {
            return Err(StructureError::EmptyElement { index });
        }
        Ok(Self { elements })
    }

    /// The overlaid elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// An alteration of the drawing procedure for a given element.
///
/// Modifiers are data: a [`Decorator`] plus its [`Params`]. Applying a
/// modifier to a drawing closure returns a new closure with the
/// modification composed in.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementModifier {
    decorator: Decorator,
    params: Params,
}

impl ElementModifier {
    pub fn new(decorator: Decorator, params: Params) -> Self {
        Self { decorator, params }
    }

    pub fn decorator(&self) -> Decorator {
        self.decorator
    }

    /// Params for the decorator.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Decorates `routine` and returns the result.
    pub fn apply<'a>(&'a self, routine: Draw<'a>) -> Draw<'a> {
        self.decorator.decorate(routine, &self.params)
    }
}
