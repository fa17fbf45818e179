//! Addressing of node positions inside an element tree.
//!
//! A [`Target`] describes where a node lives relative to the root of a tree:
//! a chain of [`Step`]s, each descending into the base of a modified element,
//! one of its modifiers, or a child of a composite element. Targets hold no
//! references, so they can be resolved against any tree instance of the same
//! shape, such as a working copy that is about to be edited in place.

use std::fmt;

use thiserror::Error;

use crate::element::{Element, ModifiedElement, NodeKind, NodeRef};

/// Errors raised when a target does not fit the tree it is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target `{target}` does not resolve: {reason}")]
    Unresolvable { target: String, reason: String },

    #[error("target `{target}` addresses a {expected}, found a {found}")]
    KindMismatch {
        target: String,
        expected: NodeKind,
        found: NodeKind,
    },
}

/// A single descent from a node into one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Into the base element of a modified element.
    Base,
    /// Into the modifier at the given index of a modified element.
    Modifier(usize),
    /// Into the child at the given index of a composite element.
    Child(usize),
}

impl Step {
    /// The name of the field this step descends through.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Base => "element",
            Self::Modifier(_) => "modifiers",
            Self::Child(_) => "elements",
        }
    }

    /// The sequence index this step selects, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Base => None,
            Self::Modifier(index) | Self::Child(index) => Some(index),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.attribute())?;
        if let Some(index) = self.index() {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// A mutable view of the slot a target resolves to.
#[derive(Debug)]
pub enum SlotMut<'a> {
    /// An element slot: the root, a base element or a composite child.
    Element(&'a mut Element),
    /// A modifier slot, given as its owning modified element and index.
    Modifier {
        owner: &'a mut ModifiedElement,
        index: usize,
    },
}

/// A re-resolvable path to one node of an element tree.
///
/// The root target has neither parent nor step. Every other target applies
/// its step to whatever its parent resolves to, or to the root when it has
/// no parent.
///
/// # Examples
///
/// ```
/// # use raven_core::element::{NodeKind, Step, Target};
/// let target = Target::root()
///     .join(Step::Child(1))
///     .join(Step::Modifier(0))
///     .with_kind(NodeKind::Modifier);
///
/// assert_eq!(target.to_string(), "root.elements[1].modifiers[0]");
/// assert_eq!(target.steps(), vec![Step::Child(1), Step::Modifier(0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Target {
    parent: Option<Box<Target>>,
    step: Option<Step>,
    kind: Option<NodeKind>,
}

impl Target {
    /// The target of the tree root itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a target from steps ordered from the root downwards.
    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        steps
            .into_iter()
            .fold(Self::root(), |target, step| target.join(step))
    }

    /// Returns the target one step below this one.
    pub fn join(&self, step: Step) -> Self {
        let parent = (!self.is_root()).then(|| Box::new(self.clone()));
        Self {
            parent,
            step: Some(step),
            kind: None,
        }
    }

    /// Tags the target with the kind of node it was built to describe (builder style).
    ///
    /// Tagged targets refuse to resolve to nodes of another kind.
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none() && self.step.is_none()
    }

    pub fn parent(&self) -> Option<&Target> {
        self.parent.as_deref()
    }

    pub fn step(&self) -> Option<Step> {
        self.step
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.kind
    }

    /// Returns the steps from the root down to this target.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = self.parent().map(Target::steps).unwrap_or_default();
        steps.extend(self.step);
        steps
    }

    /// Resolves this target against `root`.
    ///
    /// The parent chain is resolved first, then the step is applied to the
    /// element it yields.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::Unresolvable`] if a step does not fit the tree
    /// and [`TargetError::KindMismatch`] if the resolved node is not of the
    /// tagged kind.
    pub fn resolve<'a>(&self, root: &'a Element) -> Result<NodeRef<'a>, TargetError> {
        let container = match &self.parent {
            Some(parent) => parent.resolve_element(root)?,
            None => root,
        };

        let node = match self.step {
            None => NodeRef::Element(container),
            Some(step) => match (step, container) {
                (Step::Base, Element::Modified(modified)) => NodeRef::Element(modified.element()),
                (Step::Modifier(index), Element::Modified(modified)) => modified
                    .modifiers()
                    .get(index)
                    .map(NodeRef::Modifier)
                    .ok_or_else(|| self.out_of_bounds(index, modified.modifiers().len()))?,
                (Step::Child(index), Element::Composite(composite)) => composite
                    .elements()
                    .get(index)
                    .map(NodeRef::Element)
                    .ok_or_else(|| self.out_of_bounds(index, composite.elements().len()))?,
                (step, container) => return Err(self.no_such_field(step, container.kind())),
            },
        };

        self.check_kind(node.kind())?;
        Ok(node)
    }

    /// Resolves this target against `root` for in-place editing.
    ///
    /// # Errors
    ///
    /// Fails like [`Target::resolve`].
    pub fn resolve_mut<'a>(&self, root: &'a mut Element) -> Result<SlotMut<'a>, TargetError> {
        let container = match &self.parent {
            Some(parent) => parent.resolve_element_mut(root)?,
            None => root,
        };

        let slot = match self.step {
            None => SlotMut::Element(container),
            Some(step) => match (step, container) {
                (Step::Base, Element::Modified(modified)) => {
                    SlotMut::Element(modified.element.as_mut())
                }
                (Step::Modifier(index), Element::Modified(modified)) => {
                    let len = modified.modifiers.len();
                    if index >= len {
                        return Err(self.out_of_bounds(index, len));
                    }
                    SlotMut::Modifier {
                        owner: modified,
                        index,
                    }
                }
                (Step::Child(index), Element::Composite(composite)) => {
                    let len = composite.elements.len();
                    match composite.elements.get_mut(index) {
                        Some(child) => SlotMut::Element(child),
                        None => return Err(self.out_of_bounds(index, len)),
                    }
                }
                (step, container) => return Err(self.no_such_field(step, container.kind())),
            },
        };

        let found = match &slot {
            SlotMut::Element(element) => element.kind(),
            SlotMut::Modifier { .. } => NodeKind::Modifier,
        };
        self.check_kind(found)?;
        Ok(slot)
    }

    fn resolve_element<'a>(&self, root: &'a Element) -> Result<&'a Element, TargetError> {
        match self.resolve(root)? {
            NodeRef::Element(element) => Ok(element),
            NodeRef::Modifier(_) => Err(self.not_a_container(NodeKind::Modifier)),
        }
    }

    fn resolve_element_mut<'a>(&self, root: &'a mut Element) -> Result<&'a mut Element, TargetError> {
        match self.resolve_mut(root)? {
            SlotMut::Element(element) => Ok(element),
            SlotMut::Modifier { .. } => Err(self.not_a_container(NodeKind::Modifier)),
        }
    }

    fn check_kind(&self, found: NodeKind) -> Result<(), TargetError> {
        match self.kind {
            Some(expected) if expected != found => Err(TargetError::KindMismatch {
                target: self.to_string(),
                expected,
                found,
            }),
            _ => Ok(()),
        }
    }

    fn unresolvable(&self, reason: String) -> TargetError {
        TargetError::Unresolvable {
            target: self.to_string(),
            reason,
        }
    }

    fn out_of_bounds(&self, index: usize, len: usize) -> TargetError {
        self.unresolvable(format!("index {index} out of bounds for {len} entries"))
    }

    fn no_such_field(&self, step: Step, kind: NodeKind) -> TargetError {
        self.unresolvable(format!("a {kind} has no `{}` field", step.attribute()))
    }

    fn not_a_container(&self, kind: NodeKind) -> TargetError {
        self.unresolvable(format!("a {kind} has no children"))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "{parent}")?,
            None => f.write_str("root")?,
        }
        if let Some(step) = self.step {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Returns a target for every leaf of `element`.
///
/// Leaves are basic elements and modifiers; each target is tagged with the
/// kind of its leaf. Targets are listed depth-first: the base of a modified
/// element before its modifiers, composite children in order. Empty elements
/// have no addressable leaf.
pub fn targets(element: &Element) -> Vec<Target> {
    let mut output = Vec::new();
    collect_targets(element, Target::root(), &mut output);
    output
}

fn collect_targets(element: &Element, here: Target, output: &mut Vec<Target>) {
    match element {
        Element::Basic(_) => output.push(here.with_kind(NodeKind::Basic)),
        Element::Empty => {}
        Element::Modified(modified) => {
            collect_targets(modified.element(), here.join(Step::Base), output);
            output.extend(
                modified
                    .modifiers()
                    .iter()
                    .enumerate()
                    .map(|(index, _)| modifier_target(&here, index)),
            );
        }
        Element::Composite(composite) => {
            for (index, child) in composite.elements().iter().enumerate() {
                collect_targets(child, here.join(Step::Child(index)), output);
            }
        }
    }
}

fn modifier_target(owner: &Target, index: usize) -> Target {
    owner.join(Step::Modifier(index)).with_kind(NodeKind::Modifier)
}
