//! Figure transformations.
//!
//! There are two levels at which figures change. *Modifiers* alter the way an
//! element is drawn. *Transformations*, the patterns that define how figures
//! differ between the rows and columns of a matrix, alter the structure of
//! elements: they add modifiers to or remove modifiers from figures, add or
//! remove whole elements, and replace one node with another.
//!
//! A [`Transformation`] is an ordered list of [`Rule`]s. Each rule pairs a
//! condition (a node pattern) with an [`Action`]. Applying a transformation to
//! an element:
//!
//! 1. copies the element into a working tree;
//! 2. for every rule in order, checks whether the condition is structurally
//!    equal to some subtree of the **original** element, and if so rewrites the
//!    working tree with the rule's action;
//! 3. returns the working tree. The input is never modified.
//!
//! Rewrites keep trees well-formed: after a deletion, a modified element that
//! lost its base becomes empty, one that lost all of its modifiers becomes its
//! base, and a composite element left with one child becomes that child.

mod operation;

pub use operation::{Operation, add, remove, replace};

use std::mem;

use log::{debug, trace};
use thiserror::Error;

use crate::element::{
    Capability, CompositeElement, Element, ElementModifier, ModifiedElement, Node, NodeKind,
    SlotMut, Target, TargetError, subtrees,
};

/// Errors raised while rewriting an element tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("expected {expected}, got {found}")]
    CapabilityMismatch {
        expected: Capability,
        found: Capability,
    },

    #[error("cannot add a {addition} to a {receiver}")]
    UnsupportedAddition {
        receiver: NodeKind,
        addition: NodeKind,
    },

    #[error(transparent)]
    Target(#[from] TargetError),
}

/// Where in a tree an action applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Every node structurally equal to the pattern.
    Pattern(Node),
    /// Exactly the node addressed by the target.
    At(Target),
}

impl Location {
    pub fn pattern(node: impl Into<Node>) -> Self {
        Self::Pattern(node.into())
    }
}

/// An operation paired with the location it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    operation: Operation,
    location: Location,
}

impl Action {
    pub fn new(operation: Operation, location: Location) -> Self {
        Self {
            operation,
            location,
        }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

/// A condition and the action taken when it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    condition: Node,
    action: Action,
}

impl Rule {
    pub fn new(condition: impl Into<Node>, action: Action) -> Self {
        Self {
            condition: condition.into(),
            action,
        }
    }

    /// A rule that rewrites every occurrence of the node it is conditioned on.
    pub fn on(pattern: impl Into<Node>, operation: Operation) -> Self {
        let pattern = pattern.into();
        Self {
            action: Action::new(operation, Location::Pattern(pattern.clone())),
            condition: pattern,
        }
    }

    pub fn condition(&self) -> &Node {
        &self.condition
    }

    pub fn action(&self) -> &Action {
        &self.action
    }
}

/// An ordered set of rules applied to produce a new tree.
///
/// # Examples
///
/// ```
/// # use raven_core::draw::{DrawError, Params, Routine, Surface};
/// # use raven_core::element::{BasicElement, CompositeElement, Element};
/// # use raven_core::geometry::CellStructure;
/// # use raven_core::transformation::{Operation, Rule, Transformation};
/// fn blank(_: &mut dyn Surface, _: &CellStructure, _: &Params) -> Result<(), DrawError> {
///     Ok(())
/// }
///
/// let ellipse: Element = BasicElement::new(Routine::new("ellipse", blank), Params::new()).into();
/// let triangle: Element = BasicElement::new(Routine::new("triangle", blank), Params::new()).into();
/// let figure: Element = CompositeElement::new(ellipse.clone(), triangle.clone(), []).into();
///
/// let transformation = Transformation::new(vec![Rule::on(ellipse, Operation::Remove)]);
///
/// assert_eq!(transformation.apply(&figure).unwrap(), triangle);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transformation {
    rules: Vec<Rule>,
}

impl Transformation {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Transforms `element`, returning a new tree.
    ///
    /// Rule conditions are matched against the subtrees of `element` as
    /// given, so earlier rules cannot change whether a later rule fires.
    /// Actions are applied, in rule order, to a progressively rewritten copy.
    ///
    /// # Errors
    ///
    /// Returns the first [`TransformError`] raised by an action. No partially
    /// rewritten tree is returned.
    pub fn apply(&self, element: &Element) -> Result<Element, TransformError> {
        let nodes = subtrees(element);
        trace!(subtrees = nodes.len(), rules = self.rules.len(); "Applying transformation");

        let mut output = element.clone();
        for (index, rule) in self.rules.iter().enumerate() {
            if nodes.contains(&rule.condition.as_ref()) {
                debug!(rule = index, condition:% = rule.condition.kind(); "Rule condition holds");
                output = transform(output, &rule.action)?;
            } else {
                trace!(rule = index; "Rule condition does not hold");
            }
        }
        Ok(output)
    }
}

impl FromIterator<Rule> for Transformation {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Applies `action` to `element` and returns the rewritten, well-formed tree.
///
/// With a [`Location::Pattern`], the operation is applied to every node equal
/// to the pattern. Matching starts at the root and does not descend into a
/// node that matched. With a [`Location::At`], the addressed slot is edited in
/// place and the tree is normalized afterwards.
///
/// # Errors
///
/// Returns a [`TransformError`] if the operation does not fit a matched node
/// or the target does not resolve.
pub fn transform(element: Element, action: &Action) -> Result<Element, TransformError> {
    match &action.location {
        Location::Pattern(pattern) => rewrite(element, &action.operation, pattern),
        Location::At(target) => rewrite_at(element, &action.operation, target),
    }
}

fn rewrite(element: Element, operation: &Operation, pattern: &Node) -> Result<Element, TransformError> {
    if matches!(pattern, Node::Element(p) if *p == element) {
        trace!(kind:% = element.kind(); "Pattern matched element");
        return operation.apply_to_element(element);
    }

    match element {
        Element::Basic(_) | Element::Empty => Ok(element),
        Element::Modified(ModifiedElement { element, modifiers }) => {
            let base = rewrite(*element, operation, pattern)?;
            let mut survivors = Vec::with_capacity(modifiers.len());
            for modifier in modifiers {
                if let Some(modifier) = rewrite_modifier(modifier, operation, pattern)? {
                    survivors.push(modifier);
                }
            }
            Ok(Element::modified_or_collapse(base, survivors))
        }
        Element::Composite(CompositeElement { elements }) => {
            let elements = elements
                .into_iter()
                .map(|child| rewrite(child, operation, pattern))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Element::composite_or_collapse(elements))
        }
    }
}

fn rewrite_modifier(
    modifier: ElementModifier,
    operation: &Operation,
    pattern: &Node,
) -> Result<Option<ElementModifier>, TransformError> {
    if matches!(pattern, Node::Modifier(p) if *p == modifier) {
        trace!(decorator = modifier.decorator().name(); "Pattern matched modifier");
        operation.apply_to_modifier(modifier)
    } else {
        Ok(Some(modifier))
    }
}

fn rewrite_at(mut element: Element, operation: &Operation, target: &Target) -> Result<Element, TransformError> {
    trace!(target:% = target; "Editing targeted slot");
    match target.resolve_mut(&mut element)? {
        SlotMut::Element(slot) => {
            let current = mem::replace(slot, Element::Empty);
            *slot = operation.apply_to_element(current)?;
        }
        SlotMut::Modifier { owner, index } => {
            let current = owner.modifiers.remove(index);
            if let Some(modifier) = operation.apply_to_modifier(current)? {
                owner.modifiers.insert(index, modifier);
            }
        }
    }
    Ok(element.normalize())
}
