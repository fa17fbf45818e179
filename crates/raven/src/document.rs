//! Serializable figure documents.
//!
//! Figures and transformations are written in TOML and refer to routines and
//! decorators by name. A [`Library`] turns a document into core types.
//!
//! # Format
//!
//! Elements are tables tagged by `kind`. Modifiers are tables with a
//! `decorator` name and optional `params`. A rule names a condition, an
//! operation and, optionally, where the operation applies. Without a
//! location, the operation applies to every node equal to the condition.
//!
//! ```toml
//! [figure]
//! kind = "composite"
//!
//! [[figure.elements]]
//! kind = "basic"
//! routine = "ellipse"
//! params = { tallness = 4 }
//!
//! [[figure.elements]]
//! kind = "basic"
//! routine = "triangle"
//!
//! [[rules]]
//! condition = { kind = "basic", routine = "ellipse", params = { tallness = 4 } }
//! operation = { op = "add", node = { decorator = "shading" } }
//!
//! [[rules]]
//! condition = { kind = "basic", routine = "triangle" }
//! operation = { op = "remove" }
//! location = { at = [{ child = 1 }] }
//! ```

use log::trace;
use serde::{Deserialize, Serialize};

use raven_core::{
    draw::Params,
    element::{
        BasicElement, CompositeElement, Element, ElementModifier, ModifiedElement, Node, Step,
        StructureError, Target,
    },
    transformation::{Action, Location, Operation, Rule, Transformation},
};

use crate::{RavenError, library::Library};

/// A figure together with the transformation that produces its row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    figure: FigureDoc,
    #[serde(default)]
    rules: Vec<RuleDoc>,
}

impl Document {
    pub fn new(figure: FigureDoc, rules: Vec<RuleDoc>) -> Self {
        Self { figure, rules }
    }

    pub fn figure(&self) -> &FigureDoc {
        &self.figure
    }

    pub fn rules(&self) -> &[RuleDoc] {
        &self.rules
    }
}

/// A sequence of figures, as written for a transformed row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDoc {
    figures: Vec<FigureDoc>,
}

impl RowDoc {
    pub fn from_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Self {
        Self {
            figures: elements.into_iter().map(FigureDoc::from_element).collect(),
        }
    }

    pub fn figures(&self) -> &[FigureDoc] {
        &self.figures
    }
}

/// A serialized [`Element`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FigureDoc {
    Basic {
        routine: String,
        #[serde(default, skip_serializing_if = "Params::is_empty")]
        params: Params,
    },
    /// Written for figures removed entirely; never accepted as input.
    Empty,
    Modified {
        element: Box<FigureDoc>,
        modifiers: Vec<ModifierDoc>,
    },
    Composite {
        elements: Vec<FigureDoc>,
    },
}

impl FigureDoc {
    /// Describes `element` by the names of its routines and decorators.
    pub fn from_element(element: &Element) -> Self {
        match element {
            Element::Basic(basic) => Self::Basic {
                routine: basic.routine().name().to_string(),
                params: basic.params().clone(),
            },
            Element::Empty => Self::Empty,
            Element::Modified(modified) => Self::Modified {
                element: Box::new(Self::from_element(modified.element())),
                modifiers: modified
                    .modifiers()
                    .iter()
                    .map(ModifierDoc::from_modifier)
                    .collect(),
            },
            Element::Composite(composite) => Self::Composite {
                elements: composite.elements().iter().map(Self::from_element).collect(),
            },
        }
    }
}

/// A serialized [`ElementModifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModifierDoc {
    decorator: String,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    params: Params,
}

impl ModifierDoc {
    pub fn new(decorator: impl Into<String>, params: Params) -> Self {
        Self {
            decorator: decorator.into(),
            params,
        }
    }

    pub fn from_modifier(modifier: &ElementModifier) -> Self {
        Self::new(modifier.decorator().name(), modifier.params().clone())
    }

    pub fn decorator(&self) -> &str {
        &self.decorator
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Either kind of node. Element tables carry a `kind`; modifier tables do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeDoc {
    Element(FigureDoc),
    Modifier(ModifierDoc),
}

/// A serialized [`Operation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OperationDoc {
    Add { node: NodeDoc },
    Remove,
    Replace { node: NodeDoc },
}

/// A serialized [`Location`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationDoc {
    Pattern(NodeDoc),
    At(Vec<StepDoc>),
}

/// A serialized target [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDoc {
    Base,
    Modifier(usize),
    Child(usize),
}

impl From<StepDoc> for Step {
    fn from(step: StepDoc) -> Self {
        match step {
            StepDoc::Base => Self::Base,
            StepDoc::Modifier(index) => Self::Modifier(index),
            StepDoc::Child(index) => Self::Child(index),
        }
    }
}

/// A serialized [`Rule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDoc {
    condition: NodeDoc,
    operation: OperationDoc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<LocationDoc>,
}

impl RuleDoc {
    pub fn new(condition: NodeDoc, operation: OperationDoc, location: Option<LocationDoc>) -> Self {
        Self {
            condition,
            operation,
            location,
        }
    }

    pub fn condition(&self) -> &NodeDoc {
        &self.condition
    }

    pub fn operation(&self) -> &OperationDoc {
        &self.operation
    }

    pub fn location(&self) -> Option<&LocationDoc> {
        self.location.as_ref()
    }
}

impl Library {
    /// Builds the element a figure document describes.
    ///
    /// # Errors
    ///
    /// Returns [`RavenError::UnknownRoutine`] or [`RavenError::UnknownDecorator`]
    /// for names not in this library, and [`RavenError::Structure`] for modified
    /// elements without modifiers, composite elements with fewer than two
    /// children and any `empty` figure.
    pub fn build_element(&self, figure: &FigureDoc) -> Result<Element, RavenError> {
        let element = match figure {
            FigureDoc::Basic { routine, params } => {
                BasicElement::new(self.routine(routine)?, params.clone()).into()
            }
            FigureDoc::Empty => return Err(StructureError::EmptyFigure.into()),
            FigureDoc::Modified { element, modifiers } => {
                let modifiers = modifiers
                    .iter()
                    .map(|modifier| self.build_modifier(modifier))
                    .collect::<Result<Vec<_>, _>>()?;
                ModifiedElement::try_new(self.build_element(element)?, modifiers)?.into()
            }
            FigureDoc::Composite { elements } => {
                let elements = elements
                    .iter()
                    .map(|element| self.build_element(element))
                    .collect::<Result<Vec<_>, _>>()?;
                CompositeElement::try_new(elements)?.into()
            }
        };
        Ok(element)
    }

    /// Builds the modifier a modifier document describes.
    ///
    /// # Errors
    ///
    /// Returns [`RavenError::UnknownDecorator`] if the decorator is not registered.
    pub fn build_modifier(&self, modifier: &ModifierDoc) -> Result<ElementModifier, RavenError> {
        Ok(ElementModifier::new(
            self.decorator(&modifier.decorator)?,
            modifier.params.clone(),
        ))
    }

    pub fn build_node(&self, node: &NodeDoc) -> Result<Node, RavenError> {
        match node {
            NodeDoc::Element(figure) => self.build_element(figure).map(Node::Element),
            NodeDoc::Modifier(modifier) => self.build_modifier(modifier).map(Node::Modifier),
        }
    }

    /// Builds a transformation from its rule documents, keeping rule order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while building a rule's nodes.
    pub fn build_transformation(&self, rules: &[RuleDoc]) -> Result<Transformation, RavenError> {
        rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                trace!(rule = index; "Building rule");
                self.build_rule(rule)
            })
            .collect()
    }

    fn build_rule(&self, rule: &RuleDoc) -> Result<Rule, RavenError> {
        let condition = self.build_node(&rule.condition)?;
        let operation = match &rule.operation {
            OperationDoc::Add { node } => Operation::Add(self.build_node(node)?),
            OperationDoc::Remove => Operation::Remove,
            OperationDoc::Replace { node } => Operation::Replace(self.build_node(node)?),
        };
        let location = match &rule.location {
            None => Location::Pattern(condition.clone()),
            Some(LocationDoc::Pattern(pattern)) => Location::Pattern(self.build_node(pattern)?),
            Some(LocationDoc::At(steps)) => {
                Location::At(Target::from_steps(steps.iter().copied().map(Step::from)))
            }
        };
        Ok(Rule::new(condition, Action::new(operation, location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{modifiers, shapes};

    const SAMPLE: &str = r#"
        [figure]
        kind = "composite"

        [[figure.elements]]
        kind = "basic"
        routine = "ellipse"
        params = { tallness = 4 }

        [[figure.elements]]
        kind = "modified"
        element = { kind = "basic", routine = "triangle" }
        modifiers = [{ decorator = "rotation", params = { angle = 0.5 } }]

        [[rules]]
        condition = { kind = "basic", routine = "ellipse", params = { tallness = 4 } }
        operation = { op = "add", node = { decorator = "shading" } }

        [[rules]]
        condition = { decorator = "rotation", params = { angle = 0.5 } }
        operation = { op = "remove" }
        location = { at = [{ child = 1 }, { modifier = 0 }] }
    "#;

    fn sample() -> Document {
        toml::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_sample_document() {
        let document = sample();

        assert_eq!(document.rules().len(), 2);
        assert!(matches!(
            document.rules()[0].condition(),
            NodeDoc::Element(FigureDoc::Basic { routine, .. }) if routine == "ellipse"
        ));
        assert!(matches!(document.rules()[1].condition(), NodeDoc::Modifier(_)));
        assert_eq!(
            document.rules()[1].location(),
            Some(&LocationDoc::At(vec![StepDoc::Child(1), StepDoc::Modifier(0)]))
        );
    }

    #[test]
    fn test_build_element_resolves_names() {
        let library = Library::stock();

        let figure = library.build_element(sample().figure()).unwrap();

        let Element::Composite(composite) = &figure else {
            panic!("expected composite, got {figure:?}");
        };
        let Element::Basic(ellipse) = &composite.elements()[0] else {
            panic!("expected basic element");
        };
        assert_eq!(ellipse.routine(), shapes::ELLIPSE);
        assert_eq!(ellipse.params(), &Params::new().with("tallness", 4));
        let Element::Modified(triangle) = &composite.elements()[1] else {
            panic!("expected modified element");
        };
        assert_eq!(triangle.modifiers()[0].decorator(), modifiers::ROTATION);
    }

    #[test]
    fn test_rule_without_location_targets_its_condition() {
        let library = Library::stock();

        let transformation = library.build_transformation(sample().rules()).unwrap();

        let rule = &transformation.rules()[0];
        assert_eq!(rule.action().location(), &Location::Pattern(rule.condition().clone()));
        assert!(matches!(rule.action().operation(), Operation::Add(Node::Modifier(_))));
    }

    #[test]
    fn test_built_transformation_applies() {
        let library = Library::stock();
        let document = sample();
        let figure = library.build_element(document.figure()).unwrap();
        let transformation = library.build_transformation(document.rules()).unwrap();

        let result = transformation.apply(&figure).unwrap();

        let expected: Document = toml::from_str(
            r#"
            [figure]
            kind = "composite"

            [[figure.elements]]
            kind = "modified"
            element = { kind = "basic", routine = "ellipse", params = { tallness = 4 } }
            modifiers = [{ decorator = "shading" }]

            [[figure.elements]]
            kind = "basic"
            routine = "triangle"
            "#,
        )
        .unwrap();
        assert_eq!(FigureDoc::from_element(&result), *expected.figure());
    }

    #[test]
    fn test_unknown_names_are_reported() {
        let library = Library::stock();
        let figure = FigureDoc::Basic {
            routine: "hexagon".to_string(),
            params: Params::new(),
        };
        let modifier = ModifierDoc::new("blur", Params::new());

        assert!(matches!(
            library.build_element(&figure),
            Err(RavenError::UnknownRoutine(name)) if name == "hexagon"
        ));
        assert!(matches!(
            library.build_modifier(&modifier),
            Err(RavenError::UnknownDecorator(name)) if name == "blur"
        ));
    }

    #[test]
    fn test_arity_violations_are_reported() {
        let library = Library::stock();
        let lonely: FigureDoc = toml::from_str(
            r#"
            kind = "composite"
            elements = [{ kind = "basic", routine = "tee" }]
            "#,
        )
        .unwrap();
        let bare: FigureDoc = toml::from_str(
            r#"
            kind = "modified"
            element = { kind = "basic", routine = "tee" }
            modifiers = []
            "#,
        )
        .unwrap();

        assert!(matches!(
            library.build_element(&lonely),
            Err(RavenError::Structure(StructureError::TooFewElements { found: 1 }))
        ));
        assert!(matches!(
            library.build_element(&bare),
            Err(RavenError::Structure(StructureError::TooFewModifiers { found: 0 }))
        ));
    }

    #[test]
    fn test_row_document_serializes_back() {
        let library = Library::stock();
        let figure = library.build_element(sample().figure()).unwrap();

        let text = toml::to_string(&RowDoc::from_elements([&figure, &Element::Empty])).unwrap();
        let row: RowDoc = toml::from_str(&text).unwrap();

        assert_eq!(row.figures()[0], *sample().figure());
        assert_eq!(row.figures()[1], FigureDoc::Empty);
    }

    #[test]
    fn test_empty_figures_are_rejected() {
        let library = Library::stock();
        let composite: FigureDoc = toml::from_str(
            r#"
            kind = "composite"
            elements = [{ kind = "basic", routine = "tee" }, { kind = "empty" }]
            "#,
        )
        .unwrap();

        assert!(matches!(
            library.build_element(&FigureDoc::Empty),
            Err(RavenError::Structure(StructureError::EmptyFigure))
        ));
        assert!(matches!(
            library.build_element(&composite),
            Err(RavenError::Structure(StructureError::EmptyFigure))
        ));
    }
}
