//! Raven - Build and transform Raven-style matrix figures.
//!
//! Figures are trees of drawable elements. A transformation rewrites a
//! figure's structure, and applying it repeatedly lays out one row of a
//! matrix. This crate adds a stock library of shapes and modifiers, a TOML
//! document format and a builder tying them to the core element model.

pub mod config;
pub mod document;
pub mod library;

mod error;

pub use raven_core::{color, draw, element, geometry, transformation};

pub use error::RavenError;

use log::{debug, info, trace};

use raven_core::{
    draw::{DrawCommand, RecordingSurface},
    element::Element,
    geometry::CellStructure,
    transformation::Transformation,
};

use config::AppConfig;
use document::{Document, RowDoc};
use library::Library;

/// Builder for loading figure documents and generating matrix rows.
///
/// # Examples
///
/// ```rust
/// use raven::{RowBuilder, config::AppConfig};
///
/// let source = r#"
///     [figure]
///     kind = "basic"
///     routine = "rectangle"
///
///     [[rules]]
///     condition = { kind = "basic", routine = "rectangle" }
///     operation = { op = "add", node = { decorator = "shading" } }
/// "#;
///
/// let builder = RowBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
/// let (figure, transformation) = builder.build(&document).expect("Failed to build");
///
/// let row = builder.row(&figure, &transformation, 3).expect("Failed to transform");
/// assert_eq!(row.len(), 3);
/// assert_eq!(row[0], figure);
/// ```
#[derive(Default)]
pub struct RowBuilder {
    config: AppConfig,
    library: Library,
}

impl RowBuilder {
    /// Create a new row builder with the given configuration and the stock library.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including matrix geometry
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            library: Library::stock(),
        }
    }

    /// Replace the library used to resolve routine and decorator names.
    pub fn with_library(mut self, library: Library) -> Self {
        self.library = library;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Parse a TOML figure document.
    ///
    /// # Errors
    ///
    /// Returns `RavenError::Document` carrying the source if the text is not a
    /// valid document.
    pub fn parse(&self, source: &str) -> Result<Document, RavenError> {
        info!("Parsing figure document");

        let document: Document =
            toml::from_str(source).map_err(|err| RavenError::new_document_error(err, source))?;

        debug!(rules = document.rules().len(); "Document parsed successfully");
        Ok(document)
    }

    /// Build the seed figure and the transformation a document describes.
    ///
    /// # Errors
    ///
    /// Returns `RavenError` for unknown routine or decorator names and for
    /// elements violating their arity.
    pub fn build(&self, document: &Document) -> Result<(Element, Transformation), RavenError> {
        let figure = self.library.build_element(document.figure())?;
        let transformation = self.library.build_transformation(document.rules())?;
        trace!(figure:?; "Built figure");
        Ok((figure, transformation))
    }

    /// Generate `length` figures, each the transformation applied to the previous one.
    ///
    /// The first figure is `figure` itself.
    ///
    /// # Errors
    ///
    /// Returns `RavenError::Transform` if any application fails.
    pub fn row(
        &self,
        figure: &Element,
        transformation: &Transformation,
        length: usize,
    ) -> Result<Vec<Element>, RavenError> {
        info!(length = length; "Generating row");

        let mut row: Vec<Element> = Vec::with_capacity(length);
        for column in 0..length {
            let next = match row.last() {
                None => figure.clone(),
                Some(previous) => transformation.apply(previous)?,
            };
            debug!(column = column, kind:% = next.kind(); "Figure generated");
            row.push(next);
        }
        Ok(row)
    }

    /// Draw each figure of a row onto a recording surface.
    ///
    /// Figures are placed in consecutive cells of matrix row `row`.
    ///
    /// # Errors
    ///
    /// Returns `RavenError::Draw` naming the cell whose figure failed to draw.
    pub fn trace(&self, row: usize, figures: &[Element]) -> Result<Vec<CellTrace>, RavenError> {
        figures
            .iter()
            .enumerate()
            .map(|(column, figure)| {
                let cell = self.config.cell_structure(row, column);
                let mut surface = RecordingSurface::new();
                figure
                    .draw(&mut surface, &cell)
                    .map_err(|err| RavenError::new_draw_error(err, cell.id()))?;
                trace!(cell = cell.id(), commands = surface.len(); "Figure drawn");
                Ok(CellTrace {
                    cell,
                    commands: surface.into_commands(),
                })
            })
            .collect()
    }

    /// Serialize a row of figures as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `RavenError::Serialize` if the row cannot be written as TOML.
    pub fn to_toml(&self, figures: &[Element]) -> Result<String, RavenError> {
        Ok(toml::to_string_pretty(&RowDoc::from_elements(figures))?)
    }
}

/// The drawing calls made for one cell.
#[derive(Debug, Clone)]
pub struct CellTrace {
    cell: CellStructure,
    commands: Vec<DrawCommand>,
}

impl CellTrace {
    pub fn cell(&self) -> &CellStructure {
        &self.cell
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}
