//! Cell and matrix geometry.
//!
//! This module provides the read-only geometry records handed to drawing
//! routines and decorators. The element model never inspects them; they are
//! forwarded opaquely to whatever routine draws a figure.
//!
//! # Overview
//!
//! - [`CellStructure`] - Dimensions and margins of a single matrix cell
//! - [`MatrixStructure`] - Size of a matrix and the dimensions of its cells
//!
//! # Coordinate System
//!
//! Routines draw in cell-local coordinates consistent with most raster and
//! vector surfaces:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All dimensions are in pixels.

/// Specifies basic properties of a matrix cell.
///
/// # Examples
///
/// ```
/// # use raven_core::geometry::CellStructure;
/// let cell = CellStructure::new("demo", 120.0, 80.0).with_margins(4.0, 2.0);
///
/// assert_eq!(cell.width(), 120.0);
/// assert_eq!(cell.horizontal_margin(), 4.0);
/// assert_eq!(cell.vertical_margin(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellStructure {
    id: String,
    width: f64,
    height: f64,
    horizontal_margin: f64,
    vertical_margin: f64,
}

impl CellStructure {
    /// Creates a cell with the given identifier and dimensions and no margins.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            horizontal_margin: 0.0,
            vertical_margin: 0.0,
        }
    }

    /// Sets the margins left from the cell edges when drawing (builder style).
    pub fn with_margins(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_margin = horizontal;
        self.vertical_margin = vertical;
        self
    }

    /// Identifying information about the cell (parent matrix, position, etc).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Width of the cell image.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the cell image.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width of the margin left from the left and right edges.
    pub fn horizontal_margin(&self) -> f64 {
        self.horizontal_margin
    }

    /// Width of the margin left from the top and bottom edges.
    pub fn vertical_margin(&self) -> f64 {
        self.vertical_margin
    }
}

/// Represents basic properties of a matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStructure {
    name: String,
    size: usize,
    num_alternatives: usize,
    cell_width: f64,
    cell_height: f64,
}

impl MatrixStructure {
    pub const DEFAULT_SIZE: usize = 3;
    pub const DEFAULT_NUM_ALTERNATIVES: usize = 8;

    /// Creates a square matrix of the default size (3) with 8 answer alternatives.
    pub fn new(name: impl Into<String>, cell_width: f64, cell_height: f64) -> Self {
        Self {
            name: name.into(),
            size: Self::DEFAULT_SIZE,
            num_alternatives: Self::DEFAULT_NUM_ALTERNATIVES,
            cell_width,
            cell_height,
        }
    }

    /// Sets the number of rows and columns (builder style).
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the number of answer alternatives (builder style).
    pub fn with_num_alternatives(mut self, num_alternatives: usize) -> Self {
        self.num_alternatives = num_alternatives;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows and columns.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_alternatives(&self) -> usize {
        self.num_alternatives
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Returns the cell geometry for the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use raven_core::geometry::MatrixStructure;
    /// let matrix = MatrixStructure::new("m1", 100.0, 100.0);
    /// let cell = matrix.cell(1, 2);
    ///
    /// assert_eq!(cell.id(), "m1/r1c2");
    /// assert_eq!(cell.height(), 100.0);
    /// ```
    pub fn cell(&self, row: usize, column: usize) -> CellStructure {
        CellStructure::new(
            format!("{}/r{row}c{column}", self.name),
            self.cell_width,
            self.cell_height,
        )
    }
}
