//! Configuration types for building Raven matrices.
//!
//! This module provides configuration structures that control the matrix
//! geometry figures are drawn into. All types implement
//! [`serde::Deserialize`] and fall back to defaults for any missing field.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`MatrixConfig`] - Matrix name, size and number of answer alternatives.
//! - [`CellConfig`] - Cell dimensions and margins in pixels.
//!
//! # Example
//!
//! ```
//! # use raven::config::AppConfig;
//! let config: AppConfig = toml::from_str("[matrix]\nsize = 4\n").unwrap();
//! assert_eq!(config.matrix().size(), 4);
//! assert_eq!(config.cell().width(), 100.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use raven_core::geometry::{CellStructure, MatrixStructure};

/// Top-level application configuration combining matrix and cell settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Matrix configuration section.
    #[serde(default)]
    matrix: MatrixConfig,

    /// Cell configuration section.
    #[serde(default)]
    cell: CellConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified matrix and cell configurations.
    pub fn new(matrix: MatrixConfig, cell: CellConfig) -> Self {
        Self { matrix, cell }
    }

    /// Returns the matrix configuration.
    pub fn matrix(&self) -> &MatrixConfig {
        &self.matrix
    }

    /// Returns the cell configuration.
    pub fn cell(&self) -> &CellConfig {
        &self.cell
    }

    /// Checks that the configured geometry can hold a figure.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.matrix.size == 0 {
            return Err("matrix size must be at least 1".to_string());
        }
        if !(self.cell.width > 0.0 && self.cell.height > 0.0) {
            return Err(format!(
                "cell dimensions must be positive, got {}x{}",
                self.cell.width, self.cell.height
            ));
        }
        if self.cell.horizontal_margin < 0.0 || self.cell.vertical_margin < 0.0 {
            return Err("cell margins must not be negative".to_string());
        }
        Ok(())
    }

    /// Builds the [`MatrixStructure`] described by this configuration.
    pub fn matrix_structure(&self) -> MatrixStructure {
        MatrixStructure::new(&self.matrix.name, self.cell.width, self.cell.height)
            .with_size(self.matrix.size)
            .with_num_alternatives(self.matrix.num_alternatives)
    }

    /// Builds the [`CellStructure`] for the cell at `row` and `column`, margins included.
    pub fn cell_structure(&self, row: usize, column: usize) -> CellStructure {
        self.matrix_structure()
            .cell(row, column)
            .with_margins(self.cell.horizontal_margin, self.cell.vertical_margin)
    }
}

/// Matrix layout settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Name used as the prefix of every cell id.
    name: String,

    /// Number of rows and columns.
    size: usize,

    /// Number of answer alternatives offered for the missing cell.
    num_alternatives: usize,
}

impl MatrixConfig {
    /// Creates a new [`MatrixConfig`].
    pub fn new(name: impl Into<String>, size: usize, num_alternatives: usize) -> Self {
        Self {
            name: name.into(),
            size,
            num_alternatives,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_alternatives(&self) -> usize {
        self.num_alternatives
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            name: "matrix".to_string(),
            size: MatrixStructure::DEFAULT_SIZE,
            num_alternatives: MatrixStructure::DEFAULT_NUM_ALTERNATIVES,
        }
    }
}

/// Cell geometry settings, in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    width: f64,
    height: f64,
    horizontal_margin: f64,
    vertical_margin: f64,
}

impl CellConfig {
    /// Creates a new [`CellConfig`] without margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            horizontal_margin: 0.0,
            vertical_margin: 0.0,
        }
    }

    /// Sets the margins (builder style).
    pub fn with_margins(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_margin = horizontal;
        self.vertical_margin = vertical;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn horizontal_margin(&self) -> f64 {
        self.horizontal_margin
    }

    pub fn vertical_margin(&self) -> f64 {
        self.vertical_margin
    }
}

impl Default for CellConfig {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}
