//! Raven Core Types and Definitions
//!
//! This crate provides the foundational types for building figures of
//! Raven-style matrix problems. It includes:
//!
//! - **Geometry**: Cell and matrix dimensions ([`geometry`] module)
//! - **Colors**: Gray source colors for fills ([`color::Color`])
//! - **Draw**: The drawing surface interface, drawing routines and decorators ([`draw`] module)
//! - **Element**: The recursive figure structure ([`element`] module)
//! - **Transformation**: Rule-driven rewriting of figure structures ([`transformation`] module)

pub mod color;
pub mod draw;
pub mod element;
pub mod geometry;
pub mod transformation;

#[cfg(test)]
mod test_support;
