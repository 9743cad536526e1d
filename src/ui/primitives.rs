//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own input and rendering
//!
//! # Contents
//!
//! - [`CardCanvas`] - Draggable card drawn under a translate + rotate transform

pub mod card_canvas;

pub use card_canvas::{CardCanvas, view_card};
