//! pagesmith - static page builder
//!
//! Turns plain text annotated with directive lines into styled HTML pages.
//! The interesting part is [`source_model`], which folds a page's lines into
//! a [`source_model::Document`]; the remaining modules gather a style,
//! render pages and drive whole runs.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod colors;
pub mod html_exporter;
pub mod pipeline;
pub mod source_model;
pub mod style_config;
pub mod templates;
pub mod wizard;
