//! Printable weekly planners.
//!
//! A [`PlannerConfig`] describes a month range, the days shown per week, the
//! hours of the time grid and the paper. For every week in the range the
//! planner emits three pages in fixed order: planning notes, the weekly time
//! grid, and reflection notes. Pages are drawn onto any [`Canvas`]; the
//! bundled [`PdfCanvas`] writes a PDF through `printpdf`.

pub mod calendar;
pub mod canvas;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod i18n;
pub mod pages;
pub mod pdf;
pub mod slots;

pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use config::{HourFormat, Language, PaperSize, PlannerConfig, TimeInterval};
pub use document::{
    compose_document, default_file_name, generate_ops, generate_pdf, plan, PlanSummary,
};
pub use error::{PlannerError, Result};
pub use pdf::PdfCanvas;
