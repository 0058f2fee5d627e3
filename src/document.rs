//! Document assembly: one planning, grid and reflection page per week.

use chrono::NaiveDate;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::calendar::enumerate_weeks;
use crate::canvas::{Canvas, RecordingCanvas};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::pages::{compose_page, PageKind, WeekContext};
use crate::pdf::PdfCanvas;

const DOCUMENT_TITLE: &str = "Weekly Planner";

/// What a configuration produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub weeks: usize,
    pub pages: usize,
    pub first_week: Option<NaiveDate>,
    pub last_week: Option<NaiveDate>,
}

impl PlanSummary {
    fn from_weeks(weeks: &[NaiveDate]) -> Self {
        Self {
            weeks: weeks.len(),
            pages: weeks.len() * PageKind::TRIAD.len(),
            first_week: weeks.first().copied(),
            last_week: weeks.last().copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages == 0
    }
}

fn weeks_for(config: &PlannerConfig) -> Vec<NaiveDate> {
    enumerate_weeks(
        config.year,
        config.start_month,
        config.end_month,
        config.week_start_day,
    )
}

/// Count weeks and pages without drawing anything.
pub fn plan(config: &PlannerConfig) -> PlanSummary {
    PlanSummary::from_weeks(&weeks_for(config))
}

/// Draw every page of the planner onto `canvas`.
///
/// A page break is requested before every page except the first, so the
/// canvas ends on the last reflection page. An inconsistent configuration
/// yields an empty summary and draws nothing.
pub fn compose_document<C: Canvas>(config: &PlannerConfig, canvas: &mut C) -> PlanSummary {
    let translations = config.language.translations();
    let weeks = weeks_for(config);

    let mut pages = 0usize;
    for (index, week_start) in weeks.iter().enumerate() {
        let ctx = WeekContext::new(config, translations, *week_start);
        debug!(
            week = index + 1,
            start = %week_start,
            number = ctx.week_number,
            "composing week"
        );
        for kind in PageKind::TRIAD {
            if pages > 0 {
                canvas.start_new_page();
            }
            compose_page(kind, &ctx, canvas);
            pages += 1;
        }
    }

    let summary = PlanSummary::from_weeks(&weeks);
    info!(weeks = summary.weeks, pages = summary.pages, "planner composed");
    summary
}

/// Compose onto `canvas` and export it to `path`.
///
/// The export goes to a sibling `.part` file that is renamed over `path` only
/// once it completes. A failed export leaves `path` untouched.
pub fn render_to_file<C: Canvas>(
    config: &PlannerConfig,
    mut canvas: C,
    path: &Path,
) -> Result<PlanSummary> {
    if plan(config).is_empty() {
        return Err(PlannerError::EmptyPlanner);
    }
    let summary = compose_document(config, &mut canvas);

    let partial = partial_path(path);
    if let Err(e) = canvas.export(&partial) {
        if partial.exists() {
            if let Err(remove_err) = fs::remove_file(&partial) {
                warn!(
                    path = %partial.display(),
                    error = %remove_err,
                    "could not remove partial output"
                );
            }
        }
        return Err(e);
    }
    fs::rename(&partial, path)?;
    Ok(summary)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DOCUMENT_TITLE));
    name.push(".part");
    path.with_file_name(name)
}

pub fn generate_pdf(config: &PlannerConfig, path: &Path) -> Result<PlanSummary> {
    let canvas = PdfCanvas::new(DOCUMENT_TITLE, config.paper_size)?;
    render_to_file(config, canvas, path)
}

/// Dump the drawing operations as JSON instead of painting a PDF.
pub fn generate_ops(config: &PlannerConfig, path: &Path) -> Result<PlanSummary> {
    render_to_file(config, RecordingCanvas::new(), path)
}

/// `weekly-planner-<year>-<papersize>.pdf`
pub fn default_file_name(config: &PlannerConfig) -> String {
    format!(
        "weekly-planner-{}-{}.pdf",
        config.year,
        config.paper_size.file_tag()
    )
}
