//! Column widths and row height for a weekly-grid page.
//!
//! All values are millimetres with the origin at the top-left corner of the
//! page. Rows shrink to fit the band between the header and the footer notes
//! area, but never below [`MIN_ROW_HEIGHT_MM`]; once the floor is hit the grid
//! is allowed to run past the band and trailing rows are dropped by
//! [`GridGeometry::row_fits`].

use crate::config::{PaperSize, PlannerConfig};

/// Left/right page margin of the weekly grid
pub const GRID_MARGIN_MM: f32 = 10.0;

/// Narrow column holding the time labels
pub const TIME_COLUMN_WIDTH_MM: f32 = 12.0;

/// Legibility floor for time rows
pub const MIN_ROW_HEIGHT_MM: f32 = 3.5;

/// Minimum vertical band handed to the grid before dividing into rows
pub const MIN_AVAILABLE_HEIGHT_MM: f32 = 60.0;

/// Footer band reserved for per-day notes
pub const FOOTER_NOTES_HEIGHT_MM: f32 = 50.0;

/// Gap kept between the last grid row and the notes band
pub const FOOTER_GAP_MM: f32 = 10.0;

/// Baseline of the day-name header row, with and without the page title
const DAY_HEADER_Y_MM: f32 = 24.0;
const DAY_HEADER_Y_NO_TITLE_MM: f32 = 12.0;

/// Distance from the day-name header down to the first grid row
const DAY_HEADER_TO_GRID_MM: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub time_column_width: f32,
    pub day_column_width: f32,
    pub day_count: u32,
    /// Y of the first row's top edge
    pub grid_top: f32,
    /// Rows whose top edge lies below this are not drawn
    pub overflow_limit: f32,
    pub row_height: f32,
}

impl GridGeometry {
    pub fn compute(
        paper: PaperSize,
        margin: f32,
        day_count: u32,
        slot_count: usize,
        header_reserved: f32,
        footer_reserved: f32,
    ) -> Self {
        let (page_width, page_height) = paper.dimensions_mm();

        let columns_width = page_width - 2.0 * margin - TIME_COLUMN_WIDTH_MM;
        let day_column_width = if day_count == 0 {
            columns_width
        } else {
            columns_width / day_count as f32
        };

        let overflow_limit = page_height - footer_reserved;
        let available = (overflow_limit - header_reserved).max(MIN_AVAILABLE_HEIGHT_MM);
        let row_height = if slot_count == 0 {
            available
        } else {
            (available / slot_count as f32).max(MIN_ROW_HEIGHT_MM)
        };

        Self {
            page_width,
            page_height,
            margin,
            time_column_width: TIME_COLUMN_WIDTH_MM,
            day_column_width,
            day_count,
            grid_top: header_reserved,
            overflow_limit,
            row_height,
        }
    }

    /// Geometry for the weekly grid of `config` with its reference sizing.
    pub fn for_config(config: &PlannerConfig, slot_count: usize) -> Self {
        Self::compute(
            config.paper_size,
            GRID_MARGIN_MM,
            config.day_count(),
            slot_count,
            day_header_y(config.show_header) + DAY_HEADER_TO_GRID_MM,
            FOOTER_NOTES_HEIGHT_MM + FOOTER_GAP_MM,
        )
    }

    /// Height of the band the grid is meant to fill.
    pub fn available_height(&self) -> f32 {
        (self.overflow_limit - self.grid_top).max(MIN_AVAILABLE_HEIGHT_MM)
    }

    /// Left edge of day column `index`.
    pub fn day_column_x(&self, index: u32) -> f32 {
        self.margin + self.time_column_width + index as f32 * self.day_column_width
    }

    /// Right edge of the last day column.
    pub fn grid_right(&self) -> f32 {
        self.day_column_x(self.day_count)
    }

    /// Top edge of row `index`, computed from the index rather than by
    /// accumulating heights.
    pub fn row_top(&self, index: usize) -> f32 {
        self.grid_top + index as f32 * self.row_height
    }

    pub fn row_fits(&self, index: usize) -> bool {
        self.row_top(index) <= self.overflow_limit
    }

    /// Number of leading rows that are drawn; the rest are truncated.
    pub fn visible_rows(&self, slot_count: usize) -> usize {
        (0..slot_count).take_while(|&i| self.row_fits(i)).count()
    }

    /// Height of all rows had none been truncated.
    pub fn nominal_grid_height(&self, slot_count: usize) -> f32 {
        slot_count as f32 * self.row_height
    }

    /// True when the row-height floor forces the grid past its band.
    pub fn overflows(&self, slot_count: usize) -> bool {
        slot_count > 0 && self.available_height() / (slot_count as f32) < MIN_ROW_HEIGHT_MM
    }
}

/// Baseline of the day-name header row.
pub fn day_header_y(show_header: bool) -> f32 {
    if show_header {
        DAY_HEADER_Y_MM
    } else {
        DAY_HEADER_Y_NO_TITLE_MM
    }
}
