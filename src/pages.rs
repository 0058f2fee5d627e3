//! Page composers: planning notes, weekly time grid, reflection notes.
//!
//! Each composer draws one full page for one week onto a [`Canvas`]. They do
//! not start or end pages; the document assembler owns pagination.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::calendar::{month_year_label, week_days, week_number};
use crate::canvas::{Canvas, FontWeight, Rgb};
use crate::config::{HourFormat, PlannerConfig};
use crate::geometry::{day_header_y, GridGeometry, FOOTER_NOTES_HEIGHT_MM};
use crate::i18n::Translations;
use crate::slots::{generate_slots, TimeSlot};

// ============================================================================
// Constants
// ============================================================================

/// Note pages
const NOTE_MARGIN_MM: f32 = 15.0;
const NOTE_TITLE_Y_MM: f32 = 20.0;
const NOTE_WEEK_LINE_Y_MM: f32 = 30.0;
const NOTE_SEPARATOR_Y_MM: f32 = 35.0;
const NOTE_FIRST_RULE_Y_MM: f32 = 45.0;
const NOTE_RULE_SPACING_MM: f32 = 8.0;
const NOTE_BOTTOM_RESERVED_MM: f32 = 60.0;
const NOTE_DOT_PITCH_MM: f32 = 3.0;
const NOTE_CLOSING_RULE_FROM_BOTTOM_MM: f32 = 20.0;

/// Weekly grid
const GRID_TITLE_Y_MM: f32 = 14.0;
const CELL_TEXT_INSET_MM: f32 = 2.0;
const TIME_LABEL_BASELINE_MM: f32 = 3.0;
// Keeps minute labels inside the 12 mm time column, clear of the first day
const MINOR_LABEL_X_OFFSET_MM: f32 = 5.0;
const FOOTER_RULES_OFFSET_MM: f32 = 6.0;
const FOOTER_RULE_SPACING_MM: f32 = 6.0;
const FOOTER_BOTTOM_MARGIN_MM: f32 = 10.0;
const FOOTER_DOT_PITCH_MM: f32 = 2.5;

const DOT_RADIUS_MM: f32 = 0.2;

/// Font sizes in points
const NOTE_TITLE_FONT_SIZE: f32 = 14.0;
const GRID_TITLE_FONT_SIZE: f32 = 12.0;
const DAY_HEADER_FONT_SIZE: f32 = 11.0;
const WEEK_LINE_FONT_SIZE: f32 = 10.0;
const NOTES_LABEL_FONT_SIZE: f32 = 10.0;
const MAJOR_LABEL_FONT_SIZE: f32 = 8.0;
const MINOR_LABEL_FONT_SIZE: f32 = 7.0;

const STRONG_TEXT: Rgb = Rgb::gray(40);
const MUTED_TEXT: Rgb = Rgb::gray(120);
const SEPARATOR: Rgb = Rgb::gray(200);
const NOTE_DOTS: Rgb = Rgb::gray(210);
const CLOSING_RULE: Rgb = Rgb::gray(150);
const FOOTER_DOTS: Rgb = Rgb::gray(200);
const THIN_RULE_MM: f32 = 0.2;
const HAIRLINE_MM: f32 = 0.1;

// ============================================================================
// Week Context
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Planning,
    WeeklyGrid,
    Reflection,
}

impl PageKind {
    /// Fixed order of the three pages emitted for every week.
    pub const TRIAD: [PageKind; 3] = [
        PageKind::Planning,
        PageKind::WeeklyGrid,
        PageKind::Reflection,
    ];
}

/// Everything one page needs to know about its week.
#[derive(Debug, Clone, Copy)]
pub struct WeekContext<'a> {
    pub config: &'a PlannerConfig,
    pub translations: &'static Translations,
    pub week_start: NaiveDate,
    pub week_number: u32,
}

impl<'a> WeekContext<'a> {
    pub fn new(
        config: &'a PlannerConfig,
        translations: &'static Translations,
        week_start: NaiveDate,
    ) -> Self {
        Self {
            config,
            translations,
            week_start,
            week_number: week_number(week_start),
        }
    }

    /// "Week 12 • March 2025"
    pub fn label(&self) -> String {
        format!(
            "{} {} \u{2022} {}",
            self.translations.week,
            self.week_number,
            month_year_label(self.week_start, self.translations)
        )
    }
}

pub fn compose_page<C: Canvas>(kind: PageKind, ctx: &WeekContext<'_>, canvas: &mut C) {
    match kind {
        PageKind::Planning => compose_planning_page(ctx, canvas),
        PageKind::WeeklyGrid => compose_weekly_grid(ctx, canvas),
        PageKind::Reflection => compose_reflection_page(ctx, canvas),
    }
}

// ============================================================================
// Note Pages
// ============================================================================

pub fn compose_planning_page<C: Canvas>(ctx: &WeekContext<'_>, canvas: &mut C) {
    compose_note_page(ctx, ctx.translations.planning, canvas);
}

pub fn compose_reflection_page<C: Canvas>(ctx: &WeekContext<'_>, canvas: &mut C) {
    compose_note_page(ctx, ctx.translations.reflections, canvas);
}

fn compose_note_page<C: Canvas>(ctx: &WeekContext<'_>, title: &str, canvas: &mut C) {
    debug!(week = %ctx.week_start, title, "composing note page");
    let (page_width, page_height) = ctx.config.paper_size.dimensions_mm();
    let right = page_width - NOTE_MARGIN_MM;

    // Title
    canvas.set_text_color(Rgb::BLACK);
    canvas.set_font_size(NOTE_TITLE_FONT_SIZE);
    canvas.set_font_weight(FontWeight::Bold);
    canvas.draw_text(title, NOTE_MARGIN_MM, NOTE_TITLE_Y_MM);

    // Week info
    canvas.set_font_size(WEEK_LINE_FONT_SIZE);
    canvas.set_font_weight(FontWeight::Normal);
    canvas.draw_text(&ctx.label(), NOTE_MARGIN_MM, NOTE_WEEK_LINE_Y_MM);

    canvas.set_stroke_color(SEPARATOR);
    canvas.set_stroke_width(THIN_RULE_MM);
    canvas.draw_line(NOTE_MARGIN_MM, NOTE_SEPARATOR_Y_MM, right, NOTE_SEPARATOR_Y_MM);

    // Dotted writing rules
    canvas.set_stroke_color(NOTE_DOTS);
    let rules_end = page_height - NOTE_BOTTOM_RESERVED_MM;
    for y in stepped(NOTE_FIRST_RULE_Y_MM, rules_end, NOTE_RULE_SPACING_MM) {
        draw_dotted_rule(canvas, NOTE_MARGIN_MM, right, y, NOTE_DOT_PITCH_MM);
    }

    canvas.set_stroke_color(CLOSING_RULE);
    let footer_y = page_height - NOTE_CLOSING_RULE_FROM_BOTTOM_MM;
    canvas.draw_line(NOTE_MARGIN_MM, footer_y, right, footer_y);
}

// ============================================================================
// Weekly Grid
// ============================================================================

/// Stroke used for the rules of one grid row
#[derive(Debug, Clone, Copy, PartialEq)]
struct RuleStyle {
    color: Rgb,
    width: f32,
}

impl RuleStyle {
    fn for_row(major: bool, show_grid: bool) -> Self {
        match (show_grid, major) {
            (true, true) => Self {
                color: Rgb::gray(200),
                width: THIN_RULE_MM,
            },
            (true, false) => Self {
                color: Rgb::gray(230),
                width: HAIRLINE_MM,
            },
            (false, true) => Self {
                color: Rgb::gray(220),
                width: THIN_RULE_MM,
            },
            (false, false) => Self {
                color: Rgb::gray(240),
                width: HAIRLINE_MM,
            },
        }
    }
}

pub fn compose_weekly_grid<C: Canvas>(ctx: &WeekContext<'_>, canvas: &mut C) {
    let config = ctx.config;
    let t = ctx.translations;

    let slots = generate_slots(
        config.start_hour,
        config.end_hour,
        config.time_intervals,
        config.hour_format,
    );
    let geometry = GridGeometry::for_config(config, slots.len());
    let days = week_days(ctx.week_start, config.day_count());
    debug!(
        week = %ctx.week_start,
        days = days.len(),
        slots = slots.len(),
        row_height = geometry.row_height,
        "composing weekly grid"
    );

    canvas.set_text_color(Rgb::BLACK);
    if config.show_header {
        canvas.set_font_size(GRID_TITLE_FONT_SIZE);
        canvas.set_font_weight(FontWeight::Bold);
        canvas.draw_text(&ctx.label(), geometry.margin, GRID_TITLE_Y_MM);
    }

    // Day headers, e.g. "Mon 15"
    canvas.set_font_size(DAY_HEADER_FONT_SIZE);
    canvas.set_font_weight(FontWeight::Bold);
    let header_y = day_header_y(config.show_header);
    for (index, day) in (0u32..).zip(&days) {
        let name = t.short_day(config.week_start_day + index);
        let label = format!("{} {}", name, day.day());
        let x = geometry.day_column_x(index) + CELL_TEXT_INSET_MM;
        canvas.draw_text(&label, x, header_y);
    }

    // Connect header to grid
    canvas.set_stroke_color(SEPARATOR);
    canvas.set_stroke_width(THIN_RULE_MM);
    for index in 0..geometry.day_count {
        let x = geometry.day_column_x(index);
        let right = x + geometry.day_column_width;
        canvas.draw_line(x, geometry.grid_top, right, geometry.grid_top);
    }

    let visible = geometry.visible_rows(slots.len());
    if visible < slots.len() {
        warn!(
            week = %ctx.week_start,
            dropped = slots.len() - visible,
            "time slots do not fit on the page; truncating"
        );
    }

    for (index, slot) in slots.iter().take(visible).enumerate() {
        let top = geometry.row_top(index);
        draw_time_label(canvas, slot, config.hour_format, geometry.margin, top);
        let style = RuleStyle::for_row(slot.major, config.show_grid);
        draw_row_rules(canvas, &geometry, top, style, config.show_grid);
    }

    draw_notes_footer(canvas, &geometry, t);
}

fn draw_time_label<C: Canvas>(
    canvas: &mut C,
    slot: &TimeSlot,
    format: HourFormat,
    margin: f32,
    top: f32,
) {
    let y = top + TIME_LABEL_BASELINE_MM;
    if slot.major {
        canvas.set_text_color(STRONG_TEXT);
        canvas.set_font_size(MAJOR_LABEL_FONT_SIZE);
        canvas.set_font_weight(FontWeight::Bold);
        canvas.draw_text(&slot.label, margin + CELL_TEXT_INSET_MM, y);
    } else {
        canvas.set_text_color(MUTED_TEXT);
        canvas.set_font_size(MINOR_LABEL_FONT_SIZE);
        canvas.set_font_weight(FontWeight::Normal);
        canvas.draw_text(&slot.minute_label(format), margin + MINOR_LABEL_X_OFFSET_MM, y);
    }
}

fn draw_row_rules<C: Canvas>(
    canvas: &mut C,
    geometry: &GridGeometry,
    top: f32,
    style: RuleStyle,
    show_grid: bool,
) {
    let bottom = top + geometry.row_height;
    canvas.set_stroke_color(style.color);
    canvas.set_stroke_width(style.width);

    for index in 0..geometry.day_count {
        let x = geometry.day_column_x(index);
        let right = x + geometry.day_column_width;
        canvas.draw_line(x, bottom, right, bottom);
        // Vertical separators between days only
        if show_grid && index + 1 < geometry.day_count {
            canvas.draw_line(right, top, right, bottom);
        }
    }
}

fn draw_notes_footer<C: Canvas>(canvas: &mut C, geometry: &GridGeometry, t: &Translations) {
    let label_y = geometry.page_height - FOOTER_NOTES_HEIGHT_MM;

    canvas.set_text_color(STRONG_TEXT);
    canvas.set_font_size(NOTES_LABEL_FONT_SIZE);
    canvas.set_font_weight(FontWeight::Bold);
    for index in 0..geometry.day_count {
        let x = geometry.day_column_x(index) + CELL_TEXT_INSET_MM;
        canvas.draw_text(t.notes, x, label_y);
    }

    canvas.set_stroke_color(FOOTER_DOTS);
    let rows_end = geometry.page_height - FOOTER_BOTTOM_MARGIN_MM;
    for y in stepped(label_y + FOOTER_RULES_OFFSET_MM, rows_end, FOOTER_RULE_SPACING_MM) {
        for index in 0..geometry.day_count {
            let x = geometry.day_column_x(index);
            draw_dotted_rule(
                canvas,
                x + CELL_TEXT_INSET_MM,
                x + geometry.day_column_width - CELL_TEXT_INSET_MM,
                y,
                FOOTER_DOT_PITCH_MM,
            );
        }
    }
    canvas.set_text_color(Rgb::BLACK);
}

// ============================================================================
// Drawing Utilities
// ============================================================================

/// `start, start + step, ...` while below `end`, computed by index.
fn stepped(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| start + i as f32 * step)
        .take_while(move |&v| v < end)
}

fn draw_dotted_rule<C: Canvas>(canvas: &mut C, x_start: f32, x_end: f32, y: f32, pitch: f32) {
    for x in stepped(x_start, x_end, pitch) {
        canvas.draw_filled_circle(x, y, DOT_RADIUS_MM);
    }
}
