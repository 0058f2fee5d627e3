//! `printpdf` implementation of [`Canvas`].

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::utils::calculate_points_for_circle;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Pt,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

use crate::canvas::{Canvas, FontWeight, Rgb};
use crate::config::PaperSize;
use crate::error::{PlannerError, Result};

pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font_regular: IndirectFontRef,
    font_bold: IndirectFontRef,
    page_width: f32,
    page_height: f32,
    page_count: usize,
    font_size: f32,
    font_weight: FontWeight,
    text_color: Rgb,
    stroke_color: Rgb,
    /// Text and dots share the PDF fill colour; only re-emit it on change.
    fill_color: Option<Rgb>,
}

impl PdfCanvas {
    /// Create a document with its first (empty) page.
    pub fn new(title: &str, paper: PaperSize) -> Result<Self> {
        let (page_width, page_height) = paper.dimensions_mm();
        let (doc, page1, layer1) =
            PdfDocument::new(title, Mm(page_width), Mm(page_height), "Page 1");
        let layer = doc.get_page(page1).get_layer(layer1);

        // Load built-in fonts
        let font_regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PlannerError::Pdf(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PlannerError::Pdf(e.to_string()))?;

        Ok(Self {
            doc,
            layer,
            font_regular,
            font_bold,
            page_width,
            page_height,
            page_count: 1,
            font_size: 10.0,
            font_weight: FontWeight::Normal,
            text_color: Rgb::BLACK,
            stroke_color: Rgb::BLACK,
            fill_color: None,
        })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// printpdf measures from the bottom-left corner.
    fn flip_y(&self, y: f32) -> Mm {
        Mm(self.page_height - y)
    }

    fn use_fill(&mut self, color: Rgb) {
        if self.fill_color != Some(color) {
            self.layer.set_fill_color(pdf_color(color));
            self.fill_color = Some(color);
        }
    }
}

impl Canvas for PdfCanvas {
    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.use_fill(self.text_color);
        let font = match self.font_weight {
            FontWeight::Normal => &self.font_regular,
            FontWeight::Bold => &self.font_bold,
        };
        self.layer
            .use_text(text, self.font_size, Mm(x), self.flip_y(y), font);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.stroke_color = color;
        self.layer.set_outline_color(pdf_color(color));
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.layer.set_outline_thickness(Pt::from(Mm(width)).0);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let points = vec![
            (Point::new(Mm(x1), self.flip_y(y1)), false),
            (Point::new(Mm(x2), self.flip_y(y2)), false),
        ];
        let line = Line {
            points,
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn draw_filled_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.use_fill(self.stroke_color);
        let ring = calculate_points_for_circle(Mm(radius), Mm(x), self.flip_y(y));
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn start_new_page(&mut self) {
        self.page_count += 1;
        let (page, layer) = self.doc.add_page(
            Mm(self.page_width),
            Mm(self.page_height),
            format!("Page {}", self.page_count),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        // A fresh page starts with default graphics state
        self.fill_color = None;
        self.layer.set_outline_color(pdf_color(self.stroke_color));
    }

    fn export(self, path: &Path) -> Result<()> {
        debug!(pages = self.page_count, path = %path.display(), "saving PDF");
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| PlannerError::Pdf(e.to_string()))
    }
}

fn pdf_color(color: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}
