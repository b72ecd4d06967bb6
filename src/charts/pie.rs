use anyhow::Result;
use plotters::prelude::*;

use crate::charts::{ChartImage, PALETTE, draw_err, ensure_font, write_png};
use crate::patient::{Symptom, SymptomSet};

const PIE_SIZE: u32 = 600;
const START_ANGLE_DEG: f64 = 140.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub symptom: Symptom,
    pub count: usize,
    pub percent: f64,
}

/// One slice per distinct symptom, in selection order.
pub fn symptom_distribution(symptoms: &SymptomSet) -> Vec<PieSlice> {
    let total = symptoms.len();
    if total == 0 {
        return Vec::new();
    }
    // A set holds each symptom once, so every count is 1.
    symptoms
        .iter()
        .map(|symptom| PieSlice {
            symptom,
            count: 1,
            percent: 100.0 / total as f64,
        })
        .collect()
}

/// Returns `None` when nothing is selected.
pub fn render_symptom_chart(symptoms: &SymptomSet) -> Result<Option<ChartImage>> {
    let slices = symptom_distribution(symptoms);
    if slices.is_empty() {
        return Ok(None);
    }
    ensure_font()?;

    let mut buffer = vec![0u8; (PIE_SIZE * PIE_SIZE * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (PIE_SIZE, PIE_SIZE))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        let area = root
            .titled("Symptom Distribution", ("sans-serif", 24).into_font())
            .map_err(draw_err)?;

        let (w, h) = area.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = f64::from(w.min(h)) * 0.35;

        let mut start = START_ANGLE_DEG;
        for (i, slice) in slices.iter().enumerate() {
            let sweep = 3.6 * slice.percent;
            let color = PALETTE[i % PALETTE.len()];
            area.draw(&Polygon::new(
                wedge(center, radius, start, sweep),
                color.filled(),
            ))
            .map_err(draw_err)?;

            let mid = start + sweep / 2.0;
            area.draw(&Text::new(
                slice.symptom.label().to_string(),
                polar(center, radius * 1.15, mid),
                ("sans-serif", 16).into_font(),
            ))
            .map_err(draw_err)?;
            area.draw(&Text::new(
                format!("{:.1}%", slice.percent),
                polar(center, radius * 0.6, mid),
                ("sans-serif", 14).into_font(),
            ))
            .map_err(draw_err)?;

            start += sweep;
        }

        root.present().map_err(draw_err)?;
    }

    write_png(buffer, PIE_SIZE, PIE_SIZE, "symptoms-").map(Some)
}

// Angles are counter-clockwise from the positive x axis; pixel y grows downward.
fn polar(center: (i32, i32), r: f64, deg: f64) -> (i32, i32) {
    let rad = deg.to_radians();
    (
        center.0 + (r * rad.cos()).round() as i32,
        center.1 - (r * rad.sin()).round() as i32,
    )
}

fn wedge(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = sweep.ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let deg = start + sweep * step as f64 / steps as f64;
        points.push(polar(center, radius, deg));
    }
    points
}
