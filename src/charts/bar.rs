use anyhow::Result;
use plotters::prelude::*;

use crate::charts::{ChartImage, PALETTE, draw_err, ensure_font, write_png};
use crate::patient::PatientInput;

pub const BAR_WIDTH: u32 = 1000;
pub const BAR_HEIGHT: u32 = 500;

/// Raw chart values in display order. ST depression keeps its own scale.
pub fn risk_factor_values(patient: &PatientInput) -> [(&'static str, f64); 5] {
    [
        ("Age", f64::from(patient.age)),
        ("Resting Blood Pressure", f64::from(patient.resting_bp)),
        ("Cholesterol", f64::from(patient.cholesterol)),
        ("Max Heart Rate", f64::from(patient.max_heart_rate)),
        ("ST Depression", patient.st_depression),
    ]
}

pub fn render_risk_factor_chart(patient: &PatientInput) -> Result<ChartImage> {
    let values = risk_factor_values(patient);
    ensure_font()?;
    let mut buffer = vec![0u8; (BAR_WIDTH * BAR_HEIGHT * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (BAR_WIDTH, BAR_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let peak = values.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption("Heart Disease Risk Factors", ("sans-serif", 24).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..values.len() as f64, 0f64..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(values.len())
            .x_label_formatter(&|x| {
                let idx = x.floor() as usize;
                values
                    .get(idx)
                    .map(|(label, _)| label.to_string())
                    .unwrap_or_default()
            })
            .x_desc("Factors")
            .y_desc("Values")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(values.iter().enumerate().map(|(i, (_, v))| {
                let left = i as f64 + 0.15;
                let right = i as f64 + 0.85;
                Rectangle::new([(left, 0.0), (right, *v)], PALETTE[i].filled())
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    write_png(buffer, BAR_WIDTH, BAR_HEIGHT, "risk-factors-")
}
