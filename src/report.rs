use anyhow::{bail, Context};
use chrono::Utc;
use csv;
use genpdf::Element;
use genpdf::{elements, fonts, style, Alignment};
use opener;
use plotters::prelude::*;
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::data;
use crate::weibull::{self, SampleSeries, WeibullParams, SAMPLE_COUNT, TIME_STEP};

/// Export action requested from the UI.
#[derive(Clone, Copy, Debug)]
pub enum ExportRequest {
    Pdf,
    Csv,
}

const CHART_BLUE: RGBColor = RGBColor(0x3b, 0x82, 0xf6);
const CHART_RED: RGBColor = RGBColor(0xef, 0x44, 0x44);

/// Directories probed for the DejaVu family shipped by most distributions.
const FONT_DIRS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu-sans-fonts",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
];

macro_rules! row {
    ($table:ident, $label:expr, $value:expr) => {{
        $table
            .row()
            .element(elements::Paragraph::new($label))
            .element(elements::Paragraph::new($value))
            .push()
            .ok();
    }};
}

fn load_font_family() -> anyhow::Result<fonts::FontFamily<fonts::FontData>> {
    let dir = FONT_DIRS
        .iter()
        .map(Path::new)
        .find(|dir| dir.join("DejaVuSans.ttf").exists());
    let Some(dir) = dir else {
        bail!("DejaVu fonts not found; install the dejavu font package");
    };

    let load = |name: &str| -> anyhow::Result<fonts::FontData> {
        let path = dir.join(name);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("failed to read font {}", path.display()))?;
        fonts::FontData::new(bytes, None)
            .with_context(|| format!("failed to parse font {}", path.display()))
    };

    Ok(fonts::FontFamily {
        regular: load("DejaVuSans.ttf")?,
        bold: load("DejaVuSans-Bold.ttf")?,
        italic: load("DejaVuSans-Oblique.ttf")?,
        bold_italic: load("DejaVuSans-BoldOblique.ttf")?,
    })
}

pub fn export_pdf(path: &str, params: WeibullParams, series: &SampleSeries) -> anyhow::Result<()> {
    let font_family = load_font_family()?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title("Reliability Engineering Report");

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(20);
    doc.set_page_decorator(decorator);

    let heading = elements::Paragraph::new("Reliability Engineering & Predictive Maintenance")
        .aligned(Alignment::Center)
        .styled(style::Style::new().bold().with_font_size(18));
    doc.push(heading);
    doc.push(elements::Break::new(1));

    doc.push(
        elements::Paragraph::new("Weibull Parameters")
            .styled(style::Style::new().bold().with_font_size(14)),
    );
    doc.push(elements::Break::new(0.5));

    let mut table = elements::TableLayout::new(vec![1, 1]);
    row!(table, "Shape (β)", format!("{:.2}", params.shape));
    row!(table, "Scale (η)", format!("{:.0} hours", params.scale));
    row!(table, "Failure-rate trend", weibull::trend_label(params.shape));
    row!(table, "Sample points", format!("{SAMPLE_COUNT}"));
    row!(table, "Time step", format!("{TIME_STEP:.0} hours"));
    doc.push(table);
    doc.push(elements::Break::new(1));

    doc.push(
        elements::Paragraph::new("Key Performance Indicators")
            .styled(style::Style::new().bold().with_font_size(14)),
    );
    doc.push(elements::Break::new(0.5));

    let mut table2 = elements::TableLayout::new(vec![1, 1]);
    for kpi in &data::KPIS {
        row!(table2, kpi.name, format!("{} {}", kpi.value, kpi.unit));
    }
    doc.push(table2);
    doc.push(elements::Break::new(1));

    doc.push(
        elements::Paragraph::new("FMEA Worksheet")
            .styled(style::Style::new().bold().with_font_size(14)),
    );
    doc.push(elements::Break::new(0.5));

    let mut fmea = elements::TableLayout::new(vec![2, 2, 1, 1, 1, 1]);
    let header = style::Style::new().bold();
    fmea.row()
        .element(elements::Paragraph::new("Component").styled(header))
        .element(elements::Paragraph::new("Failure mode").styled(header))
        .element(elements::Paragraph::new("S").styled(header))
        .element(elements::Paragraph::new("O").styled(header))
        .element(elements::Paragraph::new("D").styled(header))
        .element(elements::Paragraph::new("RPN").styled(header))
        .push()
        .ok();
    for fmea_row in &data::FMEA_ROWS {
        fmea.row()
            .element(elements::Paragraph::new(fmea_row.component))
            .element(elements::Paragraph::new(fmea_row.failure_mode))
            .element(elements::Paragraph::new(fmea_row.severity.to_string()))
            .element(elements::Paragraph::new(fmea_row.occurrence.to_string()))
            .element(elements::Paragraph::new(fmea_row.detection.to_string()))
            .element(elements::Paragraph::new(fmea_row.rpn().to_string()))
            .push()
            .ok();
    }
    doc.push(fmea);

    doc.push(elements::PageBreak::new());

    doc.push(
        elements::Paragraph::new("Curves").styled(style::Style::new().bold().with_font_size(14)),
    );
    doc.push(elements::Break::new(0.5));

    if let Ok(temp_file) = NamedTempFile::new() {
        let image_path = temp_file.path().with_extension("png");
        if generate_reliability_plot(&image_path, series).is_ok() {
            if let Ok(img) = elements::Image::from_path(&image_path) {
                doc.push(img.with_alignment(Alignment::Center));
            }
        }
    }
    doc.push(elements::Break::new(0.5));

    if let Ok(temp_file) = NamedTempFile::new() {
        let image_path = temp_file.path().with_extension("png");
        if generate_hazard_plot(&image_path, series).is_ok() {
            if let Ok(img) = elements::Image::from_path(&image_path) {
                doc.push(img.with_alignment(Alignment::Center));
            }
        }
    }

    let file = File::create(path)?;
    doc.render(file)?;

    opener::open(path)?;

    Ok(())
}

fn generate_reliability_plot(path: &Path, series: &SampleSeries) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (2000, 1000)).into_drawing_area();
    root.fill(&WHITE)?;

    let points: Vec<(f64, f64)> = series
        .reliability_points()
        .into_iter()
        .map(|[t, r]| (t, r))
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Weibull Reliability R(t)", ("sans-serif", 64))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(0f64..1000f64, 0f64..105f64)?;

    chart
        .configure_mesh()
        .x_desc("Time (hours)")
        .y_desc("Reliability (%)")
        .label_style(("sans-serif", 32))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points, CHART_BLUE.stroke_width(4)))?
        .label("Reliability (%)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &CHART_BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .label_font(("sans-serif", 32))
        .draw()?;

    root.present()?;
    Ok(())
}

fn generate_hazard_plot(path: &Path, series: &SampleSeries) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (2000, 1000)).into_drawing_area();
    root.fill(&WHITE)?;

    // The t = 0 point is singular for shape < 1 and never plotted.
    let points: Vec<(f64, f64)> = series
        .hazard_points()
        .into_iter()
        .map(|[t, h]| (t, h))
        .collect();

    let max_y = points.iter().map(|&(_, y)| y).fold(0f64, f64::max);
    let max_y = if max_y > 0.0 { max_y * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption("Weibull Hazard Rate", ("sans-serif", 64))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(0f64..1000f64, 0f64..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Time (hours)")
        .y_desc("Hazard rate")
        .label_style(("sans-serif", 32))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points, CHART_RED.stroke_width(4)))?
        .label("Hazard rate")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &CHART_RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .label_font(("sans-serif", 32))
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn export_csv(dir_path: &str, series: &SampleSeries) -> anyhow::Result<()> {
    let dir = Path::new(dir_path);

    {
        let default_name = format!(
            "weibull_series_{}.csv",
            Utc::now().format("%Y-%m-%d_%H-%M-%S")
        );
        let path = dir.join(default_name);
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["Time (hours)", "Reliability (%)", "Hazard Rate"])?;
        for point in &series.points {
            let hazard = if point.hazard_rate.is_finite() {
                point.hazard_rate.to_string()
            } else {
                String::new()
            };
            wtr.write_record(&[
                point.time.to_string(),
                point.reliability_pct.to_string(),
                hazard,
            ])?;
        }
        wtr.flush()?;
    }

    {
        let default_name = format!(
            "fmea_worksheet_{}.csv",
            Utc::now().format("%Y-%m-%d_%H-%M-%S")
        );
        let path = dir.join(default_name);
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record([
            "Component",
            "Failure Mode",
            "Severity",
            "Occurrence",
            "Detection",
            "RPN",
        ])?;
        for row in &data::FMEA_ROWS {
            wtr.write_record(&[
                row.component.to_string(),
                row.failure_mode.to_string(),
                row.severity.to_string(),
                row.occurrence.to_string(),
                row.detection.to_string(),
                row.rpn().to_string(),
            ])?;
        }
        wtr.flush()?;
    }

    {
        let default_name = format!("kpi_{}.csv", Utc::now().format("%Y-%m-%d_%H-%M-%S"));
        let path = dir.join(default_name);
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["Indicator", "Value", "Unit"])?;
        for kpi in &data::KPIS {
            wtr.write_record([kpi.name, kpi.value, kpi.unit])?;
        }
        wtr.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weibull::sample_series;
    use tempfile::TempDir;

    fn written_csv(dir: &TempDir, prefix: &str) -> String {
        let entry = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .find(|e| e.file_name().to_string_lossy().starts_with(prefix))
            .unwrap_or_else(|| panic!("no file with prefix {prefix}"));
        std::fs::read_to_string(entry.path()).unwrap()
    }

    #[test]
    fn series_csv_holds_the_full_grid() {
        let dir = TempDir::new().unwrap();
        let series = sample_series(WeibullParams {
            shape: 2.0,
            scale: 1000.0,
        });
        export_csv(&dir.path().to_string_lossy(), &series).unwrap();

        let contents = written_csv(&dir, "weibull_series_");
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("Time (hours),Reliability (%),Hazard Rate")
        );
        assert_eq!(lines.clone().count(), SAMPLE_COUNT);
        assert_eq!(lines.next(), Some("0,100,0"));
    }

    #[test]
    fn singular_hazard_exports_as_blank_cell() {
        let dir = TempDir::new().unwrap();
        let series = sample_series(WeibullParams {
            shape: 0.5,
            scale: 1000.0,
        });
        export_csv(&dir.path().to_string_lossy(), &series).unwrap();

        let contents = written_csv(&dir, "weibull_series_");
        let first_row = contents.lines().nth(1).unwrap();
        assert_eq!(first_row, "0,100,");
    }

    #[test]
    fn fmea_csv_carries_computed_rpn() {
        let dir = TempDir::new().unwrap();
        let series = sample_series(WeibullParams::default());
        export_csv(&dir.path().to_string_lossy(), &series).unwrap();

        let contents = written_csv(&dir, "fmea_worksheet_");
        assert_eq!(contents.lines().count(), 1 + data::FMEA_ROWS.len());
        assert!(contents.contains("Bearing,Fatigue,8,5,6,240"));
    }

    #[test]
    fn kpi_csv_lists_the_headline_indicators() {
        let dir = TempDir::new().unwrap();
        let series = sample_series(WeibullParams::default());
        export_csv(&dir.path().to_string_lossy(), &series).unwrap();

        let contents = written_csv(&dir, "kpi_");
        assert_eq!(contents.lines().count(), 1 + data::KPIS.len());
        assert!(contents.contains("MTBF,8760,hours"));
        assert!(contents.contains("Availability,99.95,%"));
    }
}
