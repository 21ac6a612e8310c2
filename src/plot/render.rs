use std::path::Path;

use log::{info, warn};
use plotly::common::{Line, Mode};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::error::LinebroadError;
use crate::plot::SpectrumView;
use crate::Result;

/// Build the single-trace figure for a broadened spectrum.
fn build_plot(view: &SpectrumView) -> Plot {
    let trace = Scatter::new(view.grid.to_vec(), view.signal.to_vec())
        .mode(Mode::Lines)
        .name("spectrum")
        .line(Line::new().color("#d62728").width(2.0));

    let layout = Layout::new()
        .width(1024)
        .height(600)
        .x_axis(
            Axis::new()
                .title(view.units.to_string())
                .range(vec![view.xmin, view.xmax]),
        )
        .y_axis(
            Axis::new()
                .title("Intensity".to_string())
                .range(vec![view.ymin, view.effective_ymax()]),
        );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Save the figure to `path`.
///
/// HTML is written directly when the path asks for it; for any other
/// extension an HTML report lands next to the requested file and a static
/// image is attempted when the `plotly_static` exporter is compiled in.
pub fn save(view: &SpectrumView, path: &Path) -> Result<()> {
    let plot = build_plot(view);

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let html_path = if matches!(ext.as_str(), "html" | "htm") {
        path.to_path_buf()
    } else {
        path.with_extension("html")
    };
    std::fs::write(&html_path, plot.to_html()).map_err(|e| LinebroadError::PlotOutput {
        path: html_path.clone(),
        message: e.to_string(),
    })?;
    info!("Wrote plot to {}", html_path.display());

    if matches!(ext.as_str(), "html" | "htm") {
        return Ok(());
    }

    #[cfg(feature = "plotly_static")]
    {
        use plotly_static::{ImageFormat, StaticExporterBuilder};

        let format = match ext.as_str() {
            "jpg" | "jpeg" => ImageFormat::JPEG,
            "svg" => ImageFormat::SVG,
            "pdf" => ImageFormat::PDF,
            "webp" => ImageFormat::WEBP,
            _ => ImageFormat::PNG,
        };

        match StaticExporterBuilder::default().build() {
            Ok(mut exporter) => {
                let fig = serde_json::to_value(&plot).map_err(|e| LinebroadError::PlotOutput {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                if let Err(e) = exporter.write_fig(path, &fig, format, 1024, 600, 1.0) {
                    warn!(
                        "Static image export failed ({}); HTML report is at {}",
                        e,
                        html_path.display()
                    );
                } else {
                    info!("Wrote plot to {}", path.display());
                }
            }
            Err(e) => {
                warn!(
                    "Static image export unavailable ({}); HTML report is at {}",
                    e,
                    html_path.display()
                );
            }
        }
    }

    #[cfg(not(feature = "plotly_static"))]
    warn!(
        "Static image export disabled (enable the plotly_static feature); \
         HTML report is at {}",
        html_path.display()
    );

    Ok(())
}

/// Open the figure in the system browser.
pub fn show(view: &SpectrumView) {
    build_plot(view).show();
}
