use std::ops::Range;

use itertools::{Itertools, MinMaxResult};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::data::TrainingSet;
use crate::history::ErrorHistory;
use crate::model::ModelParameters;

/// Axes used for an empty training set.
const DEFAULT_X_RANGE: Range<f64> = 0f64..10f64;
const DEFAULT_Y_RANGE: Range<f64> = 0f64..120f64;

/// Error axis height when the history holds no finite value.
pub const EMPTY_HISTORY_PEAK: f64 = 1.;

const POINT_COLOR: RGBColor = RGBColor(0x9f, 0x7a, 0xea);

fn padded_range(values: impl Iterator<Item = f64>, fallback: Range<f64>) -> Range<f64> {
    match values.filter(|v| v.is_finite()).minmax() {
        MinMaxResult::NoElements => fallback,
        MinMaxResult::OneElement(v) => (v - 1.)..(v + 1.),
        MinMaxResult::MinMax(min, max) if min == max => (min - 1.)..(max + 1.),
        MinMaxResult::MinMax(min, max) => {
            let pad = (max - min) * 0.1;
            (min - pad)..(max + pad)
        }
    }
}

/// Axis ranges that fit both the points and the line across them.
pub fn fit_ranges(set: &TrainingSet, params: &ModelParameters) -> (Range<f64>, Range<f64>) {
    let x_range = padded_range(set.x().iter().copied(), DEFAULT_X_RANGE);

    let line_ends = [params.predict(x_range.start), params.predict(x_range.end)];
    let y_range = if set.is_empty() {
        DEFAULT_Y_RANGE
    } else {
        padded_range(set.y().iter().copied().chain(line_ends), DEFAULT_Y_RANGE)
    };

    (x_range, y_range)
}

pub fn error_ranges(history: &ErrorHistory, max_iterations: usize) -> (Range<usize>, Range<f64>) {
    let peak = history
        .peak()
        .filter(|&p| p > 0.)
        .unwrap_or(EMPTY_HISTORY_PEAK);

    (0..max_iterations.max(history.len()), 0f64..peak)
}

pub fn plot_fit<DB>(
    set: &TrainingSet,
    params: &ModelParameters,
    caption: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    drawing_area.fill(&WHITE)?;

    let (x_range, y_range) = fit_ranges(set, params);

    let mut chart_context = ChartBuilder::on(drawing_area)
        .caption(caption, ("Arial", 20))
        .set_all_label_area_size(60)
        .margin(20)
        .build_cartesian_2d(x_range.clone(), y_range)?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc("x (input feature)")
        .y_labels(10)
        .y_desc("y (target output)")
        .draw()?;

    chart_context.draw_series(
        set.points()
            .map(|p| Circle::new((p.x, p.y), 5, POINT_COLOR.filled())),
    )?;

    chart_context.draw_series(LineSeries::new(
        [x_range.start, x_range.end]
            .into_iter()
            .map(|x| (x, params.predict(x))),
        POINT_COLOR.stroke_width(3),
    ))?;

    Ok(())
}

pub fn plot_error_history<DB>(
    history: &ErrorHistory,
    max_iterations: usize,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    drawing_area.fill(&WHITE)?;

    let (x_range, y_range) = error_ranges(history, max_iterations);

    let mut chart_context = ChartBuilder::on(drawing_area)
        .caption("error by iteration", ("Arial", 20))
        .set_all_label_area_size(70)
        .margin(20)
        .build_cartesian_2d(x_range, y_range)?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc("Iteration")
        .y_labels(10)
        .y_desc("Error")
        .y_label_formatter(&|y| format!("{:.2e}", y))
        .draw()?;

    chart_context.draw_series(LineSeries::new(
        history
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_finite())
            .map(|(i, &e)| (i, e)),
        RED.stroke_width(2),
    ))?;

    Ok(())
}

/// Renders the fit next to the error curve into one SVG file.
pub fn render_training_svg(
    path: &str,
    set: &TrainingSet,
    params: &ModelParameters,
    history: &ErrorHistory,
    max_iterations: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let drawing_area = SVGBackend::new(path, (1200, 500)).into_drawing_area();

    let (left, right) = drawing_area.split_horizontally(550);

    plot_fit(set, params, &params.to_string(), &left)?;
    plot_error_history(history, max_iterations, &right)?;

    drawing_area.present()?;

    log::info!("plot written to {}", path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataPoint;

    #[test]
    fn empty_set_uses_default_axes() {
        let (x, y) = fit_ranges(&TrainingSet::default(), &ModelParameters::default());

        assert_eq!(x, 0f64..10f64);
        assert_eq!(y, 0f64..120f64);
    }

    #[test]
    fn fit_ranges_cover_points_and_line() {
        let set = TrainingSet::new(&[DataPoint::new(0., 0.), DataPoint::new(10., 10.)]);
        let params = ModelParameters::new(5., 0.);

        let (x, y) = fit_ranges(&set, &params);

        assert_eq!(x, -1f64..11f64);
        assert!(y.start <= -5. && y.end >= 55.);
    }

    #[test]
    fn single_point_gets_a_window() {
        let set = TrainingSet::new(&[DataPoint::new(5., 5.)]);

        let (x, _) = fit_ranges(&set, &ModelParameters::new(1., 0.));

        assert_eq!(x, 4f64..6f64);
    }

    #[test]
    fn shared_x_gets_a_window() {
        let set = TrainingSet::new(&[DataPoint::new(5., 1.), DataPoint::new(5., 9.)]);

        let (x, y) = fit_ranges(&set, &ModelParameters::default());

        assert_eq!(x, 4f64..6f64);
        assert!(y.start < 0. && y.end > 9.);
    }

    #[test]
    fn repeated_point_gets_a_window() {
        let set = TrainingSet::new(&[DataPoint::new(5., 5.), DataPoint::new(5., 5.)]);

        let (x, y) = fit_ranges(&set, &ModelParameters::new(0., 5.));

        assert_eq!(x, 4f64..6f64);
        assert_eq!(y, 4f64..6f64);
    }

    #[test]
    fn empty_history_falls_back() {
        let (x, y) = error_ranges(&ErrorHistory::new(), 30);

        assert_eq!(x, 0..30);
        assert_eq!(y, 0f64..EMPTY_HISTORY_PEAK);
    }

    #[test]
    fn renders_svg() {
        let points = vec![DataPoint::new(1., 2.), DataPoint::new(2., 4.)];
        let mut session = crate::session::TrainingSession::new(
            &points,
            crate::config::TrainingConfig::default(),
        )
        .unwrap();
        for _ in 0..5 {
            session.step().unwrap();
        }

        let path = std::env::temp_dir().join(format!(
            "regresja_liniowa_{}_plot.svg",
            std::process::id()
        ));
        let path = path.to_str().unwrap();

        render_training_svg(
            path,
            session.training_set(),
            &session.params(),
            session.error_history(),
            session.max_iterations(),
        )
        .unwrap();

        let svg = std::fs::read_to_string(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("error by iteration"));
    }
}
