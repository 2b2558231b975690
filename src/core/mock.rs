use chrono::{Days, NaiveDate};

use crate::core::{DateSeries, Point};
use crate::error::{ChartError, ChartResult};

/// Builds demo series with weekly points starting 2024-01-01.
///
/// Units rotate through five values so multi-axis layouts show up quickly.
/// Values are a fixed function of the indices, so output is reproducible.
pub fn generate_mock_series(
    series_count: usize,
    points_per_series: usize,
) -> ChartResult<Vec<DateSeries>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .ok_or_else(|| ChartError::InvalidData("invalid mock start date".to_owned()))?;

    let mut series = Vec::with_capacity(series_count);
    for i in 0..series_count {
        let mut points = Vec::with_capacity(points_per_series);
        for j in 0..points_per_series {
            let date = start
                .checked_add_days(Days::new(7 * j as u64))
                .ok_or_else(|| ChartError::InvalidData(format!("mock date overflow at {j}")))?;
            let wave = ((j * 37 + i * 11) % 100) as f64;
            points.push(Point::from_date(date, wave + 50.0 + i as f64 * 20.0));
        }
        series.push(
            DateSeries::new(format!("Series{}", i + 1), format!("Unit{}", i % 5))
                .with_points(points),
        );
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_series_are_weekly_and_reproducible() {
        let first = generate_mock_series(6, 3).expect("mock");
        let second = generate_mock_series(6, 3).expect("mock");
        assert_eq!(first, second);

        assert_eq!(first.len(), 6);
        assert_eq!(first[0].name, "Series1");
        assert_eq!(first[5].unit, "Unit0");
        assert_eq!(first[0].points[0].d, "2024-01-01");
        assert_eq!(first[0].points[1].d, "2024-01-08");
        assert_eq!(first[0].points[2].d, "2024-01-15");
    }
}
