/// Builds an SVG path (`M x,y L x,y ...`) tracing `values` across a
/// `width` x `height` box, leaving `padding` above and below the line.
///
/// A single point is drawn as a flat line across the full width so the KPI
/// card never shows an empty trace.
pub fn sparkline_path(values: &[f64], width: f64, height: f64, padding: f64) -> String {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return String::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    let y_of = |val: f64| padding + (1.0 - (val - min) / range) * (height - 2.0 * padding);

    if values.len() == 1 {
        let y = y_of(values[0]);
        return format!("M 0.00,{y:.2} L {width:.2},{y:.2}");
    }

    let last = (values.len() - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &val)| (i as f64 / last * width, y_of(val)))
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{cmd} {x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert_eq!(sparkline_path(&[], 100.0, 40.0, 4.0), "");
    }

    #[test]
    fn test_rising_line_ends_at_top() {
        let path = sparkline_path(&[1.0, 2.0, 3.0], 100.0, 40.0, 4.0);
        assert_eq!(path, "M 0.00,36.00 L 50.00,20.00 L 100.00,4.00");
    }

    #[test]
    fn test_flat_line_does_not_divide_by_zero() {
        let path = sparkline_path(&[5.0, 5.0], 100.0, 40.0, 4.0);
        assert_eq!(path, "M 0.00,36.00 L 100.00,36.00");
    }

    #[test]
    fn test_single_point_spans_width() {
        let path = sparkline_path(&[2.0], 80.0, 40.0, 4.0);
        assert_eq!(path, "M 0.00,36.00 L 80.00,36.00");
    }
}
