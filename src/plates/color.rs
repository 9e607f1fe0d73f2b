//! Plate colors sampled from the "jet" colormap (blue -> cyan -> yellow -> red)

/// Control points per channel: (position, value)
const RED: [(f64, f64); 5] = [(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const GREEN: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const BLUE: [(f64, f64); 5] = [(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

/// Color for plate `index` out of `count`, sampled at `index / count`
pub fn jet_color(index: usize, count: usize) -> [u8; 3] {
    let t = if count == 0 { 0.0 } else { index as f64 / count as f64 };
    let t = t.clamp(0.0, 1.0);
    [channel(&RED, t), channel(&GREEN, t), channel(&BLUE, t)]
}

fn channel(points: &[(f64, f64)], t: f64) -> u8 {
    let value = points
        .windows(2)
        .find(|w| t <= w[1].0)
        .map(|w| {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            y0 + (y1 - y0) * (t - x0) / (x1 - x0)
        })
        .unwrap_or(points[points.len() - 1].1);
    (value * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_plate_is_dark_blue() {
        assert_eq!(jet_color(0, 5), [0, 0, 128]);
    }

    #[test]
    fn test_colors_differ_across_plates() {
        let colors: Vec<[u8; 3]> = (0..6).map(|i| jet_color(i, 6)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_end_of_map_is_dark_red() {
        assert_eq!(jet_color(1, 1), [128, 0, 0]);
    }

    #[test]
    fn test_empty_count_does_not_panic() {
        assert_eq!(jet_color(0, 0), [0, 0, 128]);
    }
}
