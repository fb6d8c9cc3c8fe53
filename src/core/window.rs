const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads the raw data extents and widens one span until metres per pixel
/// match on both axes for the given plot aspect (width / height).
pub fn equal_scale_axis_window(raw_max_x: f64, raw_max_y: f64, aspect: f64) -> (f64, f64) {
    let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
    let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    let ratio = aspect.max(0.1);
    if x_span / y_span < ratio {
        x_span = y_span * ratio;
    } else {
        y_span = x_span / ratio;
    }

    (x_span, y_span)
}
