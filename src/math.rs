/// Row-major 3x3 matrix over `f32`.
///
/// Used solely for the color-space change of basis in
/// [`crate::color::Color::apply_hsb`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    rows: [[f32; 3]; 3],
}

impl Mat3 {
    /// Build a matrix from three rows.
    pub const fn new(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Multiply the matrix by a column vector.
    pub fn apply(&self, v: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (o, row) in out.iter_mut().zip(self.rows.iter()) {
            *o = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
        }
        out
    }
}

/// RGB -> YIQ basis (luma, in-phase, quadrature).
pub const RGB_TO_YIQ: Mat3 = Mat3::new([
    [0.299, 0.587, 0.114],
    [0.5959, -0.2746, -0.3213],
    [0.2115, -0.5227, 0.3112],
]);

/// YIQ -> RGB inverse basis.
pub const YIQ_TO_RGB: Mat3 = Mat3::new([
    [1.0, 0.956, 0.619],
    [1.0, -0.272, -0.647],
    [1.0, -1.106, 1.703],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_apply_returns_input() {
        let id = Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(id.apply([0.25, 0.5, 0.75]), [0.25, 0.5, 0.75]);
    }

    #[test]
    fn yiq_round_trip_is_identity_within_tolerance() {
        for rgb in [[1.0, 0.0, 0.0], [0.2, 0.7, 0.4], [0.0, 0.0, 0.0]] {
            let back = YIQ_TO_RGB.apply(RGB_TO_YIQ.apply(rgb));
            for (a, b) in rgb.iter().zip(back.iter()) {
                assert!((a - b).abs() < 1e-3, "{rgb:?} -> {back:?}");
            }
        }
    }
}
