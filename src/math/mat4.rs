//! 4x4 matrix algebra
//!
//! One convention throughout: row vectors. Points multiply on the left
//! (`p · M`), matrices are indexed `m[row][col]`, translation lives in row 3
//! and compositions read left to right (`scale * rotate * translate`).
//! The projection is right-handed with the camera looking down -z, so the
//! w-producing column yields `w = -z_view`.

use super::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Pivots with a smaller absolute value are treated as zero during inversion.
pub const PIVOT_EPSILON: f32 = 1e-6;

/// Homogeneous w values closer to zero than this mark a point at infinity
/// (or on the eye plane) after a projective transform.
pub const W_EPSILON: f32 = 1e-6;

/// Failure surface of the matrix layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Gauss-Jordan inversion found no usable pivot
    SingularMatrix,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SingularMatrix => write!(f, "singular matrix has no inverse"),
        }
    }
}

impl std::error::Error for MathError {}

/// 4x4 matrix, `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Mat4 = Mat4 { m: [[0.0; 4]; 4] };

    pub fn identity() -> Mat4 {
        Mat4::IDENTITY
    }

    /// Perspective projection. `fov` is the full field of view in degrees;
    /// `near`/`far` bound the visible depth range. Maps view space to clip
    /// space with `w = -z_view`.
    pub fn perspective(fov: f32, near: f32, far: f32) -> Mat4 {
        let scale = 1.0 / (fov.to_radians() * 0.5).tan();
        let mut p = Mat4::ZERO;
        p.m[0][0] = scale;
        p.m[1][1] = scale;
        p.m[2][2] = -far / (far - near);
        p.m[3][2] = -far * near / (far - near);
        p.m[2][3] = -1.0;
        p
    }

    pub fn translate(dx: f32, dy: f32, dz: f32) -> Mat4 {
        let mut t = Mat4::IDENTITY;
        t.m[3][0] = dx;
        t.m[3][1] = dy;
        t.m[3][2] = dz;
        t
    }

    pub fn rotate_x(theta: f32) -> Mat4 {
        let (sin, cos) = theta.sin_cos();
        let mut r = Mat4::IDENTITY;
        r.m[1][1] = cos;
        r.m[1][2] = sin;
        r.m[2][1] = -sin;
        r.m[2][2] = cos;
        r
    }

    pub fn rotate_y(theta: f32) -> Mat4 {
        let (sin, cos) = theta.sin_cos();
        let mut r = Mat4::IDENTITY;
        r.m[0][0] = cos;
        r.m[0][2] = -sin;
        r.m[2][0] = sin;
        r.m[2][2] = cos;
        r
    }

    pub fn rotate_z(theta: f32) -> Mat4 {
        let (sin, cos) = theta.sin_cos();
        let mut r = Mat4::IDENTITY;
        r.m[0][0] = cos;
        r.m[0][1] = sin;
        r.m[1][0] = -sin;
        r.m[1][1] = cos;
        r
    }

    pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
        let mut s = Mat4::IDENTITY;
        s.m[0][0] = sx;
        s.m[1][1] = sy;
        s.m[2][2] = sz;
        s
    }

    pub fn transpose(&self) -> Mat4 {
        let mut t = Mat4::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                t.m[row][col] = self.m[col][row];
            }
        }
        t
    }

    /// Inverse via Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns [`MathError::SingularMatrix`] when a pivot column has no
    /// entry above [`PIVOT_EPSILON`] — never a NaN-filled matrix.
    pub fn inverse(&self) -> Result<Mat4, MathError> {
        // Working copy reduces toward diagonal form while the accumulator
        // collects the same row operations starting from identity.
        let mut a = *self;
        let mut r = Mat4::IDENTITY;

        for column in 0..4 {
            if a.m[column][column].abs() < PIVOT_EPSILON {
                // Swap in the largest remaining pivot candidate. Rows above
                // already carry their pivots and must stay put.
                let mut row_max = column;
                for row in column + 1..4 {
                    if a.m[row][column].abs() > a.m[row_max][column].abs() {
                        row_max = row;
                    }
                }
                if a.m[row_max][column].abs() < PIVOT_EPSILON {
                    return Err(MathError::SingularMatrix);
                }
                a.m.swap(column, row_max);
                r.m.swap(column, row_max);
            }

            // Eliminate the column from every other row
            for row in 0..4 {
                if row == column {
                    continue;
                }
                let coeff = a.m[row][column] / a.m[column][column];
                if coeff != 0.0 {
                    for j in 0..4 {
                        a.m[row][j] -= coeff * a.m[column][j];
                        r.m[row][j] -= coeff * r.m[column][j];
                    }
                    a.m[row][column] = 0.0;
                }
            }
        }

        // Scale each row so the reduced working matrix becomes identity
        for row in 0..4 {
            let diag = a.m[row][row];
            for col in 0..4 {
                r.m[row][col] /= diag;
            }
        }
        Ok(r)
    }

    /// Affine transform of a point (implicit w = 1, translation applied)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3 {
            x: p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0],
            y: p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1],
            z: p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2],
        }
    }

    /// Transform of a direction (implicit w = 0, translation ignored)
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3 {
            x: v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            y: v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            z: v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        }
    }

    /// Transform of a surface normal. Uses transpose-of-inverse so normals
    /// stay perpendicular to their surface under non-uniform scale;
    /// propagates [`MathError::SingularMatrix`].
    pub fn transform_normal(&self, n: Vec3) -> Result<Vec3, MathError> {
        Ok(self.inverse()?.transpose().transform_vector(n))
    }

    /// Projective transform of a point: full 4x4 multiply, then the
    /// homogeneous divide of x, y, z by w. `None` when `|w|` falls below
    /// [`W_EPSILON`] (point at infinity / on the eye plane).
    pub fn transform_projective_point(&self, p: Vec3) -> Option<Vec3> {
        let m = &self.m;
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];
        if w.abs() < W_EPSILON {
            return None;
        }
        let inv_w = 1.0 / w;
        Some(Vec3 {
            x: (p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0]) * inv_w,
            y: (p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1]) * inv_w,
            z: (p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2]) * inv_w,
        })
    }

    /// First basis row (local x axis), for debugging and gizmos
    pub fn axis_x(&self) -> Vec3 {
        Vec3::new(self.m[0][0], self.m[0][1], self.m[0][2])
    }

    pub fn axis_y(&self) -> Vec3 {
        Vec3::new(self.m[1][0], self.m[1][1], self.m[1][2])
    }

    pub fn axis_z(&self) -> Vec3 {
        Vec3::new(self.m[2][0], self.m[2][1], self.m[2][2])
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, other: Mat4) -> Mat4 {
        let mut out = Mat4::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        out
    }
}

impl Mul<f32> for Mat4 {
    type Output = Mat4;
    fn mul(self, s: f32) -> Mat4 {
        let mut out = self;
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] *= s;
            }
        }
        out
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;
    fn mul(self, m: Mat4) -> Mat4 {
        m * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 0.001;

    fn mat_approx(a: Mat4, b: Mat4) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if (a.m[row][col] - b.m[row][col]).abs() > EPS {
                    return false;
                }
            }
        }
        true
    }

    fn vec_approx(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS
    }

    fn sample_affine() -> Mat4 {
        Mat4::scale(1.0, 2.0, 3.0) * Mat4::rotate_y(0.7) * Mat4::translate(4.0, 5.0, 6.0)
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = sample_affine();
        assert!(mat_approx(Mat4::IDENTITY * m, m));
        assert!(mat_approx(m * Mat4::IDENTITY, m));
    }

    #[test]
    fn test_identity_transforms_point_to_itself() {
        let p = Vec3::new(1.5, -2.0, 3.25);
        assert!(vec_approx(Mat4::IDENTITY.transform_point(p), p));
    }

    #[test]
    fn test_scalar_multiply_both_orders() {
        let m = sample_affine();
        assert!(mat_approx(m * 2.0, 2.0 * m));
        assert!(((2.0 * m).m[3][0] - 8.0).abs() < EPS);
    }

    #[test]
    fn test_transpose_involution() {
        let m = sample_affine();
        assert!(mat_approx(m.transpose().transpose(), m));
        assert!((m.transpose().m[0][3] - m.m[3][0]).abs() < EPS);
    }

    #[test]
    fn test_rotations_map_basis_axes() {
        let r = Mat4::rotate_x(FRAC_PI_2);
        assert!(vec_approx(r.transform_point(Vec3::Y), Vec3::Z));
        let r = Mat4::rotate_y(FRAC_PI_2);
        assert!(vec_approx(r.transform_point(Vec3::Z), Vec3::X));
        let r = Mat4::rotate_z(FRAC_PI_2);
        assert!(vec_approx(r.transform_point(Vec3::X), Vec3::Y));
    }

    #[test]
    fn test_rotation_round_trip() {
        let r = Mat4::rotate_x(0.4) * Mat4::rotate_y(-1.1) * Mat4::rotate_z(2.3);
        let p = Vec3::new(1.0, 2.0, 3.0);
        let back = r
            .inverse()
            .unwrap()
            .transform_point(r.transform_point(p));
        assert!(vec_approx(back, p));
    }

    #[test]
    fn test_translation_moves_points_not_vectors() {
        let t = Mat4::translate(10.0, 20.0, 30.0);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx(t.transform_point(v), Vec3::new(11.0, 22.0, 33.0)));
        assert!(vec_approx(t.transform_vector(v), v));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample_affine();
        let inv = m.inverse().unwrap();
        assert!(mat_approx(m * inv, Mat4::IDENTITY));
        assert!(mat_approx(inv.inverse().unwrap(), m));
    }

    #[test]
    fn test_inverse_requires_pivoting() {
        // Permutation of x and y: zero on the first diagonal entry but
        // perfectly invertible, and its own inverse.
        let mut p = Mat4::ZERO;
        p.m[0][1] = 1.0;
        p.m[1][0] = 1.0;
        p.m[2][2] = 1.0;
        p.m[3][3] = 1.0;
        assert!(mat_approx(p.inverse().unwrap(), p));
    }

    #[test]
    fn test_inverse_singular_fails_cleanly() {
        assert_eq!(Mat4::ZERO.inverse(), Err(MathError::SingularMatrix));

        // Two identical rows: rank deficient
        let mut m = Mat4::IDENTITY;
        m.m[1] = m.m[0];
        assert_eq!(m.inverse(), Err(MathError::SingularMatrix));

        // Zero scale on one axis
        let m = Mat4::scale(1.0, 0.0, 1.0) * Mat4::translate(1.0, 2.0, 3.0);
        assert_eq!(m.inverse(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_normal_under_uniform_scale() {
        let m = Mat4::scale(2.0, 2.0, 2.0);
        let n = m.transform_normal(Vec3::Y).unwrap();
        // Direction preserved, magnitude scaled by 1/s
        assert!(vec_approx(n, Vec3::new(0.0, 0.5, 0.0)));
    }

    #[test]
    fn test_normal_stays_perpendicular() {
        let m = Mat4::scale(2.0, 1.0, 1.0) * Mat4::rotate_z(0.3);
        let tangent = Vec3::Y;
        let normal = Vec3::X;
        let t = m.transform_vector(tangent);
        let n = m.transform_normal(normal).unwrap();
        assert!(t.dot(n).abs() < EPS);
    }

    #[test]
    fn test_projective_point_divides_by_w() {
        let p = Mat4::perspective(90.0, 0.1, 100.0);
        let ndc = p.transform_projective_point(Vec3::new(0.0, 0.0, -10.0)).unwrap();
        assert!(ndc.x.abs() < EPS);
        assert!(ndc.y.abs() < EPS);
        // Off-axis point lands at x/(-z)
        let ndc = p.transform_projective_point(Vec3::new(2.0, 0.0, -10.0)).unwrap();
        assert!((ndc.x - 0.2).abs() < EPS);
    }

    #[test]
    fn test_projective_point_guards_small_w() {
        let p = Mat4::perspective(90.0, 0.1, 100.0);
        // On the eye plane, w = -z = 0
        assert!(p.transform_projective_point(Vec3::new(1.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn test_axis_extraction() {
        let r = Mat4::rotate_z(0.5);
        assert!(vec_approx(r.axis_x(), Vec3::new(0.5f32.cos(), 0.5f32.sin(), 0.0)));
        assert!(vec_approx(r.axis_z(), Vec3::Z));
        assert!(vec_approx(Mat4::IDENTITY.axis_y(), Vec3::Y));
    }
}
