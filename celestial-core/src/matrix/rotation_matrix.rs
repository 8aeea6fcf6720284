//! 3x3 rotation matrices.
//!
//! Two kinds of rotation show up in this workspace: the device attitude
//! decoded from a unit quaternion, and the precession rotation built from
//! three elementary turns. Both end up as a [`RotationMatrix3`] applied to a
//! [`Vector3`].
//!
//! # Rotation Conventions
//!
//! The elementary rotations follow ERFA: `rotate_z(psi)` pre-multiplies the
//! matrix by
//!
//! ```text
//! |  cos ψ   sin ψ   0 |
//! | -sin ψ   cos ψ   0 |
//! |    0       0     1 |
//! ```
//!
//! which rotates the *frame* by ψ (a vector along +X ends up at
//! `[cos ψ, -sin ψ, 0]`). Successive calls compose left to right in time:
//! the first call acts on the vector first.
//!
//! ```
//! use celestial_core::{RotationMatrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(FRAC_PI_2);
//! let v = m * Vector3::x_axis();
//! assert!((v.y + 1.0).abs() < 1e-15);
//! ```

use std::fmt;

use super::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Attitude matrix of a unit quaternion `w + xi + yj + zk`.
    ///
    /// Maps device-frame vectors into the reference frame the quaternion is
    /// expressed against. The quaternion is used as given; callers normalize
    /// it first if they need a proper rotation.
    pub fn from_quaternion(w: f64, x: f64, y: f64, z: f64) -> Self {
        let (xx, yy, zz) = (2.0 * x * x, 2.0 * y * y, 2.0 * z * z);
        let (xy, xz, yz) = (2.0 * x * y, 2.0 * x * z, 2.0 * y * z);
        let (wx, wy, wz) = (2.0 * w * x, 2.0 * w * y, 2.0 * w * z);

        Self::from_array([
            [1.0 - yy - zz, xy - wz, xz + wy],
            [xy + wz, 1.0 - xx - zz, yz - wx],
            [xz - wy, yz + wx, 1.0 - xx - yy],
        ])
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    pub fn column(&self, col: usize) -> Vector3 {
        Vector3::new(
            self.elements[0][col],
            self.elements[1][col],
            self.elements[2][col],
        )
    }

    /// Pre-multiplies by an elementary rotation of `theta` about the Y axis.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);
        for col in 0..3 {
            let top = self.elements[0][col];
            let bottom = self.elements[2][col];
            self.elements[0][col] = c * top - s * bottom;
            self.elements[2][col] = s * top + c * bottom;
        }
    }

    /// Pre-multiplies by an elementary rotation of `psi` about the Z axis.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);
        for col in 0..3 {
            let top = self.elements[0][col];
            let middle = self.elements[1][col];
            self.elements[0][col] = c * top + s * middle;
            self.elements[1][col] = -s * top + c * middle;
        }
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3)
                    .map(|k| self.elements[i][k] * other.elements[k][j])
                    .sum();
            }
        }
        Self::from_array(result)
    }

    pub fn apply(&self, v: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Orthonormal with determinant +1, within `tolerance` per element.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }
        let product = self.multiply(&self.transpose());
        (0..3).all(|i| {
            (0..3).all(|j| {
                let expected = if i == j { 1.0 } else { 0.0 };
                (product.elements[i][j] - expected).abs() <= tolerance
            })
        })
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply(vec)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply(vec)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_rotate_z_moves_x_axis() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);
        let v = m * Vector3::x_axis();
        assert!(v.x.abs() < 1e-15);
        assert!((v.y + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotate_y_moves_z_axis() {
        let mut m = RotationMatrix3::identity();
        m.rotate_y(HALF_PI);
        let v = m * Vector3::z_axis();
        assert!((v.x + 1.0).abs() < 1e-15);
        assert!(v.z.abs() < 1e-15);
    }

    #[test]
    fn test_rotations_compose_in_call_order() {
        let mut chained = RotationMatrix3::identity();
        chained.rotate_z(0.3);
        chained.rotate_y(-0.7);

        let mut rz = RotationMatrix3::identity();
        rz.rotate_z(0.3);
        let mut ry = RotationMatrix3::identity();
        ry.rotate_y(-0.7);

        let product = ry * rz;
        for i in 0..3 {
            for j in 0..3 {
                assert!((chained.get(i, j) - product.get(i, j)).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_transpose_is_inverse() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.5);
        m.rotate_y(0.2);
        let p = m * m.transpose();
        assert!(p.is_rotation_matrix(1e-14));
        assert!((p.get(0, 0) - 1.0).abs() < 1e-15);
        assert!(p.get(0, 1).abs() < 1e-15);
    }

    #[test]
    fn test_identity_quaternion() {
        let m = RotationMatrix3::from_quaternion(1.0, 0.0, 0.0, 0.0);
        assert_eq!(m, RotationMatrix3::identity());
    }

    #[test]
    fn test_quaternion_quarter_turn_about_x() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let m = RotationMatrix3::from_quaternion(h, h, 0.0, 0.0);
        assert!(m.is_rotation_matrix(1e-12));
        // device -Z ends up pointing along reference +Y
        let v = m * Vector3::new(0.0, 0.0, -1.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
        assert!(v.z.abs() < 1e-12);
    }

    #[test]
    fn test_column() {
        let m = RotationMatrix3::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.column(2), Vector3::new(3.0, 6.0, 9.0));
    }
}
