/// One Schmidt semi-normalized Gauss coefficient pair with its secular variation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussCoefficient {
    pub n: usize,
    pub m: usize,
    /// nT
    pub g: f64,
    /// nT
    pub h: f64,
    /// nT/year
    pub g_dot: f64,
    /// nT/year
    pub h_dot: f64,
}

const fn c(n: usize, m: usize, g: f64, h: f64, g_dot: f64, h_dot: f64) -> GaussCoefficient {
    GaussCoefficient {
        n,
        m,
        g,
        h,
        g_dot,
        h_dot,
    }
}

pub const WMM2020_EPOCH: f64 = 2020.0;

/// World Magnetic Model 2020 main field and secular variation, degree ≤ 6.
///
/// The higher degrees contribute well under 0.1° of declination at the
/// surface.
pub const WMM2020_COEFFICIENTS: [GaussCoefficient; 27] = [
    c(1, 0, -29404.5, 0.0, 6.7, 0.0),
    c(1, 1, -1450.7, 4652.9, 7.7, -25.1),
    c(2, 0, -2500.0, 0.0, -11.5, 0.0),
    c(2, 1, 2982.0, -2991.6, -7.1, -30.2),
    c(2, 2, 1676.8, -734.8, -2.2, -23.9),
    c(3, 0, 1363.9, 0.0, 2.8, 0.0),
    c(3, 1, -2381.0, -82.2, -6.2, 5.7),
    c(3, 2, 1236.2, 241.8, 3.4, -1.0),
    c(3, 3, 525.7, -542.9, -12.2, 1.1),
    c(4, 0, 903.1, 0.0, -1.1, 0.0),
    c(4, 1, 809.4, 282.0, -1.6, 0.2),
    c(4, 2, 86.2, -158.4, -6.0, 6.9),
    c(4, 3, -309.4, 199.8, 5.4, 3.7),
    c(4, 4, 47.9, -350.1, -5.5, -5.6),
    c(5, 0, -234.4, 0.0, -0.3, 0.0),
    c(5, 1, 363.1, 47.7, 0.6, 0.1),
    c(5, 2, 187.8, 208.4, -0.7, 2.5),
    c(5, 3, -140.7, -121.3, 0.1, -0.9),
    c(5, 4, -151.2, 32.2, 1.2, 3.0),
    c(5, 5, 13.7, 99.1, 1.0, 0.5),
    c(6, 0, 65.9, 0.0, -0.6, 0.0),
    c(6, 1, 65.6, -19.1, -0.4, 0.1),
    c(6, 2, 73.0, 25.0, 0.5, -1.8),
    c(6, 3, -121.5, 52.7, 1.4, -1.4),
    c(6, 4, -36.2, -64.4, -1.4, 0.9),
    c(6, 5, 13.5, 9.0, 0.0, 0.1),
    c(6, 6, -64.7, 68.1, 0.8, 1.0),
];
