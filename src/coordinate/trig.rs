//! Portable trigonometry
//!
//! Cephes-derived sine, cosine, arcsine and arccosine. The platform libm is
//! free to round differently in the last few bits, which would make bounding
//! box corners differ between machines. These routines evaluate the same
//! sequence of IEEE operations everywhere, so results are bit-identical.

use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, FRAC_PI_4, PI};

// Pi/4 split into three parts for extended precision reduction
const PI4A: f64 = 7.85398125648498535156e-1;
const PI4B: f64 = 3.77489470793079817668e-8;
const PI4C: f64 = 2.69515142907905952645e-15;

const FOUR_OVER_PI: f64 = 2.0 * FRAC_2_PI;

// Above this the three-part reduction loses too many bits
const REDUCE_THRESHOLD: f64 = (1u64 << 29) as f64;

const SIN_COEFFS: [f64; 6] = [
    1.58962301576546568060e-10,
    -2.50507477628578072866e-8,
    2.75573136213857245213e-6,
    -1.98412698295895385996e-4,
    8.33333333332211858878e-3,
    -1.66666666666666307295e-1,
];

const COS_COEFFS: [f64; 6] = [
    -1.13585365213876817300e-11,
    2.08757008419747316778e-9,
    -2.75573141792967388112e-7,
    2.48015872888517045348e-5,
    -1.38888888888730564116e-3,
    4.16666666666665929218e-2,
];

/// Reduce a non-negative angle to an octant and a remainder in [-Pi/4, Pi/4]
fn reduce(x: f64) -> (u64, f64) {
    let mut j = (x * FOUR_OVER_PI) as u64;
    let mut y = j as f64;

    // map zeros to origin
    if j & 1 == 1 {
        j += 1;
        y += 1.0;
    }
    j &= 7;

    let z = ((x - y * PI4A) - y * PI4B) - y * PI4C;
    (j, z)
}

fn sin_poly(z: f64, zz: f64) -> f64 {
    let c = &SIN_COEFFS;
    z + z * zz * (((((c[0] * zz + c[1]) * zz + c[2]) * zz + c[3]) * zz + c[4]) * zz + c[5])
}

fn cos_poly(zz: f64) -> f64 {
    let c = &COS_COEFFS;
    1.0 - 0.5 * zz + zz * zz * (((((c[0] * zz + c[1]) * zz + c[2]) * zz + c[3]) * zz + c[4]) * zz + c[5])
}

/// Sine of `x` radians
pub fn sin(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return f64::NAN;
    }
    if x.abs() >= REDUCE_THRESHOLD {
        return x.sin();
    }

    let mut sign = x < 0.0;
    let (mut j, z) = reduce(x.abs());

    // reflect in x axis
    if j > 3 {
        sign = !sign;
        j -= 4;
    }

    let zz = z * z;
    let y = if j == 1 || j == 2 { cos_poly(zz) } else { sin_poly(z, zz) };

    if sign { -y } else { y }
}

/// Cosine of `x` radians
pub fn cos(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let x = x.abs();
    if x >= REDUCE_THRESHOLD {
        return x.cos();
    }

    let mut sign = false;
    let (mut j, z) = reduce(x);

    if j > 3 {
        j -= 4;
        sign = !sign;
    }
    if j > 1 {
        sign = !sign;
    }

    let zz = z * z;
    let y = if j == 1 || j == 2 { sin_poly(z, zz) } else { cos_poly(zz) };

    if sign { -y } else { y }
}

/// Arctangent on [0, 0.66] as a rational approximation
fn xatan(x: f64) -> f64 {
    const P0: f64 = -8.750608600031904122785e-01;
    const P1: f64 = -1.615753718733365076637e+01;
    const P2: f64 = -7.500855792314704667340e+01;
    const P3: f64 = -1.228866684490136173410e+02;
    const P4: f64 = -6.485021904942025371773e+01;
    const Q0: f64 = 2.485846490142306297962e+01;
    const Q1: f64 = 1.650270098316988542046e+02;
    const Q2: f64 = 4.328810604912902668951e+02;
    const Q3: f64 = 4.853903996359136964868e+02;
    const Q4: f64 = 1.945506571482613964425e+02;

    let z = x * x;
    let z = z * ((((P0 * z + P1) * z + P2) * z + P3) * z + P4)
        / (((((z + Q0) * z + Q1) * z + Q2) * z + Q3) * z + Q4);
    x * z + x
}

/// Arctangent of a non-negative argument
fn satan(x: f64) -> f64 {
    // Pi/2 = FRAC_PI_2 + MOREBITS
    const MOREBITS: f64 = 6.123233995736765886130e-17;
    const TAN_3PI_8: f64 = 2.41421356237309504880;

    if x <= 0.66 {
        return xatan(x);
    }
    if x > TAN_3PI_8 {
        return FRAC_PI_2 - xatan(1.0 / x) + MOREBITS;
    }
    FRAC_PI_4 + xatan((x - 1.0) / (x + 1.0)) + 0.5 * MOREBITS
}

/// Arcsine of `x`, in radians. NaN outside [-1, 1].
pub fn asin(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    let sign = x < 0.0;
    let x = x.abs();
    if x > 1.0 {
        return f64::NAN;
    }

    let temp = (1.0 - x * x).sqrt();
    let temp = if x > 0.7 {
        FRAC_PI_2 - satan(temp / x)
    } else {
        satan(x / temp)
    };

    if sign { -temp } else { temp }
}

/// Arccosine of `x`, in radians. NaN outside [-1, 1].
pub fn acos(x: f64) -> f64 {
    FRAC_PI_2 - asin(x)
}

/// Degrees to radians as `deg * Pi / 180`
pub fn to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Radians to degrees as `rad * 180 / Pi`
pub fn to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}
