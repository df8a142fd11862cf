// Coherent noise kernels used by the `snoise2`, `fbm` and `turbulence` nodes.
//
// The permutation table is fixed at compile time so a saved picture renders the same on every
// run and every machine.

// 2D gradients: cardinal + diagonal, unnormalized.
const GRAD2: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

const PERM_SEED: u32 = 0x5eed_a97;

/// 512-entry permutation table: a Fisher-Yates shuffle of `0..=255` driven by Mulberry32,
/// repeated twice so lookups never wrap.
const fn build_perm_table(seed: u32) -> [u8; 512] {
    let mut perm = [0u8; 512];
    let mut i = 0;
    while i < 256 {
        perm[i] = i as u8;
        i += 1;
    }

    let mut state = seed;
    let mut i = 255usize;
    while i > 0 {
        state = state.wrapping_add(0x6d2b_79f5);
        let mut t = (state ^ (state >> 15)).wrapping_mul(1 | state);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        let r = t ^ (t >> 14);
        // Uniform in 0..=i without floats.
        let j = ((r as u64 * (i as u64 + 1)) >> 32) as usize;
        let tmp = perm[i];
        perm[i] = perm[j];
        perm[j] = tmp;
        i -= 1;
    }

    let mut i = 0;
    while i < 256 {
        perm[i + 256] = perm[i];
        i += 1;
    }
    perm
}

static PERM: [u8; 512] = build_perm_table(PERM_SEED);

// F2 = (sqrt(3) - 1) / 2, G2 = (3 - sqrt(3)) / 6
const F2: f64 = 0.366_025_403_784_438_6;
const G2: f64 = 0.211_324_865_405_187_1;

/// 2D simplex noise, approximately in [-1, 1]. NaN if either coordinate is not finite.
pub fn simplex_2d(x: f64, y: f64) -> f64 {
    if !(x.is_finite() && y.is_finite()) {
        return f64::NAN;
    }
    let perm = &PERM;

    // Cell corner stays in f64 so huge coordinates cannot overflow.
    let s = (x + y) * F2;
    let i = (x + s).floor();
    let j = (y + s).floor();

    let t = (i + j) * G2;
    let x0 = x - (i - t);
    let y0 = y - (j - t);

    let (i1, j1) = if x0 > y0 { (1usize, 0usize) } else { (0usize, 1usize) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    // Cell index modulo 256. A NaN remainder (skew overflowed to inf) casts to 0.
    let ii = i.rem_euclid(256.0) as usize & 255;
    let jj = j.rem_euclid(256.0) as usize & 255;
    let gi0 = (perm[ii + perm[jj] as usize] % 8) as usize;
    let gi1 = (perm[ii + i1 + perm[jj + j1] as usize] % 8) as usize;
    let gi2 = (perm[ii + 1 + perm[jj + 1] as usize] % 8) as usize;

    let corner = |g: usize, dx: f64, dy: f64| {
        let t = 0.5 - dx * dx - dy * dy;
        if t < 0.0 {
            0.0
        } else {
            let t2 = t * t;
            t2 * t2 * (GRAD2[g][0] * dx + GRAD2[g][1] * dy)
        }
    };

    70.0 * (corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2))
}

/// Octave parameters shared by [`fbm_2d`] and [`turbulence_2d`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Octaves {
    pub lacunarity: f64,
    pub gain: f64,
    pub count: u32,
}

/// Parameters of the `fbm` and `turbulence` nodes.
pub const NODE_OCTAVES: Octaves = Octaves {
    lacunarity: 2.0,
    gain: 0.5,
    count: 3,
};

/// Fractal brownian motion: `sum(simplex(x*f, y*f) * a)` with `f *= lacunarity`, `a *= gain`.
pub fn fbm_2d(x: f64, y: f64, frequency: f64, octaves: Octaves) -> f64 {
    octave_sum(x, y, frequency, octaves, |n| n)
}

/// Like [`fbm_2d`] but sums the absolute value of each octave.
pub fn turbulence_2d(x: f64, y: f64, frequency: f64, octaves: Octaves) -> f64 {
    octave_sum(x, y, frequency, octaves, f64::abs)
}

fn octave_sum(x: f64, y: f64, mut frequency: f64, octaves: Octaves, shape: impl Fn(f64) -> f64) -> f64 {
    let mut sum = 0.0;
    let mut amplitude = 1.0;
    for _ in 0..octaves.count {
        sum += shape(simplex_2d(x * frequency, y * frequency)) * amplitude;
        frequency *= octaves.lacunarity;
        amplitude *= octaves.gain;
    }
    sum
}
