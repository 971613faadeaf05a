//! Value Noise
//!
//! One 3-D value-noise primitive shared by the cloud and star stages of the
//! shader. Lattice corners are hashed through a permutation table to a value
//! in [0, 1]; the eight corner values are blended with quintic-fade
//! trilinear interpolation, so the field is smooth and deterministic.
//! Call sites pick their own sampling scale and offset.

use glam::Vec3;

// Ken Perlin's original permutation table. Nested lookups wrap through
// `perm`, which masks its index to the table length.
const P: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

fn perm(i: usize) -> usize {
    P[i & 255] as usize
}

/// Hashed lattice value at an integer corner, in [0, 1].
fn corner_value(xi: i32, yi: i32, zi: i32) -> f32 {
    let x = xi.rem_euclid(256) as usize;
    let y = yi.rem_euclid(256) as usize;
    let z = zi.rem_euclid(256) as usize;
    perm(perm(perm(x) + y) + z) as f32 / 255.0
}

/// Quintic fade curve, 6t^5 - 15t^4 + 10t^3.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// 3-D value noise at `p`, in [0, 1].
pub fn value_noise3(p: Vec3) -> f32 {
    let base = p.floor();
    let xi = base.x as i32;
    let yi = base.y as i32;
    let zi = base.z as i32;

    let f = p - base;
    let u = fade(f.x);
    let v = fade(f.y);
    let w = fade(f.z);

    let c000 = corner_value(xi, yi, zi);
    let c100 = corner_value(xi + 1, yi, zi);
    let c010 = corner_value(xi, yi + 1, zi);
    let c110 = corner_value(xi + 1, yi + 1, zi);
    let c001 = corner_value(xi, yi, zi + 1);
    let c101 = corner_value(xi + 1, yi, zi + 1);
    let c011 = corner_value(xi, yi + 1, zi + 1);
    let c111 = corner_value(xi + 1, yi + 1, zi + 1);

    let x00 = lerp(c000, c100, u);
    let x10 = lerp(c010, c110, u);
    let x01 = lerp(c001, c101, u);
    let x11 = lerp(c011, c111, u);

    let y0 = lerp(x00, x10, v);
    let y1 = lerp(x01, x11, v);

    lerp(y0, y1, w)
}
