use std::error::Error;
use std::fmt;

use log::{debug, trace};

use crate::circle::{CircularList, ListIndex};
use crate::Int;

/// Largest input the mixer accepts.
pub const MAX_NODES: usize = 5000;

/// Multiplier applied to every value before mixing in part 2.
pub const DECRYPTION_KEY: Int = 811589153;

/// Distances past the zero value whose values make up the grove coordinates.
pub const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixError {
    Empty,
    TooManyNodes { len: usize, max: usize },
    NoZero,
    Overflow { val: Int, key: Int },
    SumOverflow { coords: [Int; 3] },
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixError::Empty => write!(f, "no values to mix"),
            MixError::TooManyNodes { len, max } => {
                write!(f, "{} values exceeds the maximum of {}", len, max)
            },
            MixError::NoZero => write!(f, "values should contain zero"),
            MixError::Overflow { val, key } => {
                write!(f, "{} * {} overflows", val, key)
            },
            MixError::SumOverflow { coords } => {
                write!(f, "sum of grove coordinates {:?} overflows", coords)
            },
        }
    }
}

impl Error for MixError {}

/// Mixes `items` `iterations` times and sums the grove coordinates.
///
/// The first zero in `items` is the anchor the coordinates are counted from.
pub fn mix(items: &[Int], iterations: usize) -> Result<Int, MixError> {
    if items.is_empty() {
        return Err(MixError::Empty);
    }
    if items.len() > MAX_NODES {
        return Err(MixError::TooManyNodes { len: items.len(), max: MAX_NODES });
    }

    let mut cl: CircularList = items.into();
    let zero_idx = cl.find(0).ok_or(MixError::NoZero)?;

    for pass in 0..iterations {
        mix_pass(&mut cl);
        debug!("after pass {}: {:?}", pass + 1, cl.values_from(zero_idx));
    }

    let coords = grove_coordinates(&cl, zero_idx);
    coords
        .iter()
        .try_fold(0 as Int, |sum, &v| sum.checked_add(v))
        .ok_or(MixError::SumOverflow { coords })
}

/// Multiplies every value by [`DECRYPTION_KEY`].
pub fn apply_decryption_key(items: &mut [Int]) -> Result<(), MixError> {
    for v in items.iter_mut() {
        *v = v
            .checked_mul(DECRYPTION_KEY)
            .ok_or(MixError::Overflow { val: *v, key: DECRYPTION_KEY })?;
    }
    Ok(())
}

/// Moves every node once, in insertion order.
pub fn mix_pass(cl: &mut CircularList) {
    // A moving node is unlinked first, so it rotates among the other n-1.
    let modulus = cl.len() as Int - 1;
    if modulus <= 0 {
        return;
    }
    for idx in 0..cl.len() {
        mix_one(cl, ListIndex(idx), modulus);
    }
}

fn mix_one(cl: &mut CircularList, idx: ListIndex, modulus: Int) {
    let val = cl.get(idx).val;
    // Truncating remainder: the sign of `steps` follows `val`.
    let steps = val % modulus;
    if steps == 0 {
        return;
    }
    cl.unlink(idx);
    let dest = cl.walk(cl.get(idx).prev(), steps);
    cl.link_after(dest, idx);
    trace!("moved {} by {} to after {}", val, steps, cl.get(dest).val);
}

fn grove_coordinates(cl: &CircularList, zero_idx: ListIndex) -> [Int; 3] {
    let mut cur = zero_idx;
    let mut prev_offset = 0;
    GROVE_OFFSETS.map(|offset| {
        let hops = (offset - prev_offset) % cl.len();
        prev_offset = offset;
        cur = cl.walk(cur, hops as Int);
        cl.get(cur).val
    })
}
