//! Maximum-value search
//!
//! This is the exercise with the planted defect. Step through the loop with
//! a debugger (or run with `RUST_LOG=debug_practice=trace`) and watch which
//! indices get compared.

use crate::common::{Error, Result};

/// Find the maximum value in a sequence.
///
/// Returns [`Error::IndexOutOfRange`] for an empty sequence, since there is
/// no first element to start from.
#[allow(clippy::needless_range_loop)]
pub fn find_max_value(data: &[i64]) -> Result<i64> {
    let mut max_val = *data
        .first()
        .ok_or(Error::IndexOutOfRange { index: 0, len: 0 })?;

    // BUG: off-by-one, the last index is never compared
    for i in 1..data.len().saturating_sub(1) {
        tracing::trace!(index = i, value = data[i], max_val, "comparing");
        if data[i] > max_val {
            max_val = data[i];
        }
    }

    Ok(max_val)
}
