use crate::error::{Result, SplitError};

/// Split `items` into exactly `parts` contiguous slices.
///
/// Every slice holds `ceil(len / parts)` items until the input runs out, so the
/// trailing slices may be short or empty. Concatenating the slices in order gives
/// back `items` unchanged.
///
/// # Errors
///
/// Returns [`SplitError::InvalidPartCount`] when `parts` is zero.
///
/// # Examples
///
/// ```
/// use chat_export_splitter::splitter::partition;
///
/// let items: Vec<u32> = (0..5).collect();
/// let slices = partition(&items, 3)?;
/// assert_eq!(slices, vec![&[0, 1][..], &[2, 3][..], &[4][..]]);
/// # Ok::<(), chat_export_splitter::SplitError>(())
/// ```
pub fn partition<T>(items: &[T], parts: usize) -> Result<Vec<&[T]>> {
    if parts == 0 {
        return Err(SplitError::InvalidPartCount(parts));
    }

    let total = items.len();
    let size = total.div_ceil(parts);

    let mut slices: Vec<&[T]> = (0..parts)
        .map(|i| {
            let start = (i * size).min(total);
            let end = ((i + 1) * size).min(total);
            &items[start..end]
        })
        .collect();

    // size == 0 only when total == 0, which already yields empty slices
    while slices.len() < parts {
        slices.push(&[]);
    }

    Ok(slices)
}
