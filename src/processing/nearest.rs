/// Index of the sample in `time` closest to `target`, in O(log n).
///
/// `time` must be non-empty and ascending; an unsorted array gives an
/// arbitrary (but in-range) index. The right-hand neighbour is taken only when
/// it is strictly closer, so an exact halfway query snaps to the earlier sample.
///
/// # Panics
/// If `time` is empty.
pub fn nearest_sample(time: &[f64], target: f64) -> usize {
    assert!(!time.is_empty(), "nearest_sample on an empty time array");

    let mut left: isize = 0;
    let mut right: isize = time.len() as isize - 1;

    while left <= right {
        let mid = ((left + right) as usize) >> 1;
        let value = time[mid];
        if value == target {
            return mid;
        }
        if value < target {
            left = mid as isize + 1;
        } else {
            right = mid as isize - 1;
        }
    }

    let n = time.len() as isize;
    if left >= n {
        return time.len() - 1;
    }
    if left <= 0 {
        return 0;
    }

    let left = left as usize;
    if (time[left] - target).abs() < (time[left - 1] - target).abs() {
        left
    } else {
        left - 1
    }
}
