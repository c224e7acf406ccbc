//! Run scans over sorted value slices. All detectors reduce to one of two
//! questions about a sorted slice: is there a run of equal values of a given
//! length, or a run of consecutive values of a given length.

/// True if some value repeats at least `len` times. `values` must be sorted.
pub fn has_equal_run(values: &[u8], len: usize) -> bool {
    count_equal_runs(values, len) > 0
}

/// Number of distinct values repeating at least `len` times. `values` must be
/// sorted.
pub fn count_equal_runs(values: &[u8], len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let mut groups = 0;
    let mut run = 0;
    let mut prev = None;
    for &v in values {
        run = if prev == Some(v) { run + 1 } else { 1 };
        if run == len {
            groups += 1;
        }
        prev = Some(v);
    }
    groups
}

/// Top value of the highest run of at least `len` consecutive values.
/// `values` must be sorted and deduplicated.
pub fn highest_consecutive_run_top(values: &[u8], len: usize) -> Option<u8> {
    if len == 0 {
        return None;
    }
    let mut best = None;
    let mut run = 0;
    let mut prev = None;
    for &v in values {
        run = match prev {
            Some(p) if v == p + 1 => run + 1,
            _ => 1,
        };
        if run >= len {
            best = Some(v);
        }
        prev = Some(v);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_runs() {
        assert!(has_equal_run(&[2, 2, 5, 9], 2));
        assert!(!has_equal_run(&[2, 5, 9], 2));
        assert!(has_equal_run(&[3, 3, 3, 3], 4));
        assert!(!has_equal_run(&[], 1));
        assert_eq!(count_equal_runs(&[2, 2, 5, 5, 5, 9], 2), 2);
        assert_eq!(count_equal_runs(&[2, 2, 5, 5, 5, 9], 3), 1);
        assert_eq!(count_equal_runs(&[2, 2, 5, 5], 0), 0);
    }

    #[test]
    fn consecutive_runs() {
        assert_eq!(highest_consecutive_run_top(&[5, 6, 7, 8, 9], 5), Some(9));
        assert_eq!(highest_consecutive_run_top(&[2, 5, 6, 7, 8, 9, 11], 5), Some(9));
        assert_eq!(highest_consecutive_run_top(&[5, 6, 7, 8], 5), None);
        // A gap restarts the run.
        assert_eq!(highest_consecutive_run_top(&[2, 3, 4, 6, 7, 8, 9, 10], 5), Some(10));
        assert_eq!(highest_consecutive_run_top(&[], 5), None);
    }
}
