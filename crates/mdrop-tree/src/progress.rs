//! Progress reporting for long-running builds.

/// Returns `true` each time `current / total` crosses another 10% step.
///
/// `last_pct` keeps the last reported percentage between calls.
#[must_use]
pub const fn should_report_progress(current: usize, total: usize, last_pct: &mut usize) -> bool {
    if total == 0 {
        return false;
    }
    let pct = current.saturating_mul(100).saturating_div(total);
    if pct >= last_pct.saturating_add(10) {
        *last_pct = pct;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_reports_in_ten_percent_steps() {
        let mut last = 0;
        let reported: Vec<usize> = (1..=100)
            .filter(|current| should_report_progress(*current, 100, &mut last))
            .collect();
        assert_eq!(reported, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn progress_ignores_empty_total() {
        let mut last = 0;
        assert!(!should_report_progress(0, 0, &mut last));
    }
}
