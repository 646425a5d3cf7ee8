pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check whether an element fits in the remaining
/// vertical space of a page.
///
/// * `cursor_y`: The current Y position relative to the top of the content box.
/// * `needed_height`: Spacing plus measured height required for the element.
/// * `budget`: The full vertical budget of one page.
pub fn check_element_fit(cursor_y: f32, needed_height: f32, budget: f32) -> BreakAnalysis {
    let available = (budget - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: needed_height > available + EPSILON,
        remaining_height: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_does_not_break() {
        let analysis = check_element_fit(100.0, 20.0, 120.0);
        assert!(!analysis.should_break);
        assert_eq!(analysis.remaining_height, 20.0);
    }

    #[test]
    fn overflow_breaks() {
        assert!(check_element_fit(100.0, 20.1, 120.0).should_break);
    }

    #[test]
    fn float_noise_is_tolerated() {
        assert!(!check_element_fit(100.000004, 20.0, 120.0).should_break);
    }

    #[test]
    fn exhausted_page_reports_zero_remaining() {
        let analysis = check_element_fit(130.0, 12.0, 120.0);
        assert!(analysis.should_break);
        assert_eq!(analysis.remaining_height, 0.0);
    }
}
