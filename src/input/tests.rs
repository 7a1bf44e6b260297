#[cfg(test)]
mod tests {
    use super::super::normalizer::{clamp, parse_number, sanitize};
    use crate::unit::Unit;

    #[test]
    fn test_sanitize_accepts_plain_numbers() {
        assert_eq!(sanitize("123", "0"), "123");
        assert_eq!(sanitize("12.5", "0"), "12.5");
        assert_eq!(sanitize("  42  ", "0"), "42");
    }

    #[test]
    fn test_sanitize_comma_and_zero_padding() {
        assert_eq!(sanitize("12,3", "0"), "12.3");
        assert_eq!(sanitize("012.3", "0"), "12.3");
        assert_eq!(sanitize("0,5", "0"), "0.5");
    }

    #[test]
    fn test_sanitize_strips_trailing_letters() {
        assert_eq!(sanitize("123a", "0"), "123");
        assert_eq!(sanitize("12a3", "0"), "12");
        assert_eq!(sanitize("50px", "7"), "50");
    }

    #[test]
    fn test_sanitize_rejects_to_last_valid() {
        assert_eq!(sanitize("a123", "0"), "0");
        assert_eq!(sanitize("12.4.5", "0"), "0");
        assert_eq!(sanitize("1,2,3", "9"), "9");
        assert_eq!(sanitize("", "42"), "42");
        assert_eq!(sanitize("   ", "42"), "42");
        assert_eq!(sanitize("-", "42"), "42");
        assert_eq!(sanitize(".", "42"), "42");
        assert_eq!(sanitize("+5", "42"), "42");
        assert_eq!(sanitize("1 000", "42"), "42");
    }

    #[test]
    fn test_sanitize_dot_repairs() {
        assert_eq!(sanitize(".5", "0"), "0.5");
        assert_eq!(sanitize("12.", "0"), "12");
        assert_eq!(sanitize("-.5", "0"), "-0.5");
        assert_eq!(sanitize(".5abc", "0"), "0.5");
    }

    #[test]
    fn test_sanitize_keeps_sign_for_clamp() {
        assert_eq!(sanitize("-5", "0"), "-5");
        assert_eq!(sanitize("-007", "0"), "-7");
    }

    #[test]
    fn test_clamp_percent_rolls_back_above_100() {
        assert_eq!(clamp("150", Unit::Percent, "50"), "50");
        assert_eq!(clamp("101", Unit::Percent, "0"), "0");
        assert_eq!(clamp("100", Unit::Percent, "50"), "100");
        assert_eq!(clamp("100.5", Unit::Percent, "3"), "3");
    }

    #[test]
    fn test_clamp_pixel_is_unbounded() {
        assert_eq!(clamp("150", Unit::Pixel, "50"), "150");
        assert_eq!(clamp("123456", Unit::Pixel, "0"), "123456");
    }

    #[test]
    fn test_clamp_negative_becomes_zero() {
        assert_eq!(clamp("-5", Unit::Percent, "50"), "0");
        assert_eq!(clamp("-500", Unit::Pixel, "50"), "0");
        assert_eq!(clamp("-0", Unit::Pixel, "50"), "0");
    }

    #[test]
    fn test_clamp_canonicalizes() {
        assert_eq!(clamp("012.3", Unit::Percent, "0"), "12.3");
        assert_eq!(clamp("12.50", Unit::Percent, "0"), "12.5");
        assert_eq!(clamp("7.0", Unit::Pixel, "0"), "7");
    }

    #[test]
    fn test_clamp_unparsable_reverts() {
        assert_eq!(clamp("-", Unit::Percent, "12"), "12");
        assert_eq!(clamp("abc", Unit::Pixel, "12"), "12");
        assert_eq!(clamp("", Unit::Pixel, "12"), "12");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number(".25"), Some(0.25));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1e999"), None);
        assert_eq!(parse_number("-0"), Some(0.0));
    }

    #[test]
    fn test_commit_pipeline_bounds() {
        let inputs = ["", "0", "50", "100", "150", "-5", "abc", "99.9x", "1,5", "..", "1e5"];
        for input in inputs {
            let percent = clamp(&sanitize(input, "10"), Unit::Percent, "10");
            let value = parse_number(&percent).unwrap();
            assert!((0.0..=100.0).contains(&value), "{} -> {}", input, percent);

            let pixel = clamp(&sanitize(input, "10"), Unit::Pixel, "10");
            assert!(parse_number(&pixel).unwrap() >= 0.0, "{} -> {}", input, pixel);
        }
    }

    #[test]
    fn test_commit_pipeline_is_idempotent() {
        for input in ["12,3", "012.3", "123a", "150", "-5"] {
            let first = clamp(&sanitize(input, "0"), Unit::Percent, "0");
            let second = clamp(&sanitize(&first, &first), Unit::Percent, &first);
            assert_eq!(first, second);
        }
    }
}
