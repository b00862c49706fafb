//! Helper macros shared by the configuration structs and data containers.

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}

/// Formats a float the way the text report expects: shortest round-trip
/// representation with at least one fractional digit (`0.0`, `0.25`).
/// Values below `1e-4` switch to scientific notation with a signed,
/// two-digit exponent (`5e-05`).
pub fn format_fraction(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        },
        None => repr,
    }
}

/// Formats a genomic distance: integral values without a fractional part,
/// infinity as `inf`.
pub fn format_distance(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(0.25, "0.25")]
    #[case(1.0, "1.0")]
    #[case(1.0 / 3.0, "0.3333333333333333")]
    #[case(0.0001, "0.0001")]
    #[case(0.00005, "5e-05")]
    #[case(1.0 / 12_000.0, "8.333333333333333e-05")]
    #[case(2.5e-123, "2.5e-123")]
    #[case(1e16, "1e+16")]
    fn test_format_fraction(
        #[case] value: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(format_fraction(value), expected);
    }

    #[rstest]
    #[case(50.0, "50")]
    #[case(-120.0, "-120")]
    #[case(f64::INFINITY, "inf")]
    fn test_format_distance(
        #[case] value: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(format_distance(value), expected);
    }
}
