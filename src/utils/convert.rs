/// Converts between numeric types without needing to use an `as` cast
///
/// Falls back to `$default` when the value does not fit the target type.
#[macro_export]
macro_rules! conv_num {
    ($numtype:ty, $input:expr, $default:expr) => {{
        // Ensure that the default value is of the desired type.
        let default_val: $numtype = $default;
        // Capture the input value.
        let input_val = $input;
        {
            // Dummy function to force that the types implement `num_traits::Num`
            fn _assert_numeric<T: ::num_traits::Num>(_: T) {}
            _assert_numeric(default_val);
            _assert_numeric(input_val);
        }
        // Attempt the conversion. If it fails, return the default value.
        <$numtype>::try_from(input_val).unwrap_or(default_val)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fitting_values_convert() {
        assert_eq!(conv_num!(u64, 42usize, 0), 42);
        assert_eq!(conv_num!(i32, 7usize, -1), 7);
    }

    #[test]
    fn overflowing_values_fall_back() {
        assert_eq!(conv_num!(i32, usize::MAX, i32::MAX), i32::MAX);
        assert_eq!(conv_num!(u32, -1i64, 0), 0);
    }
}
