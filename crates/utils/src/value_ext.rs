use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use natools_utils::ValueExt;
    /// let pt = 172.76;
    /// assert_eq!(pt.sci(5, 2), "1.72760e+02".to_string());
    /// assert_eq!((-0.005).sci(3, 2), "-5.000e-03".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let num = f!("{:.precision$e}", &self, precision = precision);
        // The LowerExp representation always contains an 'e'
        let Some((mantissa, exponent)) = num.split_once('e') else {
            return num;
        };
        // Make sure the exponent is signed and zero-padded
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
