use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// Half-lives and tiny branching ratios on the chart are written this way,
    /// e.g. `1.40e+10`.
    ///
    /// ```rust
    /// # use nuchart_utils::ValueExt;
    /// assert_eq!(1.4e10_f64.sci(2, 2), "1.40e+10".to_string());
    /// assert_eq!(0.000012_f64.sci(2, 2), "1.20e-05".to_string());
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // `LowerExp` output always contains an 'e'
        let exp = match num.find('e') {
            Some(idx) => num.split_off(idx),
            None => return num,
        };
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}
