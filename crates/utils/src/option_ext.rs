use crate::f;

/// Extends Option for display formatting of sparse NuDat fields
pub trait OptionExt {
    /// Either the value contained within `Some()` or "none"
    ///
    /// Generic over anything that implements `Display`.
    ///
    /// ```rust
    /// # use nuchart_utils::OptionExt;
    /// let spin: Option<&str> = Some("0+");
    /// assert_eq!(spin.display(), "0+");
    ///
    /// let spin: Option<&str> = None;
    /// assert_eq!(spin.display(), "none");
    /// ```
    fn display(&self) -> String;

    /// Either the value contained within `Some()` or an empty string
    ///
    /// Chart cells and compact table entries are blank rather than "none".
    ///
    /// ```rust
    /// # use nuchart_utils::OptionExt;
    /// assert_eq!(Some(12.5_f64).display_or_blank(), "12.5");
    /// assert_eq!(None::<f64>.display_or_blank(), "");
    /// ```
    fn display_or_blank(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }

    fn display_or_blank(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => String::new(),
        }
    }
}
