/// Extends string types with symbol normalisation
pub trait StringExt {
    /// First letter uppercase, everything after it lowercase
    ///
    /// This is the element symbol convention used by the NuDat keys.
    ///
    /// ```rust
    /// # use nuchart_utils::StringExt;
    /// assert_eq!("TH".title_case(), "Th");
    /// assert_eq!("th".title_case(), "Th");
    /// assert_eq!("u".title_case(), "U");
    /// ```
    fn title_case(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn title_case(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
            None => String::new(),
        }
    }
}
