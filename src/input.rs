use unicode_segmentation::UnicodeSegmentation;

/// Splitting a piece of text into its first unit and the rest.
///
/// This is the only operation on the input that the primitive parsers need. Splitting never drops or duplicates
/// anything: the head followed by the tail is always exactly the original text.
pub trait Uncons {
    /// Split off the first Unicode scalar value, or return `None` if the text is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::input::Uncons;
    /// assert_eq!("héllo".uncons(), Some(('h', "éllo")));
    /// assert_eq!("".uncons(), None);
    /// ```
    fn uncons(&self) -> Option<(char, &str)>;

    /// Split off the first extended grapheme cluster, or return `None` if the text is empty.
    ///
    /// A grapheme cluster may be made up of several scalar values, such as a letter followed by combining accents.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::input::Uncons;
    /// assert_eq!("e\u{301}x".uncons_grapheme(), Some(("e\u{301}", "x")));
    /// assert_eq!("e\u{301}x".uncons(), Some(('e', "\u{301}x")));
    /// ```
    fn uncons_grapheme(&self) -> Option<(&str, &str)>;
}

impl Uncons for str {
    fn uncons(&self) -> Option<(char, &str)> {
        let c = self.chars().next()?;
        Some((c, &self[c.len_utf8()..]))
    }

    fn uncons_grapheme(&self) -> Option<(&str, &str)> {
        let head = self.graphemes(true).next()?;
        Some((head, &self[head.len()..]))
    }
}
