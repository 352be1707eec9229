// crates/bibleviz-core/src/traits.rs

/// Name-based matching helpers for anything the search box can suggest.
///
/// Implementors provide a `&str` view of their display name via
/// [`Searchable::name_str`] and optionally a popularity signal via
/// [`Searchable::verse_count`]; the ranking in [`crate::search`] is written
/// purely against this trait.
///
/// # Examples
/// ```rust
/// use bibleviz_core::traits::Searchable;
///
/// struct Person(&'static str);
/// impl Searchable for Person {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Person("Boaz").is_named("BOAZ"));
/// assert!(Person("Zerubbabel").name_contains("BaB"));
/// assert_eq!(Person("Zerubbabel").match_index("bab"), Some(5));
/// ```
pub trait Searchable {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Ranking signal; higher sorts first among equally good matches.
    fn verse_count(&self) -> u32 {
        0
    }

    /// Case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str().to_lowercase() == q.to_lowercase()
    }

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_str().to_lowercase().contains(&q.to_lowercase())
    }

    /// Character offset of the first case-insensitive occurrence of `q`.
    fn match_index(&self, q: &str) -> Option<usize> {
        let name = self.name_str().to_lowercase();
        let byte = name.find(&q.to_lowercase())?;
        Some(name[..byte].chars().count())
    }
}
