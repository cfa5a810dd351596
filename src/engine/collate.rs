//! Locale-aware title ordering.
//!
//! Titles are compared with the CLDR root collation at tertiary strength:
//! base letters first, then accents, then case with lowercase ahead of
//! uppercase. Portuguese carries no tailoring over root, so the same
//! collator serves both display locales.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;

thread_local! {
    static ROOT: Option<CollatorBorrowed<'static>> =
        Collator::try_new(Default::default(), CollatorOptions::default()).ok();
}

/// Compares two titles the way a reader would expect a list to be ordered.
///
/// `"a" < "B"`, `"a" < "A"`, `"e" < "é" < "f"`. Canonically equivalent
/// titles compare `Equal`, so a stable sort keeps their input order.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    ROOT.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
