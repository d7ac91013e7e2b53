//! URL-to-string coercion.

use std::borrow::Cow;

/// A value that has a canonical URL string form.
///
/// Vocabulary constructors taking links (`loc`, `link`, `href`) accept any
/// `UrlRepresentable`, so callers can pass string slices, owned strings or
/// their own URL types.
pub trait UrlRepresentable {
    /// Canonical string form of the URL.
    fn url_string(&self) -> String;
}

impl UrlRepresentable for str {
    fn url_string(&self) -> String {
        self.to_owned()
    }
}

impl UrlRepresentable for String {
    fn url_string(&self) -> String {
        self.clone()
    }
}

impl UrlRepresentable for Cow<'_, str> {
    fn url_string(&self) -> String {
        self.as_ref().to_owned()
    }
}

impl<T: UrlRepresentable + ?Sized> UrlRepresentable for &T {
    fn url_string(&self) -> String {
        (**self).url_string()
    }
}
