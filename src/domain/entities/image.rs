//! Background image entities.

use url::Url;

/// A background photo and the attribution shown with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    /// Small-size rendition URL.
    pub url: String,
    /// Dominant color as a CSS hex value (e.g. `#0c2626`).
    pub color: String,
    pub author_name: String,
    pub author_profile_url: String,
}

impl ImageResult {
    /// Photo URL in a form that can be written verbatim into a quoted CSS
    /// `url("...")` inside a `<style>` element.
    ///
    /// The URL is re-serialized by [`Url`], which percent-encodes `"`, `<`
    /// and `>`; backslashes and quotes that survive serialization are
    /// encoded here. Anything that is not an absolute `http`/`https` URL
    /// yields an empty string, leaving only the background color.
    pub fn css_url(&self) -> String {
        match Url::parse(&self.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url
                .as_str()
                .replace('\\', "%5C")
                .replace('\'', "%27")
                .replace('"', "%22"),
            _ => String::new(),
        }
    }
}

/// Returns true if `value` is a CSS hex color (`#rgb` up to `#rrggbbaa`).
pub fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        (3..=8).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// One fetched page of image search results.
///
/// `total` and `total_pages` describe the whole result set on the server,
/// while `results` holds only the images of the page that was fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<ImageResult>,
}

impl SearchPage {
    /// Returns true if the search matched nothing usable.
    pub fn is_empty(&self) -> bool {
        self.total == 0 || self.results.is_empty()
    }
}
