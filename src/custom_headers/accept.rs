use axum::http::{HeaderName, HeaderValue};
use headers::Header;
use mime::Mime;

/// Media ranges from an `Accept` header, in the order the client listed them.
///
/// Quality parameters are not weighed; the first listed range that matches
/// an offered type wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Accept(pub(crate) Vec<Mime>);

impl Accept {
    pub fn negotiate<'a>(&self, offered: &'a [Mime]) -> Option<&'a Mime> {
        self.0
            .iter()
            .find_map(|range| offered.iter().find(|mime| matches_range(range, mime)))
    }
}

fn matches_range(range: &Mime, mime: &Mime) -> bool {
    (range.type_() == mime::STAR || range.type_() == mime.type_())
        && (range.subtype() == mime::STAR || range.subtype() == mime.subtype())
}

impl Header for Accept {
    fn name() -> &'static HeaderName {
        &axum::http::header::ACCEPT
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        let mut ranges = Vec::new();
        for value in values {
            let value = value.to_str().map_err(|_| headers::Error::invalid())?;
            for range in value.split(',').map(str::trim).filter(|r| !r.is_empty()) {
                ranges.push(range.parse().map_err(|_| headers::Error::invalid())?);
            }
        }
        if ranges.is_empty() {
            return Err(headers::Error::invalid());
        }
        Ok(Accept(ranges))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if let Ok(value) = HeaderValue::from_str(&joined) {
            values.extend(std::iter::once(value));
        }
    }
}
