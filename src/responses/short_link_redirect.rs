use axum::{
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

/// `302 Found` pointing at the mapped URL, with an empty body.
pub struct ShortLinkRedirect {
    location: String,
}

impl ShortLinkRedirect {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl IntoResponse for ShortLinkRedirect {
    fn into_response(self) -> Response {
        match HeaderValue::from_str(&self.location) {
            Ok(location) => (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
            Err(e) => {
                log::error!(
                    "Redirect target `{}` can't be sent as a Location header: {e}",
                    self.location.escape_debug()
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
