use crate::errors::ErrorResponse;
use askama::{Error, Template};
use tracing::{error, info};

#[derive(Template, Debug)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub message: &'a str,
}

impl<'a> From<&'a ErrorResponse> for ErrorTemplate<'a> {
    fn from(data: &'a ErrorResponse) -> Self {
        ErrorTemplate {
            status: data.status,
            message: data.message.as_str(),
        }
    }
}

pub fn render_error_page(data: &ErrorResponse) -> Result<String, Error> {
    info!("🧾 Rendering error page for status {}", data.status);

    let template = ErrorTemplate::from(data);
    match template.render() {
        Ok(result) => Ok(result),
        Err(e) => {
            error!("❌ Failed to render error page: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_escapes_the_message() {
        let page = render_error_page(&ErrorResponse {
            status: 404,
            message: "<missing>".into(),
        })
        .unwrap();

        assert!(page.contains("404"));
        assert!(!page.contains("<missing>"));
        assert!(page.contains("missing"));
    }
}
