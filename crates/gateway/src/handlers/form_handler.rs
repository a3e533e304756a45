//! HTML form handlers.
//!
//! One page with an input field, a convert button and an output area. A
//! rejected amount is a normal outcome: the page shows the error message in
//! the output area and the response is still `200 OK`.

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::handlers::check_input_length;
use crate::state::AppState;

/// Submitted form fields
#[derive(Debug, Deserialize)]
pub struct ConvertForm {
    #[serde(default)]
    pub amount: String,
}

/// Create form routes
pub fn form_routes() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_form))
}

/// Empty form
pub async fn show_form() -> Html<String> {
    Html(render_page("", ""))
}

/// Convert the submitted amount and show the result in the output area
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<ConvertForm>,
) -> Html<String> {
    let result =
        check_input_length(&state, &form.amount).and_then(|_| common::convert(&form.amount));

    let output = match result {
        Ok(conversion) => conversion.words,
        Err(e) => {
            tracing::debug!(code = e.code(), "Amount rejected");
            e.user_message()
        }
    };

    Html(render_page(&form.amount, &output))
}

fn render_page(input: &str, output: &str) -> String {
    // User text goes in last so it is never scanned for placeholders.
    PAGE_TEMPLATE
        .replace("{output}", &escape_html(output))
        .replace("{input}", &escape_html(input))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Currency in Words</title>
</head>
<body>
<h1>Currency in Words</h1>
<form method="post" action="/">
<label for="amount">Amount in dollars</label>
<input id="amount" name="amount" type="text" value="{input}" placeholder="999 999 999,99" autofocus>
<button id="convert" type="submit">Convert</button>
</form>
<output id="output" for="amount">{output}</output>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"1" & '2'</b>"#),
            "&lt;b&gt;&quot;1&quot; &amp; &#39;2&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_page_fills_fields() {
        let page = render_page("25,1", "twenty-five dollars and ten cents");
        assert!(page.contains(r#"value="25,1""#));
        assert!(page.contains(">twenty-five dollars and ten cents</output>"));
    }
}
