use std::path::Path;
use axum::response::Html;
use crate::errors::{AppError, AppResult};

/// Loads `name` from the templates directory and fills `{{key}}` placeholders.
/// Values are inserted verbatim; escape user data with [`escape_html`] first.
pub async fn render(dir: &str, name: &str, vars: &[(&str, &str)]) -> AppResult<Html<String>> {
    let path = Path::new(dir).join(name);
    let mut html = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::error!("Failed to read template {}: {}", path.display(), e);
        AppError::File(e)
    })?;

    for (key, value) in vars {
        html = html.replace(&format!("{{{{{}}}}}", key), value);
    }
    Ok(Html(html))
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn flash_html(messages: &[String]) -> String {
    messages
        .iter()
        .map(|m| format!(r#"<p class="flash">{}</p>"#, escape_html(m)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn nav_html(logged_in: bool) -> &'static str {
    if logged_in {
        r#"<a href="/">Home</a> <a href="/secrets">Secrets</a> <a href="/logout">Log Out</a>"#
    } else {
        r#"<a href="/">Home</a> <a href="/login">Login</a> <a href="/register">Register</a>"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn flashes_render_one_paragraph_each() {
        let html = flash_html(&["a".to_string(), "<b>".to_string()]);
        assert_eq!(html, "<p class=\"flash\">a</p>\n<p class=\"flash\">&lt;b&gt;</p>");
        assert_eq!(flash_html(&[]), "");
    }

    #[tokio::test]
    async fn render_fills_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("page.html")).unwrap();
        file.write_all(b"<h1>{{name}}</h1>{{name}}{{missing}}").unwrap();

        let Html(html) = render(dir.path().to_str().unwrap(), "page.html", &[("name", "Alice")])
            .await
            .unwrap();
        assert_eq!(html, "<h1>Alice</h1>Alice{{missing}}");
    }

    #[tokio::test]
    async fn missing_template_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = render(dir.path().to_str().unwrap(), "nope.html", &[]).await;
        assert!(matches!(result, Err(AppError::File(_))));
    }
}
