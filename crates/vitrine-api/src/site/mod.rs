//! Server-rendered landing page.
//!
//! The page is pure declarative composition: five presentational sections
//! rendered in fixed order into a single HTML document. No state, no
//! algorithmic content.

mod sections;

use axum::response::Html;

/// GET / - The landing page.
pub async fn landing_page() -> Html<String> {
    Html(render_page())
}

/// Render the full document: head, the five sections in order, footer.
pub fn render_page() -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Maya Laurent — Software Engineer</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body>
{hero}
{about}
{skills}
{projects}
{contact}
<footer><p>&copy; 2026 Maya Laurent</p></footer>
<script src="/assets/app.js" defer></script>
</body>
</html>
"#,
        hero = sections::hero(),
        about = sections::about(),
        skills = sections::skills(),
        projects = sections::projects(),
        contact = sections::contact(),
    )
}
