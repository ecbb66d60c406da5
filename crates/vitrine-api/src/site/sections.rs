//! The five presentational sections, each a function returning an HTML
//! fragment. Content is static; composition order is decided by the page.

/// Hero banner with name and tagline.
pub(crate) fn hero() -> String {
    r##"<section id="hero">
<h1>Maya Laurent</h1>
<p class="tagline">Software engineer building reliable backends and the occasional front door for them.</p>
<a class="cta" href="#contact">Say hello</a>
</section>"##
        .to_string()
}

/// Short bio.
pub(crate) fn about() -> String {
    r#"<section id="about">
<h2>About</h2>
<p>I spend most of my time on server-side systems: HTTP services, data
pipelines, and the glue between managed platforms. Previously at a
logistics startup, where I looked after the order-tracking API; these days
I take on contract work and open-source maintenance.</p>
</section>"#
        .to_string()
}

/// Skills list.
pub(crate) fn skills() -> String {
    let items = [
        "Rust",
        "TypeScript",
        "PostgreSQL",
        "Distributed systems",
        "Observability",
        "CI/CD",
    ];
    let list: String = items
        .iter()
        .map(|skill| format!("<li>{skill}</li>\n"))
        .collect();

    format!(
        r#"<section id="skills">
<h2>Skills</h2>
<ul>
{list}</ul>
</section>"#
    )
}

/// Selected projects.
pub(crate) fn projects() -> String {
    let projects = [
        (
            "parcel-watch",
            "Shipment-event ingestion service handling webhook floods from a dozen carriers.",
        ),
        (
            "quill",
            "Markdown-first static notes publisher with incremental rebuilds.",
        ),
        (
            "this site",
            "The page you are reading: server-rendered sections and a contact chat wired to a hosted store.",
        ),
    ];
    let cards: String = projects
        .iter()
        .map(|(name, blurb)| {
            format!("<article class=\"project\"><h3>{name}</h3><p>{blurb}</p></article>\n")
        })
        .collect();

    format!(
        r#"<section id="projects">
<h2>Projects</h2>
{cards}</section>"#
    )
}

/// Contact section with the chat form. The script posts the form to the
/// endpoint named in `data-endpoint` and renders the recent messages
/// below it.
pub(crate) fn contact() -> String {
    r#"<section id="contact">
<h2>Contact</h2>
<p>Leave a message here and I will get back to you.</p>
<form id="chat-form" data-endpoint="/api/chat">
<input name="sender" placeholder="Your name" required>
<textarea name="message" placeholder="Your message" required></textarea>
<button type="submit">Send</button>
</form>
<ol id="chat-messages" reversed></ol>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_section_carries_its_anchor() {
        assert!(hero().contains("id=\"hero\""));
        assert!(about().contains("id=\"about\""));
        assert!(skills().contains("id=\"skills\""));
        assert!(projects().contains("id=\"projects\""));
        assert!(contact().contains("id=\"contact\""));
    }

    #[test]
    fn test_skills_lists_every_entry() {
        let html = skills();
        for skill in ["Rust", "TypeScript", "PostgreSQL"] {
            assert!(html.contains(skill));
        }
    }

    #[test]
    fn test_contact_form_fields_match_api_contract() {
        let html = contact();
        assert!(html.contains("name=\"sender\""));
        assert!(html.contains("name=\"message\""));
    }
}
