//! Form page layout
//!
//! Renders the full HTML document: branch and subject pickers, the doubt
//! textarea, clickable sample doubts, and the response section.
//!
//! Page-controlled values are HTML-escaped. The response fragment comes from
//! the selector and is embedded as-is.

use crate::catalog::{catalog, Branch, CatalogView};

/// Values the page is rendered from
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub branch: &'a str,
    pub subject: &'a str,
    /// Selector output; empty on the initial GET
    pub response: &'a str,
}

/// Render the full page
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let catalog = catalog();
    // Unknown branches still get a usable subject list
    let branch = catalog
        .branch(ctx.branch)
        .or_else(|| catalog.branches().first());

    let response_section = if ctx.response.is_empty() {
        String::new()
    } else {
        format!(
            "<section class=\"response\">\n{}\n</section>",
            ctx.response
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Student Doubt Desk</title>
    <style>{css}</style>
</head>
<body>
    <main class="container">
        <h1>Student Doubt Desk</h1>
        <form method="post" action="/">
            <label for="branch">Branch</label>
            <select id="branch" name="branch">{branch_options}</select>
            <label for="subject">Subject</label>
            <select id="subject" name="subject">{subject_options}</select>
            <label for="doubt">Your doubt</label>
            <textarea id="doubt" name="doubt" rows="4" placeholder="Type your question..."></textarea>
            <div id="samples" class="samples">{samples}</div>
            <button type="submit">Explain</button>
        </form>
        {response_section}
    </main>
    <script>const CATALOG = {catalog_json};</script>
    <script>{js}</script>
</body>
</html>"#,
        css = CSS,
        js = JS,
        branch_options = branch_options(catalog.branches(), ctx.branch),
        subject_options = branch
            .map(|b| subject_options(b, ctx.subject))
            .unwrap_or_default(),
        samples = sample_buttons(catalog.sample_doubts(ctx.subject).unwrap_or(&[])),
        response_section = response_section,
        catalog_json = script_json(&catalog.view()),
    )
}

fn branch_options(branches: &[Branch], selected: &str) -> String {
    branches
        .iter()
        .map(|b| option(b.name, b.name == selected))
        .collect()
}

fn subject_options(branch: &Branch, selected: &str) -> String {
    branch
        .subject_names()
        .map(|name| option(name, name == selected))
        .collect()
}

fn option(value: &str, selected: bool) -> String {
    let value = esc(value);
    let marker = if selected { " selected" } else { "" };
    format!("<option value=\"{value}\"{marker}>{value}</option>")
}

fn sample_buttons(samples: &[&str]) -> String {
    samples
        .iter()
        .map(|s| {
            let s = esc(s);
            format!("<button type=\"button\" class=\"sample\" data-doubt=\"{s}\">{s}</button>")
        })
        .collect()
}

/// Serialize the catalog for an inline `<script>` block
fn script_json(view: &CatalogView) -> String {
    serde_json::to_string(view)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/")
}

/// Escape text for HTML element content and quoted attributes
pub(crate) fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; background: #f5f7fa; margin: 0; color: #1f2933; }
.container { max-width: 760px; margin: 2rem auto; background: #fff; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,.08); }
form { display: grid; gap: .5rem; }
select, textarea, button { font: inherit; padding: .5rem; }
.samples { display: flex; flex-wrap: wrap; gap: .4rem; }
.sample { background: #eef2f7; border: 1px solid #d5dde8; border-radius: 4px; cursor: pointer; font-size: .85rem; }
button[type=submit] { background: #2563eb; color: #fff; border: none; border-radius: 4px; cursor: pointer; }
.response { margin-top: 2rem; border-top: 1px solid #e4e7eb; padding-top: 1rem; }
.response-question { font-size: 1.05rem; }
.response-footer { color: #52606d; font-style: italic; }
"#;

const JS: &str = r#"
(function () {
    const branch = document.getElementById('branch');
    const subject = document.getElementById('subject');
    const doubt = document.getElementById('doubt');
    const samples = document.getElementById('samples');

    function fillSamples() {
        samples.replaceChildren();
        (CATALOG.sample_doubts[subject.value] || []).forEach(function (text) {
            const b = document.createElement('button');
            b.type = 'button';
            b.className = 'sample';
            b.textContent = text;
            b.dataset.doubt = text;
            samples.appendChild(b);
        });
    }

    function fillSubjects() {
        subject.replaceChildren();
        (CATALOG.branches[branch.value] || []).forEach(function (name) {
            subject.appendChild(new Option(name, name));
        });
        fillSamples();
    }

    branch.addEventListener('change', fillSubjects);
    subject.addEventListener('change', fillSamples);
    samples.addEventListener('click', function (e) {
        if (e.target.dataset && e.target.dataset.doubt) {
            doubt.value = e.target.dataset.doubt;
            doubt.focus();
        }
    });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn page(branch: &str, subject: &str, response: &str) -> String {
        render_page(&PageContext {
            branch,
            subject,
            response,
        })
    }

    #[test]
    fn test_empty_form_has_no_response_section() {
        let html = page("Computer Science", "Data Structures", "");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("class=\"response\""));
        assert!(html.contains("name=\"doubt\""));
    }

    #[test]
    fn test_selected_values_marked() {
        let html = page("Computer Science", "Algorithms", "");
        assert!(html.contains("<option value=\"Computer Science\" selected>"));
        assert!(html.contains("<option value=\"Algorithms\" selected>Algorithms</option>"));
        assert!(html.contains("<option value=\"Data Structures\">Data Structures</option>"));
    }

    #[test]
    fn test_sample_doubts_for_selected_subject() {
        let html = page("Computer Science", "Algorithms", "");
        assert!(html.contains("data-doubt=\"Explain dynamic programming with an example\""));
        assert!(html.contains("What&#39;s the difference between merge sort and quick sort?"));
        assert!(!html.contains("data-doubt=\"What is context switching?\""));
    }

    #[test]
    fn test_response_embedded_verbatim() {
        let html = page("Computer Science", "Data Structures", "<h3>Definition</h3><p>x</p>");
        assert!(html.contains("<section class=\"response\">\n<h3>Definition</h3><p>x</p>\n</section>"));
    }

    #[test]
    fn test_unknown_branch_still_lists_subjects() {
        let html = page("<script>", "Nope", "");
        assert!(!html.contains("<option value=\"<script>\""));
        assert!(html.contains("<option value=\"Data Structures\">"));
    }

    #[test]
    fn test_inline_catalog_json_cannot_close_script() {
        let html = page("Computer Science", "Data Structures", "");
        assert!(html.contains("const CATALOG = {"));
        let script_start = html.find("const CATALOG").unwrap();
        let script_end = html[script_start..].find("</script>").unwrap();
        let json = &html[script_start + "const CATALOG = ".len()..script_start + script_end - 1];
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert!(parsed["branches"]["Computer Science"].is_array());
    }

    #[test]
    fn test_esc() {
        assert_eq!(esc("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(esc("plain"), "plain");
    }
}
