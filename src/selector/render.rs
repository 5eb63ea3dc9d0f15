//! HTML fragment rendering for explanations
//!
//! Sections are emitted in a fixed order and joined with newlines. Every
//! section except the echo block, the definition and the footer is omitted
//! when its template field is empty.
//!
//! The echoed question, branch and subject are written verbatim. The output
//! is embedded into the page unescaped.

use super::Explanation;

const FOOTER: &str = "<p class=\"response-footer\">Feel free to refine your question or ask for a concrete example; I'm happy to help further!</p>";

/// Render an explanation into its HTML fragment
pub fn render(explanation: &Explanation) -> String {
    let template = &explanation.template;
    let mut sections = Vec::with_capacity(7);

    sections.push(format!(
        "<p class=\"response-question\"><strong>Q:</strong> {}</p>\
         <p class=\"response-intro\">Hi there! As your friendly engineering professor, here is a clear, concise explanation \
         for your doubt about <strong>{}</strong> in <strong>{}</strong>.</p>",
        explanation.question, explanation.subject, explanation.branch
    ));

    sections.push(format!("<h3>Definition</h3><p>{}</p>", template.definition));

    if !template.examples.is_empty() {
        sections.push(format!(
            "<h3>Real-world Examples</h3>{}",
            list(template.examples)
        ));
    }
    if !template.industry.is_empty() {
        sections.push(format!(
            "<h3>Industry Application</h3><p>{}</p>",
            template.industry
        ));
    }
    if !template.keywords.is_empty() {
        sections.push(format!(
            "<h3>Important Keywords</h3>{}",
            list(template.keywords)
        ));
    }
    if !template.summary.is_empty() {
        sections.push(format!("<h3>Short Summary</h3><p>{}</p>", template.summary));
    }

    sections.push(FOOTER.to_string());
    sections.join("\n")
}

fn list(items: &[&str]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}
