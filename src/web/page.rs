use crate::TermResponse;

pub const TITLE: &str = "Term Abbreviation Generator";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_results(response: &TermResponse) -> String {
    let mut html = format!(
        "<section id=\"results\">\n<p>Original term: {}</p>\n\
         <p>Generated abbreviations/variations:</p>\n<ul>\n",
        escape_html(&response.original)
    );
    for variation in &response.variations {
        html.push_str(&format!("<li>{}</li>\n", escape_html(&variation.text)));
    }
    html.push_str("</ul>\n</section>\n");
    html
}

/// The whole page: the form, prefilled with `term`, and results if any.
pub fn render_page(term: &str, response: Option<&TermResponse>) -> String {
    let results = response.map(render_results).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<p>Enter a term to generate its abbreviations and variations:</p>
<form method="post" action="/">
<label for="term">Input Term</label>
<input type="text" id="term" name="term" value="{term}">
<button type="submit">Submit</button>
</form>
{results}</body>
</html>
"#,
        title = TITLE,
        term = escape_html(term),
        results = results,
    )
}
