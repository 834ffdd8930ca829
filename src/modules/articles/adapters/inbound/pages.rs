// Server rendered pages of the coffee blog.
//
// Every string that came from a writer goes through `escape` before it is
// placed into markup.

use chrono::{DateTime, Utc};

use crate::modules::articles::core::article::Article;
use crate::shared::html::{escape, page};

const BLOG_TITLE: &str = "Coffee Blog";

fn published_on(created_at: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(created_at)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn render_index(articles: &[Article]) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(BLOG_TITLE));
    if articles.is_empty() {
        body.push_str("<p>No articles yet.</p>");
        return page(BLOG_TITLE, &body);
    }
    body.push_str("<ul>\n");
    for article in articles {
        body.push_str(&format!(
            "<li><a href=\"/articles/{}\">{}</a> by {} <time>{}</time></li>\n",
            escape(&article.id),
            escape(&article.title),
            escape(&article.author),
            published_on(article.created_at)
        ));
    }
    body.push_str("</ul>");
    page(BLOG_TITLE, &body)
}

pub fn render_article(article: &Article) -> String {
    let paragraphs: String = article
        .body
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("<p>{}</p>\n", escape(p.trim())))
        .collect();
    let body = format!(
        "<article>\n<h1>{}</h1>\n<p class=\"byline\">by {} <time>{}</time></p>\n{}</article>\n<p><a href=\"/articles\">All articles</a></p>",
        escape(&article.title),
        escape(&article.author),
        published_on(article.created_at),
        paragraphs
    );
    page(&format!("{} | {}", article.title, BLOG_TITLE), &body)
}

pub fn render_not_found() -> String {
    page(
        BLOG_TITLE,
        "<h1>Article not found</h1>\n<p><a href=\"/articles\">All articles</a></p>",
    )
}
