//! Text and JSON formatting of page models.

use retroblog_core::Result;
use retroblog_render::{ListingPage, Lookup};
use serde::Serialize;

use crate::config::OutputFormat;

/// Format any page model as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a listing page.
pub fn listing(page: &ListingPage<'_>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(page);
    }

    if page.is_empty_state() {
        return Ok(format!("No articles match \"{}\".", page.query));
    }

    let mut out = String::new();
    for card in &page.cards {
        out.push_str(card.title);
        if !card.read_time.is_empty() {
            out.push_str(&format!(" ({})", card.read_time));
        }
        out.push('\n');
        out.push_str(&format!("  {}\n", card.excerpt));
        if let Some(href) = &card.href {
            out.push_str(&format!("  {href}\n"));
        }
    }
    out.push_str(&format!("{} article(s)", page.cards.len()));
    Ok(out)
}

/// Format a detail lookup.
pub fn detail(lookup: &Lookup<'_>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(lookup);
    }

    let page = match lookup {
        Lookup::Found(page) => page,
        Lookup::NotFound(missing) => {
            return Ok(format!(
                "{}\nNo article has the slug '{}'.\nBack to the blog: {}",
                missing.message, missing.slug, missing.listing_href
            ));
        }
    };

    let article = page.view.article;
    let mut out = format!("{}\n", article.title);
    let meta: Vec<&str> = [article.published_date.as_str(), article.read_time.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !meta.is_empty() {
        out.push_str(&format!("{}\n", meta.join(" · ")));
    }
    if page.view.has_hero_image {
        if let Some(alt) = &article.image_alt_text {
            out.push_str(&format!("[hero image: {alt}]\n"));
        }
    }
    out.push_str(&format!("\n{}\n\n{}\n", article.excerpt, article.body));

    if let Some(faqs) = &page.faqs {
        out.push_str("\nFAQ\n");
        for faq in faqs.items() {
            out.push_str(&format!("Q: {}\nA: {}\n", faq.question, faq.answer));
        }
    }
    out.push_str(&format!("\nBack to the blog: {}", page.listing_href));
    Ok(out)
}
