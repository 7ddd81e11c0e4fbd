//! End-to-end checks over the compiled-in catalog: listing, search, detail,
//! and not-found flows as the page layer drives them.

use retroblog_catalog::{builtin, filter};
use retroblog_core::SiteConfig;
use retroblog_render::{Lookup, Renderer, StructuredDataTag};

#[derive(Clone)]
struct Blog;

impl SiteConfig for Blog {
    fn listing_path(&self) -> &str {
        "/blog"
    }
}

#[test]
fn listing_shows_every_article_in_catalog_order() {
    let catalog = builtin().unwrap();
    let page = Renderer::new(catalog, Blog).listing("").unwrap();

    let listed: Vec<&str> = page.cards.iter().map(|c| c.slug).collect();
    let authored: Vec<&str> = catalog.slugs().collect();
    assert_eq!(listed, authored);
}

#[test]
fn keyword_search_finds_remote_articles_only() {
    let catalog = builtin().unwrap();
    let page = Renderer::new(catalog, Blog).listing("Remote").unwrap();

    let slugs: Vec<&str> = page.cards.iter().map(|c| c.slug).collect();
    assert_eq!(slugs, vec!["remote-icebreakers", "async-retrospectives"]);
}

#[test]
fn search_is_case_insensitive_over_builtin() {
    let catalog = builtin().unwrap();
    assert_eq!(
        filter("RETRO", catalog.all()),
        filter("retro", catalog.all())
    );
}

#[test]
fn body_only_terms_do_not_match() {
    let catalog = builtin().unwrap();
    // Appears in the Start Stop Continue body but in no title or keyword list.
    assert!(filter("silent writing per column", catalog.all()).is_empty());
}

#[test]
fn unmatched_query_renders_empty_state() {
    let catalog = builtin().unwrap();
    let page = Renderer::new(catalog, Blog).listing("zzz").unwrap();
    assert!(page.is_empty_state());
}

#[test]
fn detail_page_forwards_structured_data_unchanged() {
    let catalog = builtin().unwrap();
    let record = catalog
        .find_by_slug("start-stop-continue-retrospective")
        .unwrap();
    let authored = record.structured_data.as_ref().unwrap().as_str();

    let lookup = Renderer::new(catalog, Blog)
        .detail("start-stop-continue-retrospective")
        .unwrap();
    let page = lookup.found().unwrap();

    assert!(page.view.has_hero_image);
    assert_eq!(page.faqs.as_ref().unwrap().len(), 2);
    let tag: &StructuredDataTag<'_> = page.structured_data.as_ref().unwrap();
    assert_eq!(tag.json(), authored);
    assert!(tag.to_html().contains(authored));
}

#[test]
fn article_without_hero_or_faqs() {
    let catalog = builtin().unwrap();
    let lookup = Renderer::new(catalog, Blog)
        .detail("async-retrospectives")
        .unwrap();
    let page = lookup.found().unwrap();
    assert!(!page.view.has_hero_image);
    assert!(page.faqs.is_none());
    assert!(page.structured_data.is_none());
}

#[test]
fn unknown_slug_renders_not_found_with_link_back() {
    let catalog = builtin().unwrap();
    let lookup = Renderer::new(catalog, Blog)
        .detail("nonexistent-slug")
        .unwrap();
    match lookup {
        Lookup::NotFound(page) => {
            assert_eq!(page.slug, "nonexistent-slug");
            assert_eq!(page.listing_href, "/blog");
        }
        Lookup::Found(_) => panic!("unknown slug resolved to an article"),
    }
}

#[test]
fn slugs_resolve_injectively() {
    let catalog = builtin().unwrap();
    let mut seen = std::collections::HashSet::new();
    for slug in catalog.slugs() {
        let record = catalog.find_by_slug(slug).unwrap();
        assert_eq!(record.slug, slug);
        assert!(seen.insert(record.id.clone()), "two slugs hit id {}", record.id);
    }
}
