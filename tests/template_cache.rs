use std::sync::Arc;
use std::thread;
use urlmatch::TemplateCache;

#[test]
fn concurrent_population_is_idempotent() {
    let cache = Arc::new(TemplateCache::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = cache.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let params = cache
                        .match_url("/users/<name>/posts/<id:\\d+>", &format!("/users/u{i}/posts/{i}"))
                        .unwrap()
                        .unwrap();
                    assert_eq!(params.get("name"), Some(format!("u{i}").as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // every thread raced to insert the same template; one copy survives
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_is_transparent_to_match_semantics() {
    let cache = TemplateCache::new();

    let templates = [
        "",
        "/index",
        "/users/<name>",
        "/users/<name>.<suffix>",
        "/users/<id:\\d{2}>",
        "/users/*",
    ];
    let urls = ["", "/index", "/users/freewind", "/users/detail.json", "/users/12", "/users/a/b"];

    for template in templates {
        for url in urls {
            let cached = cache.match_url(template, url).unwrap();
            let fresh = urlmatch::match_url(template, url).unwrap();
            assert_eq!(cached, fresh, "cache changed semantics for '{template}' vs '{url}'");
        }
    }

    assert_eq!(cache.len(), templates.len());
}

#[test]
fn distinct_templates_get_distinct_entries() {
    let cache = TemplateCache::new();

    let a = cache.get_or_compile("/users/<id>").unwrap();
    let b = cache.get_or_compile("/users/<id:\\d+>").unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 2);
}
