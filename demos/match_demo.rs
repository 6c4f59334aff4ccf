use env_logger::Env;
use urlmatch::{match_url, TemplateCache};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let routes = [
        ("/users/<name>", "/users/freewind"),
        ("/users/<name>.<suffix>", "/users/detail.json"),
        ("/archive/<year:\\d{4}>/<month:\\d{2}>", "/archive/2024/06"),
        ("/static/*", "/static/css/site.css"),
        ("/users/<id:\\d{2}>", "/users/123"),
    ];

    for (template, url) in routes {
        match match_url(template, url).expect("demo templates are well-formed") {
            Some(params) => println!("{template}  ~  {url}  =>  {}", params.to_json()),
            None => println!("{template}  ~  {url}  =>  no match"),
        }
    }

    // the cache pays compilation once per template, then reuses it
    let cache = TemplateCache::new();
    for user in ["alice", "bob", "carol"] {
        let url = format!("/users/{user}");
        let params = cache
            .match_url("/users/<name>", &url)
            .expect("well-formed template")
            .expect("urls match");
        println!("cached: {url} => {}", params.to_json());
    }
    println!("cache holds {} template(s)", cache.len());
}
