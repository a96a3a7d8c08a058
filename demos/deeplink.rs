use deeplink::{Params, Router};

type Query = Vec<(String, String)>;

// Handlers decide which screen a URL navigates to. Plain functions work
// because `RouteHandler` is implemented for compatible closures.
type Handler = fn(&str, Params, Query) -> String;

fn home(_url: &str, _params: Params, _query: Query) -> String {
    "screen: home".to_owned()
}

fn product(_url: &str, params: Params, _query: Query) -> String {
    format!("screen: product #{}", params.get("id").unwrap_or("?"))
}

fn search(_url: &str, params: Params, query: Query) -> String {
    let terms = params.get("terms").unwrap_or_default();
    let page = query
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str())
        .unwrap_or("1");

    format!("screen: search for {terms:?}, page {page}")
}

fn web_fallback(url: &str, _params: Params, _query: Query) -> String {
    format!("screen: in-app browser for {url}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut router: Router<Handler> = Router::new();
    router.register("shop://home", home)?;
    router.register("shop://store/products/:id", product)?;
    router.register("shop://store/search/**terms", search)?;
    router.register("https://www.example.com/**path", web_fallback)?;

    println!("{router}");

    for url in [
        "shop://home",
        "SHOP://Store/products/1047",
        "shop://store/search/red/shoes?page=2&sort=price",
        "https://www.example.com/campaigns/summer",
        "shop://store/unknown",
    ] {
        match router.dispatch(url) {
            Ok(screen) => println!("{url} -> {screen}"),
            Err(err) => println!("{url} -> no route: {err}"),
        }
    }

    Ok(())
}
