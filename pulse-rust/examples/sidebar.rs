use dotenvy::dotenv;
use pulse_sidebar::{AiRequestKind, GroundingSource, SidebarController, DISCLAIMER};
use std::{env, error::Error, sync::Arc};

mod common;

// Usage: cargo run --example sidebar -- [latest_news|alternatives|sentiment]
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    common::init_tracing();

    let kinds = match env::args().nth(1) {
        Some(arg) => vec![arg.parse::<AiRequestKind>()?],
        None => AiRequestKind::ALL.to_vec(),
    };

    let gateway = Arc::new(common::google_gateway()?);
    let controller = SidebarController::new(gateway, common::load_article()?);

    println!("{}\n", controller.article().title);

    for kind in kinds {
        println!("== {} ==", kind.label());

        let state = controller.dispatch(kind).await;
        let Some(result) = state.result() else {
            continue;
        };

        println!("{}", result.text);
        if !result.sources.is_empty() {
            println!("\nSources:");
        }
        for source in &result.sources {
            match source {
                GroundingSource::Web(web) => println!("  🔗 {} <{}>", web.title, web.uri),
                GroundingSource::Map(map) => {
                    println!("  📍 {} <{}>", map.title, map.uri);
                    if let Some(snippet) = &map.review_snippet {
                        println!("     \"{snippet}\"");
                    }
                }
            }
        }
        println!();
    }

    println!("{DISCLAIMER}");
    Ok(())
}
