use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use storefront::app::AppContainer;
use storefront::config::Config;
use storefront::domain::ProductItem;
use storefront::features::cart::CartAction;
use storefront::features::categories::CategoriesAction;
use storefront::features::intro::IntroAction;
use storefront::features::login::LoginAction;
use storefront::features::product_detail::ProductDetailAction;
use storefront::features::products::{ProductsAction, ProductsManager};
use storefront::features::splash::SplashAction;
use storefront::features::wishlist::WishlistAction;
use storefront::logging::init_tracing;
use storefront::mvi::{ActionOf, DataOf, EffectHandler, Store, UiState};

#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Headless storefront client")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide the first screen from stored preferences
    Start,
    /// Mark onboarding as done
    Intro,
    /// Log in and store the session token
    Login { username: String, password: String },
    /// Forget the session token
    Logout,
    /// List products in the selected categories
    Products,
    /// Show one product
    Product { id: u64 },
    /// Toggle a product on the wishlist
    Favourite { id: u64 },
    /// Toggle a product in the cart
    AddToCart { id: u64 },
    Cart,
    Wishlist,
    /// List categories, optionally toggling some first
    Categories {
        #[arg(long = "toggle")]
        toggle: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    let app = AppContainer::new(&config).context("Failed to start")?;

    match cli.command {
        Command::Start => {
            drive(app.splash_store(), vec![SplashAction::LoadNextScreen]).await;
        }
        Command::Intro => {
            drive(app.intro_store(), vec![IntroAction::Finish]).await;
        }
        Command::Login { username, password } => {
            drive(
                app.login_store(),
                vec![
                    LoginAction::UsernameChanged(username),
                    LoginAction::PasswordChanged(password),
                    LoginAction::Submit,
                ],
            )
            .await;
        }
        Command::Logout => {
            app.auth().logout().await.context("Failed to log out")?;
        }
        Command::Products => {
            drive(app.products_store(), vec![ProductsAction::RefreshData]).await;
        }
        Command::Product { id } => {
            drive(app.product_detail_store(), vec![ProductDetailAction::Load(id)]).await;
        }
        Command::Favourite { id } => {
            let store = app.products_store();
            let item = find_product(&store, id).await?;
            drive(store, vec![ProductsAction::OnClickFavourite(item)]).await;
        }
        Command::AddToCart { id } => {
            drive(
                app.product_detail_store(),
                vec![ProductDetailAction::Load(id), ProductDetailAction::OnClickAddToCart],
            )
            .await;
        }
        Command::Cart => {
            let state = drive(app.cart_store(), vec![CartAction::RefreshData]).await;
            if let Some(model) = state.data() {
                println!("total: {:.2}", model.total_price());
            }
        }
        Command::Wishlist => {
            drive(app.wishlist_store(), vec![WishlistAction::RefreshData]).await;
        }
        Command::Categories { toggle } => {
            let store = app.categories_store();
            let mut actions = Vec::new();
            if toggle.is_empty() {
                actions.push(CategoriesAction::RefreshData);
            } else {
                store.dispatch(CategoriesAction::RefreshData);
                store.settled().await;
                let shown = store.state().into_data().unwrap_or_default();
                for name in &toggle {
                    let item = shown
                        .category(name)
                        .cloned()
                        .with_context(|| format!("Unknown category '{}'", name))?;
                    actions.push(CategoriesAction::OnClickCategory(item));
                }
                actions.push(CategoriesAction::Apply);
            }
            drive(store, actions).await;
            let selected = app
                .categories()
                .selected()
                .await
                .context("Failed to read the category filter")?;
            if selected.is_empty() {
                println!("filter: none");
            } else {
                println!("filter: {}", selected.join(", "));
            }
        }
    }

    Ok(())
}

/// Dispatch `actions` one at a time, waiting for each to settle, then print
/// every published state and event.
async fn drive<H: EffectHandler>(store: Store<H>, actions: Vec<ActionOf<H>>) -> UiState<DataOf<H>> {
    let mut states = store.subscribe();
    let mut events = store.subscribe_events();

    for action in actions {
        store.dispatch(action);
        store.settled().await;
    }

    for state in states.drain() {
        println!("state: {:?}", state);
    }
    for event in events.drain() {
        println!("event: {:?}", event);
    }
    store.state()
}

async fn find_product(
    store: &Store<ProductsManager>,
    id: u64,
) -> anyhow::Result<ProductItem> {
    store.dispatch(ProductsAction::RefreshData);
    store.settled().await;
    store
        .state()
        .data()
        .and_then(|model| model.product(id).cloned())
        .with_context(|| format!("Product {} is not listed", id))
}
