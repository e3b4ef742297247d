use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use orbis::locale::{Language, LocaleStore, catalog};
use orbis::network::{self, CategoryId, Selection, Viewport, model, palette};
use orbis::prefs::FilePrefs;

#[derive(Parser)]
#[command(name = "orbis", about = "Bilingual site core and client-network layout inspector")]
struct Cli {
    /// Switch and persist the site language ("en" or "ar")
    #[arg(long)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the navigation labels with the document direction and title
    Nav,
    /// Compute and print the radial client-network placement
    Layout {
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1200.0)]
        width: f64,

        /// Expand one category to show its entry positions
        #[arg(long)]
        select: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = LocaleStore::new(FilePrefs);
    if let Some(lang) = &cli.lang {
        let lang: Language = lang
            .parse()
            .map_err(|_| anyhow!("unsupported language {lang:?}, expected \"en\" or \"ar\""))?;
        store.set_language(lang);
        log::info!("language set to {lang}");
    }

    match cli.command {
        Command::Nav => print_nav(&store),
        Command::Layout { width, select } => print_layout(&store, width, select),
    }

    Ok(())
}

fn print_nav(store: &LocaleStore<FilePrefs>) {
    let state = store.document_state();
    println!("{} [{}]", state.title, state.direction);
    for key in catalog::NAV_KEYS {
        println!("  {key:<14} {}", store.translate(key));
    }
}

fn print_layout(store: &LocaleStore<FilePrefs>, width: f64, select: Option<String>) {
    let dataset = model::load_or_default();
    let viewport = Viewport::new(width);
    let placed = network::layout(&dataset.categories, viewport);
    let lang = store.language();

    let mut selection = Selection::default();
    if let Some(id) = select {
        selection.toggle_category(&CategoryId::new(id));
    }

    println!(
        "center ({:.0}, {:.0}), ring radius {:.0}, {} categories",
        placed.center.x,
        placed.center.y,
        placed.ring_radius,
        placed.categories.len()
    );

    for category in &placed.categories {
        println!(
            "{:<14} {} ({:>6.1}, {:>6.1})  {}",
            category.category.id.to_string(),
            palette::css_hex(category.color),
            category.pos.x,
            category.pos.y,
            category.category.name.get(lang)
        );

        if selection.category() == Some(&category.category.id) {
            for entry in &category.entries {
                println!(
                    "    {:<10} ({:>6.1}, {:>6.1})  {}",
                    entry.entry.id.to_string(),
                    entry.pos.x,
                    entry.pos.y,
                    entry.entry.name.get(lang)
                );
            }
        }
    }

    for (a, b) in placed.connections() {
        println!(
            "link {} -> {}",
            placed.categories[a].category.id, placed.categories[b].category.id
        );
    }
}
