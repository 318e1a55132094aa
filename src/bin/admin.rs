//! GridStore Admin Demo
//!
//! A small admin CLI over the sample articles collection, standing in for an
//! entity screen: list with filters and sort, add, publish toggle, staged
//! delete, reset.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use gridstore::sample::{article_columns, article_lifecycle, article_seed, Article};
use gridstore::{
    ColumnFilter, Config, Entity, EntityId, FileBackend, FilterState, GridEngine, SortState,
    StorageAdapter,
};

/// GridStore admin demo
#[derive(Parser, Debug)]
#[command(name = "gridstore-admin")]
#[command(about = "Admin grid demo over the sample articles collection")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./gridstore_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List articles through the grid view
    List {
        /// Free-text query over title and author
        #[arg(short, long, default_value = "")]
        query: String,

        /// Published filter: true, false, or all
        #[arg(long, default_value = "all")]
        published: String,

        /// Only articles created on or after this day (YYYY-MM-DD)
        #[arg(long)]
        created_after: Option<NaiveDate>,

        /// Only articles created on or before this day (YYYY-MM-DD)
        #[arg(long)]
        created_before: Option<NaiveDate>,

        /// Sort column id
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Add an article
    Add {
        /// Article title
        title: String,

        /// Article author
        author: String,

        /// Publish immediately
        #[arg(long)]
        published: bool,
    },

    /// Toggle an article's published flag
    Publish {
        /// The article id
        id: i64,
    },

    /// Stage articles for deletion and confirm interactively
    Remove {
        /// Article ids to delete
        ids: Vec<i64>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Drop the persisted collection (next command reseeds)
    Reset,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gridstore=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder().data_dir(&args.data_dir).build();
    let backend = match FileBackend::open(&config.data_dir) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Failed to open data directory: {}", e);
            std::process::exit(1);
        }
    };

    let adapter = StorageAdapter::<Article>::new(Box::new(backend), &config);
    let mut engine =
        GridEngine::new(article_columns(), adapter).with_lifecycle(article_lifecycle());

    let collection = engine.initialize(article_seed());

    match args.command {
        Commands::List {
            query,
            published,
            created_after,
            created_before,
            sort,
            desc,
        } => {
            let mut filter = FilterState::new()
                .with_query(query)
                .with_column("published", ColumnFilter::Equals(published));

            if created_after.is_some() || created_before.is_some() {
                filter = filter.with_column(
                    "created_at",
                    ColumnFilter::DateRange {
                        start: created_after,
                        end: created_before,
                    },
                );
            }

            let sort_state = match sort {
                Some(column) if desc => SortState::desc(column),
                Some(column) => SortState::asc(column),
                None => SortState::new(),
            };

            let rows = engine.view(&collection, &filter, &sort_state);
            print_rows(&engine, &rows);
            println!("{} of {} article(s)", rows.len(), collection.len());
        }

        Commands::Add {
            title,
            author,
            published,
        } => {
            let now = Utc::now();
            let article = Article {
                id: 0, // unassigned; the engine generates one
                title,
                author,
                category_ids: vec![],
                cover_image: String::new(),
                views: 0,
                published,
                published_at: published.then_some(now),
                created_at: now,
                updated_at: now,
            };

            if let Err(e) = article.validate() {
                eprintln!("Rejected: {}", e);
                std::process::exit(1);
            }

            let collection = engine.add(collection, article);
            match collection.first() {
                Some(added) => println!("Added article {}", added.id),
                None => eprintln!("Add produced an empty collection"),
            }
        }

        Commands::Publish { id } => {
            let Some(mut article) = collection.iter().find(|a| a.id == id).cloned() else {
                eprintln!("No article with id {}", id);
                std::process::exit(1);
            };

            article.published = !article.published;
            article.updated_at = Utc::now();
            let flag = article.published;

            engine.mutate(collection, article);
            println!(
                "Article {} is now {}",
                id,
                if flag { "published" } else { "unpublished" }
            );
        }

        Commands::Remove { ids, yes } => {
            let staged: BTreeSet<EntityId> = ids.into_iter().map(EntityId::Int).collect();
            let prompt = engine.stage_delete(staged);

            println!("{}", prompt.title);
            println!("{}", prompt.description);

            if yes || confirm_on_stdin() {
                let collection = engine.confirm_delete(collection);
                println!("{} article(s) remain", collection.len());
            } else {
                engine.cancel_delete();
                println!("Cancelled, nothing removed");
            }
        }

        Commands::Reset => {
            engine.adapter().clear();
            println!("Persisted collection dropped; next command reseeds");
        }
    }
}

/// Ask for a y/N confirmation on stdin
fn confirm_on_stdin() -> bool {
    print!("Proceed? [y/N] ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}

/// Render the visible rows through the column descriptors
fn print_rows(engine: &GridEngine<Article>, rows: &[Article]) {
    let headers: Vec<&str> = engine.columns().iter().map(|c| c.header.as_str()).collect();
    println!("{}", headers.join(" | "));

    for row in rows {
        let cells: Vec<String> = engine
            .columns()
            .iter()
            .map(|c| c.value_of(row).render())
            .collect();
        println!("{}", cells.join(" | "));
    }
}
