use anyhow::Result;
use std::path::Path;

use lista_store::{FileBackend, ItemStore, KvBackend, SingleFileBackend};

use crate::args::{Cli, Commands};
use crate::config::{self, Config};
use crate::handlers;
use crate::presentation::ConsoleView;
use crate::types::OutputFormat;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&data_dir.join("config.toml"))?;
    log::debug!("data dir: {}", data_dir.display());

    // The config can point the blob at an explicit file; otherwise it lives
    // under the data directory keyed by the storage key.
    match config.store.path.clone() {
        Some(path) => dispatch(
            cli,
            &config,
            &data_dir,
            ItemStore::new(SingleFileBackend::new(path)),
        ),
        None => dispatch(
            cli,
            &config,
            &data_dir,
            ItemStore::new(FileBackend::new(&data_dir)),
        ),
    }
}

fn dispatch<B: KvBackend>(
    cli: Cli,
    config: &Config,
    data_dir: &Path,
    store: ItemStore<B>,
) -> Result<()> {
    let color = config.ui.color.enabled();
    let view = ConsoleView::new(cli.format, color);

    let Some(command) = cli.command else {
        show_guidance(data_dir, &store)?;
        return Ok(());
    };

    match command {
        Commands::Add { titulo, status } => {
            handlers::add::handle(store, view, titulo, status.into())
        }

        Commands::List { search, status } => {
            handlers::list::handle(store, view, search, status.into())
        }

        Commands::Edit { id, titulo, status } => {
            handlers::edit::handle(store, view, id, titulo, status.map(Into::into))
        }

        Commands::Delete { id, yes } => {
            handlers::delete::handle(store, view.with_assume_yes(yes), id)
        }

        Commands::Ui => {
            if cli.format == OutputFormat::Json {
                anyhow::bail!("interactive mode does not support --format json");
            }
            handlers::ui::handle(store, view)
        }
    }
}

fn show_guidance<B: KvBackend>(data_dir: &Path, store: &ItemStore<B>) -> Result<()> {
    let count = store.get_all()?.len();

    println!("lista - local item tracker\n");
    println!("Data directory: {}\n", data_dir.display());

    if count == 0 {
        println!("No items yet. Get started:");
        println!("  lista add \"My first item\"");
        println!("  lista add \"Another one\" --status andamento\n");
    } else {
        println!("{} item(s) stored. Quick commands:", count);
        println!("  lista list                        # View all items");
        println!("  lista list --search <text>        # Search by title");
        println!("  lista list --status concluido     # Filter by status");
        println!("  lista ui                          # Interactive mode\n");
    }

    println!("For more commands:");
    println!("  lista --help");
    Ok(())
}
