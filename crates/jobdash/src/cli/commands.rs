use super::print::{
    print_catalog, print_draft, print_jobs, print_json, print_messages, print_notices,
    print_prefill, print_state_summary, print_view, print_views,
};
use super::setup::{
    Cli, Commands, DraftCommands, FilterArgs, ListArgs, OutputFormat, ViewCommands,
};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use jobdashapp::api::{load_jobs, JobDashApi};
use jobdashapp::config::JobDashConfig;
use jobdashapp::store::fs::FsStorage;
use jobdashapp::suggest::{HttpSuggester, SuggestionCache};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

struct AppContext {
    api: JobDashApi<FsStorage>,
    config: JobDashConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    print_notices(ctx.api.notices());

    match cli.command {
        Commands::List(args) => handle_list(&mut ctx, args),
        Commands::Catalog { output } => handle_catalog(&ctx, output),
        Commands::Views { command } => match command {
            ViewCommands::List { output } => handle_views_list(&ctx, output),
            ViewCommands::Show { id, output } => handle_view_show(&ctx, &id, output),
            ViewCommands::Save {
                name,
                view,
                filters,
            } => handle_view_save(&mut ctx, &name, view.as_deref(), &filters),
            ViewCommands::Update { id, name, filters } => {
                handle_view_update(&mut ctx, &id, &name, &filters)
            }
            ViewCommands::Delete { id } => handle_view_delete(&mut ctx, &id),
        },
        Commands::Draft { command } => match command {
            DraftCommands::Show { output } => handle_draft_show(&ctx, output),
            DraftCommands::Clear => handle_draft_clear(&ctx),
        },
        Commands::Suggest { position } => handle_suggest(&ctx, &position.join(" ")),
    }
}

/// Logs go to stderr. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = JobDashConfig::load(cli.config.as_deref())?;
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "using data directory");

    let api = JobDashApi::open(FsStorage::new(data_dir))?.with_debounce(config.debounce_window());
    Ok(AppContext { api, config })
}

/// Reset to no filters (or to `view`), then apply each `--filter` in order.
fn apply_filters(ctx: &mut AppContext, view: Option<&str>, filters: &FilterArgs) -> Result<()> {
    match view {
        Some(view) => {
            ctx.api.select_view(view)?;
        }
        None => {
            ctx.api.clear_filters()?;
        }
    }
    for (id, value) in &filters.filters {
        ctx.api.add_filter(id, value)?;
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let path = args
        .jobs
        .or_else(|| ctx.config.jobs_file.clone())
        .ok_or_else(|| anyhow!("no jobs file given; pass --jobs FILE or set jobs_file"))?;
    let jobs = load_jobs(&path)
        .with_context(|| format!("failed to read jobs from {}", path.display()))?;

    if args.all || args.view.is_some() {
        apply_filters(ctx, args.view.as_deref(), &args.filters)?;
    } else {
        for (id, value) in &args.filters.filters {
            ctx.api.add_filter(id, value)?;
        }
    }
    if let Some(search) = &args.search {
        ctx.api.set_search(search)?;
    }
    let sort = match args.sort {
        Some(sort) => sort,
        None => ctx.config.default_sort()?,
    };
    ctx.api.set_sort(sort)?;

    let visible = ctx.api.list_jobs(&jobs);
    match args.output {
        OutputFormat::Json => print_json(&visible)?,
        OutputFormat::Text => {
            print_state_summary(ctx.api.state());
            print_jobs(&visible);
        }
    }
    Ok(())
}

fn handle_catalog(ctx: &AppContext, output: OutputFormat) -> Result<()> {
    let catalog = ctx.api.catalog();
    match output {
        OutputFormat::Json => {
            let entries: Vec<_> = catalog
                .iter()
                .map(|o| {
                    serde_json::json!({
                        "id": o.id,
                        "label": o.label,
                        "options": o.options,
                        "multi": o.multi,
                    })
                })
                .collect();
            print_json(&entries)?;
        }
        OutputFormat::Text => print_catalog(catalog),
    }
    Ok(())
}

fn handle_views_list(ctx: &AppContext, output: OutputFormat) -> Result<()> {
    let views = ctx.api.views();
    match output {
        OutputFormat::Json => print_json(&views)?,
        OutputFormat::Text => print_views(&views, &ctx.api.state().active_view),
    }
    Ok(())
}

fn handle_view_show(ctx: &AppContext, id: &str, output: OutputFormat) -> Result<()> {
    let view = ctx.api.view(id)?;
    match output {
        OutputFormat::Json => print_json(view)?,
        OutputFormat::Text => print_view(view),
    }
    Ok(())
}

fn handle_view_save(
    ctx: &mut AppContext,
    name: &str,
    view: Option<&str>,
    filters: &FilterArgs,
) -> Result<()> {
    apply_filters(ctx, view, filters)?;
    let result = ctx.api.save_view(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view_update(
    ctx: &mut AppContext,
    id: &str,
    name: &str,
    filters: &FilterArgs,
) -> Result<()> {
    apply_filters(ctx, None, filters)?;
    let filters = ctx.api.active_filters().clone();
    let result = ctx.api.update_view(id, name, filters)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_view(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_draft_show(ctx: &AppContext, output: OutputFormat) -> Result<()> {
    let outcome = ctx.api.draft()?;
    match output {
        OutputFormat::Json => match outcome.loaded() {
            Some(draft) => print_json(&draft)?,
            None => println!("null"),
        },
        OutputFormat::Text => print_draft(&outcome)?,
    }
    Ok(())
}

fn handle_draft_clear(ctx: &AppContext) -> Result<()> {
    ctx.api.clear_draft()?;
    println!("Draft cleared.");
    Ok(())
}

fn handle_suggest(ctx: &AppContext, position: &str) -> Result<()> {
    let suggester = HttpSuggester::new(
        ctx.config.suggest_endpoint.clone(),
        ctx.config.suggest_timeout(),
    )?;
    let mut suggestions = SuggestionCache::new(suggester);
    let prefill = ctx.api.prefill_draft(&mut suggestions, position)?;
    print_prefill(&prefill);
    Ok(())
}
