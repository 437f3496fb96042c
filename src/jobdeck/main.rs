use clap::Parser;
use directories::ProjectDirs;
use jobdeck::api::{ConfigAction, JobUpdate, JobdeckApi, ListFilter};
use jobdeck::config::JobdeckConfig;
use jobdeck::error::{JobdeckError, Result};
use jobdeck::model::{parse_date, DocumentDraft, NewJob};
use jobdeck::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod cli;
use args::{Cli, Commands, DocCommands, JobFields};
use cli::{
    print_analytics, print_board, print_config, print_documents, print_full_document,
    print_jobs, print_messages, print_paging,
};

const STORAGE_DIR: &str = "storage";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: JobdeckApi<FsBackend>,
    config: JobdeckConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            company,
            fields,
            status,
            from,
        }) => handle_add(&ctx, title, company, fields, status, from),
        Some(Commands::List {
            statuses,
            source,
            search,
            sort,
            page,
            all,
        }) => {
            let filter = ListFilter {
                statuses,
                source,
                search,
                sort,
                page,
                per_page: Some(if all { 0 } else { ctx.config.page_size }),
            };
            handle_list(&ctx, filter)
        }
        Some(Commands::Board) => handle_board(&ctx),
        Some(Commands::Move { id, status }) => handle_move(&ctx, &id, &status),
        Some(Commands::Update {
            id,
            title,
            company,
            fields,
        }) => handle_update(&ctx, &id, title, company, fields),
        Some(Commands::Rm { ids }) => handle_rm(&ctx, ids),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Import { file, from }) => handle_import(&ctx, file, &from),
        Some(Commands::Doc { action }) => handle_doc(&ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_board(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let loaded = JobdeckConfig::load(&data_dir);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(cli.verbose, &config.log_level);
    if let Err(e) = &loaded {
        warn!(error = %e, "config.json unreadable, using defaults");
    }
    debug!(data_dir = %data_dir.display(), "starting jobdeck");

    let backend = FsBackend::new(data_dir.join(STORAGE_DIR));
    let api = JobdeckApi::new(backend, data_dir);
    Ok(AppContext { api, config })
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("JOBDECK_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "jobdeck", "jobdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JobdeckError::Store("Could not determine data directory".into()))
}

fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("jobdeck=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("jobdeck={}", default_level)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn handle_add(
    ctx: &AppContext,
    title: Option<String>,
    company: Option<String>,
    fields: JobFields,
    status: Option<String>,
    from: Option<String>,
) -> Result<()> {
    let input = NewJob {
        title,
        company,
        location: fields.location,
        salary: fields.salary,
        source: fields.source,
        url: fields.url,
        notes: fields.notes,
        description: fields.description,
        why_match: fields.why_match,
        match_score: fields.score,
        posted_date: fields.posted,
        application_date: parse_date_arg(fields.applied_on.as_deref())?,
        interview_date: parse_date_arg(fields.interview_on.as_deref())?,
    };
    let from = from.unwrap_or_else(|| ctx.config.default_source.clone());

    let result = ctx.api.add_job(input, &from, status.as_deref())?;
    print_jobs(&result.jobs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: ListFilter) -> Result<()> {
    let result = ctx.api.list_jobs(filter)?;
    print_jobs(&result.jobs);
    if let Some(paging) = result.paging {
        print_paging(&paging);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_board(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.board()?;
    if let Some(board) = &result.board {
        print_board(board);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &AppContext, id: &str, status: &str) -> Result<()> {
    let result = ctx.api.move_job(id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &AppContext,
    id: &str,
    title: Option<String>,
    company: Option<String>,
    fields: JobFields,
) -> Result<()> {
    let update = JobUpdate {
        title,
        company,
        location: fields.location,
        salary: fields.salary,
        source: fields.source,
        url: fields.url,
        notes: fields.notes,
        description: fields.description,
        why_match: fields.why_match,
        match_score: fields.score,
        posted_date: fields.posted,
        application_date: parse_date_edit(fields.applied_on.as_deref())?,
        interview_date: parse_date_edit(fields.interview_on.as_deref())?,
    };
    let result = ctx.api.update_job(id, update)?;
    print_jobs(&result.jobs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_rm(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_jobs(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(analytics) = &result.analytics {
        print_analytics(analytics);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &AppContext, file: PathBuf, from: &str) -> Result<()> {
    let result = ctx.api.import_jobs(&file, from)?;
    print_jobs(&result.jobs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_doc(ctx: &AppContext, action: DocCommands) -> Result<()> {
    let result = match action {
        DocCommands::Save {
            id,
            title,
            doc_type,
            content,
            file,
            job_title,
            company,
            status,
            ats_score,
        } => {
            let content = match file {
                Some(path) => Some(std::fs::read_to_string(path).map_err(JobdeckError::Io)?),
                None => content,
            };
            let draft = DocumentDraft {
                id,
                title,
                doc_type: doc_type.map(|t| t.parse()).transpose()?,
                content,
                job_title,
                company,
                status: status.map(|s| s.parse()).transpose()?,
                ats_score,
            };
            let result = ctx.api.save_document(draft)?;
            print_documents(&result.documents);
            result
        }
        DocCommands::List { doc_type, search } => {
            let result = ctx
                .api
                .list_documents(doc_type.as_deref(), search.as_deref())?;
            print_documents(&result.documents);
            result
        }
        DocCommands::Show { id } => {
            let result = ctx.api.show_document(&id)?;
            for doc in &result.documents {
                print_full_document(doc);
            }
            result
        }
        DocCommands::Rm { ids } => ctx.api.delete_documents(&ids)?,
        DocCommands::Export { id, dir } => {
            let dir = match dir.or_else(|| ctx.config.export_dir.clone()) {
                Some(dir) => dir,
                None => std::env::current_dir().map_err(JobdeckError::Io)?,
            };
            ctx.api.export_document(&id, &dir)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_date_arg(raw: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| JobdeckError::Api(format!("Invalid date: {} (expected YYYY-MM-DD)", raw))),
    }
}

/// Like `parse_date_arg`, but "none" (or an empty value) clears the date.
fn parse_date_edit(raw: Option<&str>) -> Result<Option<Option<chrono::NaiveDate>>> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Ok(Some(None)),
        Some(v) if v.eq_ignore_ascii_case("none") => Ok(Some(None)),
        Some(v) => parse_date_arg(Some(v)).map(Some),
    }
}
