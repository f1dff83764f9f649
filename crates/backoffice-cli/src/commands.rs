use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result, anyhow, bail};
use backoffice_cli::backend::{Backend, load_config};
use backoffice_cli::prompt::{LineConfirm, StderrNotifier, read_line};
use backoffice_cli::render;
use backoffice_client::{AdminConfig, ApiError, AuthClient, FileTokenStore, Operation};
use backoffice_dashboard::{Dashboard, LoadOptions};
use backoffice_model::{
    Banner, BlogPost, Career, Certification, Client, ContactRequest, Domain, Faq, Filters,
    Partner, Project, Record, Service, Solution, Stat, TeamMember, Testimonial,
};
use backoffice_store::{
    ActionOutcome, Actions, AssumeYes, Confirm, DomainStore, StoreError, StoreOptions, export,
};
use chrono::Utc;
use serde_json::Value;

use crate::cli::{
    Cli, Command, ConfigArgs, CreateArgs, DashboardArgs, ExportArgs, FilterArgs, IdsArgs,
    InputArgs, ListArgs, LoginArgs, RecordArgs, UpdateArgs,
};

const LOGIN_HINT: &str = "run `backoffice login --email <address>` to sign in again";

/// Run `$body` with `$T` bound to the record type of `$domain`.
macro_rules! with_record {
    ($domain:expr, $T:ident => $body:expr) => {
        match $domain {
            Domain::Banners => {
                type $T = Banner;
                $body
            }
            Domain::BlogPosts => {
                type $T = BlogPost;
                $body
            }
            Domain::Careers => {
                type $T = Career;
                $body
            }
            Domain::Certifications => {
                type $T = Certification;
                $body
            }
            Domain::Clients => {
                type $T = Client;
                $body
            }
            Domain::ContactRequests => {
                type $T = ContactRequest;
                $body
            }
            Domain::Faqs => {
                type $T = Faq;
                $body
            }
            Domain::Partners => {
                type $T = Partner;
                $body
            }
            Domain::Projects => {
                type $T = Project;
                $body
            }
            Domain::Services => {
                type $T = Service;
                $body
            }
            Domain::Solutions => {
                type $T = Solution;
                $body
            }
            Domain::Stats => {
                type $T = Stat;
                $body
            }
            Domain::TeamMembers => {
                type $T = TeamMember;
                $body
            }
            Domain::Testimonials => {
                type $T = Testimonial;
                $body
            }
        }
    };
}

/// A failure the user has already seen as an error toast.
#[derive(Debug)]
pub struct Reported;

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("command failed")
    }
}

impl std::error::Error for Reported {}

/// Everything a content command needs.
struct Session {
    backend: Arc<Backend>,
    config: AdminConfig,
    confirm: Box<dyn Confirm>,
    notifier: StderrNotifier,
}

impl Session {
    fn store<T: Record>(&self) -> DomainStore<T, Backend> {
        DomainStore::new(Arc::clone(&self.backend), StoreOptions::from_config(&self.config))
    }

    fn actions(&self) -> Actions<'_, dyn Confirm, StderrNotifier> {
        Actions::new(self.confirm.as_ref(), &self.notifier)
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.application_id.as_deref())?;
    let sessions = FileTokenStore::default_location();

    match &cli.command {
        Command::Login(args) => return login(&config, &sessions, args).await,
        Command::Logout => {
            AuthClient::new(&config)?.logout(&sessions)?;
            println!("Signed out.");
            return Ok(());
        }
        Command::Whoami => return whoami(&config, &sessions).await,
        Command::Config(args) => return show_config(&config, cli.config.as_deref(), args),
        Command::Domains => {
            println!("{}", render::domains_table());
            return Ok(());
        }
        _ => {}
    }

    let backend = Backend::open(cli.demo, &config, &sessions)?;
    tracing::debug!(backend = %backend.describe(), "connected");
    let confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(LineConfirm::terminal())
    };
    let session = Session {
        backend: Arc::new(backend),
        config,
        confirm,
        notifier: StderrNotifier,
    };

    match cli.command {
        Command::List(args) => with_record!(args.filter.domain, T => list::<T>(&session, &args).await),
        Command::Show(args) => with_record!(args.domain, T => show::<T>(&session, &args).await),
        Command::Stats(args) => with_record!(args.domain, T => stats::<T>(&session, &args).await),
        Command::Toggle(args) => with_record!(args.domain, T => toggle::<T>(&session, &args).await),
        Command::Delete(args) => with_record!(args.domain, T => delete::<T>(&session, &args).await),
        Command::BulkDelete(args) => {
            with_record!(args.domain, T => bulk_delete::<T>(&session, &args).await)
        }
        Command::Reorder(args) => with_record!(args.domain, T => reorder::<T>(&session, &args).await),
        Command::Export(args) => {
            with_record!(args.filter.domain, T => export_csv::<T>(&session, &args).await)
        }
        Command::Create(args) => with_record!(args.domain, T => create::<T>(&session, &args).await),
        Command::Update(args) => with_record!(args.domain, T => update::<T>(&session, &args).await),
        Command::Dashboard(args) => dashboard(&session, &args).await,
        Command::Login(_)
        | Command::Logout
        | Command::Whoami
        | Command::Config(_)
        | Command::Domains => Ok(()),
    }
}

async fn login(config: &AdminConfig, sessions: &FileTokenStore, args: &LoginArgs) -> Result<()> {
    let auth = AuthClient::new(config)?;
    let code = match &args.code {
        Some(code) => code.clone(),
        None => {
            let sent = auth.request_otp(&args.email).await.map_err(api_error)?;
            if let Some(message) = sent.message {
                eprintln!("{message}");
            }
            read_line("Code: ").context("read login code")?
        }
    };
    let session = auth
        .verify_otp(&args.email, &code, sessions)
        .await
        .map_err(api_error)?;
    println!("Signed in as {}.", render::user_line(&session.user));
    Ok(())
}

async fn whoami(config: &AdminConfig, sessions: &FileTokenStore) -> Result<()> {
    let user = AuthClient::new(config)?
        .me(sessions)
        .await
        .map_err(api_error)?;
    println!("{} (id {})", render::user_line(&user), user.id);
    Ok(())
}

/// Print the effective settings, or save them with `--save`.
fn show_config(config: &AdminConfig, path: Option<&Path>, args: &ConfigArgs) -> Result<()> {
    let path = config_file(path);
    if args.save {
        config
            .save_to(&path)
            .with_context(|| format!("write {}", path.display()))?;
        println!("Saved {}", path.display());
    } else {
        println!("# {}", path.display());
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

fn config_file(path: Option<&Path>) -> PathBuf {
    path.map_or_else(AdminConfig::config_path, Path::to_path_buf)
}

#[tracing::instrument(skip_all, fields(domain = %T::DOMAIN))]
async fn list<T: Record>(session: &Session, args: &ListArgs) -> Result<()> {
    let store = loaded::<T>(session, &args.filter).await?;
    let mut rows = store.filtered_items();
    let matching = rows.len();
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    println!("{}", render::records_table(&rows));
    println!("{} of {} {}", rows.len(), matching, T::DOMAIN.plural());
    Ok(())
}

async fn show<T: Record>(session: &Session, args: &RecordArgs) -> Result<()> {
    let mut store = session.store::<T>();
    let record = store
        .fetch_by_id(&args.id)
        .await
        .map_err(store_error::<T>)?;
    println!("{}", render::record_detail(&record));
    Ok(())
}

async fn stats<T: Record>(session: &Session, args: &FilterArgs) -> Result<()> {
    let store = loaded::<T>(session, args).await?;
    println!("{}", render::statistics_table(T::DOMAIN, store.statistics()));
    Ok(())
}

async fn toggle<T: Record>(session: &Session, args: &RecordArgs) -> Result<()> {
    let mut store = session.store::<T>();
    session
        .actions()
        .toggle_status(&mut store, &args.id)
        .await
        .map_err(reported)?;
    Ok(())
}

async fn delete<T: Record>(session: &Session, args: &RecordArgs) -> Result<()> {
    let mut store = session.store::<T>();
    let outcome = session
        .actions()
        .delete(&mut store, &args.id)
        .await
        .map_err(reported)?;
    announce_cancel(&outcome);
    Ok(())
}

async fn bulk_delete<T: Record>(session: &Session, args: &IdsArgs) -> Result<()> {
    let mut store = session.store::<T>();
    let outcome = session
        .actions()
        .bulk_delete(&mut store, &args.ids)
        .await
        .map_err(reported)?;
    announce_cancel(&outcome);
    Ok(())
}

async fn reorder<T: Record>(session: &Session, args: &IdsArgs) -> Result<()> {
    let mut store = session.store::<T>();
    session
        .actions()
        .reorder(&mut store, &args.ids)
        .await
        .map_err(reported)
}

#[tracing::instrument(skip_all, fields(domain = %T::DOMAIN))]
async fn export_csv<T: Record>(session: &Session, args: &ExportArgs) -> Result<()> {
    let store = loaded::<T>(session, &args.filter).await?;
    let actions = session.actions();
    match args.output.as_deref() {
        Some(path) if path == Path::new("-") => {
            actions
                .export_csv(&store, io::stdout().lock())
                .map_err(reported)?;
        }
        output => {
            let path = output.map_or_else(
                || export::file_name(T::DOMAIN, Utc::now()).into(),
                Path::to_path_buf,
            );
            actions
                .export_csv_to_path(&store, &path)
                .map_err(reported)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

async fn create<T: Record>(session: &Session, args: &CreateArgs) -> Result<()> {
    let input: T::Input = parse_input(&args.input, session.config.application_id.as_deref())?;
    let mut store = session.store::<T>();
    let created = session
        .actions()
        .create(&mut store, &input)
        .await
        .map_err(reported)?;
    println!("{}", render::record_detail(&created));
    Ok(())
}

async fn update<T: Record>(session: &Session, args: &UpdateArgs) -> Result<()> {
    let input: T::Input = parse_input(&args.input, None)?;
    let mut store = session.store::<T>();
    let updated = session
        .actions()
        .update(&mut store, &args.id, &input)
        .await
        .map_err(reported)?;
    println!("{}", render::record_detail(&updated));
    Ok(())
}

async fn dashboard(session: &Session, args: &DashboardArgs) -> Result<()> {
    let now = Utc::now();
    let dashboard = Dashboard::load(
        session.backend.as_ref(),
        &LoadOptions::from_config(&session.config),
        now,
    )
    .await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }
    println!("{}", render::generated_line(dashboard.generated_at, Utc::now()));
    println!("{}", render::dashboard_table(&dashboard));
    for line in render::dashboard_highlights(&dashboard) {
        println!("{line}");
    }
    Ok(())
}

async fn loaded<T: Record>(session: &Session, args: &FilterArgs) -> Result<DomainStore<T, Backend>> {
    let mut store = session.store::<T>();
    store
        .fetch_all(filters(args))
        .await
        .map_err(store_error::<T>)?;
    Ok(store)
}

fn filters(args: &FilterArgs) -> Filters {
    let mut filters = Filters::default().with_status(args.status);
    if let Some(search) = &args.search {
        filters = filters.with_search(search.as_str());
    }
    if let Some(category) = &args.category {
        filters = filters.with_category(category.as_str());
    }
    filters
}

/// Decode a create/update payload from `--json` or `--file`.
///
/// When `application_id` is given and the payload names no tenant, the
/// payload is scoped to it.
fn parse_input<I: serde::de::DeserializeOwned>(
    args: &InputArgs,
    application_id: Option<&str>,
) -> Result<I> {
    let text = match (&args.json, &args.file) {
        (Some(json), _) => json.clone(),
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        (None, None) => bail!("pass the input object with --json or --file"),
    };
    let mut value: Value = serde_json::from_str(&text).context("input is not valid JSON")?;
    let Value::Object(object) = &mut value else {
        bail!("input must be a JSON object");
    };
    if let Some(application_id) = application_id {
        object
            .entry("application_id")
            .or_insert_with(|| Value::String(application_id.to_string()));
    }
    serde_json::from_value(value).context("input does not match the record fields")
}

fn announce_cancel<T>(outcome: &ActionOutcome<T>) {
    if outcome.is_cancelled() {
        eprintln!("Cancelled.");
    }
}

fn reported(err: StoreError) -> anyhow::Error {
    tracing::debug!(error = %err, "action failed");
    if err.is_auth() {
        eprintln!("hint: {LOGIN_HINT}");
    }
    anyhow::Error::new(Reported)
}

fn store_error<T: Record>(err: StoreError) -> anyhow::Error {
    let message = err.user_message(T::DOMAIN, Operation::Load);
    if err.is_auth() {
        anyhow!("{message}\nhint: {LOGIN_HINT}")
    } else {
        anyhow!(message)
    }
}

fn api_error(err: ApiError) -> anyhow::Error {
    if err.is_auth() {
        anyhow::Error::new(err).context(LOGIN_HINT)
    } else {
        anyhow::Error::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_model::{FaqInput, TestimonialInput};

    fn inline(json: &str) -> InputArgs {
        InputArgs {
            json: Some(json.to_string()),
            file: None,
        }
    }

    #[test]
    fn input_is_scoped_to_the_tenant() {
        let input: FaqInput = parse_input(&inline(r#"{"question":"Why?"}"#), Some("site-a")).unwrap();
        assert_eq!(input.question.as_deref(), Some("Why?"));
        assert_eq!(input.application_id.as_deref(), Some("site-a"));

        let explicit: FaqInput =
            parse_input(&inline(r#"{"application_id":"site-b"}"#), Some("site-a")).unwrap();
        assert_eq!(explicit.application_id.as_deref(), Some("site-b"));
    }

    #[test]
    fn input_must_be_an_object() {
        assert!(parse_input::<FaqInput>(&inline("[1, 2]"), None).is_err());
        assert!(parse_input::<FaqInput>(&inline("{not json"), None).is_err());
        let missing = InputArgs {
            json: None,
            file: None,
        };
        assert!(parse_input::<FaqInput>(&missing, None).is_err());
    }

    #[test]
    fn input_is_read_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, r#"{"author_name":"Ana","rating":5}"#).unwrap();
        let args = InputArgs {
            json: None,
            file: Some(path),
        };
        let input: TestimonialInput = parse_input(&args, None).unwrap();
        assert_eq!(input.rating, Some(5));
    }

    #[test]
    fn rejected_sessions_suggest_logging_in() {
        let err = store_error::<Faq>(StoreError::from(ApiError::Unauthorized));
        assert!(err.to_string().contains("backoffice login"));

        let err = store_error::<Faq>(StoreError::from(ApiError::Network("reset".to_string())));
        assert_eq!(err.to_string(), "Failed to load FAQs");

        let err = api_error(ApiError::Unauthorized);
        assert!(format!("{err:#}").starts_with(LOGIN_HINT));
        assert!(err.downcast_ref::<ApiError>().is_some_and(ApiError::is_auth));
    }

    #[test]
    fn config_is_saved_to_the_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings").join("config.toml");
        let config = AdminConfig {
            application_id: Some("site-a".to_string()),
            page_size: 25,
            ..AdminConfig::default()
        };
        show_config(&config, Some(path.as_path()), &ConfigArgs { save: true }).unwrap();
        assert_eq!(AdminConfig::load_from(&path).unwrap(), config);
        assert_eq!(config_file(Some(path.as_path())), path);
    }

    #[test]
    fn dispatch_covers_every_domain() {
        for domain in Domain::ALL {
            let columns = with_record!(domain, T => T::COLUMNS);
            let resolved = with_record!(domain, T => T::DOMAIN);
            assert_eq!(resolved, domain);
            assert!(!columns.is_empty());
        }
    }
}
