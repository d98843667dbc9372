use crate::cli::main_types::{ConfigCommands, ListArgs, ThemeCommands, UserCommands};
use garage_core::core::record::Record;
use garage_core::core::screen::{ActionKind, ListScreen, ScreenEvent, ScreenRecord};
use garage_core::core::services::config_service::ConfigService;
use garage_core::core::services::data_service::{DataService, ServiceResponse};
use garage_core::core::services::traits::Repository;
use garage_core::core::ui_state::{Theme, UiStore};
use garage_core::display::TableDisplay;
use garage_core::domain::part::categories;
use garage_core::domain::{Customer, NewUser, Part, ServiceTicket, User, UserQuery, Vehicle};
use garage_core::error::{AppError, CliError, TransportError};
use garage_core::utils::logging::print_verbose;
use garage_core::utils::text::heading;
use garage_core::utils::validation::{validate_email, validate_name, validate_page_size};
use serde::Serialize;

/// What the store should do after a row action ran
pub enum Effect<T> {
    Nothing,
    Remove,
    Replace(T),
}

/// Per-screen behaviour of the terminal front-end
pub trait CliScreen: ScreenRecord {
    /// Store change requested by `action` on this record
    fn effect(&self, action: ActionKind) -> Result<Effect<Self>, AppError> {
        Ok(match action {
            ActionKind::Delete => Effect::Remove,
            _ => Effect::Nothing,
        })
    }

    /// Extra line printed under the screen title
    fn summary(_records: &[Self]) -> Option<String> {
        None
    }
}

impl CliScreen for Customer {}

impl CliScreen for Vehicle {}

impl CliScreen for ServiceTicket {
    fn effect(&self, action: ActionKind) -> Result<Effect<Self>, AppError> {
        match action {
            ActionKind::StartService | ActionKind::MarkComplete => {
                let mut ticket = self.clone();
                ticket.advance()?;
                Ok(Effect::Replace(ticket))
            }
            ActionKind::Delete => Ok(Effect::Remove),
            _ => Ok(Effect::Nothing),
        }
    }
}

impl CliScreen for Part {
    fn summary(records: &[Self]) -> Option<String> {
        let categories = categories(records);
        (!categories.is_empty()).then(|| format!("Categories: {}", categories.join(", ")))
    }
}

/// Renders list screens backed by an entity repository
pub struct ScreenHandler {
    display: TableDisplay,
    ui: UiStore,
    items_per_page: usize,
}

impl ScreenHandler {
    pub fn new(display: TableDisplay, ui: UiStore, items_per_page: usize) -> Self {
        Self {
            display,
            ui,
            items_per_page,
        }
    }

    pub async fn handle<T, R>(
        &self,
        repository: &R,
        args: ListArgs,
        query: T::Query,
        verbose: bool,
    ) -> Result<(), AppError>
    where
        T: CliScreen,
        R: Repository<T> + ?Sized,
    {
        let page_size = args.page_size.unwrap_or(self.items_per_page);
        validate_page_size(page_size)?;

        let mut screen = ListScreen::<T>::new(self.ui.clone()).with_items_per_page(page_size)?;
        screen.set_records(repository.list().await?);
        screen.set_query(query);
        screen.go_to_page(args.page);

        print_verbose(
            verbose,
            &format!(
                "{}: {} of {} records match. {}",
                T::TITLE,
                screen.filtered().len(),
                screen.records().len(),
                screen.table().pagination().info()
            ),
        );

        if let Some(id) = &args.menu {
            open_menu(&mut screen, id)?;
        }

        if let Some(label) = &args.invoke {
            let events = screen.invoke(label)?;
            if self.apply_events(repository, &screen, &events, verbose).await? {
                screen.set_records(repository.list().await?);
            }
        }

        self.render(&screen);
        Ok(())
    }

    /// Returns `true` when the store changed
    async fn apply_events<T, R>(
        &self,
        repository: &R,
        screen: &ListScreen<T>,
        events: &[ScreenEvent],
        verbose: bool,
    ) -> Result<bool, AppError>
    where
        T: CliScreen,
        R: Repository<T> + ?Sized,
    {
        let mut changed = false;
        for event in events {
            println!("→ {} {}", event.action, event.record);

            let Some(record) = screen.records().iter().find(|r| r.record_id() == event.record)
            else {
                continue;
            };
            match record.effect(event.action)? {
                Effect::Nothing => {}
                Effect::Remove => {
                    repository.delete(&event.record).await?;
                    println!("✅ Deleted {} {}", T::TITLE.to_lowercase(), event.record);
                    changed = true;
                }
                Effect::Replace(updated) => {
                    repository.update(updated).await?;
                    println!("✅ Updated {} {}", T::TITLE.to_lowercase(), event.record);
                    changed = true;
                }
            }
            print_verbose(verbose, &format!("applied {}", event.action));
        }
        Ok(changed)
    }

    fn render<T: CliScreen>(&self, screen: &ListScreen<T>) {
        println!("{}", heading(screen.title()));
        if let Some(summary) = T::summary(screen.records()) {
            println!("{}", summary);
        }

        let view = screen.view();
        println!("{}", self.display.render_table(&view));

        if let Some(menu) = &view.menu {
            println!("{}", self.display.render_menu(menu));
        }

        if let (Some(record), Some(fields)) = (screen.selected_record(), screen.detail()) {
            let title = format!("{} {}", T::TITLE, record.record_id());
            println!("{}", self.display.render_detail(&title, &fields));
        }
    }
}

fn open_menu<T: ScreenRecord>(screen: &mut ListScreen<T>, id: &str) -> Result<(), AppError> {
    let view = screen.view();
    let Some(row) = view.rows.iter().find(|row| row.id.to_string() == id) else {
        return Err(CliError::InvalidArguments(format!(
            "No record '{}' on page {} of {}",
            id,
            view.pager.layout.current_page,
            view.pager.layout.total_pages
        ))
        .into());
    };
    let record_id = row.id.clone();
    screen.toggle_menu(&record_id);
    Ok(())
}

/// Users go through the data access facade rather than a repository
pub struct UsersHandler {
    display: TableDisplay,
    ui: UiStore,
    items_per_page: usize,
}

impl UsersHandler {
    pub fn new(display: TableDisplay, ui: UiStore, items_per_page: usize) -> Self {
        Self {
            display,
            ui,
            items_per_page,
        }
    }

    pub async fn handle(
        &self,
        command: UserCommands,
        service: &dyn DataService,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            UserCommands::List {
                search,
                page,
                page_size,
            } => {
                let page_size = page_size.unwrap_or(self.items_per_page);
                validate_page_size(page_size)?;

                print_verbose(verbose, "Requesting users over the data channel");
                let users = into_result(service.list_users().await)?;

                let mut screen =
                    ListScreen::<User>::new(self.ui.clone()).with_items_per_page(page_size)?;
                screen.set_records(users);
                screen.set_query(UserQuery {
                    search: search.unwrap_or_default(),
                });
                screen.go_to_page(page);
                print_verbose(verbose, &screen.table().pagination().info());

                println!("{}", heading(screen.title()));
                println!("{}", self.display.render_table(&screen.view()));
                Ok(())
            }
            UserCommands::Add { name, email } => {
                validate_name(&name)?;
                validate_email(&email)?;

                print_verbose(verbose, &format!("Adding user <{}>", email));
                let response = service.add_user(NewUser::new(name, email)).await;
                print_json(&response)?;
                into_result(response).map(|_| ())
            }
        }
    }
}

fn into_result<T>(response: ServiceResponse<T>) -> Result<T, AppError> {
    response
        .into_result()
        .map_err(|error| TransportError::Remote(error).into())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        CliError::InvalidArguments(format!("Failed to format response: {}", e))
    })?;
    println!("{}", text);
    Ok(())
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Showing configuration");
                let config = config_service.config();

                println!("{}", heading("Current Configuration"));
                println!("Config File: {}", config_service.config_path()?.display());
                println!("Database: {}", config.database_path()?.display());
                println!("Rows Per Page: {}", config.items_per_page());
                println!("Theme: {}", config.theme());
                Ok(())
            }
            ConfigCommands::Set {
                database,
                page_size,
                theme,
            } => {
                let mut updated_fields = Vec::new();

                if let Some(path) = database {
                    updated_fields.push(format!("database to: {}", path.display()));
                    config_service.set_database_path(path);
                }

                if let Some(size) = page_size {
                    config_service.set_items_per_page(size)?;
                    updated_fields.push(format!("rows per page to: {}", size));
                }

                if let Some(value) = theme {
                    let theme: Theme = value.parse()?;
                    config_service.set_theme(theme);
                    updated_fields.push(format!("theme to: {}", theme));
                }

                if updated_fields.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "No configuration values provided. Use --database, --page-size and/or --theme"
                            .to_string(),
                    )
                    .into());
                }

                println!("✅ Set {}", updated_fields.join(", "));
                config_service.save_config()?;
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct ThemeHandler;

impl ThemeHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ThemeCommands,
        ui: &UiStore,
        config_service: &mut ConfigService,
    ) -> Result<(), AppError> {
        match command {
            ThemeCommands::Toggle => {
                let theme = ui.toggle_theme();
                config_service.set_theme(theme);
                config_service.save_config()?;
                println!("Theme: {}", theme);
                Ok(())
            }
        }
    }
}
