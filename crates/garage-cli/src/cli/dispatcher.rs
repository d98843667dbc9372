use crate::cli::command_handlers::{ConfigHandler, ScreenHandler, ThemeHandler, UsersHandler};
use crate::cli::main_types::{Commands, InventoryArgs, ServiceArgs};
use garage_core::core::filter::StockFilter;
use garage_core::core::services::config_service::ConfigService;
use garage_core::core::services::data_service::ChannelDataService;
use garage_core::core::services::transport::{StoreHandler, spawn_host};
use garage_core::core::ui_state::UiStore;
use garage_core::display::TableDisplay;
use garage_core::domain::{
    Customer, CustomerQuery, Part, PartQuery, ServiceQuery, ServiceStatus, ServiceTicket,
    Vehicle, VehicleQuery,
};
use garage_core::error::AppError;
use garage_core::storage::config::Config;
use garage_core::storage::database::Database;
use garage_core::storage::repository::SqliteRepository;
use garage_core::utils::EnvConfigReader;
use garage_core::utils::logging::print_verbose;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    database: Option<PathBuf>,
    verbose: bool,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        database: Option<PathBuf>,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            database,
            verbose,
        }
    }

    // CLI argument > GARAGE_DATABASE > config file > data directory
    fn database_path(&self) -> Result<PathBuf, AppError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(self.config.database_path()?),
        }
    }

    async fn open_database(&self) -> Result<Database, AppError> {
        let path = self.database_path()?;
        self.log_verbose(&format!("Using database: {}", path.display()));
        let db = Database::open(path).await?;
        db.seed().await;
        Ok(db)
    }

    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone(), self.config_path.clone())
    }

    fn create_display(&self) -> TableDisplay {
        TableDisplay::new().with_colors(!EnvConfigReader::read_no_color())
    }

    fn create_screen_handler(&self, ui: &UiStore) -> ScreenHandler {
        ScreenHandler::new(self.create_display(), ui.clone(), self.config.items_per_page())
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        let ui = UiStore::new(self.config.theme());

        match command {
            Commands::Customers(args) => {
                let repository = SqliteRepository::<Customer>::new(self.open_database().await?);
                let query = CustomerQuery {
                    search: args.search.clone().unwrap_or_default(),
                };
                self.create_screen_handler(&ui)
                    .handle(&repository, args, query, self.verbose)
                    .await
            }
            Commands::Vehicles(args) => {
                let repository = SqliteRepository::<Vehicle>::new(self.open_database().await?);
                let query = VehicleQuery {
                    search: args.search.clone().unwrap_or_default(),
                };
                self.create_screen_handler(&ui)
                    .handle(&repository, args, query, self.verbose)
                    .await
            }
            Commands::Services(ServiceArgs { list, status }) => {
                let status = status
                    .map(|s| s.parse::<ServiceStatus>())
                    .transpose()?;
                let repository =
                    SqliteRepository::<ServiceTicket>::new(self.open_database().await?);
                let query = ServiceQuery {
                    search: list.search.clone().unwrap_or_default(),
                    status,
                };
                self.create_screen_handler(&ui)
                    .handle(&repository, list, query, self.verbose)
                    .await
            }
            Commands::Inventory(InventoryArgs {
                list,
                category,
                stock,
            }) => {
                let stock: StockFilter = stock.parse()?;
                let repository = SqliteRepository::<Part>::new(self.open_database().await?);
                let query = PartQuery {
                    search: list.search.clone().unwrap_or_default(),
                    category,
                    stock,
                };
                self.create_screen_handler(&ui)
                    .handle(&repository, list, query, self.verbose)
                    .await
            }
            Commands::Users { command } => {
                let db = self.open_database().await?;
                let (ipc, _host) = spawn_host(StoreHandler::new(db));
                let service = ChannelDataService::new(ipc);
                let handler = UsersHandler::new(
                    self.create_display(),
                    ui,
                    self.config.items_per_page(),
                );
                handler.handle(command, &service, self.verbose).await
            }
            Commands::Config { command } => {
                let mut config_service = self.create_config_service();
                ConfigHandler::new().handle(command, &mut config_service, self.verbose)
            }
            Commands::Theme { command } => {
                let mut config_service = self.create_config_service();
                ThemeHandler::new().handle(command, &ui, &mut config_service)
            }
        }
    }
}
