use clap::{Parser, Subcommand, ValueEnum};
use sea_orm::{EntityTrait, QueryOrder};
use empresas_obrigacoes::{
    config::Config,
    database::{self, models::{empresa, obrigacao_acessoria}, schema},
};

/// Administration utility for the empresas / obrigações database.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Database maintenance commands.
    Db {
        #[command(subcommand)]
        db_command: DbCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Creates the tables if they do not exist.
    Init,
    /// Drops both tables and every row in them. Use with care!
    Wipe,
    /// Prints every row of a table as pretty JSON.
    Dump {
        #[arg(short, long, value_enum)]
        table: Table,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Table {
    Empresas,
    Obrigacoes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let db = database::connect_with_settings(&config.database_settings()).await?;

    match cli.command {
        Commands::Db { db_command } => match db_command {
            DbCommand::Init => {
                schema::create_all(&db).await?;
                println!("Schema created.");
            }
            DbCommand::Wipe => {
                schema::drop_all(&db).await?;
                println!("Schema dropped.");
            }
            DbCommand::Dump { table } => {
                let json = match table {
                    Table::Empresas => serde_json::to_string_pretty(
                        &empresa::Entity::find()
                            .order_by_asc(empresa::Column::Id)
                            .all(&db)
                            .await?,
                    )?,
                    Table::Obrigacoes => serde_json::to_string_pretty(
                        &obrigacao_acessoria::Entity::find()
                            .order_by_asc(obrigacao_acessoria::Column::Id)
                            .all(&db)
                            .await?,
                    )?,
                };
                println!("{}", json);
            }
        },
    }

    Ok(())
}
