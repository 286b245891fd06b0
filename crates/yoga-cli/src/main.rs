use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use yoga_cli::admin::{AdminAccount, create_admin};
use yoga_cli::seeder::{self, SeedConfig};
use yoga_config::DatabaseConfig;
use yoga_db::{PgStore, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "yoga-cli")]
#[command(about = "Yoga Studio CLI - Administrative tools for the studio API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a new admin account
    CreateAdmin {
        /// First name of the admin
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the admin
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake teachers and sessions
    Seed {
        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Number of sessions to create
        #[arg(short = 's', long, default_value = "20")]
        sessions: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = init_db_pool(&config).await?;

    match cli.command {
        Commands::Migrate => {
            run_migrations(&pool).await?;
            println!("✅ Migrations applied");
        }
        Commands::CreateAdmin {
            first_name,
            last_name,
            email,
            password,
        } => {
            let account = prompt_admin(first_name, last_name, email, password)?;
            let store = PgStore::new(pool);

            match create_admin(&store, account).await {
                Ok(user) => {
                    println!("\n✅ Admin created successfully!");
                    println!("   Email: {}", user.email);
                    println!("   Name: {} {}", user.first_name, user.last_name);
                }
                Err(e) => {
                    eprintln!("\n❌ Error creating admin: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Seed { teachers, sessions } => {
            let store = PgStore::new(pool);
            let summary = seeder::seed_all(&store, SeedConfig { teachers, sessions }).await?;
            println!(
                "   {} teachers, {} sessions",
                summary.teachers, summary.sessions
            );
        }
    }

    Ok(())
}

fn prompt_admin(
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<AdminAccount> {
    let first_name = match first_name {
        Some(v) => v,
        None => Input::new().with_prompt("First name").interact_text()?,
    };

    let last_name = match last_name {
        Some(v) => v,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    let email = match email {
        Some(v) => v,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(v) => v,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    Ok(AdminAccount {
        email,
        first_name,
        last_name,
        password,
    })
}
