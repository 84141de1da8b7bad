use anyhow::Result;

use realty_crm::backend::create_user_directory;
use realty_crm::config::Config;
use realty_crm::constants::ERROR_NO_API_TOKEN;
use realty_crm::logger::Logger;
use realty_crm::services::UserManagement;

const USAGE: &str = "Usage:\n  realty-crm users [query]   List admin users, optionally filtered by name\n  realty-crm init-config     Write the default configuration file";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("init-config") => {
            let path = Config::get_default_config_path()?;
            Config::generate_default_config(&path)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        Some("users") => {
            let query = args[1..].join(" ");
            list_users(&query).await
        }
        _ => {
            eprintln!("{}", USAGE);
            Ok(())
        }
    }
}

async fn list_users(query: &str) -> Result<()> {
    let config = Config::load()?;
    Logger::new().init(&config.logging)?;

    if config.api.token().is_none() {
        eprintln!("{} ({})", ERROR_NO_API_TOKEN, config.api.token_env);
        return Ok(());
    }

    let users = UserManagement::new(create_user_directory(&config.api)?);

    if let Err(e) = users.refresh().await {
        let alert = e.alert();
        eprintln!("{}: {}", alert.title, alert.message);
        return Ok(());
    }

    for user in users.search(query).await {
        println!("{:>6}  {:<28} {:<14} {}", user.id, user.full_name, user.status, user.email);
    }
    Ok(())
}
