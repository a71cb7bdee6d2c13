//! ShelfLine console - interactive inventory menu over the same in-memory
//! storage the API uses.

mod input;
mod menu;

use core_config::env_or_default;
use core_config::tracing::install_color_eyre;
use domain_inventory::{InMemoryProductRepository, InventoryService};
use domain_users::{CreateUser, InMemoryUserRepository, User, UserService};

use menu::Menu;

const LOGIN_ATTEMPTS: u32 = 3;
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Credential hint for the welcome banner.
///
/// Only produced while the seeded account still uses the default password;
/// an operator-supplied password is never echoed.
fn seed_hint(username: &str, password: &str) -> Option<String> {
    (password == DEFAULT_ADMIN_PASSWORD)
        .then(|| format!("(default account: {username} / {DEFAULT_ADMIN_PASSWORD})"))
}

/// Prompt for credentials, allowing a fixed number of attempts.
async fn login(users: &UserService<InMemoryUserRepository>) -> eyre::Result<Option<User>> {
    for remaining in (0..LOGIN_ATTEMPTS).rev() {
        let username = input::read_line("Username: ")?;
        let password = input::read_line("Password: ")?;
        match users.authenticate(&username, &password).await {
            Ok(Some(user)) => return Ok(Some(user)),
            Ok(None) | Err(_) => {
                if remaining > 0 {
                    println!("Invalid credentials, {remaining} attempt(s) left.");
                }
            }
        }
    }
    Ok(None)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let inventory = InventoryService::new(InMemoryProductRepository::new());
    let users = UserService::new(InMemoryUserRepository::new());

    let admin_password = env_or_default("SHELFLINE_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD);
    let admin = users
        .add_user(CreateUser {
            username: env_or_default("SHELFLINE_ADMIN_USER", "admin"),
            password: admin_password.clone(),
            role: "admin".to_string(),
        })
        .await
        .map_err(|e| eyre::eyre!("Failed to seed administrator: {}", e))?;

    println!("Welcome to ShelfLine.");
    if let Some(hint) = seed_hint(&admin.username, &admin_password) {
        println!("{hint}");
    }

    let Some(current_user) = login(&users).await? else {
        println!("Too many failed attempts.");
        return Ok(());
    };
    println!("Logged in as {} ({}).", current_user.username, current_user.role);

    Menu::new(inventory, users, current_user).run().await
}
