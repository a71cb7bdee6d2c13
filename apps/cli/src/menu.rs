//! Interactive menu loop.
//!
//! Every action runs in the context of the user who logged in; user
//! management is only offered when that user's role allows it.

use domain_inventory::{CreateProduct, InMemoryProductRepository, InventoryService, Product};
use domain_users::{
    CreateUser, InMemoryUserRepository, Operation, User, UserService, can_access,
};

use crate::input;

pub struct Menu {
    inventory: InventoryService<InMemoryProductRepository>,
    users: UserService<InMemoryUserRepository>,
    current_user: User,
}

fn print_product(product: &Product) {
    println!(
        "  #{} {} | qty {} | ${:.2} | {}",
        product.id, product.name, product.quantity, product.price, product.category
    );
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    for product in products {
        print_product(product);
    }
}

fn print_user(user: &User) {
    println!("  #{} {} ({})", user.id, user.username, user.role);
}

impl Menu {
    pub fn new(
        inventory: InventoryService<InMemoryProductRepository>,
        users: UserService<InMemoryUserRepository>,
        current_user: User,
    ) -> Self {
        Self {
            inventory,
            users,
            current_user,
        }
    }

    pub async fn run(&self) -> eyre::Result<()> {
        let manage_users = can_access(self.current_user.role, Operation::ManageUsers);
        loop {
            println!();
            println!("=== ShelfLine ({}) ===", self.current_user.username);
            println!(" 1. Add product");
            println!(" 2. View product by id");
            println!(" 3. View all products");
            println!(" 4. Update product");
            println!(" 5. Delete product");
            println!(" 6. Search by category");
            println!(" 7. Search by name");
            println!(" 8. Low stock report");
            println!(" 9. Update stock quantity");
            if manage_users {
                println!("10. User management");
            }
            println!(" 0. Exit");

            match input::prompt_i32("Choose an option: ")? {
                1 => self.add_product().await?,
                2 => self.view_product().await?,
                3 => self.view_all().await?,
                4 => self.update_product().await?,
                5 => self.delete_product().await?,
                6 => self.search_by_category().await?,
                7 => self.search_by_name().await?,
                8 => self.low_stock().await?,
                9 => self.update_stock().await?,
                10 if manage_users => self.user_management().await?,
                0 => {
                    println!("Goodbye.");
                    return Ok(());
                }
                _ => println!("Invalid option."),
            }
        }
    }

    async fn add_product(&self) -> eyre::Result<()> {
        let input = CreateProduct {
            name: input::read_line("Name: ")?,
            quantity: input::prompt_i32("Quantity: ")?,
            price: input::prompt_f64("Price: ")?,
            category: input::read_line("Category: ")?,
        };
        match self.inventory.add_product(input).await {
            Ok(product) => println!("Added product #{}.", product.id),
            Err(e) => println!("Could not add product: {e}"),
        }
        Ok(())
    }

    async fn view_product(&self) -> eyre::Result<()> {
        let id = input::prompt_i64("Product id: ")?;
        match self.inventory.get_product(id).await? {
            Some(product) => print_product(&product),
            None => println!("No product with id {id}."),
        }
        Ok(())
    }

    async fn view_all(&self) -> eyre::Result<()> {
        print_products(&self.inventory.list_products().await?);
        Ok(())
    }

    async fn update_product(&self) -> eyre::Result<()> {
        let id = input::prompt_i64("Product id: ")?;
        let Some(existing) = self.inventory.get_product(id).await? else {
            println!("No product with id {id}.");
            return Ok(());
        };
        print_product(&existing);
        let updated = Product {
            id,
            name: input::read_line("New name: ")?,
            quantity: input::prompt_i32("New quantity: ")?,
            price: input::prompt_f64("New price: ")?,
            category: input::read_line("New category: ")?,
        };
        match self.inventory.update_product(&updated).await {
            Ok(true) => println!("Product updated."),
            Ok(false) => println!("No product with id {id}."),
            Err(e) => println!("Could not update product: {e}"),
        }
        Ok(())
    }

    async fn delete_product(&self) -> eyre::Result<()> {
        let id = input::prompt_i64("Product id: ")?;
        if self.inventory.delete_product(id).await? {
            println!("Product deleted.");
        } else {
            println!("No product with id {id}.");
        }
        Ok(())
    }

    async fn search_by_category(&self) -> eyre::Result<()> {
        let category = input::read_line("Category: ")?;
        match self.inventory.search_by_category(&category).await {
            Ok(products) => print_products(&products),
            Err(e) => println!("{e}"),
        }
        Ok(())
    }

    async fn search_by_name(&self) -> eyre::Result<()> {
        let fragment = input::read_line("Name contains: ")?;
        match self.inventory.search_by_name(&fragment).await {
            Ok(products) => print_products(&products),
            Err(e) => println!("{e}"),
        }
        Ok(())
    }

    async fn low_stock(&self) -> eyre::Result<()> {
        let threshold = input::prompt_i32("Threshold: ")?;
        match self.inventory.low_stock_products(threshold).await {
            Ok(products) => print_products(&products),
            Err(e) => println!("{e}"),
        }
        Ok(())
    }

    async fn update_stock(&self) -> eyre::Result<()> {
        let id = input::prompt_i64("Product id: ")?;
        let quantity = input::prompt_i32("New quantity: ")?;
        match self.inventory.update_stock_quantity(id, quantity).await {
            Ok(true) => println!("Stock updated."),
            Ok(false) => println!("No product with id {id}."),
            Err(e) => println!("Could not update stock: {e}"),
        }
        Ok(())
    }

    async fn user_management(&self) -> eyre::Result<()> {
        loop {
            println!();
            println!("--- User management ---");
            println!(" 1. Add user");
            println!(" 2. View all users");
            println!(" 3. Find user by username");
            println!(" 4. Delete user");
            println!(" 0. Back");

            match input::prompt_i32("Choose an option: ")? {
                1 => {
                    let input = CreateUser {
                        username: input::read_line("Username: ")?,
                        password: input::read_line("Password: ")?,
                        role: input::read_line("Role (admin/staff): ")?,
                    };
                    match self.users.add_user(input).await {
                        Ok(user) => println!("Added user #{}.", user.id),
                        Err(e) => println!("Could not add user: {e}"),
                    }
                }
                2 => {
                    for user in self.users.list_users().await? {
                        print_user(&user);
                    }
                }
                3 => {
                    let username = input::read_line("Username: ")?;
                    match self.users.get_user_by_username(&username).await? {
                        Some(user) => print_user(&user),
                        None => println!("No user named '{username}'."),
                    }
                }
                4 => {
                    let id = input::prompt_i64("User id: ")?;
                    if self.current_user.id == id {
                        println!("You cannot delete the account you are logged in as.");
                    } else if self.users.delete_user(id).await? {
                        println!("User deleted.");
                    } else {
                        println!("No user with id {id}.");
                    }
                }
                0 => return Ok(()),
                _ => println!("Invalid option."),
            }
        }
    }
}
