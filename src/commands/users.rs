use anyhow::Result;
use clap::Args;

use crate::{insert, models::User, operations::ExecuteQuery};

pub const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?, ?)";

#[derive(Args, Debug)]
pub struct AddUser {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub email: String,
}

impl AddUser {
    /// Insert the user and return it with its id
    pub async fn insert<E>(&self, executor: &E) -> Result<User>
    where
        E: ExecuteQuery + ?Sized,
    {
        let user = User {
            name: self.name.clone(),
            email: self.email.clone(),
            ..User::default()
        };
        let args = crate::args![&self.name, &self.email];
        Ok(insert(executor, user, INSERT_USER, &args).await?)
    }

    /// Run the command and print the new user
    pub async fn run<E>(&self, executor: &E) -> Result<()>
    where
        E: ExecuteQuery + ?Sized,
    {
        let user = self.insert(executor).await?;
        tracing::info!(id = user.id, "user added");
        println!("{}", serde_json::to_string_pretty(&user)?);
        Ok(())
    }
}
