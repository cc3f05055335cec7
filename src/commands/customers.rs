use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use crate::{insert, models::Customer, operations::ExecuteQuery};

pub const INSERT_CUSTOMER: &str =
    "INSERT INTO customers (company, contact_email, since) VALUES (?, ?, ?)";

#[derive(Args, Debug)]
pub struct AddCustomer {
    #[clap(short, long)]
    pub company: String,
    #[clap(short = 'e', long)]
    pub contact_email: String,
    /// Customer since (YYYY-MM-DD), defaults to today
    #[clap(short, long)]
    pub since: Option<NaiveDate>,
}

impl AddCustomer {
    /// Insert the customer and return it with its id
    pub async fn insert<E>(&self, executor: &E) -> Result<Customer>
    where
        E: ExecuteQuery + ?Sized,
    {
        let since = self
            .since
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let customer = Customer {
            company: self.company.clone(),
            contact_email: self.contact_email.clone(),
            since,
            ..Customer::default()
        };
        let args = crate::args![&self.company, &self.contact_email, since];
        Ok(insert(executor, customer, INSERT_CUSTOMER, &args).await?)
    }

    /// Run the command and print the new customer
    pub async fn run<E>(&self, executor: &E) -> Result<()>
    where
        E: ExecuteQuery + ?Sized,
    {
        let customer = self.insert(executor).await?;
        tracing::info!(id = customer.id, "customer added");
        println!("{}", serde_json::to_string_pretty(&customer)?);
        Ok(())
    }
}
