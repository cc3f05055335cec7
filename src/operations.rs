use anyhow::Result;
use async_trait::async_trait;

use crate::args::Arg;

/// A value type carrying an integer identifier assigned by the store.
///
/// `id_mut` hands out the field itself, so implementors never write a
/// setter. Use the [`record!`](crate::record) macro to implement it.
pub trait Record: Default {
    type Id: TryFrom<i64>;

    fn id_mut(&mut self) -> &mut Self::Id;
}

/// Implement [`Record`] for a struct by naming its identifier field.
///
/// ```ignore
/// record!(User, id: u32);
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty, $field:ident: $id:ty) => {
        impl $crate::Record for $ty {
            type Id = $id;

            fn id_mut(&mut self) -> &mut Self::Id {
                &mut self.$field
            }
        }
    };
}

/// What an executed statement reports back.
pub trait QueryResult {
    /// Identifier generated by the statement
    fn last_insert_id(&self) -> Result<i64>;

    /// Number of rows the statement touched
    fn rows_affected(&self) -> Result<i64>;
}

#[async_trait]
pub trait ExecuteQuery {
    type Output: QueryResult + Send;

    async fn execute_query(&self, query: &str, args: &[Arg]) -> Result<Self::Output>;
}
