use anyhow::anyhow;

use crate::{
    args::Arg,
    errors::InsertError,
    operations::{ExecuteQuery, QueryResult, Record},
};

/// Run an insert statement and return `entity` carrying the generated id.
///
/// The query and its arguments are passed to the executor as they are.
/// On failure the entity is dropped; nothing partially updated escapes,
/// and `unwrap_or_default()` yields the zero value of `T`.
pub async fn insert<E, T>(
    executor: &E,
    mut entity: T,
    query: &str,
    args: &[Arg],
) -> Result<T, InsertError>
where
    E: ExecuteQuery + ?Sized,
    T: Record,
{
    tracing::debug!(query, args = args.len(), "executing insert");

    let result = match executor.execute_query(query, args).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(error = %err, "insert failed");
            return Err(InsertError::Execute(err));
        }
    };

    let id = result.last_insert_id().and_then(|id| {
        <T::Id as TryFrom<i64>>::try_from(id)
            .map_err(|_| anyhow!("generated id {} is out of range", id))
    });
    let id = match id {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(error = %err, "could not read generated id");
            return Err(InsertError::LastInsertId(err));
        }
    };

    *entity.id_mut() = id;
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        models::{Customer, User},
        stub::{StubError, StubExecutor},
    };

    fn ann() -> User {
        User {
            id: 0,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        }
    }

    const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?, ?)";

    #[tokio::test]
    async fn test_insert_sets_id() {
        let db = StubExecutor::default();
        let user = insert(&db, ann(), INSERT_USER, &crate::args!["Ann", "ann@x.com"])
            .await
            .unwrap();

        assert_eq!(
            user,
            User {
                id: 1,
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_insert_leaves_caller_copy_alone() {
        let db = StubExecutor::with_id(23);
        let original = ann();
        let user = insert(&db, original.clone(), INSERT_USER, &[]).await.unwrap();

        assert_eq!(original.id, 0);
        assert_eq!(user.id, 23);
        assert_eq!(user.name, original.name);
        assert_eq!(user.email, original.email);
    }

    #[tokio::test]
    async fn test_insert_overwrites_existing_id() {
        let db = StubExecutor::with_id(7);
        let user = User { id: 99, ..ann() };
        let user = insert(&db, user, INSERT_USER, &[]).await.unwrap();
        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn test_insert_execute_failure() {
        let db = StubExecutor::default().fail_execute(StubError::ConnRefused);
        let result = insert(&db, ann(), INSERT_USER, &[]).await;

        let err = result.as_ref().unwrap_err();
        assert!(matches!(err, InsertError::Execute(_)));
        assert_eq!(err.phase(), "execute");
        assert_eq!(
            err.source_error().downcast_ref::<StubError>(),
            Some(&StubError::ConnRefused)
        );
        assert_eq!(
            result.unwrap_or_default(),
            User {
                id: 0,
                name: "".to_string(),
                email: "".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_insert_last_insert_id_failure() {
        let db = StubExecutor::default().fail_last_insert_id(StubError::NoInsertId);
        let result = insert(&db, ann(), INSERT_USER, &[]).await;

        let err = result.as_ref().unwrap_err();
        assert!(matches!(err, InsertError::LastInsertId(_)));
        assert_eq!(err.phase(), "last_insert_id");
        assert_eq!(
            err.source_error().downcast_ref::<StubError>(),
            Some(&StubError::NoInsertId)
        );
        // The statement ran, the record still must not leak
        assert_eq!(db.executed(), 1);
        assert_eq!(result.unwrap_or_default(), User::default());
    }

    #[tokio::test]
    async fn test_insert_id_out_of_range() {
        let db = StubExecutor::with_id(-1);
        let result = insert(&db, ann(), INSERT_USER, &[]).await;
        assert!(matches!(result, Err(InsertError::LastInsertId(_))));
    }

    #[tokio::test]
    async fn test_insert_twice_executes_twice() {
        let db = StubExecutor::default();
        insert(&db, ann(), INSERT_USER, &[]).await.unwrap();
        insert(&db, ann(), INSERT_USER, &[]).await.unwrap();
        assert_eq!(db.executed(), 2);
    }

    #[tokio::test]
    async fn test_insert_different_records() {
        let db = StubExecutor::with_id(5);
        let since = NaiveDate::from_ymd_opt(2023, 4, 2).unwrap();

        let user = insert(&db, ann(), INSERT_USER, &[]).await.unwrap();
        let customer = Customer {
            company: "Eris Inc".to_string(),
            contact_email: "sales@eris.example".to_string(),
            since,
            ..Customer::default()
        };
        let customer = insert(
            &db,
            customer,
            "INSERT INTO customers (company, contact_email, since) VALUES (?, ?, ?)",
            &crate::args!["Eris Inc", "sales@eris.example", since],
        )
        .await
        .unwrap();

        assert_eq!(user.id, 5u32);
        assert_eq!(customer.id, 5i64);
        assert_eq!(customer.company, "Eris Inc");
        assert_eq!(customer.since, since);
    }
}
