//! Employee Repository

use super::{EmployeeRepository, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{Employee, EmployeeData};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, age, email, role, salary";

/// SQLite-backed [`EmployeeRepository`]
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn create(&self, data: EmployeeData) -> RepoResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (name, age, email, role, salary) VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(data.name)
        .bind(data.age)
        .bind(data.email)
        .bind(data.role)
        .bind(data.salary)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees =
            sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(employees)
    }

    async fn update(&self, id: i64, data: EmployeeData) -> RepoResult<Employee> {
        sqlx::query_as::<_, Employee>(&format!(
            "UPDATE employees SET name = ?1, age = ?2, email = ?3, role = ?4, salary = ?5 WHERE id = ?6 RETURNING {COLUMNS}"
        ))
        .bind(data.name)
        .bind(data.age)
        .bind(data.email)
        .bind(data.role)
        .bind(data.salary)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Employee {id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_repo() -> SqliteEmployeeRepository {
        let db = DbService::in_memory().await.unwrap();
        SqliteEmployeeRepository::new(db.pool)
    }

    fn data(name: &str) -> EmployeeData {
        EmployeeData {
            name: name.to_string(),
            age: 30,
            email: format!("{}@example.com", name.to_lowercase()),
            role: "Engineer".to_string(),
            salary: 5000.0,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = test_repo().await;

        let ana = repo.create(data("Ana")).await.unwrap();
        let bob = repo.create(data("Bob")).await.unwrap();

        assert_ne!(ana.id, bob.id);
        assert_eq!(ana, data("Ana").with_id(ana.id));
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = test_repo().await;
        assert!(repo.find_all().await.unwrap().is_empty());

        let ana = repo.create(data("Ana")).await.unwrap();
        let bob = repo.create(data("Bob")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![ana, bob]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = test_repo().await;
        let ana = repo.create(data("Ana")).await.unwrap();

        let changed = EmployeeData {
            name: "Ana Souza".into(),
            age: 31,
            email: "ana.souza@example.com".into(),
            role: "Manager".into(),
            salary: 0.0,
        };
        let updated = repo.update(ana.id, changed.clone()).await.unwrap();

        assert_eq!(updated, changed.with_id(ana.id));
        assert_eq!(repo.find_all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = test_repo().await;
        let err = repo.update(999, data("Ana")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let repo = test_repo().await;
        let ana = repo.create(data("Ana")).await.unwrap();
        let bob = repo.create(data("Bob")).await.unwrap();

        repo.delete(ana.id).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap(), vec![bob]);

        let err = repo.delete(ana.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = test_repo().await;
        let ana = repo.create(data("Ana")).await.unwrap();
        repo.delete(ana.id).await.unwrap();

        let bob = repo.create(data("Bob")).await.unwrap();
        assert!(bob.id > ana.id);
    }
}
