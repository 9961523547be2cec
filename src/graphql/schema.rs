//! GraphQL schema
//!
//! ```graphql
//! type Student { id: ID!, firstName: String!, lastName: String!, dateOfBirth: String!,
//!                address: String!, nationality: String!, email: String, phone: String }
//! ```
//!
//! Field and argument names are camelCased from the Rust names.

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, Object, Result, Schema, ID,
};

use crate::store::{Student, StudentFields};
use crate::students::{StudentError, StudentService};

/// Executable schema type
pub type StudentSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a shared service handle
pub fn build_schema(service: Arc<StudentService>) -> StudentSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

impl ErrorExtensions for StudentError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", "NOT_FOUND".to_string());
            ext.set("id", self.id().to_string());
        })
    }
}

/// GraphQL view of a stored record
pub struct StudentObject(pub Student);

/// Required fields may still be absent on records created through the
/// unvalidated HTTP endpoint; selecting one is then a field error.
fn required(value: &Option<String>, field: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| Error::new(format!("Cannot return null for non-nullable field Student.{}", field)))
}

#[Object(name = "Student")]
impl StudentObject {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn first_name(&self) -> Result<String> {
        required(&self.0.first_name, "firstName")
    }

    async fn last_name(&self) -> Result<String> {
        required(&self.0.last_name, "lastName")
    }

    async fn date_of_birth(&self) -> Result<String> {
        required(&self.0.date_of_birth, "dateOfBirth")
    }

    async fn address(&self) -> Result<String> {
        required(&self.0.address, "address")
    }

    async fn nationality(&self) -> Result<String> {
        required(&self.0.nationality, "nationality")
    }

    async fn email(&self) -> Option<String> {
        self.0.email.clone()
    }

    async fn phone(&self) -> Option<String> {
        self.0.phone.clone()
    }
}

fn service<'a>(ctx: &Context<'a>) -> Result<&'a Arc<StudentService>> {
    ctx.data::<Arc<StudentService>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All students in store order
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<StudentObject>> {
        Ok(service(ctx)?.list().into_iter().map(StudentObject).collect())
    }

    /// The student with this id, or null
    async fn student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<StudentObject>> {
        Ok(service(ctx)?.get(&id).map(StudentObject))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
        date_of_birth: String,
        address: String,
        nationality: String,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<StudentObject> {
        let fields = StudentFields {
            first_name: Some(first_name),
            last_name: Some(last_name),
            date_of_birth: Some(date_of_birth),
            address: Some(address),
            nationality: Some(nationality),
            email,
            phone,
        };
        Ok(StudentObject(service(ctx)?.create(fields)))
    }

    /// Empty strings leave the stored value unchanged
    async fn update_student(
        &self,
        ctx: &Context<'_>,
        id: ID,
        first_name: Option<String>,
        last_name: Option<String>,
        date_of_birth: Option<String>,
        address: Option<String>,
        nationality: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<StudentObject> {
        let patch = StudentFields {
            first_name,
            last_name,
            date_of_birth,
            address,
            nationality,
            email,
            phone,
        };
        service(ctx)?
            .update(&id, patch)
            .map(StudentObject)
            .map_err(|e| e.extend())
    }

    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<StudentObject>> {
        service(ctx)?
            .delete(&id)
            .map(|student| Some(StudentObject(student)))
            .map_err(|e| e.extend())
    }
}
