use diesel::prelude::*;
use diesel::r2d2::PoolError;
use crate::{
    models::content_models::{TeamMember, Testimonial},
    schema::{team_members, testimonials},
    DbPool,
};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] PoolError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Read side of the content tables. Both queries return the whole table in
/// whatever order SQLite yields it.
#[cfg_attr(test, mockall::automock)]
pub trait ContentStore: Send + Sync {
    fn list_team_members(&self) -> Result<Vec<TeamMember>, RepositoryError>;
    fn list_testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError>;
}

pub struct ContentRepository {
    pool: DbPool,
}

impl ContentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ContentStore for ContentRepository {
    fn list_team_members(&self) -> Result<Vec<TeamMember>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let members = team_members::table
            .select(TeamMember::as_select())
            .load::<TeamMember>(&mut conn)?;
        Ok(members)
    }

    fn list_testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let quotes = testimonials::table
            .select(Testimonial::as_select())
            .load::<Testimonial>(&mut conn)?;
        Ok(quotes)
    }
}
