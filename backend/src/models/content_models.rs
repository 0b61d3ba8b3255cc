use diesel::prelude::*;
use serde::Serialize;
use crate::schema::team_members;
use crate::schema::testimonials;

#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = team_members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub image_url: Option<String>, // absolute url or path under /assets
    pub created_at: i32, // int timestamp utc epoch
}

#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = testimonials)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Testimonial {
    pub id: i32,
    pub author: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub created_at: i32, // int timestamp utc epoch
}
