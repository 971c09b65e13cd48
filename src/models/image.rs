use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::image::{
    Image as DomainImage, NewImage as DomainNewImage, UpdateImage as DomainUpdateImage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::images)]
pub struct Image {
    pub id: i32,
    pub path: String,
    pub size: i64,
    pub original_name: String,
    pub extension: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImage<'a> {
    pub path: &'a str,
    pub size: i64,
    pub original_name: &'a str,
    pub extension: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::images)]
pub struct UpdateImage<'a> {
    pub original_name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Image> for DomainImage {
    fn from(value: Image) -> Self {
        Self {
            id: value.id,
            path: value.path,
            size: value.size,
            original_name: value.original_name,
            extension: value.extension,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewImage> for NewImage<'a> {
    fn from(value: &'a DomainNewImage) -> Self {
        Self {
            path: value.path.as_str(),
            size: value.size,
            original_name: value.original_name.as_str(),
            extension: value.extension.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateImage> for UpdateImage<'a> {
    fn from(value: &'a DomainUpdateImage) -> Self {
        Self {
            original_name: value.original_name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
