use diesel::prelude::*;

use crate::domain::image::{
    Image as DomainImage, ImageListQuery, NewImage as DomainNewImage,
    UpdateImage as DomainUpdateImage,
};
use crate::models::image::{
    Image as DbImage, NewImage as DbNewImage, UpdateImage as DbUpdateImage,
};
use crate::repository::{DieselRepository, ImageReader, ImageWriter, RepositoryError, RepositoryResult};

impl ImageReader for DieselRepository {
    fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<DomainImage>> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let image = images::table
            .filter(images::id.eq(id))
            .first::<DbImage>(&mut conn)
            .optional()?;

        Ok(image.map(Into::into))
    }

    fn list_images(&self, query: ImageListQuery) -> RepositoryResult<(usize, Vec<DomainImage>)> {
        use crate::schema::images;

        let mut conn = self.conn()?;

        let total = images::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = images::table
            .order(images::id.desc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let db_images = items.load::<DbImage>(&mut conn)?;

        Ok((total, db_images.into_iter().map(Into::into).collect()))
    }
}

impl ImageWriter for DieselRepository {
    fn create_image(&self, new_image: &DomainNewImage) -> RepositoryResult<DomainImage> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let db_new = DbNewImage::from(new_image);

        let created = diesel::insert_into(images::table)
            .values(&db_new)
            .get_result::<DbImage>(&mut conn)?;

        Ok(created.into())
    }

    fn update_image(
        &self,
        image_id: i32,
        updates: &DomainUpdateImage,
    ) -> RepositoryResult<DomainImage> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateImage::from(updates);

        let updated = diesel::update(images::table.filter(images::id.eq(image_id)))
            .set(&db_updates)
            .get_result::<DbImage>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_image(&self, image_id: i32) -> RepositoryResult<()> {
        use crate::schema::images;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(images::table.filter(images::id.eq(image_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
