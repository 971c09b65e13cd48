use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    UpdateProduct as DomainUpdateProduct,
};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut count_query = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.name.as_ref() {
            let pattern = format!("%{term}%");
            count_query = count_query.filter(products::name.like(pattern));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table
            .order(products::id.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.name.as_ref() {
            let pattern = format!("%{term}%");
            items = items.filter(products::name.like(pattern));
        }

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        Ok((total, db_products.into_iter().map(Into::into).collect()))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
