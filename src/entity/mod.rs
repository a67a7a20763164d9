pub mod accounts;
pub mod admins;
pub mod blogs;
pub mod bulk_discounts;
pub mod category_blogs;
pub mod dealer_cart_items;
pub mod dealers;
pub mod notifies;
pub mod order_items;
pub mod orders;
pub mod product_of_carts;
pub mod product_serials;
pub mod products;
pub mod warranties;

pub use accounts::Entity as Accounts;
pub use admins::Entity as Admins;
pub use blogs::Entity as Blogs;
pub use bulk_discounts::Entity as BulkDiscounts;
pub use category_blogs::Entity as CategoryBlogs;
pub use dealer_cart_items::Entity as DealerCartItems;
pub use dealers::Entity as Dealers;
pub use notifies::Entity as Notifies;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use product_of_carts::Entity as ProductOfCarts;
pub use product_serials::Entity as ProductSerials;
pub use products::Entity as Products;
pub use warranties::Entity as Warranties;

use chrono::Utc;
use sea_orm::{ActiveValue, prelude::DateTimeWithTimeZone};

pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

/// `created_at` is written once, on insert. Any value a caller sets on an
/// update is dropped so the column keeps its original value.
pub(crate) fn stamp_created(created_at: &mut ActiveValue<DateTimeWithTimeZone>, insert: bool) {
    if insert {
        *created_at = ActiveValue::Set(now());
    } else if created_at.is_set() {
        *created_at = ActiveValue::NotSet;
    }
}

/// Like [`stamp_created`], plus `updated_at` moving on every write. Both
/// columns carry the same instant on insert.
pub(crate) fn stamp_timestamps(
    created_at: &mut ActiveValue<DateTimeWithTimeZone>,
    updated_at: &mut ActiveValue<DateTimeWithTimeZone>,
    insert: bool,
) {
    let at = now();
    if insert {
        *created_at = ActiveValue::Set(at);
    } else if created_at.is_set() {
        *created_at = ActiveValue::NotSet;
    }
    *updated_at = ActiveValue::Set(at);
}
