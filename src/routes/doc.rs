use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        accounts::{
            CreateAdminRequest, DealerList, RegisterDealerRequest, SetEnabledRequest,
            UpdateDealerRequest,
        },
        auth::{LoginRequest, LoginResponse, Profile},
        blogs::{
            BlogList, CategoryList, CategoryWithBlogs, CreateBlogRequest, CreateCategoryRequest,
            UpdateBlogRequest,
        },
        cart::{CartList, PutCartItemRequest},
        catalog::{
            BulkDiscountList, CreateBulkDiscountRequest, CreateSerialRequest,
            RegisterWarrantyRequest, SerialList, UpdateBulkDiscountRequest,
            UpdateSerialStatusRequest,
        },
        notifies::{CreateNotifyRequest, NotifyList, UnreadCount},
        orders::{
            CreateOrderRequest, OrderLineRequest, OrderList, OrderWithItems,
            UpdateOrderItemStatusRequest, UpdatePaymentStatusRequest,
        },
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
    },
    entity::{
        order_items::OrderItemStatus, orders::PaymentStatus,
        product_serials::ProductSerialStatus, products::PublishStatus,
    },
    models::{
        Account, Admin, Blog, BulkDiscount, CartItem, CategoryBlog, Dealer, Notify, Order,
        OrderItem, Product, ProductSerial, Warranty,
    },
    response::Meta,
    routes::{
        accounts, auth, blogs, bulk_discounts, cart, health, notifies, orders, products,
        serials, warranties,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::me,
        accounts::create_admin,
        accounts::get_admin,
        accounts::register_dealer,
        accounts::list_dealers,
        accounts::get_dealer,
        accounts::update_dealer,
        accounts::set_enabled,
        products::list_products,
        products::get_product,
        products::get_product_by_sku,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::list_serials,
        products::list_bulk_discounts,
        serials::create_serial,
        serials::get_serial,
        serials::update_status,
        warranties::register_warranty,
        warranties::get_by_code,
        warranties::get_for_serial,
        bulk_discounts::create_bulk_discount,
        bulk_discounts::update_bulk_discount,
        bulk_discounts::delete_bulk_discount,
        blogs::list_blogs,
        blogs::get_blog,
        blogs::create_blog,
        blogs::update_blog,
        blogs::delete_blog,
        blogs::list_categories,
        blogs::create_category,
        blogs::get_category,
        cart::cart_list,
        cart::put_cart_item,
        cart::remove_cart_item,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_payment_status,
        orders::update_item_status,
        orders::delete_order,
        notifies::list_notifies,
        notifies::create_notify,
        notifies::unread_count,
        notifies::mark_read
    ),
    components(
        schemas(
            Account,
            Admin,
            Dealer,
            Product,
            ProductSerial,
            Warranty,
            BulkDiscount,
            CategoryBlog,
            Blog,
            CartItem,
            Order,
            OrderItem,
            Notify,
            PublishStatus,
            ProductSerialStatus,
            PaymentStatus,
            OrderItemStatus,
            LoginRequest,
            LoginResponse,
            Profile,
            CreateAdminRequest,
            RegisterDealerRequest,
            UpdateDealerRequest,
            SetEnabledRequest,
            DealerList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CreateSerialRequest,
            UpdateSerialStatusRequest,
            SerialList,
            RegisterWarrantyRequest,
            CreateBulkDiscountRequest,
            UpdateBulkDiscountRequest,
            BulkDiscountList,
            CreateCategoryRequest,
            CreateBlogRequest,
            UpdateBlogRequest,
            BlogList,
            CategoryList,
            CategoryWithBlogs,
            PutCartItemRequest,
            CartList,
            OrderLineRequest,
            CreateOrderRequest,
            UpdatePaymentStatusRequest,
            UpdateOrderItemStatusRequest,
            OrderWithItems,
            OrderList,
            CreateNotifyRequest,
            NotifyList,
            UnreadCount,
            Meta
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Accounts", description = "Admin and dealer accounts"),
        (name = "Products", description = "Product catalogue"),
        (name = "Serials", description = "Product serial numbers"),
        (name = "Warranties", description = "Warranty registration"),
        (name = "Bulk discounts", description = "Quantity discount tiers"),
        (name = "Blogs", description = "Blogs and blog categories"),
        (name = "Cart", description = "Dealer cart"),
        (name = "Orders", description = "Dealer orders"),
        (name = "Notifications", description = "Admin notifications"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
