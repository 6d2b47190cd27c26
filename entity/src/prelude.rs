pub use super::chat_message::Entity as ChatMessage;
pub use super::customer_order::Entity as CustomerOrder;
pub use super::faq::Entity as Faq;
pub use super::feedback::Entity as Feedback;
pub use super::maintenance_request::Entity as MaintenanceRequest;
pub use super::offer::Entity as Offer;
pub use super::order_item::Entity as OrderItem;
pub use super::product::Entity as Product;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;
