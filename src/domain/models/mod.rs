pub mod invoice;
pub mod party;
pub mod product;

pub use invoice::Invoice;
pub use party::Party;
pub use product::Product;
