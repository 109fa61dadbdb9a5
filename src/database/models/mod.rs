pub mod donation;
pub mod favorite;
pub mod pix_key;
pub mod product;
pub mod user;

pub use donation::{DonationRecord, NewDonation};
pub use favorite::FavoriteCause;
pub use pix_key::NewPixKey;
pub use product::{NewProduct, Product, ProductUpdate};
pub use user::{NewUser, ReceiverProfile, UserRole};
