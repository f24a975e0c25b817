pub mod auth;
pub mod cart;
pub mod machine;
pub mod medicine;
pub mod order;
pub mod pickup_point;
pub mod user;

pub use auth::{LoginForm, PasswordChange, RegisterRequest, TokenResponse};
pub use cart::{Cart, CartMedicine};
pub use machine::{Machine, MachinePickupPoint, MachineSearch, MachineStatus};
pub use medicine::{Currency, Medicine, MedicineSearch, MedicineType, Pagination};
pub use order::{CreateOrder, MedicineInfo, Order, OrderDetail, OrderSearch, OrderStatus};
pub use pickup_point::{Location, PickupPoint, PickupPointSearch};
pub use user::{User, UserRole, UserUpdate};
