pub mod cart;
pub mod deliverer_machines;
pub mod home;
pub mod login;
pub mod medicines;
pub mod not_found;
pub mod profile;
pub mod profile_orders;
pub mod register;

pub use cart::CartView;
pub use deliverer_machines::DelivererMachinesView;
pub use home::HomeView;
pub use login::LoginView;
pub use medicines::MedicinesView;
pub use not_found::NotFoundView;
pub use profile::ProfileView;
pub use profile_orders::ProfileOrdersView;
pub use register::RegisterView;
