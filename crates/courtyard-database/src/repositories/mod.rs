//! Concrete repository implementations, one per entity.

pub mod booking;
pub mod facility;
pub mod notification;
pub mod user;

pub use booking::BookingRepository;
pub use facility::FacilityRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
