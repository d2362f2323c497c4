pub mod lifecycle;
pub mod models;
pub mod repository;

pub use lifecycle::TransitionAction;
pub use models::{
    Booking, BookingDetails, BookingStatus, BookingType, FlightBookingParams, FlightDetails,
    HotelBookingParams, HotelDetails, RoomType, SeatClass, NIGHTS_MAX, NIGHTS_MIN,
};
pub use repository::BookingRepository;
